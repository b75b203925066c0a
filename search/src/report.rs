//! Serializable run report with a content digest.
//!
//! A [`SearchReport`] is the deterministic summary of one search: strategy,
//! termination, counters, policy echo and the solution path rendered through
//! each state's `Debug` form. It serializes to canonical JSON (sorted keys,
//! compact form, integers only) and hashes to `sha256:<hex>` under a domain
//! prefix, so two runs of the same problem can be compared byte for byte.

use sha2::{Digest, Sha256};

use crate::contract::{Cost, SearchNode};
use crate::policy::SearchPolicy;
use crate::search::{SearchResult, SearchStats, Strategy, TerminationReason};

/// Domain prefix for report digests. Null-terminated.
pub const DOMAIN_SEARCH_REPORT: &[u8] = b"LODESTAR::SEARCH_REPORT::V1\0";

/// Report schema version, embedded in the JSON.
pub const REPORT_SCHEMA_VERSION: &str = "search_report.v1";

/// Deterministic summary of one search execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchReport {
    pub strategy: Strategy,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    pub policy: SearchPolicy,
    /// `g` of the terminal node.
    pub solution_cost: Option<Cost>,
    /// Number of nodes on the solution path, endpoints included.
    pub solution_length: Option<usize>,
    /// `Debug` rendering of each state on the solution path, root first.
    pub solution_states: Vec<String>,
}

impl SearchReport {
    /// Summarize `result`.
    #[must_use]
    pub fn from_result<N: SearchNode>(result: &SearchResult<N>) -> Self {
        let solution_states: Vec<String> = result
            .path()
            .map(|path| path.iter().map(|n| format!("{:?}", n.state())).collect())
            .unwrap_or_default();
        Self {
            strategy: result.strategy,
            termination: result.termination,
            stats: result.stats.clone(),
            policy: result.policy,
            solution_cost: result.solution_cost(),
            solution_length: result.goal().map(|_| solution_states.len()),
            solution_states,
        }
    }

    /// Convert to a `serde_json::Value`.
    ///
    /// `serde_json` object maps are ordered by key, so the value serializes
    /// with sorted keys.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "policy": self.policy.to_json_value(),
            "schema_version": REPORT_SCHEMA_VERSION,
            "solution": {
                "cost": self.solution_cost,
                "length": self.solution_length,
                "states": self.solution_states,
            },
            "stats": stats_to_json(&self.stats),
            "strategy": self.strategy.as_str(),
            "termination": termination_to_json(self.termination),
        })
    }

    /// Canonical JSON bytes: compact, sorted keys, integers only.
    #[must_use]
    pub fn to_canonical_json_bytes(&self) -> Vec<u8> {
        self.to_json_value().to_string().into_bytes()
    }

    /// `sha256:<hex>` digest of the canonical bytes under
    /// [`DOMAIN_SEARCH_REPORT`].
    #[must_use]
    pub fn digest(&self) -> String {
        report_digest(&self.to_canonical_json_bytes())
    }
}

/// Digest of already-serialized report bytes. Used to verify reports read
/// back from disk.
#[must_use]
pub fn report_digest(canonical_bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(DOMAIN_SEARCH_REPORT);
    hasher.update(canonical_bytes);
    format!("sha256:{}", hex::encode(hasher.finalize()))
}

fn stats_to_json(stats: &SearchStats) -> serde_json::Value {
    serde_json::json!({
        "bounds": stats.bounds,
        "closed_skipped": stats.closed_skipped,
        "duplicates_suppressed": stats.duplicates_suppressed,
        "expansions": stats.expansions,
        "frontier_high_water": stats.frontier_high_water,
        "generated": stats.generated,
        "iterations": stats.iterations,
        "path_skipped": stats.path_skipped,
        "stale_skipped": stats.stale_skipped,
    })
}

fn termination_to_json(reason: TerminationReason) -> serde_json::Value {
    match reason {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": reason.as_str()})
        }
        _ => serde_json::json!({"type": reason.as_str()}),
    }
}
