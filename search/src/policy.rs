//! Search policy: caller-layered budgets.

use crate::error::SearchError;

/// Optional budgets layered on top of the search algorithms.
///
/// The default policy is unbounded: both engines then run to completion and
/// keep their optimality and no-solution guarantees. A budget stops the
/// search early with a distinct termination reason; it never turns into a
/// "no solution" verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Hard cap on node expansions (successor generations).
    pub max_expansions: Option<u64>,
    /// Hard cap on IDA* bound relaxations. Ignored by A*.
    pub max_iterations: Option<u64>,
}

impl SearchPolicy {
    /// Policy with no budgets.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Builder: cap node expansions.
    #[must_use]
    pub fn with_max_expansions(mut self, max: u64) -> Self {
        self.max_expansions = Some(max);
        self
    }

    /// Builder: cap IDA* iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max: u64) -> Self {
        self.max_iterations = Some(max);
        self
    }

    /// Validate the policy before a search starts.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if a budget is set to zero,
    /// which would forbid even the first expansion or iteration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_iterations == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_iterations must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Whether `expansions` already used up the expansion budget.
    #[must_use]
    pub fn expansions_exhausted(&self, expansions: u64) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }

    /// Whether `iterations` already used up the iteration budget.
    #[must_use]
    pub fn iterations_exhausted(&self, iterations: u64) -> bool {
        self.max_iterations.is_some_and(|max| iterations >= max)
    }

    /// JSON echo of the policy for reports.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "max_iterations": self.max_iterations,
        })
    }
}
