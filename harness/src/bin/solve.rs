//! Solve one instance file and print every step of the solution.
//!
//! Usage: `solve <instance.json> [astar|idastar] [--out <dir>]`
//!
//! Prints each node on the path, then `key=value` summary lines. With
//! `--out`, also writes the report directory. `RUST_LOG` controls logging.

use std::path::PathBuf;
use std::process::ExitCode;

use lodestar_harness::instance::load_instance;
use lodestar_harness::report_dir::write_report_dir;
use lodestar_harness::runner::{run, RunConfig};
use lodestar_search::Strategy;

const USAGE: &str = "usage: solve <instance.json> [astar|idastar] [--out <dir>]";

struct Args {
    instance: PathBuf,
    strategy: Strategy,
    out: Option<PathBuf>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, String> {
    let instance = args.next().ok_or_else(|| USAGE.to_string())?;
    let mut strategy = Strategy::AStar;
    let mut out = None;

    while let Some(arg) = args.next() {
        if arg == "--out" {
            out = Some(PathBuf::from(args.next().ok_or_else(|| USAGE.to_string())?));
        } else {
            strategy = Strategy::parse(&arg).ok_or_else(|| format!("unknown strategy: {arg}"))?;
        }
    }

    Ok(Args {
        instance: PathBuf::from(instance),
        strategy,
        out,
    })
}

fn solve(args: &Args) -> Result<(), String> {
    let instance = load_instance(&args.instance).map_err(|e| e.to_string())?;
    let outcome = run(&instance, &RunConfig::new(args.strategy)).map_err(|e| e.to_string())?;

    for (step, rendered) in outcome.rendered_path.iter().enumerate() {
        println!("Step {}", step + 1);
        println!("{rendered}");
        println!();
    }

    let report = &outcome.report;
    println!("world={}", outcome.world_id);
    println!("strategy={}", report.strategy);
    println!("termination={}", report.termination.as_str());
    if let Some(cost) = report.solution_cost {
        println!("solution_cost={cost}");
    }
    println!("expansions={}", report.stats.expansions);
    println!("report_digest={}", report.digest());

    if let Some(dir) = &args.out {
        write_report_dir(&outcome, dir).map_err(|e| e.to_string())?;
        println!("report written to: {}", dir.display());
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::from(2);
        }
    };

    match solve(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("solve: {message}");
            ExitCode::FAILURE
        }
    }
}
