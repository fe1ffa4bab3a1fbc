//! Hash-strategy comparison reports.
//!
//! Runs the same script once per strategy, each on its own scope stack and
//! rayon worker. Instances share nothing mutable — the strategy is a
//! per-stack value — so the runs are fully independent.

use std::io::{self, Write};

use rayon::prelude::*;
use serde::Serialize;
use symtab_core::HashKind;

use crate::error::DriverError;
use crate::session::run_script;

/// Result of running one strategy over the shared script.
#[derive(Debug, Clone, Serialize)]
pub struct StrategyReport {
    pub strategy: &'static str,
    pub collision_ratio: f64,
    /// Full interleaved command/trace output of the run.
    #[serde(skip)]
    pub trace: String,
}

/// Run `script` under every strategy, in parallel, in `HashKind::ALL`
/// order.
pub fn run_comparison(script: &str) -> Result<Vec<StrategyReport>, DriverError> {
    HashKind::ALL
        .par_iter()
        .map(|&kind| {
            let mut trace = Vec::new();
            let report = run_script(script.as_bytes(), &mut trace, kind)?;
            Ok(StrategyReport {
                strategy: kind.name(),
                collision_ratio: report.collision_ratio,
                trace: String::from_utf8_lossy(&trace).into_owned(),
            })
        })
        .collect()
}

/// Render the fixed-width text report.
pub fn write_report<W: Write>(
    results: &[StrategyReport],
    script_name: &str,
    mut out: W,
) -> io::Result<()> {
    writeln!(out, "Hash Function Performance Comparison Report")?;
    writeln!(out, "==========================================")?;
    writeln!(out)?;
    writeln!(out, "Test Input File: {script_name}")?;
    writeln!(out)?;
    writeln!(out, "Hash Functions Tested:")?;
    for (i, r) in results.iter().enumerate() {
        writeln!(out, "{}. {}", i + 1, r.strategy)?;
    }
    writeln!(out)?;
    writeln!(out, "Performance Results:")?;
    writeln!(out, "-------------------------------")?;
    writeln!(out, "{:<15}{:<20}", "Hash Function", "Collision Ratio")?;
    writeln!(out, "-------------------------------")?;
    for r in results {
        writeln!(out, "{:<15}{:<20.4}", r.strategy, r.collision_ratio)?;
    }
    Ok(())
}

/// Render the same results as pretty JSON.
pub fn write_json<W: Write>(results: &[StrategyReport], out: W) -> Result<(), DriverError> {
    serde_json::to_writer_pretty(out, results)?;
    Ok(())
}
