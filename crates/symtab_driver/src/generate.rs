//! Synthetic test-input generation.
//!
//! Produces command scripts that mix the four symbol shapes with scope
//! churn, lookups, and deletes, for exercising the table and feeding the
//! strategy comparison.

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub bucket_count: usize,
    pub symbol_count: usize,
    /// Fixed seed for reproducible scripts; `None` seeds from entropy.
    pub seed: Option<u64>,
}

/// Write a command script: bucket-count header, one insert per symbol with
/// periodic scope changes, lookups and deletes, then print-all,
/// print-current, and quit.
pub fn generate_script<W: Write>(cfg: &GenerateConfig, mut out: W) -> io::Result<()> {
    let mut rng = match cfg.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    writeln!(out, "{}", cfg.bucket_count)?;

    for i in 0..cfg.symbol_count {
        let (symbol, ty) = match rng.gen_range(0..4) {
            0 => (format!("var{i}"), "INT"),
            1 => (format!("func{i}"), "FUNCTION INT FLOAT CHAR"),
            2 => (format!("struct{i}"), "STRUCT INT mem1 FLOAT mem2"),
            _ => (format!("arr{i}"), "ARRAY INT 10"),
        };

        // Periodic scope churn; never an exit in the first few symbols.
        if i % 5 == 0 {
            writeln!(out, "S")?;
        } else if i % 7 == 0 && i > 10 {
            writeln!(out, "E")?;
        }

        writeln!(out, "I {symbol} {ty}")?;

        if i % 10 == 0 && i > 0 {
            writeln!(out, "L {symbol}")?;
        }
        if i % 15 == 0 && i > 0 {
            writeln!(out, "D {symbol}")?;
        }
    }

    writeln!(out, "P A")?;
    writeln!(out, "P C")?;
    writeln!(out, "Q")?;
    Ok(())
}
