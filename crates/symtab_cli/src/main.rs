//! symtab: the scoped symbol table comparison CLI.
//!
//! Usage:
//!   symtab <BUCKETS> <SYMBOLS> [REPORT]
//!   symtab --input script.txt
//!
//! Generates (or reads) a command script, replays it once per hash
//! strategy — each run on its own independent scope stack — and writes a
//! collision-ratio comparison report.

use clap::Parser as ClapParser;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use symtab_core::HashKind;
use symtab_driver::{
    generate_script, run_comparison, run_script, write_json, write_report, GenerateConfig,
    StrategyReport,
};

#[derive(ClapParser, Debug)]
#[command(name = "symtab", about = "symtab - a scoped symbol table with pluggable hashing")]
struct Cli {
    /// Number of buckets per scope table (generation mode).
    #[arg(value_name = "BUCKETS", required_unless_present = "input")]
    buckets: Option<usize>,

    /// Number of symbols to generate (generation mode).
    #[arg(value_name = "SYMBOLS", required_unless_present = "input")]
    symbols: Option<usize>,

    /// Report output file.
    #[arg(value_name = "REPORT", default_value = "report.txt")]
    report: PathBuf,

    /// Replay an existing command script instead of generating one.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the generated script.
    #[arg(long, default_value = "hash_test_input.txt")]
    script: PathBuf,

    /// Seed for reproducible script generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Keep each strategy's full trace output in this directory.
    #[arg(long = "trace-dir")]
    trace_dir: Option<PathBuf>,

    /// Run a single strategy (SDBM, FNV-1a, Jenkins, Murmur) instead of
    /// the comparison, writing its trace to stdout.
    #[arg(long, value_name = "STRATEGY")]
    only: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = run(&cli);
    process::exit(exit_code);
}

fn run(cli: &Cli) -> i32 {
    let (script, script_name) = match resolve_script(cli) {
        Ok(s) => s,
        Err(code) => return code,
    };

    if let Some(ref name) = cli.only {
        return run_single(name, &script);
    }

    let results = match run_comparison(&script) {
        Ok(r) => r,
        Err(e) => {
            print_error(&format!("comparison failed: {e}"));
            return 1;
        }
    };

    if let Some(ref dir) = cli.trace_dir {
        if let Err(code) = write_traces(dir, &results) {
            return code;
        }
    }

    let report_file = match fs::File::create(&cli.report) {
        Ok(f) => f,
        Err(e) => {
            print_error(&format!(
                "failed to create report file '{}': {e}",
                cli.report.display()
            ));
            return 1;
        }
    };

    let written = if cli.json {
        write_json(&results, report_file).map_err(|e| e.to_string())
    } else {
        write_report(&results, &script_name, report_file).map_err(|e| e.to_string())
    };
    if let Err(e) = written {
        print_error(&format!("failed to write report: {e}"));
        return 1;
    }

    println!(
        "Report generated successfully in {}",
        cli.report.display()
    );
    0
}

/// Produce the script text: read `--input`, or generate one and persist it.
fn resolve_script(cli: &Cli) -> Result<(String, String), i32> {
    if let Some(ref input) = cli.input {
        return match fs::read_to_string(input) {
            Ok(text) => Ok((text, input.display().to_string())),
            Err(e) => {
                print_error(&format!("failed to read '{}': {e}", input.display()));
                Err(1)
            }
        };
    }

    let (Some(bucket_count), Some(symbol_count)) = (cli.buckets, cli.symbols) else {
        print_error("BUCKETS and SYMBOLS are required unless --input is given");
        return Err(2);
    };

    let cfg = GenerateConfig {
        bucket_count,
        symbol_count,
        seed: cli.seed,
    };
    let mut buf = Vec::new();
    if let Err(e) = generate_script(&cfg, &mut buf) {
        print_error(&format!("failed to generate script: {e}"));
        return Err(1);
    }
    if let Err(e) = fs::write(&cli.script, &buf) {
        print_error(&format!(
            "failed to write script file '{}': {e}",
            cli.script.display()
        ));
        return Err(1);
    }
    println!("Generated test input file: {}", cli.script.display());

    let text = String::from_utf8_lossy(&buf).into_owned();
    Ok((text, cli.script.display().to_string()))
}

/// Replay the script under one strategy, tracing to stdout.
fn run_single(name: &str, script: &str) -> i32 {
    let kind: HashKind = match name.parse() {
        Ok(kind) => kind,
        Err(e) => {
            print_error(&e.to_string());
            return 2;
        }
    };
    match run_script(script.as_bytes(), io::stdout().lock(), kind) {
        Ok(report) => {
            println!(
                "Collision ratio ({}): {:.4}",
                kind.name(),
                report.collision_ratio
            );
            0
        }
        Err(e) => {
            print_error(&format!("session failed: {e}"));
            1
        }
    }
}

/// Persist each strategy's interleaved trace as `trace_<name>.txt`.
fn write_traces(dir: &Path, results: &[StrategyReport]) -> Result<(), i32> {
    if let Err(e) = fs::create_dir_all(dir) {
        print_error(&format!(
            "failed to create trace directory '{}': {e}",
            dir.display()
        ));
        return Err(1);
    }
    for r in results {
        let path = dir.join(format!("trace_{}.txt", r.strategy));
        if let Err(e) = fs::write(&path, &r.trace) {
            print_error(&format!("failed to write '{}': {e}", path.display()));
            return Err(1);
        }
    }
    Ok(())
}

fn print_error(msg: &str) {
    eprintln!("error: {msg}");
}
