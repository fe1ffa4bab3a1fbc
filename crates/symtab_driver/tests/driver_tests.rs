//! Driver integration tests.
//!
//! Runs whole scripts through the session and comparison layers and checks
//! the interleaved echo/trace output against the expected transcript.

use symtab_core::HashKind;
use symtab_driver::{generate_script, run_comparison, run_script, GenerateConfig};

fn run_to_string(script: &str, hash: HashKind) -> (String, symtab_driver::SessionReport) {
    let mut out = Vec::new();
    let report = run_script(script.as_bytes(), &mut out, hash).unwrap();
    (String::from_utf8(out).unwrap(), report)
}

// ============================================================================
// Session transcript
// ============================================================================

#[test]
fn test_session_transcript_with_a_single_bucket() {
    let script = "\
1
I a INT
I a INT
S
I b FLOAT
L a
E
D a
Q
";
    let (output, report) = run_to_string(script, HashKind::Sdbm);
    assert_eq!(
        output,
        "\tScopeTable# 1 created\n\
         Cmd 1: I a INT\n\
         \tInserted in ScopeTable# 1 at position 1, 1\n\
         Cmd 2: I a INT\n\
         \t'a' already exists in ScopeTable# 1 at position 1, 1\n\
         Cmd 3: S\n\
         \tScopeTable# 1.1 created\n\
         Cmd 4: I b FLOAT\n\
         \tInserted in ScopeTable# 1.1 at position 1, 1\n\
         Cmd 5: L a\n\
         \t'a' found in ScopeTable# 1 at position 1, 1\n\
         Cmd 6: E\n\
         \tScopeTable# 1.1 removed\n\
         Cmd 7: D a\n\
         \tDeleted 'a' from ScopeTable# 1 at position 1, 1\n\
         Cmd 8: Q\n\
         \tScopeTable# 1 removed\n"
    );
    assert_eq!(report.commands, 8);
    assert_eq!(report.final_depth, 1);
    // One collision: the duplicate insert of "a" landed on an occupied
    // bucket before failing.
    assert_eq!(report.collision_ratio, 1.0);
}

#[test]
fn test_session_prints_table_dumps() {
    let script = "\
5
I a INT
P C
Q
";
    let (output, _) = run_to_string(script, HashKind::Sdbm);
    // SDBM puts "a" in bucket 3 (1-based) of 5.
    assert!(output.contains("Cmd 2: P C\n\tScopeTable# 1\n\t3 --> <a : INT>\n"));
}

#[test]
fn test_session_formats_descriptors_before_insert() {
    let script = "\
5
I foo FUNCTION INT FLOAT CHAR
P C
Q
";
    let (output, _) = run_to_string(script, HashKind::Sdbm);
    assert!(output.contains("<foo : FUNCTION,INT<==(FLOAT,CHAR)>"));
}

#[test]
fn test_missing_header_is_an_error() {
    let mut out = Vec::new();
    assert!(run_script("".as_bytes(), &mut out, HashKind::Sdbm).is_err());
    assert!(run_script("not-a-number\nQ\n".as_bytes(), &mut out, HashKind::Sdbm).is_err());
}

#[test]
fn test_zero_bucket_header_is_rejected() {
    let mut out = Vec::new();
    assert!(run_script("0\nQ\n".as_bytes(), &mut out, HashKind::Sdbm).is_err());
}

// ============================================================================
// Strategy comparison
// ============================================================================

/// Collapse a trace line to its event kind, dropping buckets and positions.
fn event_tag(line: &str) -> Option<&'static str> {
    if line.starts_with("Cmd ") {
        Some("cmd")
    } else if line.contains(" created") {
        Some("created")
    } else if line.contains(" removed") {
        Some("removed")
    } else if line.contains("Inserted in") {
        Some("inserted")
    } else if line.contains("already exists") {
        Some("duplicate")
    } else if line.contains("' found in") {
        Some("found")
    } else if line.contains("not found") {
        Some("miss")
    } else if line.contains("Deleted '") {
        Some("deleted")
    } else {
        None
    }
}

#[test]
fn test_comparison_runs_every_strategy_with_identical_logical_traces() {
    let script = "\
7
I alpha INT
I beta FLOAT
I alpha CHAR
S
I gamma INT
L alpha
L missing
D gamma
E
D beta
Q
";
    let results = run_comparison(script).unwrap();
    assert_eq!(results.len(), HashKind::ALL.len());
    for (r, kind) in results.iter().zip(HashKind::ALL) {
        assert_eq!(r.strategy, kind.name());
    }

    // Bucket placement differs per strategy, but the sequence of logical
    // outcomes must not.
    let tags: Vec<Vec<_>> = results
        .iter()
        .map(|r| r.trace.lines().filter_map(event_tag).collect())
        .collect();
    for other in &tags[1..] {
        assert_eq!(*other, tags[0]);
    }
}

// ============================================================================
// Generated scripts end to end
// ============================================================================

#[test]
fn test_generated_script_runs_under_every_strategy() {
    let cfg = GenerateConfig {
        bucket_count: 11,
        symbol_count: 120,
        seed: Some(7),
    };
    let mut script = Vec::new();
    generate_script(&cfg, &mut script).unwrap();
    let script = String::from_utf8(script).unwrap();

    let results = run_comparison(&script).unwrap();
    for r in &results {
        assert!(r.collision_ratio >= 0.0);
        assert!(r.trace.contains("ScopeTable# 1 created"));
    }
}
