//! End-to-end test suite. Builds fixture projects in temp directories and
//! invokes the compiled `depflow` binary via subprocess. The
//! `CARGO_BIN_EXE_depflow` environment variable is set by Cargo during
//! `cargo test` to point to the compiled binary for the current profile.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_depflow"))
}

fn tmp() -> TempDir {
    tempfile::tempdir().expect("tempdir")
}

/// Write a fixture file under `root`, creating parent directories.
fn write_file(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
}

fn run(args: &[&str]) -> Output {
    Command::new(binary())
        .args(args)
        .output()
        .expect("failed to invoke depflow binary")
}

/// Run depflow and assert it exits successfully. Returns stdout as a String.
fn run_success(args: &[&str]) -> String {
    let out = run(args);
    let stdout = String::from_utf8_lossy(&out.stdout).to_string();
    let stderr = String::from_utf8_lossy(&out.stderr).to_string();
    assert!(
        out.status.success(),
        "command {args:?} failed with status {:?}\nstdout: {stdout}\nstderr: {stderr}",
        out.status,
    );
    stdout
}

// ---------------------------------------------------------------------------
// Wire contract
// ---------------------------------------------------------------------------

/// The documented end-to-end example: one relative import, two nodes, one edge.
#[test]
fn test_single_edge_project() {
    let dir = tmp();
    write_file(dir.path(), "src/a.js", "import \"./b\";\n");
    write_file(dir.path(), "src/b.js", "const x = 1;\n");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert_eq!(
        stdout,
        "graph LR\n    src_a_js[\"src/a.js\"] --> src_b_js[\"src/b.js\"]\n"
    );
}

/// Re-running on an unchanged project must produce byte-identical output.
#[test]
fn test_idempotent_output() {
    let dir = tmp();
    write_file(dir.path(), "src/a.ts", "import { b } from './b';\nimport './c';\n");
    write_file(dir.path(), "src/b.ts", "export const b = 1;\n");
    write_file(dir.path(), "src/c.ts", "import { b } from './b';\n");

    let path = dir.path().to_str().unwrap();
    let first = run_success(&[path]);
    let second = run_success(&[path]);
    assert_eq!(first, second);
}

/// An empty project emits the direction header alone.
#[test]
fn test_empty_project_emits_header_only() {
    let dir = tmp();
    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert_eq!(stdout, "graph LR\n");
}

// ---------------------------------------------------------------------------
// Resolution semantics
// ---------------------------------------------------------------------------

/// Bare package imports produce no node and no edge.
#[test]
fn test_external_packages_are_excluded() {
    let dir = tmp();
    write_file(
        dir.path(),
        "src/a.js",
        "import React from 'react';\nimport { b } from './b';\n",
    );
    write_file(dir.path(), "src/b.js", "export const b = 1;\n");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert_eq!(stdout.matches("-->").count(), 1, "only the relative edge");
    assert!(!stdout.contains("react"));
}

/// Importing the same target statically and dynamically yields one edge.
#[test]
fn test_duplicate_imports_collapse_to_one_edge() {
    let dir = tmp();
    write_file(
        dir.path(),
        "src/a.js",
        "import './b';\nconst lazy = import('./b');\n",
    );
    write_file(dir.path(), "src/b.js", "");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert_eq!(stdout.matches("-->").count(), 1);
}

/// `./foo` with no foo.<ext> resolves to foo/index.js.
#[test]
fn test_directory_as_module_resolution() {
    let dir = tmp();
    write_file(dir.path(), "src/a.js", "import './foo';\n");
    write_file(dir.path(), "src/foo/index.js", "");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert_eq!(
        stdout,
        "graph LR\n    src_a_js[\"src/a.js\"] --> src_foo_index_js[\"src/foo/index.js\"]\n"
    );
}

/// A literal self-import never produces an edge, so the diagram stays empty.
#[test]
fn test_self_import_is_discarded() {
    let dir = tmp();
    write_file(dir.path(), "src/a.js", "import './a';\n");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert_eq!(stdout, "graph LR\n");
}

/// `@/` specifiers resolve against src/ by convention.
#[test]
fn test_src_alias_resolution() {
    let dir = tmp();
    write_file(dir.path(), "src/pages/home.tsx", "import '@/lib/api';\n");
    write_file(dir.path(), "src/lib/api.ts", "");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert!(stdout.contains(
        "src_pages_home_tsx[\"src/pages/home.tsx\"] --> src_lib_api_ts[\"src/lib/api.ts\"]"
    ));
}

/// Re-exports are dependencies like any import.
#[test]
fn test_reexport_produces_edge() {
    let dir = tmp();
    write_file(dir.path(), "src/index.ts", "export * from './util';\n");
    write_file(dir.path(), "src/util.ts", "export const u = 1;\n");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert!(stdout.contains("src_index_ts[\"src/index.ts\"] --> src_util_ts[\"src/util.ts\"]"));
}

/// node_modules never contributes nodes or edges, even with resolvable paths.
#[test]
fn test_node_modules_is_never_scanned() {
    let dir = tmp();
    write_file(dir.path(), "src/a.js", "import './b';\n");
    write_file(dir.path(), "src/b.js", "");
    write_file(dir.path(), "node_modules/pkg/index.js", "import './lib';\n");
    write_file(dir.path(), "node_modules/pkg/lib.js", "");

    let stdout = run_success(&[dir.path().to_str().unwrap()]);
    assert_eq!(stdout.matches("-->").count(), 1);
    assert!(!stdout.contains("node_modules"));
}

// ---------------------------------------------------------------------------
// Error handling
// ---------------------------------------------------------------------------

/// A missing root is fatal: non-zero exit, diagnostic on stderr, no stdout.
#[test]
fn test_missing_root_fails() {
    let dir = tmp();
    let missing = dir.path().join("no-such-dir");

    let out = run(&[missing.to_str().unwrap()]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty(), "no partial output on fatal errors");
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("does not exist or is not a directory"),
        "stderr: {stderr}"
    );
}

/// An unreadable file (invalid UTF-8) is skipped with a warning; the rest of
/// the project still produces a diagram and the exit code stays zero.
#[test]
fn test_unreadable_file_is_skipped() {
    let dir = tmp();
    write_file(dir.path(), "src/a.js", "import './b';\n");
    write_file(dir.path(), "src/b.js", "");
    fs::write(dir.path().join("src/broken.js"), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

    let out = run(&[dir.path().to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert_eq!(stdout.matches("-->").count(), 1);
    assert!(stderr.contains("failed to read"), "stderr: {stderr}");
    assert!(stderr.contains("broken.js"), "stderr: {stderr}");
}

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

#[test]
fn test_dot_format() {
    let dir = tmp();
    write_file(dir.path(), "src/a.js", "import './b';\n");
    write_file(dir.path(), "src/b.js", "");

    let stdout = run_success(&["--format", "dot", dir.path().to_str().unwrap()]);
    assert!(stdout.starts_with("digraph dependencies {\n"));
    assert!(stdout.contains("src_a_js -> src_b_js"));
    assert!(!stdout.contains("graph LR"));
}

#[test]
fn test_exclude_patterns_remove_nodes_and_edges() {
    let dir = tmp();
    write_file(dir.path(), "src/a.js", "import './b';\nimport './gen/api';\n");
    write_file(dir.path(), "src/b.js", "");
    write_file(dir.path(), "src/gen/api.js", "import './deep';\n");
    write_file(dir.path(), "src/gen/deep.js", "");

    let stdout = run_success(&["--exclude", "gen", dir.path().to_str().unwrap()]);
    assert_eq!(stdout.matches("-->").count(), 1, "only a -> b survives");
    assert!(!stdout.contains("gen"));
}

/// --stats --json emits a machine-readable summary on stderr; stdout stays
/// the plain diagram.
#[test]
fn test_stats_json_summary() {
    let dir = tmp();
    write_file(
        dir.path(),
        "src/a.js",
        "import './b';\nimport 'react';\nimport './b';\n",
    );
    write_file(dir.path(), "src/b.js", "");

    let out = run(&["--stats", "--json", dir.path().to_str().unwrap()]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.starts_with("graph LR\n"));

    let stderr = String::from_utf8_lossy(&out.stderr);
    let parsed: serde_json::Value =
        serde_json::from_str(&stderr).expect("stats output is not valid JSON");
    assert_eq!(parsed["files_scanned"].as_u64(), Some(2));
    assert_eq!(parsed["imports_found"].as_u64(), Some(3));
    assert_eq!(parsed["external_imports"].as_u64(), Some(1));
    assert_eq!(parsed["duplicate_edges_dropped"].as_u64(), Some(1));
    assert_eq!(parsed["edges"].as_u64(), Some(1));
    assert_eq!(parsed["nodes"].as_u64(), Some(2));
}
