//! End-to-End CLI Integration Tests
//!
//! Drives the trace_cli TraceRunner with files written the way the
//! playground would capture them.

use clap::Parser as ClapParser;
use source_resolver::{ResolverConfig, SandboxScript};
use std::fs;
use trace_cli::{Cli, TraceRunner};

fn run(args: Vec<String>) -> String {
    let cli = Cli::try_parse_from(args).expect("valid arguments");
    let runner = TraceRunner::from_cli(&cli).expect("runner");
    let mut out = Vec::new();
    runner.execute(&cli.command, &mut out).expect("command succeeds");
    String::from_utf8(out).expect("utf-8 output")
}

fn args(list: &[&str]) -> Vec<String> {
    std::iter::once("playground-trace")
        .chain(list.iter().copied())
        .map(str::to_string)
        .collect()
}

/// Test: the resolved location points at the learner's line
#[test]
fn test_e2e_resolve_runtime_error() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("main.js");
    let stack = dir.path().join("stack.txt");

    let script = SandboxScript::prepare("let x;\nx.push(1);\n", &ResolverConfig::playground());
    fs::write(&source, script.code()).unwrap();
    fs::write(
        &stack,
        format!(
            "TypeError: Cannot read properties of undefined (reading 'push')\n    at eval ({}:4:3)",
            script.source_url()
        ),
    )
    .unwrap();

    let output = run(args(&[
        "resolve",
        "--source",
        source.to_str().unwrap(),
        "--stack",
        stack.to_str().unwrap(),
        "--name",
        "TypeError",
    ]));

    assert_eq!(output, "file.js:2:3\n");
}

/// Test: JSON output of a syntax inference
#[test]
fn test_e2e_infer_json() {
    let dir = tempfile::tempdir().unwrap();
    let source = dir.path().join("main.js");
    fs::write(&source, "const t = [1, 2, 3;\nconsole.log(t);\n").unwrap();

    let output = run(args(&[
        "infer",
        "--source",
        source.to_str().unwrap(),
        "--format",
        "json",
    ]));
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(json["resolved"], true);
    assert_eq!(json["location"], "file.js:1:11");
    assert_eq!(json["frame"]["line"], 1);
    assert_eq!(json["frame"]["column"], 11);
}

/// Test: Gecko-style stacks through the CLI
#[test]
fn test_e2e_frames_gecko() {
    let dir = tempfile::tempdir().unwrap();
    let stack = dir.path().join("stack.txt");
    fs::write(
        &stack,
        "draw@http://localhost/StudentCode.js:6:5\n@http://localhost/StudentCode.js:12:1\nonclick@http://localhost/scripts/script.js:3:9\n",
    )
    .unwrap();

    let output = run(args(&["frames", "--stack", stack.to_str().unwrap()]));
    assert_eq!(output, "at draw (file.js:4:5)\nat file.js:10:1\n");
}
