//! Integration tests for the `render` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_render_drive_path() {
    let env = TestEnv::new();

    let stdout = env.stdout_of(&["render", "c:\\one\\..\\one\\two\\three"]);
    assert_eq!(
        stdout,
        "input  = c:\\one\\..\\one\\two\\three\n\
         uni    = /c/one/two/three\n\
         msw    = c:\\one\\two\\three\n\
         native = c:\\one\\two\\three\n"
    );
}

#[test]
fn test_render_multiple_paths_separated_by_blank_line() {
    let env = TestEnv::new();

    let stdout = env.stdout_of(&["render", "/c/one", "/dev/null"]);
    let blocks: Vec<&str> = stdout.split("\n\n").collect();
    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].contains("native = c:\\one"));
    assert!(blocks[1].contains("native = /dev/null"));
}

#[test]
fn test_render_forced_platform() {
    let env = TestEnv::new();

    env.command()
        .args(["render", "--platform", "posix", "c:\\one"])
        .assert()
        .success()
        .stdout(predicate::str::contains("native = /c/one"));

    env.command()
        .args(["render", "--platform", "msw", "ex/why/"])
        .assert()
        .success()
        .stdout(predicate::str::contains("native = ex\\why\\"));
}

#[test]
fn test_render_flag_beats_configured_platform() {
    let env = TestEnv::new();
    env.write_user_config("platform: windows\n");

    env.command()
        .args(["render", "--platform", "posix", "/dev/null"])
        .assert()
        .success()
        .stdout(predicate::str::contains("native = /dev/null"));
}

#[test]
fn test_render_json() {
    let env = TestEnv::new();

    let stdout = env.stdout_of(&["render", "--format", "json", "/c/", "../ex"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let items = value.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["input"], "/c/");
    assert_eq!(items[0]["uni"], "/c/");
    assert_eq!(items[0]["msw"], "c:\\");
    assert_eq!(items[1]["uni"], "../ex");
    assert_eq!(items[1]["native"], "../ex");
}

#[test]
fn test_render_requires_a_path() {
    let env = TestEnv::new();

    env.command().arg("render").assert().failure();
}

#[test]
fn test_render_invalid_platform_value() {
    let env = TestEnv::new();

    env.command()
        .args(["render", "--platform", "amiga", "/c/one"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("amiga"));
}
