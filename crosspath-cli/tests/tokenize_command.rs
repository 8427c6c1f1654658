//! Integration tests for the `tokenize` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_tokenize_text_argument() {
    let env = TestEnv::new();

    env.command()
        .args(["tokenize", "--text", "--lvalue = rvalue1, rvalue2"])
        .assert()
        .success()
        .stdout("--lvalue=rvalue1,rvalue2\n");
}

#[test]
fn test_tokenize_stdin_document() {
    let env = TestEnv::new();

    env.command()
        .arg("tokenize")
        .write_stdin("LVALUE = RVALUE\nLVALUE2 = RVALUE(DOS)\r\n\n = orphan\nLINE4 = FINISHED\n")
        .assert()
        .success()
        .stdout("LVALUE=RVALUE\nLVALUE2=RVALUE(DOS)\nLINE4=FINISHED\n");
}

#[test]
fn test_tokenize_multibyte() {
    let env = TestEnv::new();

    env.command()
        .args(["tokenize", "--text", " --値 = はい。 , はい。, おはようございます"])
        .assert()
        .success()
        .stdout("--値=はい。,はい。,おはようございます\n");
}

#[test]
fn test_tokenize_custom_delimiters() {
    let env = TestEnv::new();

    env.command()
        .args([
            "tokenize",
            "--key-delimiter",
            ":",
            "--value-delimiter",
            ";",
            "--text",
            "PATH: /bin; /usr/bin",
        ])
        .assert()
        .success()
        .stdout("PATH=/bin,/usr/bin\n");
}

#[test]
fn test_tokenize_same_delimiters_rejected() {
    let env = TestEnv::new();

    env.command()
        .args(["tokenize", "--key-delimiter", ",", "--text", "a,b"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("delimiters must differ"));
}

#[test]
fn test_tokenize_json() {
    let env = TestEnv::new();

    let stdout = env.stdout_of(&["tokenize", "--format", "json", "--text", "key = a, b\nempty ="]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"key": "key", "values": ["a", "b"]},
            {"key": "empty", "values": []},
        ])
    );
}

#[test]
fn test_tokenize_empty_input() {
    let env = TestEnv::new();

    env.command()
        .arg("tokenize")
        .write_stdin("")
        .assert()
        .success()
        .stdout("");
}
