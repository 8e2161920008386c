use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn recase(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("recase").unwrap();
    cmd.current_dir(dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join("xdg"))
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn converts_arguments_with_explicit_case() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--case", "snake", "helloWorld", "HTTPRequest"])
        .assert()
        .success()
        .stdout("hello_world\nhttp_request\n");
}

#[test]
fn uses_snake_case_by_default() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .arg("XMLHttpRequest")
        .assert()
        .success()
        .stdout("xml_http_request\n");
}

#[test]
fn local_config_sets_default_case() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".recase.toml"), "default_case = \"kebab\"\n").unwrap();
    recase(&dir)
        .arg("version1ToVersion2")
        .assert()
        .success()
        .stdout("version-1-to-version-2\n");
}

#[test]
fn cli_case_overrides_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".recase.toml"), "default_case = \"kebab\"\n").unwrap();
    recase(&dir)
        .args(["-c", "pascal", "xml_http_request"])
        .assert()
        .success()
        .stdout("XmlHttpRequest\n");
}

#[test]
fn rejects_unsupported_case() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--case", "not-a-real-case", "test"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported case type 'not-a-real-case'"));
}

#[test]
fn reads_stdin_when_no_inputs() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["-c", "constant"])
        .write_stdin("max retries\n   \nuserId\n")
        .assert()
        .success()
        .stdout("MAX_RETRIES\n\nUSER_ID\n");
}

#[test]
fn reads_lines_from_files() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("names.txt");
    fs::write(&path, "first name\nlast-name\n").unwrap();
    recase(&dir)
        .args(["-c", "camel", "--file"])
        .arg(&path)
        .assert()
        .success()
        .stdout("firstName\nlastName\n");
}

#[test]
fn ignore_pattern_passes_input_through() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["-c", "dot", "--ignore-pattern", "^#", "# keep me", "split me"])
        .assert()
        .success()
        .stdout("# keep me\nsplit.me\n");
}

#[test]
fn words_mode_lists_tokens() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--no-color", "--words", "2ndEdition"])
        .assert()
        .success()
        .stdout("2 | nd | Edition\n");
}

#[test]
fn json_output_is_structured() {
    let dir = TempDir::new().unwrap();
    let output = recase(&dir)
        .args(["-o", "json", "-c", "title", "hello world"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["case"], "title");
    assert_eq!(value[0]["output"], "Hello World");
}

#[test]
fn all_mode_prints_every_case() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["--no-color", "--all", "fooBar"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foo.bar"))
        .stdout(predicate::str::contains("FOO_BAR"))
        .stdout(predicate::str::contains("Foo bar"));
}

#[test]
fn list_subcommand_names_every_case() {
    let dir = TempDir::new().unwrap();
    let mut assert = recase(&dir).args(["--no-color", "list"]).assert().success();
    for name in [
        "lowercase", "uppercase", "sentence", "title", "snake", "kebab", "camel", "pascal", "dot",
        "constant",
    ] {
        assert = assert.stdout(predicate::str::contains(name));
    }
}

#[test]
fn empty_input_still_prints_its_line() {
    let dir = TempDir::new().unwrap();
    recase(&dir).arg("").assert().success().stdout("\n");
    recase(&dir)
        .args(["", "a"])
        .assert()
        .success()
        .stdout("\na\n");
}

#[test]
fn double_dash_treats_list_as_input() {
    let dir = TempDir::new().unwrap();
    recase(&dir)
        .args(["-c", "constant", "--", "list"])
        .assert()
        .success()
        .stdout("LIST\n");
}
