// tests/test_main.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn given_no_args_when_run_then_exits_successfully() {
    Command::cargo_bin("tmarks").unwrap().assert().success();
}

#[test]
fn given_generate_config_flag_when_run_then_prints_default_config() {
    Command::cargo_bin("tmarks")
        .unwrap()
        .arg("--generate-config")
        .assert()
        .success()
        .stdout(predicate::str::contains("api_url"));
}

#[test]
fn given_completion_bash_when_run_then_outputs_script() {
    Command::cargo_bin("tmarks")
        .unwrap()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tmarks"));
}

#[test]
fn given_unsupported_shell_when_completion_then_fails_with_message() {
    Command::cargo_bin("tmarks")
        .unwrap()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}

#[test]
fn given_browse_with_closed_stdin_when_run_then_prints_initial_intent() {
    Command::cargo_bin("tmarks")
        .unwrap()
        .arg("browse")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("search=bookmark"));
}

#[test]
fn given_browse_input_when_cycling_visibility_then_intent_reflects_it() {
    Command::cargo_bin("tmarks")
        .unwrap()
        .arg("browse")
        .write_stdin("v\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("visibility=public only"));
}
