use assert_cmd::Command;
use predicates::prelude::*;

fn ghes_orgs() -> Command {
    let mut cmd = Command::cargo_bin("ghes-orgs").unwrap();
    cmd.env_remove("GHES_TOKEN").env_remove("GHES_HOST");
    cmd
}

#[test]
fn help_mentions_env_vars_and_flags() {
    ghes_orgs()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GHES_TOKEN"))
        .stdout(predicate::str::contains("GHES_HOST"))
        .stdout(predicate::str::contains("--single-page"))
        .stdout(predicate::str::contains("--verbose"));
}

#[test]
fn version_flag() {
    ghes_orgs()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ghes-orgs"));
}

#[test]
fn unknown_argument_is_rejected() {
    ghes_orgs()
        .arg("--org")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_token_fails() {
    let dir = tempfile::tempdir().unwrap();
    ghes_orgs()
        .current_dir(dir.path())
        .env("GHES_HOST", "example.com")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GHES_TOKEN"));
    assert!(!dir.path().join("organizations.txt").exists());
}

#[test]
fn missing_host_fails() {
    let dir = tempfile::tempdir().unwrap();
    ghes_orgs()
        .current_dir(dir.path())
        .env("GHES_TOKEN", "abc123")
        .assert()
        .failure()
        .stderr(predicate::str::contains("GHES_HOST"));
}

#[test]
fn unreachable_host_leaves_no_output_file() {
    let dir = tempfile::tempdir().unwrap();
    ghes_orgs()
        .current_dir(dir.path())
        .env("GHES_TOKEN", "abc123")
        .env("GHES_HOST", "127.0.0.1:1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
    assert!(!dir.path().join("organizations.txt").exists());
}
