//! Integration tests for the `auth` command.

mod common;

use common::{TestFixture, UNAUTH_CFG};
use predicates::prelude::*;

fn auth_args(fixture: &TestFixture) -> Vec<String> {
    vec![
        "--no-config".to_string(),
        "auth".to_string(),
        fixture.arg("mongod.cfg"),
        "enabled".to_string(),
        fixture.arg("certs/server.pem"),
        "27018".to_string(),
    ]
}

#[test]
fn auth_adds_authorization_tls_and_port() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", UNAUTH_CFG);

    cfgpatch!()
        .current_dir(fixture.path())
        .args(auth_args(&fixture))
        .assert()
        .success();

    let expected = format!(
        "storage:\n  dbPath: D:\\data\n\nnet:\n  port: 27018\n  tls:\n    mode: requireTLS\n    certificateKeyFile: {}\n  bindIp: 0.0.0.0\n\nsecurity:\n  authorization: enabled\n\n",
        fixture.arg("certs/server.pem")
    );
    assert_eq!(fixture.read("mongod.cfg"), expected);
    assert!(fixture.path().join("certs").is_dir());
}

#[test]
fn auth_security_followed_by_blank() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", "security:\n\n");

    cfgpatch!()
        .current_dir(fixture.path())
        .args(auth_args(&fixture))
        .assert()
        .success();

    assert_eq!(
        fixture.read("mongod.cfg"),
        "security:\n  authorization: enabled\n\n"
    );
}

#[test]
fn auth_tolerates_missing_sections() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", "storage:\n  dbPath: D:\\data\n");

    cfgpatch!()
        .current_dir(fixture.path())
        .args(auth_args(&fixture))
        .assert()
        .success();

    assert_eq!(fixture.read("mongod.cfg"), "storage:\n  dbPath: D:\\data\n");
}

#[test]
fn auth_security_as_last_line_gets_no_insertion() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", "net:\n  port: 1\nsecurity:");

    cfgpatch!()
        .current_dir(fixture.path())
        .args(auth_args(&fixture))
        .assert()
        .success();

    let content = fixture.read("mongod.cfg");
    assert!(content.ends_with("security:"));
    assert!(!content.contains("authorization"));
}

#[test]
fn auth_rerun_inserts_again() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", UNAUTH_CFG);

    for _ in 0..2 {
        cfgpatch!()
            .current_dir(fixture.path())
            .args(auth_args(&fixture))
            .assert()
            .success();
    }

    let content = fixture.read("mongod.cfg");
    assert_eq!(content.matches("requireTLS").count(), 2);
    assert_eq!(content.matches("authorization: enabled").count(), 2);
    assert_eq!(content.matches("port: 27018").count(), 1);
}

#[test]
fn auth_with_too_few_arguments_prints_usage() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", UNAUTH_CFG);

    cfgpatch!()
        .current_dir(fixture.path())
        .args(["auth", "mongod.cfg", "enabled", "server.pem"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage"));

    assert_eq!(fixture.read("mongod.cfg"), UNAUTH_CFG);
}

#[test]
fn auth_verbose_logs_directive_firings() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", UNAUTH_CFG);
    let mut args = auth_args(&fixture);
    args.insert(0, "-v".to_string());

    cfgpatch!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(args)
        .assert()
        .success()
        .stderr(predicate::str::contains("net.tls"));
}

#[test]
fn auth_quiet_logs_nothing() {
    let fixture = TestFixture::new();
    fixture.create_file("mongod.cfg", UNAUTH_CFG);
    let mut args = auth_args(&fixture);
    args.insert(0, "-q".to_string());

    cfgpatch!()
        .current_dir(fixture.path())
        .env_remove("RUST_LOG")
        .args(args)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}
