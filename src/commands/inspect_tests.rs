use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

const FULL_CFG: &str = "\
storage:
  dbPath: D:\\data
systemLog:
  path: D:\\log\\mongod.log
net:
  port: 27018
  bindIp: 0.0.0.0
  tls:
    certificateKeyFile: C:\\certs\\server.pem
";

fn inspect(cfg: PathBuf, format: InspectFormat, require: bool) -> InspectArgs {
    InspectArgs {
        cfg,
        format,
        require,
    }
}

#[test]
fn inspect_text_lists_settings() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("mongod.cfg");
    fs::write(&cfg, FULL_CFG).unwrap();

    let output = run_inspect_impl(&inspect(cfg, InspectFormat::Text, true)).unwrap();

    assert_eq!(output.lines().count(), 6);
    assert!(output.contains("27018"));
    assert!(output.contains("D:\\log\\mongod.log"));
    assert!(output.contains("<not set>"));
}

#[test]
fn inspect_json_uses_server_key_names() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("mongod.cfg");
    fs::write(&cfg, FULL_CFG).unwrap();

    let output = run_inspect_impl(&inspect(cfg, InspectFormat::Json, false)).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["port"], "27018");
    assert_eq!(value["bindIp"], "0.0.0.0");
    assert_eq!(value["certificateKeyFile"], "C:\\certs\\server.pem");
    assert_eq!(value["dbPath"], "D:\\data");
    assert!(value["tlsUseSystemCA"].is_null());
}

#[test]
fn inspect_require_reports_missing_keys_in_order() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("mongod.cfg");
    fs::write(&cfg, "storage:\n  dbPath: D:\\data\n").unwrap();

    let err = run_inspect_impl(&inspect(cfg, InspectFormat::Text, true)).unwrap_err();

    match err {
        CfgPatchError::MissingSettings(keys) => {
            assert_eq!(keys, vec!["bindIp", "port", "certificateKeyFile"]);
        }
        other => panic!("Expected MissingSettings, got {other:?}"),
    }
}

#[test]
fn inspect_without_require_tolerates_gaps() {
    let temp = TempDir::new().unwrap();
    let cfg = temp.path().join("mongod.cfg");
    fs::write(&cfg, "").unwrap();

    assert!(run_inspect_impl(&inspect(cfg, InspectFormat::Text, false)).is_ok());
}

#[test]
fn inspect_missing_file_is_io_error() {
    let temp = TempDir::new().unwrap();
    let err = run_inspect_impl(&inspect(temp.path().join("x.cfg"), InspectFormat::Text, false))
        .unwrap_err();
    assert!(err.is_io());
}
