use std::path::PathBuf;

use tempfile::TempDir;

use super::*;
use crate::EXIT_SUCCESS;

#[test]
fn exit_code_for_io_errors() {
    let err = CfgPatchError::FileAccess {
        path: PathBuf::from("mongod.cfg"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(exit_code_for(&err), EXIT_IO_ERROR);
}

#[test]
fn exit_code_for_config_errors() {
    let err = CfgPatchError::Config("bad".to_string());
    assert_eq!(exit_code_for(&err), EXIT_CONFIG_ERROR);
}

#[test]
fn exit_code_for_missing_settings() {
    let err = CfgPatchError::MissingSettings(vec!["port".to_string()]);
    assert_eq!(exit_code_for(&err), EXIT_MISSING_SETTINGS);
    assert_ne!(exit_code_for(&err), EXIT_SUCCESS);
}

#[test]
fn load_tool_config_no_config_gives_defaults() {
    let config = load_tool_config(Some(std::path::Path::new("/does/not/exist.toml")), true).unwrap();
    assert_eq!(config, ToolConfig::default());
}

#[test]
fn load_tool_config_explicit_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tool.toml");
    std::fs::write(&path, "[format]\nindent = \"    \"\n").unwrap();
    let config = load_tool_config(Some(&path), false).unwrap();
    assert_eq!(config.format.indent, "    ");
}

#[test]
fn load_tool_config_explicit_missing_path_is_io() {
    let dir = TempDir::new().unwrap();
    let err = load_tool_config(Some(&dir.path().join("absent.toml")), false).unwrap_err();
    assert!(err.is_io());
}

#[test]
fn commit_writes_over_source_by_default() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("mongod.cfg");
    std::fs::write(&source, "old\n").unwrap();

    let written = commit(&source, &WriteArgs::default(), b"new\n").unwrap();
    assert_eq!(written, Some(source.clone()));
    assert_eq!(std::fs::read_to_string(&source).unwrap(), "new\n");
}

#[test]
fn commit_honours_output() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("mongod.cfg");
    let output = dir.path().join("patched.cfg");
    std::fs::write(&source, "old\n").unwrap();

    let write = WriteArgs {
        output: Some(output.clone()),
        dry_run: false,
    };
    commit(&source, &write, b"new\n").unwrap();
    assert_eq!(std::fs::read_to_string(&source).unwrap(), "old\n");
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "new\n");
}

#[test]
fn commit_dry_run_touches_nothing() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("mongod.cfg");
    let output = dir.path().join("patched.cfg");
    std::fs::write(&source, "old\n").unwrap();

    let write = WriteArgs {
        output: Some(output.clone()),
        dry_run: true,
    };
    assert_eq!(commit(&source, &write, b"new\n").unwrap(), None);
    assert_eq!(std::fs::read_to_string(&source).unwrap(), "old\n");
    assert!(!output.exists());
}
