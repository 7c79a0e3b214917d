use std::error::Error as _;
use std::path::PathBuf;

use super::*;

#[test]
fn config_error_display() {
    let err = CfgPatchError::Config("indent must not be empty".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: indent must not be empty"
    );
}

#[test]
fn file_access_error_keeps_source() {
    let err = CfgPatchError::FileAccess {
        path: PathBuf::from("mongod.cfg"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    assert_eq!(err.to_string(), "Failed to read file: mongod.cfg");
    assert!(err.source().is_some());
}

#[test]
fn dir_create_error_display() {
    let err = CfgPatchError::DirCreate {
        path: PathBuf::from("D:/data"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    };
    assert!(err.to_string().contains("D:/data"));
}

#[test]
fn missing_settings_lists_keys() {
    let err = CfgPatchError::MissingSettings(vec!["bindIp".to_string(), "port".to_string()]);
    assert_eq!(
        err.to_string(),
        "Failed to find required settings: bindIp, port"
    );
}

#[test]
fn io_from_conversion() {
    let io = std::io::Error::other("boom");
    let err: CfgPatchError = io.into();
    assert!(matches!(err, CfgPatchError::Io(_)));
}

#[test]
fn is_io_classification() {
    let io = CfgPatchError::FileWrite {
        path: PathBuf::from("out.cfg"),
        source: std::io::Error::other("disk full"),
    };
    assert!(io.is_io());
    assert!(!CfgPatchError::Config("bad".to_string()).is_io());
    assert!(!CfgPatchError::MissingSettings(vec![]).is_io());
}
