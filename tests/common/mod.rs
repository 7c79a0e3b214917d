#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the cfgpatch binary.
#[macro_export]
macro_rules! cfgpatch {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("cfgpatch"))
    };
}

/// A freshly installed `mongod.cfg` with commented-out optional sections.
pub const DEFAULT_CFG: &str = "# mongod.conf

# Where and how to store data.
storage:
  dbPath: C:\\Program Files\\MongoDB\\Server\\7.0\\data

# where to write logging data.
systemLog:
  destination: file
  logAppend: true
  path:  C:\\Program Files\\MongoDB\\Server\\7.0\\log\\mongod.log

# network interfaces
net:
  port: 27017
  bindIp: 127.0.0.1


#processManagement:

#security:

#operationProfiling:
";

/// A config that went through `unauth` and is ready for `auth`.
pub const UNAUTH_CFG: &str = "storage:
  dbPath: D:\\data

net:
  port: 27017
  bindIp: 0.0.0.0

security:

";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a file from the temp directory.
    pub fn read(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Absolute path inside the fixture, as a command-line argument.
    pub fn arg(&self, relative_path: &str) -> String {
        self.dir
            .path()
            .join(relative_path)
            .to_str()
            .expect("temp path is not UTF-8")
            .to_string()
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
