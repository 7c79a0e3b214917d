//! Filesystem boundary: reading the source, creating declared directories,
//! and committing the rewritten file in one step.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{CfgPatchError, Result};

/// How the bytes of a config file map to text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TextEncoding {
    #[default]
    Utf8,
    /// Each byte is one char in `U+0000..=U+00FF`; used when the file is not
    /// valid UTF-8 so untouched bytes survive the round trip.
    Latin1,
}

impl TextEncoding {
    /// Turn text back into file bytes.
    ///
    /// Under `Latin1`, chars above `U+00FF` (only possible in inserted values)
    /// are written as UTF-8.
    #[must_use]
    pub fn encode(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Latin1 => {
                let mut bytes = Vec::with_capacity(text.len());
                for c in text.chars() {
                    match u8::try_from(c) {
                        Ok(b) => bytes.push(b),
                        Err(_) => {
                            let mut buf = [0u8; 4];
                            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
                        }
                    }
                }
                bytes
            }
        }
    }
}

/// Config file contents together with the encoding they were decoded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    pub text: String,
    pub encoding: TextEncoding,
}

impl SourceText {
    /// Decode raw bytes, falling back to `Latin1` when they are not UTF-8.
    #[must_use]
    pub fn decode(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self {
                text,
                encoding: TextEncoding::Utf8,
            },
            Err(e) => Self {
                text: e.into_bytes().iter().map(|&b| char::from(b)).collect(),
                encoding: TextEncoding::Latin1,
            },
        }
    }

    /// Encode `text` the same way this source was decoded.
    #[must_use]
    pub fn encode(&self, text: &str) -> Vec<u8> {
        self.encoding.encode(text)
    }
}

/// Read a config file verbatim.
///
/// # Errors
/// Returns `FileAccess` if the file is missing or unreadable.
pub fn read_config(path: &Path) -> Result<SourceText> {
    let bytes = fs::read(path).map_err(|source| CfgPatchError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let source = SourceText::decode(bytes);
    if source.encoding == TextEncoding::Latin1 {
        tracing::debug!(path = %path.display(), "not valid UTF-8, reading bytes as latin-1");
    }
    Ok(source)
}

/// Create `path` and any missing parents. Existing directories are fine.
///
/// # Errors
/// Returns `DirCreate` if the directory cannot be created.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "creating directory");
    fs::create_dir_all(path).map_err(|source| CfgPatchError::DirCreate {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace `path` with `content` all at once.
///
/// The content goes to a temporary file next to the target, which is then
/// renamed over it; a failure never leaves a partially written target.
/// An existing target keeps its permissions.
///
/// # Errors
/// Returns `FileWrite` if the temporary file cannot be written or persisted.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let to_write_error = |source: std::io::Error| CfgPatchError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(to_write_error)?;
    tmp.write_all(content).map_err(to_write_error)?;
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(to_write_error)?;
    }
    tmp.as_file().sync_all().map_err(to_write_error)?;
    tmp.persist(path).map_err(|e| to_write_error(e.error))?;
    Ok(())
}

#[cfg(test)]
#[path = "fsio_tests.rs"]
mod tests;
