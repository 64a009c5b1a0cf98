//! Log sources: where log text comes from.
//!
//! Fetching logs over the network is left to the caller. A log is read from
//! a file or stdin, checked for UTF-8, and fingerprinted so callers can tell
//! which log a result was extracted from.

use std::fmt;
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::str::FromStr;

use sha2::{Digest, Sha256};

/// Errors that can occur while reading a log.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read {origin}: {source}")]
    Io { origin: LogSource, source: io::Error },

    #[error("{origin} is not valid UTF-8")]
    NotUtf8 { origin: LogSource },
}

/// Where to read a log from. `-` means stdin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Path(PathBuf),
    Stdin,
}

impl FromStr for LogSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "-" {
            Self::Stdin
        } else {
            Self::Path(PathBuf::from(s))
        })
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Stdin => f.write_str("stdin"),
        }
    }
}

/// Log text with the digest of its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogText {
    pub text: String,
    /// `sha256:<hex>` of the raw bytes.
    pub digest: String,
}

impl LogText {
    /// Validate and fingerprint raw log bytes.
    pub fn from_bytes(bytes: Vec<u8>, origin: &LogSource) -> Result<Self, SourceError> {
        let digest = digest(&bytes);
        let text = String::from_utf8(bytes).map_err(|_| SourceError::NotUtf8 {
            origin: origin.clone(),
        })?;
        Ok(Self { text, digest })
    }
}

/// Read a whole log from its source.
pub fn read_log(source: &LogSource) -> Result<LogText, SourceError> {
    let bytes = match source {
        LogSource::Path(path) => fs::read(path),
        LogSource::Stdin => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).map(|_| buf)
        }
    }
    .map_err(|source_err| SourceError::Io {
        origin: source.clone(),
        source: source_err,
    })?;
    LogText::from_bytes(bytes, source)
}

fn digest(bytes: &[u8]) -> String {
    format!("sha256:{}", hex::encode(Sha256::digest(bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn dash_means_stdin() {
        assert_eq!("-".parse::<LogSource>().unwrap(), LogSource::Stdin);
        assert_eq!(
            "log.yaml".parse::<LogSource>().unwrap(),
            LogSource::Path(PathBuf::from("log.yaml"))
        );
    }

    #[test]
    fn reads_file_and_fingerprints_it() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.yaml");
        fs::write(&path, "---\na: 1\n").unwrap();

        let log = read_log(&LogSource::Path(path)).unwrap();
        assert_eq!(log.text, "---\na: 1\n");
        assert!(log.digest.starts_with("sha256:"));
        assert_eq!(log.digest.len(), "sha256:".len() + 64);
    }

    #[test]
    fn same_bytes_same_digest() {
        let origin = LogSource::Stdin;
        let a = LogText::from_bytes(b"x".to_vec(), &origin).unwrap();
        let b = LogText::from_bytes(b"x".to_vec(), &origin).unwrap();
        let c = LogText::from_bytes(b"y".to_vec(), &origin).unwrap();
        assert_eq!(a.digest, b.digest);
        assert_ne!(a.digest, c.digest);
    }

    #[test]
    fn non_utf8_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("log.bin");
        fs::write(&path, [0xFF, 0xFE, 0x00]).unwrap();

        let err = read_log(&LogSource::Path(path)).unwrap_err();
        assert!(matches!(err, SourceError::NotUtf8 { .. }));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = read_log(&LogSource::Path(PathBuf::from("/nonexistent/log.yaml"))).unwrap_err();
        assert!(matches!(err, SourceError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/log.yaml"));
    }
}
