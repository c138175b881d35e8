//! Conversion between files on disk and transport payload strings

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use common::file_utils::{validate_file_name, FileNameError};
use common::BASE64_ENCODING;
use log::debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("error reading {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("error decoding {file_name}: {source}")]
    Decode {
        file_name: String,
        source: base64::DecodeError,
    },
    #[error("refusing to write {file_name:?}: {source}")]
    InvalidFileName {
        file_name: String,
        source: FileNameError,
    },
    #[error("error creating directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("error writing to file {file_name}: {source}")]
    Write { file_name: String, source: io::Error },
}

/// How a payload string maps to file bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Base64,
    /// The payload is the file content itself
    Plain,
}

impl Encoding {
    /// Anything other than the exact `Base64` tag, including a missing one,
    /// is a plain payload.
    pub fn from_tag(tag: Option<&str>) -> Self {
        match tag {
            Some(BASE64_ENCODING) => Encoding::Base64,
            _ => Encoding::Plain,
        }
    }
}

/// Standard base64 encoding of raw bytes
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Read a whole file and encode it as a base64 payload
pub fn encode_file(path: &Path) -> Result<String, CodecError> {
    let content = fs::read(path).map_err(|source| CodecError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(encode(&content))
}

/// Turn a payload back into file bytes
pub fn decode_payload(
    file_name: &str,
    payload: &str,
    encoding: Encoding,
) -> Result<Vec<u8>, CodecError> {
    match encoding {
        Encoding::Base64 => STANDARD
            .decode(payload)
            .map_err(|source| CodecError::Decode {
                file_name: file_name.to_string(),
                source,
            }),
        Encoding::Plain => Ok(payload.as_bytes().to_vec()),
    }
}

/// `<dest>/<file_name>` when a destination is configured, otherwise
/// `file_name` relative to the working directory.
pub fn resolve_destination(file_name: &str, dest: Option<&Path>) -> PathBuf {
    match dest {
        Some(dir) => dir.join(file_name),
        None => PathBuf::from(file_name),
    }
}

/// Decode a payload and write it to disk, overwriting any existing file.
///
/// Nothing is created when the name is rejected or the payload is malformed.
pub fn decode_to_file(
    file_name: &str,
    payload: &str,
    encoding: Option<&str>,
    dest: Option<&Path>,
) -> Result<PathBuf, CodecError> {
    validate_file_name(file_name).map_err(|source| CodecError::InvalidFileName {
        file_name: file_name.to_string(),
        source,
    })?;

    debug!("Decoding payload for {}", file_name);
    let content = decode_payload(file_name, payload, Encoding::from_tag(encoding))?;

    if let Some(dir) = dest {
        fs::create_dir_all(dir).map_err(|source| CodecError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let path = resolve_destination(file_name, dest);
    debug!("Writing to file {}", path.display());
    fs::write(&path, content).map_err(|source| CodecError::Write {
        file_name: file_name.to_string(),
        source,
    })?;

    debug!("Write to {} succeeded", file_name);
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoding_tag() {
        assert_eq!(Encoding::from_tag(Some("Base64")), Encoding::Base64);
        assert_eq!(Encoding::from_tag(Some("Plain")), Encoding::Plain);
        assert_eq!(Encoding::from_tag(Some("")), Encoding::Plain);
        assert_eq!(Encoding::from_tag(Some("base64")), Encoding::Plain);
        assert_eq!(Encoding::from_tag(None), Encoding::Plain);
    }

    #[test]
    fn test_base64_round_trip_binary() {
        let bytes: Vec<u8> = (0..=255u8).collect();
        let payload = encode(&bytes);
        assert_eq!(
            decode_payload("bin", &payload, Encoding::Base64).unwrap(),
            bytes
        );
    }

    #[test]
    fn test_malformed_base64_names_file() {
        let err = decode_payload("IT01_FPA01.xml", "not base64!", Encoding::Base64).unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
        assert!(err.to_string().contains("IT01_FPA01.xml"));
    }

    #[test]
    fn test_encode_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.xml");
        fs::write(&path, "hello").unwrap();
        assert_eq!(encode_file(&path).unwrap(), "aGVsbG8=");
    }

    #[test]
    fn test_encode_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = encode_file(&dir.path().join("missing.xml")).unwrap_err();
        assert!(matches!(err, CodecError::Read { .. }));
        assert!(err.to_string().contains("missing.xml"));
    }

    #[test]
    fn test_resolve_destination() {
        assert_eq!(resolve_destination("a.xml", None), PathBuf::from("a.xml"));
        assert_eq!(
            resolve_destination("a.xml", Some(Path::new("out"))),
            Path::new("out").join("a.xml")
        );
    }

    #[test]
    fn test_decode_to_file_creates_nested_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("inbox").join("2024");
        let path = decode_to_file("a.txt", "aGVsbG8=", Some("Base64"), Some(&dest)).unwrap();
        assert_eq!(path, dest.join("a.txt"));
        assert_eq!(fs::read(&path).unwrap(), b"hello");
    }

    #[test]
    fn test_plain_payload_written_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let payload = "<?xml version=\"1.0\"?>\n<p:FatturaElettronica/> àè";
        let path = decode_to_file("b.xml", payload, Some("Plain"), Some(dir.path())).unwrap();
        assert_eq!(fs::read(&path).unwrap(), payload.as_bytes());
    }

    #[test]
    fn test_existing_file_is_overwritten() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "old content that is longer").unwrap();
        decode_to_file("a.txt", "new", None, Some(dir.path())).unwrap();
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "new");
    }

    #[test]
    fn test_malformed_payload_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out");
        let err = decode_to_file("a.txt", "%%%", Some("Base64"), Some(&dest)).unwrap_err();
        assert!(matches!(err, CodecError::Decode { .. }));
        assert!(!dest.exists());
    }

    #[test]
    fn test_traversal_name_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode_to_file("../escape.xml", "x", None, Some(dir.path())).unwrap_err();
        assert!(matches!(err, CodecError::InvalidFileName { .. }));
        assert!(!dir.path().join("../escape.xml").exists());
    }
}
