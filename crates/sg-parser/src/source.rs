//! Sar source abstraction: read log lines from files, mocks, or other backends.

use std::io::ErrorKind;

use crate::error::{SarError, SarResult};

/// Abstraction for reading sar logs, so parsing can be tested without disk.
pub trait SarSource {
    /// Read all lines from the given path.
    fn read_lines(&self, path: &str) -> SarResult<Vec<String>>;
}

/// Reads sar logs from the local filesystem.
///
/// The file handle lives only for the duration of `read_lines`.
pub struct FileSarSource;

impl SarSource for FileSarSource {
    fn read_lines(&self, path: &str) -> SarResult<Vec<String>> {
        let bytes = std::fs::read(path).map_err(|e| io_error(path, e))?;
        // Localized sar output is not always valid UTF-8.
        let content = String::from_utf8_lossy(&bytes);
        Ok(content.lines().map(String::from).collect())
    }
}

/// Map an I/O failure on `path` to the file-scoped error the batch records.
fn io_error(path: &str, e: std::io::Error) -> SarError {
    match e.kind() {
        ErrorKind::NotFound => SarError::NotFound(path.to_string()),
        ErrorKind::PermissionDenied => SarError::PermissionDenied(path.to_string()),
        _ => SarError::Io(format!("{path}: {e}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("sg-parser-{name}-{}", std::process::id()))
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = FileSarSource
            .read_lines("/nonexistent/sg-parser/sar99")
            .unwrap_err();
        assert!(matches!(err, SarError::NotFound(_)));
    }

    #[test]
    fn permission_denied_maps_to_its_variant() {
        let err = io_error(
            "/var/log/sa/sar04",
            std::io::Error::from(ErrorKind::PermissionDenied),
        );
        match err {
            SarError::PermissionDenied(path) => assert_eq!(path, "/var/log/sa/sar04"),
            other => panic!("expected PermissionDenied, got {other:?}"),
        }
    }

    #[test]
    fn other_io_errors_map_to_io() {
        let err = io_error(
            "/var/log/sa/sar04",
            std::io::Error::from(ErrorKind::InvalidData),
        );
        match err {
            SarError::Io(message) => assert!(message.starts_with("/var/log/sa/sar04: ")),
            other => panic!("expected Io, got {other:?}"),
        }
    }

    #[test]
    fn reads_lines_from_disk() {
        let path = temp_path("source");
        std::fs::write(&path, "first\n\nthird\n").unwrap();
        let lines = FileSarSource.read_lines(&path.to_string_lossy()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(lines, vec!["first", "", "third"]);
    }

    #[test]
    fn invalid_utf8_is_decoded_lossily() {
        let path = temp_path("latin1");
        // "Moyenne:" line followed by a Latin-1 encoded "Média:" line
        let mut bytes = b"Moyenne: all 1,0\n".to_vec();
        bytes.extend_from_slice(b"M\xe9dia: all 2,0\n");
        std::fs::write(&path, &bytes).unwrap();

        let lines = FileSarSource.read_lines(&path.to_string_lossy()).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Moyenne: all 1,0");
        assert_eq!(lines[1], "M\u{FFFD}dia: all 2,0");
    }
}
