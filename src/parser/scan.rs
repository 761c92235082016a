//! Whole-file scanning into a version index

use crate::domain::VersionIndex;
use crate::error::ScanError;
use crate::parser::parse_line_bytes;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Scan a lock file on disk
pub fn scan_file(path: &Path) -> Result<VersionIndex, ScanError> {
    tracing::debug!(path = %path.display(), "opening lock file");
    let file = File::open(path).map_err(|e| ScanError::open(path, e))?;
    scan_reader(BufReader::new(file), path)
}

/// Scan every line of `reader` until end of stream
///
/// The first unparsable line aborts the scan; no partial index is
/// returned. `origin` only labels errors and log records.
pub fn scan_reader<R: BufRead>(reader: R, origin: &Path) -> Result<VersionIndex, ScanError> {
    let mut index = VersionIndex::new();

    for (number, raw) in reader.split(b'\n').enumerate() {
        let raw = raw.map_err(|e| ScanError::read(origin, e))?;
        let line = raw.strip_suffix(b"\r").unwrap_or(&raw[..]);
        let dep = parse_line_bytes(line).map_err(|e| ScanError::parse(origin, number + 1, e))?;
        index.insert(dep);
    }

    tracing::info!(
        path = %origin.display(),
        modules = index.len(),
        "Scan found {} dependencies",
        index.len()
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use semver::Version;
    use std::io::Cursor;

    fn scan(content: &str) -> Result<VersionIndex, ScanError> {
        scan_reader(Cursor::new(content), Path::new("go.sum"))
    }

    #[test]
    fn test_scan_go_sum() {
        let content = "\
cloud.google.com/go v0.26.0 h1:e0WKqKTd5BnrG8aKH3J3h+QvEIQtSUcf2n5UZ5ZgLtQ=
cloud.google.com/go v0.26.0/go.mod h1:aQUYkXzVsufM+DwF1aE+0xfcU+56JwCaLick0ClmMTw=
cloud.google.com/go v0.34.0/go.mod h1:aQUYkXzVsufM+DwF1aE+0xfcU+56JwCaLick0ClmMTw=
github.com/google/uuid v1.2.0 h1:qJYtXnJRWmpe7m/3XlyhrsLrEURqHRM2kxzoxXqyUDs=
";
        let index = scan(content).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.top("cloud.google.com/go"), Some(&Version::new(0, 34, 0)));
        assert_eq!(
            index.versions("cloud.google.com/go").map(<[Version]>::len),
            Some(3)
        );
        assert_eq!(index.top("github.com/google/uuid"), Some(&Version::new(1, 2, 0)));
    }

    #[test]
    fn test_scan_empty_input() {
        let index = scan("").unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_scan_crlf_lines() {
        let index = scan("a v1.0.0\r\nb v2.0.0\r\n").unwrap();
        assert_eq!(index.top("b"), Some(&Version::new(2, 0, 0)));
    }

    #[test]
    fn test_scan_aborts_on_first_bad_line() {
        let err = scan("a v1.0.0\ninvalid\nb verroneous\n").unwrap_err();
        match err {
            ScanError::Parse {
                line_number,
                source,
                ..
            } => {
                assert_eq!(line_number, 2);
                assert!(matches!(source, ParseError::Split { .. }));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_scan_bad_version() {
        let err = scan("a v1.0.0\nb erroneous\n").unwrap_err();
        assert!(matches!(
            err,
            ScanError::Parse {
                line_number: 2,
                source: ParseError::Version { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_scan_ignores_non_utf8_hash_column() {
        let content = b"a v1.0.0\nb v2.0.0/go.mod h1:\xff\xfe\n";
        let index = scan_reader(Cursor::new(&content[..]), Path::new("go.sum")).unwrap();
        assert_eq!(index.len(), 2);
        assert_eq!(index.top("b"), Some(&Version::new(2, 0, 0)));
    }

    #[test]
    fn test_scan_non_utf8_name_is_parse_error() {
        let content = b"a v1.0.0\n\xffb v2.0.0\n";
        let err = scan_reader(Cursor::new(&content[..]), Path::new("go.sum")).unwrap_err();
        assert!(matches!(
            err,
            ScanError::Parse {
                line_number: 2,
                source: ParseError::Encoding { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_scan_missing_final_newline() {
        let index = scan("a v1.0.0\nb v2.0.0").unwrap();
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_scan_file_missing() {
        let err = scan_file(Path::new("/definitely/not/here/go.sum")).unwrap_err();
        assert!(matches!(err, ScanError::Open { .. }));
    }
}
