//! Loading of debrid torrent listings.
//!
//! A listing is the JSON array returned by the debrid list endpoint.

use crate::{Error, Result, TorrentRecord};
use std::io::Read;
use std::path::Path;

/// Decode a listing from a JSON string.
///
/// ```
/// use boxshelf_common::listing::parse_listing;
///
/// let records = parse_listing(r#"[{"id": 1, "name": "Heat.1995.1080p"}]"#).unwrap();
/// assert_eq!(records[0].name, "Heat.1995.1080p");
/// ```
pub fn parse_listing(json: &str) -> Result<Vec<TorrentRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and decode a listing from any reader (a file, stdin).
pub fn read_listing<R: Read>(mut reader: R) -> Result<Vec<TorrentRecord>> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    parse_listing(&buf)
}

/// Load a listing file.
pub fn load_listing(path: &Path) -> Result<Vec<TorrentRecord>> {
    if !path.exists() {
        return Err(Error::not_found(format!("listing file {}", path.display())));
    }
    read_listing(std::fs::File::open(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_listing_empty_array() {
        assert!(parse_listing("[]").unwrap().is_empty());
    }

    #[test]
    fn test_parse_listing_malformed() {
        let err = parse_listing("{ not json").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_read_listing_from_reader() {
        let json = br#"[{"id": 4, "name": "a"}, {"id": 5, "name": "b", "size": 10}]"#;
        let records = read_listing(&json[..]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].size, 10);
    }

    #[test]
    fn test_read_listing_invalid_utf8() {
        let err = read_listing(&b"\xff\xfe"[..]).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_load_listing_missing_file() {
        let err = load_listing(Path::new("/nonexistent/listing.json")).unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert!(err.to_string().contains("listing file"));
    }

    #[test]
    fn test_load_listing_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"id": 9, "name": "Severance.S01E01.1080p"}}]"#).unwrap();

        let records = load_listing(file.path()).unwrap();
        assert_eq!(records[0].id, 9);
    }
}
