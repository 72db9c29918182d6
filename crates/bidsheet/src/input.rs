//! Document text loading and provenance metadata.
//!
//! Documents arrive as pre-extracted plain text; pulling text out of
//! binary formats (PDF and friends) happens upstream of this crate.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{BidsheetError, Result};

/// Metadata about one source document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// File name without path.
    pub file: String,
    /// Full path to the file.
    pub path: PathBuf,
    /// SHA-256 hash of the file contents.
    pub hash: String,
    /// File size in bytes.
    pub size_bytes: u64,
    /// Number of characters of document text.
    pub char_count: usize,
    /// When the document was loaded.
    pub loaded_at: DateTime<Utc>,
}

/// Load one document's text along with its provenance metadata.
pub fn load_document(path: impl AsRef<Path>) -> Result<(String, SourceMetadata)> {
    let path = path.as_ref();

    let bytes = fs::read(path).map_err(|source| BidsheetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut hasher = Sha256::new();
    hasher.update(&bytes);
    let hash = format!("{:x}", hasher.finalize());

    let text = String::from_utf8_lossy(&bytes).into_owned();

    let metadata = SourceMetadata {
        file: path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
        path: path.to_path_buf(),
        hash,
        size_bytes: bytes.len() as u64,
        char_count: text.chars().count(),
        loaded_at: Utc::now(),
    };

    Ok((text, metadata))
}

/// Vendor label for a document: the file stem, or the whole file name
/// when there is no stem.
pub fn vendor_label(path: impl AsRef<Path>) -> String {
    let path = path.as_ref();
    path.file_stem()
        .or_else(|| path.file_name())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn loads_text_and_metadata() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"Gasket Set | 4 | SET | 12.5\n").unwrap();

        let (text, meta) = load_document(file.path()).unwrap();
        assert!(text.starts_with("Gasket Set"));
        assert_eq!(meta.size_bytes, 28);
        assert_eq!(meta.hash.len(), 64);
        assert_eq!(meta.char_count, text.chars().count());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_document("/no/such/document.txt").unwrap_err();
        assert!(matches!(err, BidsheetError::Io { .. }));
    }

    #[test]
    fn vendor_label_uses_file_stem() {
        assert_eq!(vendor_label("quotes/RFQ-1.txt"), "RFQ-1");
        assert_eq!(vendor_label("acme"), "acme");
    }
}
