//! Whole-collection export/import across binary, XML, and text files.
//!
//! Every operation takes a path, opens its own scoped file handle, and
//! works on a full snapshot of one store's records. Binary and XML imports
//! hand back a complete replacement collection; text import appends, see
//! [`text::import_text`].

/// Opaque versioned binary snapshots.
pub mod binary;
/// Space-delimited text export/import with a fixed header.
pub mod text;
/// Attribute-free XML documents, one element per record.
pub mod xml;

use thiserror::Error;

/// Errors surfaced by export/import calls.
#[derive(Debug, Error)]
pub enum SerialError {
    /// File open/read/write failure.
    #[error("file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// Binary envelope encode/decode failure.
    #[error("binary payload failed to decode: {0}")]
    Payload(#[from] serde_json::Error),
    /// XML document parse failure.
    #[error("xml document failed to parse: {0}")]
    Xml(#[from] quick_xml::DeError),
    /// The binary envelope carries a version this build cannot read.
    #[error("unsupported export format version {0}")]
    UnsupportedVersion(u16),
    /// A text-import line that did not match the expected shape.
    #[error("line {line}: {reason}")]
    MalformedLine {
        /// One-based line number within the file, header included.
        line: usize,
        /// What failed to parse on the line.
        reason: String,
    },
}

/// Result alias for serializer operations.
pub type SerialResult<T> = Result<T, SerialError>;
