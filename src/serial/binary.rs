//! Opaque binary snapshot files.
//!
//! The whole collection is wrapped in a versioned envelope and written as
//! one blob. The payload is not meant for interchange; the only contract
//! is that importing an exported file reproduces every record exactly, in
//! order.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::{SerialError, SerialResult};

/// Version number for serialized snapshot payloads.
pub const BINARY_FORMAT_VERSION: u16 = 1;

#[derive(Debug, Serialize)]
struct EnvelopeRef<'a, R> {
    format_version: u16,
    records: &'a [R],
}

#[derive(Debug, Deserialize)]
struct Envelope<R> {
    format_version: u16,
    records: Vec<R>,
}

/// Writes the full collection to `path` as a versioned blob.
pub fn export_binary<R: Serialize>(path: impl AsRef<Path>, records: &[R]) -> SerialResult<()> {
    let payload = serde_json::to_vec(&EnvelopeRef {
        format_version: BINARY_FORMAT_VERSION,
        records,
    })?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(&payload)?;
    out.flush()?;
    Ok(())
}

/// Reads a snapshot written by [`export_binary`].
///
/// The caller substitutes the returned collection wholesale for whatever
/// it held before. Unknown envelope versions are rejected.
pub fn import_binary<R: DeserializeOwned>(path: impl AsRef<Path>) -> SerialResult<Vec<R>> {
    let reader = BufReader::new(File::open(path)?);
    let envelope: Envelope<R> = serde_json::from_reader(reader)?;
    if envelope.format_version != BINARY_FORMAT_VERSION {
        return Err(SerialError::UnsupportedVersion(envelope.format_version));
    }
    Ok(envelope.records)
}
