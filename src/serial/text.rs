//! Space-delimited text export/import for teacher collections.
//!
//! The file starts with a fixed header line, then one record per line with
//! the four fields joined by single spaces. The header spelling is part of
//! the format and is kept verbatim, typo included.
//!
//! Import skips the first line unconditionally and splits every following
//! line on single spaces into exactly four tokens. A field containing a
//! space therefore breaks the positional contract on re-import; the line
//! is reported as malformed.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::record::TeacherRecord;

use super::{SerialError, SerialResult};

/// Header line written before the records.
pub const TEXT_HEADER: &str = "Name Adress PhoneNumber Email";

/// Outcome of a text import.
///
/// `records` holds every line parsed before the scan stopped. When a line
/// fails to parse, `stopped` carries the error for that line and the rest
/// of the file is abandoned; the records gathered up to that point are
/// still handed to the caller for appending.
#[derive(Debug)]
pub struct TextImport {
    /// Records parsed in file order.
    pub records: Vec<TeacherRecord>,
    /// Error for the first malformed line, if the scan stopped early.
    pub stopped: Option<SerialError>,
}

/// Writes the header plus one line per record to `path`.
pub fn export_text(path: impl AsRef<Path>, records: &[TeacherRecord]) -> SerialResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "{TEXT_HEADER}")?;
    for record in records {
        writeln!(
            out,
            "{} {} {} {}",
            record.name, record.address, record.phone, record.email
        )?;
    }
    out.flush()?;
    Ok(())
}

/// Reads records from a text file written by [`export_text`].
///
/// The first line is discarded as the header. Each following line must
/// split into exactly four tokens, with the phone token parsing as an
/// integer. The scan stops at the first malformed line; see [`TextImport`].
/// Only file-level I/O failures surface as `Err`, leaving the caller's
/// state untouched.
pub fn import_text(path: impl AsRef<Path>) -> SerialResult<TextImport> {
    let reader = BufReader::new(File::open(path)?);
    let mut records = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if index == 0 {
            continue;
        }
        match parse_line(&line, index + 1) {
            Ok(record) => records.push(record),
            Err(err) => {
                debug!("text import stopped: {err}");
                return Ok(TextImport {
                    records,
                    stopped: Some(err),
                });
            }
        }
    }

    Ok(TextImport {
        records,
        stopped: None,
    })
}

fn parse_line(line: &str, number: usize) -> Result<TeacherRecord, SerialError> {
    let tokens: Vec<&str> = line.split(' ').collect();
    if tokens.len() != 4 {
        return Err(SerialError::MalformedLine {
            line: number,
            reason: format!("expected 4 fields, found {}", tokens.len()),
        });
    }
    if tokens[2].parse::<i64>().is_err() {
        return Err(SerialError::MalformedLine {
            line: number,
            reason: format!("phone '{}' is not an integer", tokens[2]),
        });
    }
    Ok(TeacherRecord {
        name: tokens[0].to_string(),
        address: tokens[1].to_string(),
        phone: tokens[2].to_string(),
        email: tokens[3].to_string(),
    })
}
