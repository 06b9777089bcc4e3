//! Attribute-free XML documents for teacher collections.
//!
//! One `Teacher` element per record under a single `Teachers` root, with a
//! sub-element per field. Escaping is whatever the underlying library does
//! by default, so round-trips are exact for values with or without the
//! reserved `<` and `&` characters.

use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use serde::Deserialize;

use crate::record::TeacherRecord;

use super::SerialResult;

const ROOT_TAG: &str = "Teachers";
const RECORD_TAG: &str = "Teacher";

/// Writes the full collection to `path` as an XML document.
pub fn export_teachers_xml(path: impl AsRef<Path>, records: &[TeacherRecord]) -> SerialResult<()> {
    let file = File::create(path)?;
    let mut xml = Writer::new_with_indent(BufWriter::new(file), b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;

    for record in records {
        xml.write_event(Event::Start(BytesStart::new(RECORD_TAG)))?;
        write_field(&mut xml, "Name", &record.name)?;
        write_field(&mut xml, "Address", &record.address)?;
        write_field(&mut xml, "PhoneNumber", &record.phone)?;
        write_field(&mut xml, "Email", &record.email)?;
        xml.write_event(Event::End(BytesEnd::new(RECORD_TAG)))?;
    }

    xml.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;
    Ok(())
}

fn write_field<W: std::io::Write>(
    xml: &mut Writer<W>,
    tag: &str,
    value: &str,
) -> SerialResult<()> {
    xml.write_event(Event::Start(BytesStart::new(tag)))?;
    xml.write_event(Event::Text(BytesText::new(value)))?;
    xml.write_event(Event::End(BytesEnd::new(tag)))?;
    Ok(())
}

#[derive(Debug, Deserialize)]
struct TeachersDoc {
    #[serde(rename = "Teacher", default)]
    teachers: Vec<TeacherElement>,
}

#[derive(Debug, Deserialize)]
struct TeacherElement {
    #[serde(rename = "Name", default)]
    name: String,
    #[serde(rename = "Address", default)]
    address: String,
    #[serde(rename = "PhoneNumber", default)]
    phone: String,
    #[serde(rename = "Email", default)]
    email: String,
}

/// Reads a document written by [`export_teachers_xml`] back into a
/// collection. The caller substitutes it wholesale for prior state.
pub fn import_teachers_xml(path: impl AsRef<Path>) -> SerialResult<Vec<TeacherRecord>> {
    let mut text = String::new();
    File::open(path)?.read_to_string(&mut text)?;
    let doc: TeachersDoc = quick_xml::de::from_str(&text)?;
    Ok(doc
        .teachers
        .into_iter()
        .map(|t| TeacherRecord {
            name: t.name,
            address: t.address,
            phone: t.phone,
            email: t.email,
        })
        .collect())
}
