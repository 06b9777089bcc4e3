//! Teacher, subject, and room records plus raw form drafts.
//!
//! Drafts hold the text exactly as entered on a form. A draft becomes a
//! record only after the caller has run it through [`crate::validate`];
//! numeric fields that still fail to parse at conversion time coerce to a
//! `-1` sentinel instead of propagating.

use serde::{Deserialize, Serialize};

/// Autoincrement row id assigned by the SQLite subject store.
pub type SubjectId = i64;

/// Sentinel stored when a numeric form field does not parse.
pub const UNPARSED_NUMBER: i32 = -1;

/// A teacher entry held by an in-memory store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TeacherRecord {
    /// Full name.
    pub name: String,
    /// Postal address.
    pub address: String,
    /// Phone number, kept as the ten digits entered.
    pub phone: String,
    /// Contact email.
    pub email: String,
}

/// Raw teacher form fields prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TeacherDraft {
    /// Name field text.
    pub name: String,
    /// Address field text.
    pub address: String,
    /// Phone field text.
    pub phone: String,
    /// Email field text.
    pub email: String,
}

impl TeacherDraft {
    /// Converts the draft into a record, field for field.
    pub fn into_record(self) -> TeacherRecord {
        TeacherRecord {
            name: self.name,
            address: self.address,
            phone: self.phone,
            email: self.email,
        }
    }
}

/// A subject entry, either in memory or as a row in the subject table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SubjectRecord {
    /// Subject name.
    pub name: String,
    /// Teacher referenced by name, not by identity.
    pub teacher: String,
    /// Room the subject is taught in.
    pub room_number: i32,
    /// Class taking the subject.
    pub class_name: String,
}

/// Raw subject form fields prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubjectDraft {
    /// Name field text.
    pub name: String,
    /// Teacher field text.
    pub teacher: String,
    /// Room number field text, parsed on conversion.
    pub room_number: String,
    /// Class name field text.
    pub class_name: String,
}

impl SubjectDraft {
    /// Converts the draft into a record, coercing an unparsable room
    /// number to [`UNPARSED_NUMBER`].
    pub fn into_record(self) -> SubjectRecord {
        SubjectRecord {
            name: self.name,
            teacher: self.teacher,
            room_number: parse_or_sentinel(&self.room_number),
            class_name: self.class_name,
        }
    }
}

/// A room booking entry.
///
/// The embedded teacher and subject carry only the name captured on the
/// room form; their remaining fields stay empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RoomRecord {
    /// Room number.
    pub number: i32,
    /// Room kind, free text.
    pub kind: String,
    /// Booking date, free text.
    pub date: String,
    /// Booking hour, free text.
    pub hour: String,
    /// Teacher holding the booking.
    pub teacher: TeacherRecord,
    /// Subject taught during the booking.
    pub subject: SubjectRecord,
}

/// Raw room form fields prior to validation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomDraft {
    /// Room number field text, parsed on conversion.
    pub number: String,
    /// Room kind field text.
    pub kind: String,
    /// Date field text.
    pub date: String,
    /// Hour field text.
    pub hour: String,
    /// Teacher name field text.
    pub teacher_name: String,
    /// Subject name field text.
    pub subject_name: String,
}

impl RoomDraft {
    /// Converts the draft into a record, coercing an unparsable number to
    /// [`UNPARSED_NUMBER`] and wrapping the teacher/subject names in
    /// otherwise-empty records.
    pub fn into_record(self) -> RoomRecord {
        RoomRecord {
            number: parse_or_sentinel(&self.number),
            kind: self.kind,
            date: self.date,
            hour: self.hour,
            teacher: TeacherRecord {
                name: self.teacher_name,
                ..TeacherRecord::default()
            },
            subject: SubjectRecord {
                name: self.subject_name,
                ..SubjectRecord::default()
            },
        }
    }
}

fn parse_or_sentinel(text: &str) -> i32 {
    text.trim().parse().unwrap_or(UNPARSED_NUMBER)
}
