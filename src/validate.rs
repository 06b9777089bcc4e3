//! Pure field checks returning per-field violation sets.
//!
//! A validation call reports every failing field of a submission at once;
//! an empty set means the draft may be committed to a store. Validation
//! never touches the store itself.

use std::fmt;

use crate::record::{RoomDraft, SubjectDraft, TeacherDraft};

/// Form field identifiers used in violation reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Teacher or room/subject name.
    Name,
    /// Teacher address.
    Address,
    /// Teacher phone number.
    Phone,
    /// Teacher email.
    Email,
    /// Room or subject room number.
    Number,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Number => "number",
        };
        f.write_str(name)
    }
}

/// One failed field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Offending field.
    pub field: Field,
    /// Message suitable for showing next to the field.
    pub message: &'static str,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn violation(field: Field, message: &'static str) -> Violation {
    Violation { field, message }
}

/// Checks all four teacher field rules, reporting every failing field.
pub fn validate_teacher(draft: &TeacherDraft) -> Vec<Violation> {
    let mut violations = Vec::new();

    if draft.name.chars().count() < 5 {
        violations.push(violation(Field::Name, "name must be at least 5 characters"));
    }
    if draft.address.chars().count() < 5 {
        violations.push(violation(
            Field::Address,
            "address must be at least 5 characters",
        ));
    }
    if draft.phone.len() != 10 || !draft.phone.chars().all(|c| c.is_ascii_digit()) {
        violations.push(violation(Field::Phone, "phone must be exactly 10 digits"));
    }
    if draft.email.chars().count() < 5 || !draft.email.contains('@') {
        violations.push(violation(
            Field::Email,
            "email must be at least 5 characters and contain '@'",
        ));
    }

    violations
}

/// Checks that the subject's room number parses as an integer. The other
/// subject fields are free text.
pub fn validate_subject(draft: &SubjectDraft) -> Vec<Violation> {
    check_number(&draft.room_number)
}

/// Checks that the room number parses as an integer. Kind, date, hour,
/// and the teacher/subject names are free text.
pub fn validate_room(draft: &RoomDraft) -> Vec<Violation> {
    check_number(&draft.number)
}

fn check_number(text: &str) -> Vec<Violation> {
    if text.trim().parse::<i32>().is_err() {
        vec![violation(Field::Number, "number must be an integer")]
    } else {
        Vec::new()
    }
}
