use schoolreg::{
    record::{TeacherDraft, UNPARSED_NUMBER},
    session::{Command, Outcome, TeacherSession},
    validate::{Field, validate_teacher},
};

fn valid_draft() -> TeacherDraft {
    TeacherDraft {
        name: "Ana Popescu".to_string(),
        address: "Main St 5".to_string(),
        phone: "1234567890".to_string(),
        email: "ana@x.com".to_string(),
    }
}

#[test]
fn valid_draft_is_appended_last() {
    let mut session = TeacherSession::new();
    session.apply(Command::Add(valid_draft())).unwrap();

    let second = TeacherDraft {
        name: "Ion Vasile".to_string(),
        ..valid_draft()
    };
    let outcome = session.apply(Command::Add(second.clone())).unwrap();
    assert!(matches!(outcome, Outcome::Added));

    let records = session.records();
    assert_eq!(records.last().unwrap(), &second.into_record());
}

#[test]
fn each_single_violation_names_its_field_and_leaves_store_unchanged() {
    let cases = [
        (
            TeacherDraft {
                name: "Ana".to_string(),
                ..valid_draft()
            },
            Field::Name,
        ),
        (
            TeacherDraft {
                address: "St 1".to_string(),
                ..valid_draft()
            },
            Field::Address,
        ),
        (
            TeacherDraft {
                phone: "12345".to_string(),
                ..valid_draft()
            },
            Field::Phone,
        ),
        (
            TeacherDraft {
                email: "ana.x.com".to_string(),
                ..valid_draft()
            },
            Field::Email,
        ),
    ];

    for (draft, field) in cases {
        let violations = validate_teacher(&draft);
        assert_eq!(violations.len(), 1, "{field:?}");
        assert_eq!(violations[0].field, field);

        let mut session = TeacherSession::new();
        let outcome = session.apply(Command::Add(draft)).unwrap();
        match outcome {
            Outcome::Rejected(v) => assert_eq!(v[0].field, field),
            other => panic!("expected rejection, got {other:?}"),
        }
        assert!(session.records().is_empty());
    }
}

#[test]
fn phone_with_non_digits_is_rejected_even_at_length_ten() {
    let draft = TeacherDraft {
        phone: "12345abcde".to_string(),
        ..valid_draft()
    };
    let violations = validate_teacher(&draft);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].field, Field::Phone);
}

#[test]
fn unparsable_numbers_coerce_to_sentinel_on_conversion() {
    use schoolreg::record::{RoomDraft, SubjectDraft};

    let room = RoomDraft {
        number: "not-a-number".to_string(),
        ..RoomDraft::default()
    }
    .into_record();
    assert_eq!(room.number, UNPARSED_NUMBER);

    let subject = SubjectDraft {
        room_number: "".to_string(),
        ..SubjectDraft::default()
    }
    .into_record();
    assert_eq!(subject.room_number, UNPARSED_NUMBER);
}

#[test]
fn room_draft_wraps_names_in_empty_records() {
    use schoolreg::record::RoomDraft;

    let room = RoomDraft {
        number: "101".to_string(),
        kind: "lab".to_string(),
        date: "2021-05-22".to_string(),
        hour: "10:00".to_string(),
        teacher_name: "Ana Popescu".to_string(),
        subject_name: "Math".to_string(),
    }
    .into_record();

    assert_eq!(room.number, 101);
    assert_eq!(room.teacher.name, "Ana Popescu");
    assert!(room.teacher.address.is_empty());
    assert_eq!(room.subject.name, "Math");
    assert!(room.subject.class_name.is_empty());
}
