//! Command dispatch mapping user-level operations onto store, validator,
//! and serializer calls.
//!
//! The presentation layer builds a [`Command`] from form input and applies
//! it to a session it owns; nothing here is global. Validation failures
//! come back as [`Outcome::Rejected`] so every offending field can be
//! shown, while store and I/O failures use the separate [`SessionError`]
//! channel.

use std::path::PathBuf;

use thiserror::Error;

use crate::persist::{PersistError, SubjectDb};
use crate::record::{
    RoomDraft, RoomRecord, SubjectDraft, SubjectId, SubjectRecord, TeacherDraft, TeacherRecord,
};
use crate::serial::{self, SerialError};
use crate::store::{RecordStore, StoreError};
use crate::validate::{self, Violation};

/// Export/import file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Opaque versioned blob; import replaces the collection wholesale.
    Binary,
    /// XML document; import replaces the collection wholesale.
    Xml,
    /// Space-delimited text; import appends to the collection.
    Text,
}

/// One user-level operation against a teacher session.
#[derive(Debug, Clone)]
pub enum Command {
    /// Validate a draft and append it.
    Add(TeacherDraft),
    /// Replace the record at `index` with the draft, without re-running
    /// field validation.
    Edit {
        /// Position of the record to replace.
        index: usize,
        /// Replacement form fields.
        draft: TeacherDraft,
    },
    /// Remove the record at `index`.
    Delete {
        /// Position of the record to remove.
        index: usize,
    },
    /// Write the full collection to a file.
    Export {
        /// Target format.
        format: Format,
        /// Target file path.
        path: PathBuf,
    },
    /// Read a file back into the collection.
    Import {
        /// Source format.
        format: Format,
        /// Source file path.
        path: PathBuf,
    },
}

/// Result of applying a command.
#[derive(Debug)]
pub enum Outcome {
    /// The draft passed validation and was appended.
    Added,
    /// The record at the given index was replaced.
    Edited,
    /// The record at the given index was removed.
    Deleted,
    /// The collection was written out.
    Exported {
        /// Number of records written.
        records: usize,
    },
    /// Records were read in.
    Imported {
        /// Number of records read from the file.
        records: usize,
        /// Message for the malformed line a text import stopped at, if
        /// the scan ended early. Records read before it are kept.
        stopped: Option<String>,
    },
    /// Validation failed; nothing was committed.
    Rejected(Vec<Violation>),
}

/// Store or file failure while applying a command.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Positional store failure.
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Serializer failure.
    #[error(transparent)]
    Serial(#[from] SerialError),
    /// SQLite failure.
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// One form session over an in-memory teacher collection.
#[derive(Debug, Default)]
pub struct TeacherSession {
    store: RecordStore<TeacherRecord>,
}

impl TeacherSession {
    /// Creates a session with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &RecordStore<TeacherRecord> {
        &self.store
    }

    /// Snapshot of the current collection, in insertion order.
    pub fn records(&self) -> Vec<TeacherRecord> {
        self.store.list()
    }

    /// Applies one command.
    pub fn apply(&mut self, command: Command) -> Result<Outcome, SessionError> {
        match command {
            Command::Add(draft) => {
                let violations = validate::validate_teacher(&draft);
                if !violations.is_empty() {
                    return Ok(Outcome::Rejected(violations));
                }
                self.store.add(draft.into_record());
                Ok(Outcome::Added)
            }
            Command::Edit { index, draft } => {
                self.store.update(index, draft.into_record())?;
                Ok(Outcome::Edited)
            }
            Command::Delete { index } => {
                self.store.remove(index)?;
                Ok(Outcome::Deleted)
            }
            Command::Export { format, path } => {
                let records = self.store.list();
                match format {
                    Format::Binary => serial::binary::export_binary(&path, &records)?,
                    Format::Xml => serial::xml::export_teachers_xml(&path, &records)?,
                    Format::Text => serial::text::export_text(&path, &records)?,
                }
                Ok(Outcome::Exported {
                    records: records.len(),
                })
            }
            Command::Import { format, path } => match format {
                Format::Binary => {
                    let records = serial::binary::import_binary(&path)?;
                    let count = records.len();
                    self.store.replace_all(records);
                    Ok(Outcome::Imported {
                        records: count,
                        stopped: None,
                    })
                }
                Format::Xml => {
                    let records = serial::xml::import_teachers_xml(&path)?;
                    let count = records.len();
                    self.store.replace_all(records);
                    Ok(Outcome::Imported {
                        records: count,
                        stopped: None,
                    })
                }
                Format::Text => {
                    let imported = serial::text::import_text(&path)?;
                    let count = imported.records.len();
                    for record in imported.records {
                        self.store.add(record);
                    }
                    Ok(Outcome::Imported {
                        records: count,
                        stopped: imported.stopped.map(|e| e.to_string()),
                    })
                }
            },
        }
    }
}

/// One form session over an in-memory room collection.
///
/// Rooms have no export/import in the source application, so the session
/// carries only the add/edit/delete flow with the number-parse gate.
#[derive(Debug, Default)]
pub struct RoomSession {
    store: RecordStore<RoomRecord>,
}

impl RoomSession {
    /// Creates a session with an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the number field and appends the room on success.
    pub fn add(&mut self, draft: RoomDraft) -> Outcome {
        let violations = validate::validate_room(&draft);
        if !violations.is_empty() {
            return Outcome::Rejected(violations);
        }
        self.store.add(draft.into_record());
        Outcome::Added
    }

    /// Replaces the room at `index`, re-parsing the number field without
    /// validation.
    pub fn edit(&mut self, index: usize, draft: RoomDraft) -> Result<(), StoreError> {
        self.store.update(index, draft.into_record())
    }

    /// Removes the room at `index`.
    pub fn delete(&mut self, index: usize) -> Result<(), StoreError> {
        self.store.remove(index).map(|_| ())
    }

    /// Snapshot of the current collection, in insertion order.
    pub fn rooms(&self) -> Vec<RoomRecord> {
        self.store.list()
    }
}

/// One form session over the SQLite-backed subject table.
pub struct SubjectSession {
    db: SubjectDb,
}

impl SubjectSession {
    /// Wraps an already-opened subject database.
    pub fn new(db: SubjectDb) -> Self {
        Self { db }
    }

    /// Validates the room-number parse and inserts the subject on
    /// success, returning its row id.
    pub fn add(&mut self, draft: SubjectDraft) -> Result<(Outcome, Option<SubjectId>), SessionError> {
        let violations = validate::validate_subject(&draft);
        if !violations.is_empty() {
            return Ok((Outcome::Rejected(violations), None));
        }
        let id = self.db.insert(&draft.into_record())?;
        Ok((Outcome::Added, Some(id)))
    }

    /// Replaces every column of the row with id `id`.
    pub fn edit(&mut self, id: SubjectId, draft: SubjectDraft) -> Result<(), SessionError> {
        self.db.update(id, &draft.into_record())?;
        Ok(())
    }

    /// Deletes the row with id `id`.
    pub fn delete(&mut self, id: SubjectId) -> Result<(), SessionError> {
        self.db.delete(id)?;
        Ok(())
    }

    /// Every row with its id, ordered by id.
    pub fn subjects(&self) -> Result<Vec<(SubjectId, SubjectRecord)>, SessionError> {
        Ok(self.db.list()?)
    }
}
