//! SQLite-backed subject table with autoincrement row identity.

use std::path::Path;

use rusqlite::{Connection, params};
use tracing::warn;

use crate::record::{SubjectId, SubjectRecord};

use super::{PersistError, PersistResult};

/// Single-table subject store.
///
/// Rows carry an autoincrement `Id`; the in-memory positional contract of
/// [`crate::store::RecordStore`] does not apply here.
pub struct SubjectDb {
    conn: Connection,
}

impl SubjectDb {
    /// Opens or creates the subject database at `path`.
    pub fn open(path: impl AsRef<Path>) -> PersistResult<Self> {
        let conn = Connection::open(path)?;
        Ok(Self::init_connection(conn))
    }

    /// Opens an in-memory subject database.
    pub fn open_in_memory() -> PersistResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::init_connection(conn))
    }

    /// Runs the schema migration. A failure is logged and the handle is
    /// still returned; later statements then report the missing table.
    fn init_connection(conn: Connection) -> Self {
        if let Err(err) = conn.execute_batch(include_str!("schema.sql")) {
            warn!("subject table migration failed: {err}");
        }
        Self { conn }
    }

    /// Inserts a subject row and returns its autoincrement id.
    pub fn insert(&self, record: &SubjectRecord) -> PersistResult<SubjectId> {
        self.conn.execute(
            "INSERT INTO Subjects(Name, Teacher, Classname, RoomNumber) VALUES (?1, ?2, ?3, ?4)",
            params![
                record.name,
                record.teacher,
                record.class_name,
                record.room_number
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Replaces every column of the row with id `id`.
    pub fn update(&self, id: SubjectId, record: &SubjectRecord) -> PersistResult<()> {
        let changed = self.conn.execute(
            "UPDATE Subjects SET Name = ?1, Teacher = ?2, Classname = ?3, RoomNumber = ?4 \
             WHERE Id = ?5",
            params![
                record.name,
                record.teacher,
                record.class_name,
                record.room_number,
                id
            ],
        )?;
        if changed == 0 {
            return Err(PersistError::MissingRow(id));
        }
        Ok(())
    }

    /// Deletes the row with id `id`.
    pub fn delete(&self, id: SubjectId) -> PersistResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM Subjects WHERE Id = ?1", params![id])?;
        if changed == 0 {
            return Err(PersistError::MissingRow(id));
        }
        Ok(())
    }

    /// Returns every row with its id, ordered by id.
    pub fn list(&self) -> PersistResult<Vec<(SubjectId, SubjectRecord)>> {
        let mut stmt = self.conn.prepare(
            "SELECT Id, Name, Teacher, Classname, RoomNumber FROM Subjects ORDER BY Id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get(0)?,
                SubjectRecord {
                    name: row.get(1)?,
                    teacher: row.get(2)?,
                    class_name: row.get(3)?,
                    room_number: row.get(4)?,
                },
            ))
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}
