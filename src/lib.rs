//! In-memory school administration record stores with field validation
//! and whole-collection export/import.
//!
//! # Examples
//!
//! Dispatching form commands through [`session::TeacherSession`]:
//! ```
//! use schoolreg::{
//!     record::TeacherDraft,
//!     session::{Command, Outcome, TeacherSession},
//! };
//!
//! let mut session = TeacherSession::new();
//! let outcome = session
//!     .apply(Command::Add(TeacherDraft {
//!         name: "Maria Ionescu".to_string(),
//!         address: "Str. Scolii 12".to_string(),
//!         phone: "0740123456".to_string(),
//!         email: "maria@scoala.ro".to_string(),
//!     }))
//!     .expect("add");
//! assert!(matches!(outcome, Outcome::Added));
//! assert_eq!(session.records().len(), 1);
//! ```
//!
//! Direct store and validator usage:
//! ```
//! use schoolreg::{record::TeacherDraft, store::RecordStore, validate};
//!
//! let draft = TeacherDraft {
//!     name: "Ana".to_string(),
//!     address: "Main St 5".to_string(),
//!     phone: "1234567890".to_string(),
//!     email: "ana@x.com".to_string(),
//! };
//! let violations = validate::validate_teacher(&draft);
//! assert_eq!(violations.len(), 1); // name too short
//!
//! let mut store = RecordStore::new();
//! if violations.is_empty() {
//!     store.add(draft.into_record());
//! }
//! assert!(store.is_empty());
//! ```
#![deny(missing_docs)]

/// Relational persistence for the subject variant.
pub mod persist;
/// Domain records and form drafts.
pub mod record;
/// Whole-collection serializers: binary, XML, delimited text.
pub mod serial;
/// Command dispatch over owned form sessions.
pub mod session;
/// Ordered positional record store.
pub mod store;
/// Pure field validation with per-field violation sets.
pub mod validate;
