//! Foundation types for cfgdiff.
//!
//! This crate provides the schema metadata and the dynamic value model that
//! the diff engine walks. Configuration types declare themselves through the
//! [`config_record!`] macro, which emits both the struct and a static
//! [`RecordSchema`] table describing its fields, labels and tags.
//!
//! # Key Types
//!
//! - [`Value`] / [`Kind`] -- Closed set of value shapes found in a configuration tree
//! - [`Record`] -- A record-kind value: a schema plus its field values in declaration order
//! - [`RecordSchema`] / [`FieldDef`] / [`Tag`] -- Static schema metadata
//! - [`Diffable`] / [`ConfigRecord`] -- Conversion from typed nodes into [`Value`]s
//! - [`SupportsRedaction`] -- A node's ability to mask its own secrets
//! - [`SENSITIVE_PATHS`] -- Paths whose values are always masked

pub mod diffable;
mod macros;
pub mod record;
pub mod redaction;
pub mod schema;
pub mod value;

pub use diffable::{ConfigRecord, Diffable};
pub use record::Record;
pub use redaction::{SupportsRedaction, FAKE_SETTING, SENSITIVE_PATHS};
pub use schema::{join_path, FieldDef, RecordSchema, RedactFn, Tag};
pub use value::{Kind, Value};
