//! Diff engine for cfgdiff.
//!
//! Computes field-level differences between a baseline and an actual
//! configuration of the same schema, optionally restricted to fields carrying
//! a given tag, and masks secret values before the result is surfaced.
//!
//! # Key Types
//!
//! - [`diff`] / [`diff_tags`] / [`diff_values`] -- Full and tag-scoped diffs
//! - [`ConfigDiffs`] / [`ConfigDiff`] / [`ChangeKind`] -- Ordered diff output
//! - [`sanitize`] / [`SENSITIVE_PATHS`] -- Redaction of secret values
//!
//! ```
//! use cfgdiff_engine::diff;
//! use cfgdiff_types::config_record;
//! use serde::Serialize;
//!
//! config_record! {
//!     #[derive(Default, Serialize)]
//!     pub struct Settings {
//!         pub site_url: Option<String> => "SiteURL",
//!         pub workers: u32 => "Workers" [restart = "true"],
//!     }
//! }
//!
//! let base = Settings { workers: 4, ..Default::default() };
//! let actual = Settings { workers: 8, ..Default::default() };
//! let diffs = diff(Some(&base), Some(&actual)).unwrap();
//! assert_eq!(diffs.to_string(), "Workers: 4 -> 8");
//! ```

pub mod config_diff;
pub mod engine;
pub mod error;
pub mod sanitize;

pub use config_diff::{ChangeKind, ConfigDiff, ConfigDiffs};
pub use engine::{diff, diff_tags, diff_values, TagScope};
pub use error::{DiffError, DiffResult};
pub use sanitize::{is_sensitive, sanitize, SENSITIVE_PATHS};
