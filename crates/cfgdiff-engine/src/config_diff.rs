//! The diff record model: one [`ConfigDiff`] per changed field or subtree.

use std::fmt;

use serde::Serialize;

use cfgdiff_types::Value;

/// A single difference between two configurations.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfigDiff {
    /// Dotted field path from the root; empty when the roots themselves differ.
    pub path: String,
    /// Value on the baseline side.
    pub base_val: Value,
    /// Value on the actual side.
    pub actual_val: Value,
}

/// How a field changed between baseline and actual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChangeKind {
    /// Unset in the baseline, set in the actual configuration.
    Added,
    /// Set in the baseline, unset in the actual configuration.
    Removed,
    /// Set on both sides with different values.
    Modified,
}

impl ConfigDiff {
    pub fn new(path: impl Into<String>, base_val: Value, actual_val: Value) -> Self {
        Self {
            path: path.into(),
            base_val,
            actual_val,
        }
    }

    pub fn kind(&self) -> ChangeKind {
        if self.base_val.is_zero() {
            ChangeKind::Added
        } else if self.actual_val.is_zero() {
            ChangeKind::Removed
        } else {
            ChangeKind::Modified
        }
    }
}

impl fmt::Display for ConfigDiff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "<root>" } else { &self.path };
        write!(f, "{path}: {} -> {}", self.base_val, self.actual_val)
    }
}

/// Ordered diff output, in schema declaration order (depth-first).
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfigDiffs {
    changes: Vec<ConfigDiff>,
}

impl ConfigDiffs {
    /// Create an empty diff.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no changes.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Number of changes.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ConfigDiff> {
        self.changes.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, ConfigDiff> {
        self.changes.iter_mut()
    }

    /// Changed paths in order.
    pub fn paths(&self) -> Vec<&str> {
        self.changes.iter().map(|c| c.path.as_str()).collect()
    }

    pub fn contains_path(&self, path: &str) -> bool {
        self.changes.iter().any(|c| c.path == path)
    }

    pub fn get(&self, path: &str) -> Option<&ConfigDiff> {
        self.changes.iter().find(|c| c.path == path)
    }

    /// Number of fields that became set.
    pub fn additions(&self) -> usize {
        self.count(ChangeKind::Added)
    }

    /// Number of fields that became unset.
    pub fn removals(&self) -> usize {
        self.count(ChangeKind::Removed)
    }

    /// Number of fields whose value changed.
    pub fn modifications(&self) -> usize {
        self.count(ChangeKind::Modified)
    }

    /// Serialize as a JSON array of `{path, base_val, actual_val}` objects.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind() == kind).count()
    }
}

impl From<Vec<ConfigDiff>> for ConfigDiffs {
    fn from(changes: Vec<ConfigDiff>) -> Self {
        Self { changes }
    }
}

impl IntoIterator for ConfigDiffs {
    type Item = ConfigDiff;
    type IntoIter = std::vec::IntoIter<ConfigDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}

impl<'a> IntoIterator for &'a ConfigDiffs {
    type Item = &'a ConfigDiff;
    type IntoIter = std::slice::Iter<'a, ConfigDiff>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.iter()
    }
}

/// One change per line, in order. Empty diffs render as an empty string.
impl fmt::Display for ConfigDiffs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, change) in self.changes.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{change}")?;
        }
        Ok(())
    }
}
