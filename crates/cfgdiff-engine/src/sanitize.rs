//! Redaction of secret values in a diff before it is logged or returned.

use std::collections::HashSet;
use std::sync::LazyLock;

pub use cfgdiff_types::SENSITIVE_PATHS;
use cfgdiff_types::{SupportsRedaction, Value, FAKE_SETTING};
use tracing::debug;

use crate::config_diff::{ConfigDiff, ConfigDiffs};

static SENSITIVE: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| SENSITIVE_PATHS.iter().copied().collect());

/// Returns `true` if `path` is one of [`SENSITIVE_PATHS`].
pub fn is_sensitive(path: &str) -> bool {
    SENSITIVE.contains(path)
}

/// Mask secret values in `diffs`. See [`ConfigDiffs::sanitize`].
pub fn sanitize(diffs: ConfigDiffs) -> ConfigDiffs {
    diffs.sanitize()
}

impl ConfigDiffs {
    /// Mask values at [`SENSITIVE_PATHS`] with [`FAKE_SETTING`].
    ///
    /// A change at a sensitive path has both values replaced. A change at an
    /// ancestor of sensitive paths, such as a whole section that became set,
    /// has the secrets inside its values masked in place.
    ///
    /// A diff holding exactly one change is taken to be a whole object
    /// compared as a unit; both of its values are asked to redact their own
    /// secrets first. Applying this twice gives the same result as once.
    pub fn sanitize(self) -> Self {
        self.sanitize_with(SENSITIVE_PATHS)
    }

    /// Like [`sanitize`](Self::sanitize) with a caller-supplied path list.
    pub fn sanitize_with(mut self, paths: &[&str]) -> Self {
        if self.len() == 1 {
            if let Some(only) = self.iter_mut().next() {
                only.base_val.redact();
                only.actual_val.redact();
            }
        }

        let mut masked = 0usize;
        for change in self.iter_mut() {
            if paths.iter().any(|p| *p == change.path) {
                change.base_val = Value::String(FAKE_SETTING.to_string());
                change.actual_val = Value::String(FAKE_SETTING.to_string());
                masked += 1;
            } else {
                masked += mask_nested(change, paths);
            }
        }
        debug!(changes = self.len(), masked, "sanitized config diff");
        self
    }
}

/// Mask every sensitive path below `change.path` inside both values.
fn mask_nested(change: &mut ConfigDiff, paths: &[&str]) -> usize {
    let mut masked = 0;
    for path in paths {
        let rest = if change.path.is_empty() {
            Some(*path)
        } else {
            path.strip_prefix(change.path.as_str())
                .and_then(|r| r.strip_prefix('.'))
        };
        let Some(rest) = rest else {
            continue;
        };
        for value in [&mut change.base_val, &mut change.actual_val] {
            if let Some(record) = value.as_record_mut() {
                if record.mask(rest) {
                    masked += 1;
                }
            }
        }
    }
    masked
}
