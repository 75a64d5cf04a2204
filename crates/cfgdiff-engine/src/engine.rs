//! Structural diff of two configuration trees.
//!
//! Both trees are walked in lock-step, depth-first, in schema declaration
//! order. Records are descended field by field; every other value is a leaf
//! compared as a whole. When exactly one side of a node is unset, the whole
//! node is reported as one change rather than broken down further.

use cfgdiff_types::{join_path, ConfigRecord, FieldDef, Value};
use tracing::{debug, trace};

use crate::config_diff::{ConfigDiff, ConfigDiffs};
use crate::error::{DiffError, DiffResult};

/// Restricts a diff to fields whose `tag` value contains `value`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagScope<'a> {
    pub tag: &'a str,
    pub value: &'a str,
}

impl<'a> TagScope<'a> {
    pub fn new(tag: &'a str, value: &'a str) -> Self {
        Self { tag, value }
    }

    fn admits(&self, field: &FieldDef) -> bool {
        field.matches(self.tag, self.value)
    }
}

/// Diff two configurations field by field.
///
/// Returns [`DiffError::InvalidInput`] if either side is `None`.
pub fn diff<T: ConfigRecord>(base: Option<&T>, actual: Option<&T>) -> DiffResult<ConfigDiffs> {
    diff_roots(base, actual, None)
}

/// Diff two configurations, considering only fields tagged `tag` with a
/// value containing `value`.
///
/// Once a record field matches, everything beneath it is compared without
/// re-checking the descendants' own tags. A field tagged for another scope
/// is still reported when it goes from unset to set or back; untagged
/// leaves never are.
pub fn diff_tags<T: ConfigRecord>(
    base: Option<&T>,
    actual: Option<&T>,
    tag: &str,
    value: &str,
) -> DiffResult<ConfigDiffs> {
    diff_roots(base, actual, Some(TagScope::new(tag, value)))
}

fn diff_roots<T: ConfigRecord>(
    base: Option<&T>,
    actual: Option<&T>,
    scope: Option<TagScope<'_>>,
) -> DiffResult<ConfigDiffs> {
    let (Some(base), Some(actual)) = (base, actual) else {
        return Err(DiffError::InvalidInput(
            "input configs should not be nil".to_string(),
        ));
    };
    diff_values(&base.to_value(), &actual.to_value(), scope.as_ref())
}

/// Diff two already-converted values.
///
/// A scope with an empty tag is treated as no scope.
pub fn diff_values(
    base: &Value,
    actual: &Value,
    scope: Option<&TagScope<'_>>,
) -> DiffResult<ConfigDiffs> {
    let scope = scope.filter(|s| !s.tag.is_empty()).copied();
    let mut changes = Vec::new();
    walk(base, actual, None, "", scope, &mut changes)?;
    debug!(changes = changes.len(), scope = ?scope, "config diff complete");
    Ok(ConfigDiffs::from(changes))
}

/// How a node relates to the active tag scope.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Gate {
    /// No scope applies: the root, or an unscoped walk.
    Open,
    /// The field's own tag matched the scope.
    Matched,
    /// An untagged record section under a scope: walked through, never
    /// reported on by itself.
    Transparent,
    /// A tagged field outside the scope: only presence changes are reported.
    Excluded,
}

/// Untagged leaves under a scope yield `None` and are skipped outright.
fn gate(scope: Option<TagScope<'_>>, field: Option<&FieldDef>) -> Option<Gate> {
    let (Some(scope), Some(field)) = (scope, field) else {
        return Some(Gate::Open);
    };
    if scope.admits(field) {
        Some(Gate::Matched)
    } else if !field.tags.is_empty() {
        Some(Gate::Excluded)
    } else if field.nested().is_some() {
        Some(Gate::Transparent)
    } else {
        None
    }
}

fn walk(
    base: &Value,
    actual: &Value,
    field: Option<&FieldDef>,
    path: &str,
    mut scope: Option<TagScope<'_>>,
    out: &mut Vec<ConfigDiff>,
) -> DiffResult<()> {
    let Some(gate) = gate(scope, field) else {
        return Ok(());
    };

    let (base_zero, actual_zero) = (base.is_zero(), actual.is_zero());
    if base_zero && actual_zero {
        return Ok(());
    }
    if base_zero || actual_zero {
        // Root records and transparent sections are containers, not changes
        // of their own; descend them so fields report individually.
        let container = field.is_none() || gate == Gate::Transparent;
        let records = matches!((base, actual), (Value::Record(_), Value::Record(_)));
        if !(container && records) {
            if gate != Gate::Transparent {
                emit(out, path, base, actual);
            }
            return Ok(());
        }
    }

    if gate == Gate::Excluded {
        return Ok(());
    }

    let (base, actual) = match base {
        Value::Optional(_) => (base.deref_optional(), actual.deref_optional()),
        _ => (base, actual),
    };

    if base.kind() != actual.kind() {
        return Err(DiffError::TypeMismatch {
            path: path.to_string(),
            base: base.kind(),
            actual: actual.kind(),
        });
    }

    match (base, actual) {
        (Value::Record(b), Value::Record(a)) => {
            if gate == Gate::Matched {
                scope = None;
            }
            if b.len() != a.len() {
                return Err(DiffError::ShapeMismatch {
                    path: path.to_string(),
                    base: b.len(),
                    actual: a.len(),
                });
            }
            for (def, (bv, av)) in b.schema().fields.iter().zip(b.fields().iter().zip(a.fields())) {
                walk(bv, av, Some(def), &join_path(path, def.name), scope, out)?;
            }
        }
        _ if gate == Gate::Transparent => {}
        _ => {
            if base != actual {
                emit(out, path, base, actual);
            }
        }
    }

    Ok(())
}

fn emit(out: &mut Vec<ConfigDiff>, path: &str, base: &Value, actual: &Value) {
    trace!(path, "config change");
    out.push(ConfigDiff::new(path, base.clone(), actual.clone()));
}
