//! Static schema metadata for configuration records.
//!
//! Every record type carries a `'static` [`RecordSchema`] table, normally
//! emitted by [`config_record!`](crate::config_record). The table lists the
//! record's fields in declaration order together with their path labels and
//! scope tags. Nested record fields link to their own table, so a whole
//! configuration schema can be walked without a value in hand.

use crate::record::Record;

/// Hook a record type registers to mask its own secrets.
pub type RedactFn = fn(&mut Record);

/// A key/value annotation on a field, e.g. `restart = "true"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag {
    pub key: &'static str,
    pub value: &'static str,
}

/// One field of a record schema.
#[derive(Clone, Copy, Debug)]
pub struct FieldDef {
    /// Path segment for this field, e.g. `DataSource`.
    pub name: &'static str,
    /// Declared scope tags.
    pub tags: &'static [Tag],
    /// Schema of the field's type when it is a (possibly optional) record.
    pub schema: fn() -> Option<&'static RecordSchema>,
}

impl FieldDef {
    /// Value of the tag named `key`, if declared.
    pub fn tag(&self, key: &str) -> Option<&'static str> {
        self.tags.iter().find(|t| t.key == key).map(|t| t.value)
    }

    /// Returns `true` if tag `key` is declared and its value contains `value`.
    pub fn matches(&self, key: &str, value: &str) -> bool {
        self.tag(key).is_some_and(|v| v.contains(value))
    }

    /// The nested record schema, for record-typed fields.
    pub fn nested(&self) -> Option<&'static RecordSchema> {
        (self.schema)()
    }
}

/// Static description of a record type.
#[derive(Debug)]
pub struct RecordSchema {
    /// Type name; two records are the same kind iff their names match.
    pub name: &'static str,
    /// Fields in declaration order.
    pub fields: &'static [FieldDef],
    /// Self-redaction hook, for records that know where their secrets are.
    pub redact: Option<RedactFn>,
}

impl RecordSchema {
    /// Look up a direct field by label.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field by dotted path, descending through nested records.
    pub fn lookup(&self, path: &str) -> Option<&FieldDef> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, Some(rest)),
            None => (path, None),
        };
        let field = self.field(head)?;
        match rest {
            None => Some(field),
            Some(rest) => field.nested()?.lookup(rest),
        }
    }

    /// Every field path in the schema, depth-first in declaration order.
    pub fn paths(&self) -> Vec<(String, &FieldDef)> {
        let mut out = Vec::new();
        collect_paths(self, "", None, &mut out);
        out
    }

    /// Paths whose value changes a diff scoped to `tag`/`value` reports.
    ///
    /// A matching record field brings in all of its descendants regardless
    /// of their own tags. A record field with no tags at all is walked
    /// through; any other non-matching field excludes its whole subtree.
    /// Fields tagged for another scope are left out, although a scoped diff
    /// still reports them going from unset to set or back.
    pub fn scoped_paths(&self, tag: &str, value: &str) -> Vec<(String, &FieldDef)> {
        let mut out = Vec::new();
        collect_paths(self, "", Some((tag, value)), &mut out);
        out
    }
}

fn collect_paths<'a>(
    schema: &'a RecordSchema,
    prefix: &str,
    scope: Option<(&str, &str)>,
    out: &mut Vec<(String, &'a FieldDef)>,
) {
    for field in schema.fields {
        let path = join_path(prefix, field.name);
        match scope {
            Some((tag, value)) if !field.matches(tag, value) => {
                // Untagged sections are walked through with the scope intact.
                if let (true, Some(nested)) = (field.tags.is_empty(), field.nested()) {
                    collect_paths(nested, &path, scope, out);
                }
            }
            _ => {
                out.push((path.clone(), field));
                if let Some(nested) = field.nested() {
                    collect_paths(nested, &path, None, out);
                }
            }
        }
    }
}

/// Append `name` to a dotted path. The root path is empty.
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{prefix}.{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_schema() -> Option<&'static RecordSchema> {
        None
    }

    fn inner_schema() -> Option<&'static RecordSchema> {
        Some(&INNER)
    }

    static INNER: RecordSchema = RecordSchema {
        name: "Inner",
        fields: &[
            FieldDef {
                name: "Host",
                tags: &[],
                schema: no_schema,
            },
            FieldDef {
                name: "Port",
                tags: &[Tag {
                    key: "restart",
                    value: "false",
                }],
                schema: no_schema,
            },
        ],
        redact: None,
    };

    static OUTER: RecordSchema = RecordSchema {
        name: "Outer",
        fields: &[
            FieldDef {
                name: "Name",
                tags: &[Tag {
                    key: "access",
                    value: "site,write_restrictable",
                }],
                schema: no_schema,
            },
            FieldDef {
                name: "Inner",
                tags: &[Tag {
                    key: "restart",
                    value: "true",
                }],
                schema: inner_schema,
            },
        ],
        redact: None,
    };

    #[test]
    fn tag_lookup_and_substring_match() {
        let name = OUTER.field("Name").unwrap();
        assert_eq!(name.tag("access"), Some("site,write_restrictable"));
        assert!(name.matches("access", "write_restrictable"));
        assert!(!name.matches("access", "cloud"));
        assert!(!name.matches("restart", "true"));
    }

    #[test]
    fn lookup_descends_nested_records() {
        assert_eq!(OUTER.lookup("Inner.Port").unwrap().name, "Port");
        assert!(OUTER.lookup("Inner.Missing").is_none());
        assert!(OUTER.lookup("Name.Port").is_none());
    }

    #[test]
    fn paths_are_depth_first_in_declaration_order() {
        let paths: Vec<String> = OUTER.paths().into_iter().map(|(p, _)| p).collect();
        assert_eq!(paths, vec!["Name", "Inner", "Inner.Host", "Inner.Port"]);
    }

    #[test]
    fn scoped_paths_include_descendants_of_matched_records() {
        let paths: Vec<String> = OUTER
            .scoped_paths("restart", "true")
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        // Inner.Port is tagged restart=false but still comes along with Inner.
        assert_eq!(paths, vec!["Inner", "Inner.Host", "Inner.Port"]);
    }

    static ROOT: RecordSchema = RecordSchema {
        name: "Root",
        fields: &[FieldDef {
            name: "Outer",
            tags: &[],
            schema: outer_schema,
        }],
        redact: None,
    };

    fn outer_schema() -> Option<&'static RecordSchema> {
        Some(&OUTER)
    }

    #[test]
    fn scoped_paths_walk_through_untagged_sections() {
        let paths: Vec<String> = ROOT
            .scoped_paths("restart", "true")
            .into_iter()
            .map(|(p, _)| p)
            .collect();
        assert_eq!(paths, vec!["Outer.Inner", "Outer.Inner.Host", "Outer.Inner.Port"]);
    }

    #[test]
    fn join_path_has_no_leading_separator() {
        assert_eq!(join_path("", "A"), "A");
        assert_eq!(join_path("A", "B"), "A.B");
    }
}
