use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::redaction::{SupportsRedaction, FAKE_SETTING};
use crate::schema::{FieldDef, RecordSchema};
use crate::value::Value;

/// A record-kind value: a schema and one value per field, in schema order.
#[derive(Clone, Debug)]
pub struct Record {
    schema: &'static RecordSchema,
    fields: Vec<Value>,
}

impl Record {
    /// Build a record. `fields` must follow the schema's declaration order.
    pub fn new(schema: &'static RecordSchema, fields: Vec<Value>) -> Self {
        Self { schema, fields }
    }

    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }

    /// The schema's type name.
    pub fn name(&self) -> &'static str {
        self.schema.name
    }

    pub fn fields(&self) -> &[Value] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field definitions paired with their values.
    pub fn entries(&self) -> impl Iterator<Item = (&FieldDef, &Value)> {
        self.schema.fields.iter().zip(self.fields.iter())
    }

    /// A record is zero when every field is zero.
    pub fn is_zero(&self) -> bool {
        self.fields.iter().all(Value::is_zero)
    }

    pub fn get(&self, label: &str) -> Option<&Value> {
        let idx = self.index_of(label)?;
        self.fields.get(idx)
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Value> {
        let idx = self.index_of(label)?;
        self.fields.get_mut(idx)
    }

    /// Look up a value by dotted path, seeing through optional records.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        match path.split_once('.') {
            None => self.get(path),
            Some((head, rest)) => self.get(head)?.as_record()?.get_path(rest),
        }
    }

    /// Replace the value at `path` with [`FAKE_SETTING`].
    ///
    /// Zero values are left alone so an unset secret stays visibly unset.
    /// An optional wrapper is kept. Returns `true` if a value was replaced.
    pub fn mask(&mut self, path: &str) -> bool {
        match path.split_once('.') {
            Some((head, rest)) => match self.get_mut(head).and_then(Value::as_record_mut) {
                Some(nested) => nested.mask(rest),
                None => false,
            },
            None => {
                let Some(slot) = self.get_mut(path) else {
                    return false;
                };
                if slot.is_zero() {
                    return false;
                }
                let masked = Value::String(FAKE_SETTING.to_string());
                match slot {
                    Value::Optional(Some(inner)) => **inner = masked,
                    other => *other = masked,
                }
                true
            }
        }
    }

    fn index_of(&self, label: &str) -> Option<usize> {
        self.schema.fields.iter().position(|f| f.name == label)
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.schema.name == other.schema.name && self.fields == other.fields
    }
}

/// Serializes as an object keyed by field label, in declaration order.
impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (def, value) in self.entries() {
            map.serialize_entry(def.name, value)?;
        }
        map.end()
    }
}

impl SupportsRedaction for Record {
    fn redact(&mut self) {
        if let Some(hook) = self.schema.redact {
            hook(self);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::Tag;

    fn no_schema() -> Option<&'static RecordSchema> {
        None
    }

    fn creds_schema() -> Option<&'static RecordSchema> {
        Some(&CREDS)
    }

    static CREDS: RecordSchema = RecordSchema {
        name: "Creds",
        fields: &[
            FieldDef {
                name: "User",
                tags: &[],
                schema: no_schema,
            },
            FieldDef {
                name: "Password",
                tags: &[],
                schema: no_schema,
            },
        ],
        redact: None,
    };

    fn hide_password(record: &mut Record) {
        record.mask("Creds.Password");
    }

    static SERVICE: RecordSchema = RecordSchema {
        name: "Service",
        fields: &[
            FieldDef {
                name: "Name",
                tags: &[Tag {
                    key: "restart",
                    value: "true",
                }],
                schema: no_schema,
            },
            FieldDef {
                name: "Creds",
                tags: &[],
                schema: creds_schema,
            },
        ],
        redact: Some(hide_password),
    };

    fn service(name: &str, password: Option<&str>) -> Record {
        let creds = Record::new(
            &CREDS,
            vec![
                Value::from("admin"),
                password.map_or(Value::absent(), |p| Value::present(p)),
            ],
        );
        Record::new(&SERVICE, vec![Value::from(name), Value::present(creds)])
    }

    #[test]
    fn get_path_sees_through_optional_records() {
        let svc = service("api", Some("hunter2"));
        assert_eq!(svc.get_path("Creds.User"), Some(&Value::from("admin")));
        assert_eq!(svc.get_path("Creds.Password"), Some(&Value::present("hunter2")));
        assert!(svc.get_path("Name.User").is_none());
    }

    #[test]
    fn mask_keeps_optional_wrapper() {
        let mut svc = service("api", Some("hunter2"));
        assert!(svc.mask("Creds.Password"));
        assert_eq!(svc.get_path("Creds.Password"), Some(&Value::present(FAKE_SETTING)));
    }

    #[test]
    fn mask_skips_unset_values() {
        let mut svc = service("api", None);
        assert!(!svc.mask("Creds.Password"));
        assert_eq!(svc.get_path("Creds.Password"), Some(&Value::absent()));
        assert!(!svc.mask("Creds.Missing"));
    }

    #[test]
    fn redact_runs_schema_hook() {
        let mut svc = service("api", Some("hunter2"));
        svc.redact();
        assert_eq!(svc.get_path("Creds.Password").and_then(Value::as_str), Some(FAKE_SETTING));
        assert_eq!(svc.get("Name"), Some(&Value::from("api")));
    }

    #[test]
    fn zero_record_has_all_zero_fields() {
        let zero = Record::new(&CREDS, vec![Value::from(""), Value::absent()]);
        assert!(zero.is_zero());
        assert!(!service("", None).is_zero());
    }

    #[test]
    fn serializes_fields_in_declaration_order() {
        let svc = service("api", None);
        let json = serde_json::to_string(&svc).unwrap();
        assert_eq!(json, r#"{"Name":"api","Creds":{"User":"admin","Password":null}}"#);
    }
}
