use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::record::Record;
use crate::redaction::SupportsRedaction;

/// A dynamically-typed slot holding any leaf or subtree of a configuration.
///
/// The variant set is closed: every configuration node converts into one of
/// these shapes through [`Diffable`](crate::Diffable), so comparison and
/// redaction can match exhaustively.
///
/// Equality is structural. Floats compare by IEEE 754 rules, so a `NaN` leaf
/// never equals itself and always shows up as a change.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
    /// Ordered sequence. Compared as a whole, never element by element.
    List(Vec<Value>),
    /// String-keyed map. Compared as a whole, never entry by entry.
    Map(BTreeMap<String, Value>),
    /// A nested configuration record.
    Record(Record),
    /// One level of indirection marking optional presence.
    Optional(Option<Box<Value>>),
}

/// The shape of a [`Value`], used to check that two operands line up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    Bool,
    Int,
    UInt,
    Float,
    String,
    List,
    Map,
    /// A record of the named schema.
    Record(&'static str),
    Optional,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Bool => write!(f, "bool"),
            Kind::Int => write!(f, "int"),
            Kind::UInt => write!(f, "uint"),
            Kind::Float => write!(f, "float"),
            Kind::String => write!(f, "string"),
            Kind::List => write!(f, "list"),
            Kind::Map => write!(f, "map"),
            Kind::Record(name) => write!(f, "record {name}"),
            Kind::Optional => write!(f, "optional"),
        }
    }
}

impl Value {
    /// An absent optional value.
    pub const fn absent() -> Self {
        Value::Optional(None)
    }

    /// A present optional wrapping `value`.
    pub fn present(value: impl Into<Value>) -> Self {
        Value::Optional(Some(Box::new(value.into())))
    }

    /// The shape of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Int(_) => Kind::Int,
            Value::UInt(_) => Kind::UInt,
            Value::Float(_) => Kind::Float,
            Value::String(_) => Kind::String,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Record(r) => Kind::Record(r.name()),
            Value::Optional(_) => Kind::Optional,
        }
    }

    /// Returns `true` if this is the natural empty value for its shape.
    ///
    /// A present optional is never zero, even when it wraps a zero value.
    /// Only `+0.0` is a zero float; `-0.0` and `NaN` are not.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Bool(b) => !*b,
            Value::Int(n) => *n == 0,
            Value::UInt(n) => *n == 0,
            Value::Float(n) => n.to_bits() == 0,
            Value::String(s) => s.is_empty(),
            Value::List(items) => items.is_empty(),
            Value::Map(entries) => entries.is_empty(),
            Value::Record(r) => r.is_zero(),
            Value::Optional(inner) => inner.is_none(),
        }
    }

    /// Strip one level of optional indirection, if present.
    pub fn deref_optional(&self) -> &Value {
        match self {
            Value::Optional(Some(inner)) => inner,
            other => other,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self.deref_optional() {
            Value::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_record_mut(&mut self) -> Option<&mut Record> {
        match self {
            Value::Record(r) => Some(r),
            Value::Optional(Some(inner)) => match inner.as_mut() {
                Value::Record(r) => Some(r),
                _ => None,
            },
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self.deref_optional() {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The value's own redaction capability, if its schema declares one.
    pub fn as_redactable_mut(&mut self) -> Option<&mut dyn SupportsRedaction> {
        match self {
            Value::Record(r) if r.schema().redact.is_some() => Some(r),
            Value::Optional(Some(inner)) => inner.as_redactable_mut(),
            _ => None,
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(n) => serializer.serialize_i64(*n),
            Value::UInt(n) => serializer.serialize_u64(*n),
            Value::Float(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Map(entries) => entries.serialize(serializer),
            Value::Record(r) => r.serialize(serializer),
            Value::Optional(None) => serializer.serialize_none(),
            Value::Optional(Some(inner)) => serializer.serialize_some(&**inner),
        }
    }
}

/// Renders the compact JSON form.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::UInt(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Record> for Value {
    fn from(r: Record) -> Self {
        Value::Record(r)
    }
}
