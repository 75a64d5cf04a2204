//! Conversion of typed configuration nodes into [`Value`]s.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use crate::schema::RecordSchema;
use crate::value::Value;

/// A configuration node the diff engine can walk.
pub trait Diffable {
    /// Snapshot this node as a dynamic value.
    fn to_value(&self) -> Value;

    /// The record schema of this type, for record-kind nodes.
    fn record_schema() -> Option<&'static RecordSchema>
    where
        Self: Sized,
    {
        None
    }
}

/// A record type with a static schema, usable as a diff root.
///
/// Implemented by [`config_record!`](crate::config_record).
pub trait ConfigRecord: Diffable + Sized {
    fn schema() -> &'static RecordSchema;
}

macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl Diffable for $t {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }
        )*
    };
}

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl Diffable for $t {
                fn to_value(&self) -> Value {
                    Value::UInt(u64::from(*self))
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64);
impl_unsigned!(u8, u16, u32, u64);

impl Diffable for usize {
    fn to_value(&self) -> Value {
        Value::UInt(*self as u64)
    }
}

impl Diffable for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl Diffable for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl Diffable for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl Diffable for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl Diffable for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Diffable for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl<T: Diffable> Diffable for Option<T> {
    fn to_value(&self) -> Value {
        Value::Optional(self.as_ref().map(|v| Box::new(v.to_value())))
    }

    fn record_schema() -> Option<&'static RecordSchema> {
        T::record_schema()
    }
}

impl<T: Diffable> Diffable for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Diffable::to_value).collect())
    }
}

impl<T: Diffable> Diffable for BTreeMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

impl<T: Diffable, S: BuildHasher> Diffable for HashMap<String, T, S> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.iter()
                .map(|(k, v)| (k.clone(), v.to_value()))
                .collect(),
        )
    }
}

/// Free-form JSON, as found in plugin settings. `null` is an absent optional.
impl Diffable for serde_json::Value {
    fn to_value(&self) -> Value {
        match self {
            serde_json::Value::Null => Value::absent(),
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::UInt(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or_default())
                }
            }
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::List(items.iter().map(Diffable::to_value).collect())
            }
            serde_json::Value::Object(entries) => Value::Map(
                entries
                    .iter()
                    .map(|(k, v)| (k.clone(), v.to_value()))
                    .collect(),
            ),
        }
    }
}

impl Diffable for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn primitives_map_to_their_variants() {
        assert_eq!(42i32.to_value(), Value::Int(42));
        assert_eq!(7u16.to_value(), Value::UInt(7));
        assert_eq!(3usize.to_value(), Value::UInt(3));
        assert_eq!(true.to_value(), Value::Bool(true));
        assert_eq!(1.5f64.to_value(), Value::Float(1.5));
        assert_eq!("abc".to_value(), Value::from("abc"));
    }

    #[test]
    fn option_becomes_optional() {
        assert_eq!(None::<String>.to_value(), Value::absent());
        assert_eq!(Some(5u32).to_value(), Value::present(5u64));
        assert!(<Option<String> as Diffable>::record_schema().is_none());
    }

    #[test]
    fn hash_map_is_key_ordered() {
        let mut m = HashMap::new();
        m.insert("z".to_string(), 1i64);
        m.insert("a".to_string(), 2i64);
        let Value::Map(entries) = m.to_value() else {
            panic!("expected map");
        };
        let keys: Vec<&String> = entries.keys().collect();
        assert_eq!(keys, vec!["a", "z"]);
    }

    #[test]
    fn json_null_is_absent() {
        let v = json!({"enabled": true, "token": null, "ratio": 0.5, "ids": [1, 2]});
        let Value::Map(entries) = v.to_value() else {
            panic!("expected map");
        };
        assert_eq!(entries["token"], Value::absent());
        assert_eq!(entries["enabled"], Value::Bool(true));
        assert_eq!(entries["ratio"], Value::Float(0.5));
        assert_eq!(entries["ids"], Value::List(vec![Value::Int(1), Value::Int(2)]));
    }

    proptest! {
        #[test]
        fn string_zero_iff_empty(s in ".{0,16}") {
            prop_assert_eq!(s.to_value().is_zero(), s.is_empty());
        }

        #[test]
        fn vec_display_matches_serde_json(items in prop::collection::vec(any::<i64>(), 0..8)) {
            let expected = serde_json::to_string(&items).unwrap();
            prop_assert_eq!(items.to_value().to_string(), expected);
        }
    }
}
