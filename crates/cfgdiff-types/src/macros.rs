/// Declare a configuration record type together with its static schema.
///
/// Each field is written as `name: Type => "Label" [key = "value", ...]`.
/// The label is the field's path segment and its serde name; the bracketed
/// tags are optional. The struct must derive `serde::Serialize` and/or
/// `serde::Deserialize`, since each field is given a `#[serde(rename)]`.
///
/// A leading `@redact path::to::hook;` registers the record's self-redaction
/// hook, which [`SupportsRedaction`](crate::SupportsRedaction) invokes.
///
/// ```
/// use cfgdiff_types::{config_record, ConfigRecord};
/// use serde::{Deserialize, Serialize};
///
/// config_record! {
///     #[derive(Clone, Debug, Default, Serialize, Deserialize)]
///     pub struct SqlSettings {
///         pub driver_name: Option<String> => "DriverName" [restart = "true"],
///         pub query_timeout: Option<u32> => "QueryTimeout",
///     }
/// }
///
/// let schema = SqlSettings::schema();
/// assert_eq!(schema.name, "SqlSettings");
/// assert_eq!(schema.fields[0].tag("restart"), Some("true"));
/// ```
#[macro_export]
macro_rules! config_record {
    (@redact $hook:path; $($rest:tt)*) => {
        $crate::config_record!(
            @emit [::core::option::Option::Some($hook as $crate::RedactFn)] $($rest)*
        );
    };
    (@emit [$redact:expr]
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $fvis:vis $field:ident : $ty:ty => $label:literal
                    $([ $($tag:ident = $tag_value:literal),* $(,)? ])?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$fmeta])*
                #[serde(rename = $label)]
                $fvis $field: $ty,
            )*
        }

        impl $crate::ConfigRecord for $name {
            fn schema() -> &'static $crate::RecordSchema {
                static SCHEMA: $crate::RecordSchema = $crate::RecordSchema {
                    name: ::core::stringify!($name),
                    fields: &[
                        $(
                            $crate::FieldDef {
                                name: $label,
                                tags: &[
                                    $($(
                                        $crate::Tag {
                                            key: ::core::stringify!($tag),
                                            value: $tag_value,
                                        },
                                    )*)?
                                ],
                                schema: <$ty as $crate::Diffable>::record_schema,
                            },
                        )*
                    ],
                    redact: $redact,
                };
                &SCHEMA
            }
        }

        impl $crate::Diffable for $name {
            fn to_value(&self) -> $crate::Value {
                $crate::Value::Record($crate::Record::new(
                    <Self as $crate::ConfigRecord>::schema(),
                    ::std::vec![$($crate::Diffable::to_value(&self.$field)),*],
                ))
            }

            fn record_schema() -> ::core::option::Option<&'static $crate::RecordSchema> {
                ::core::option::Option::Some(<Self as $crate::ConfigRecord>::schema())
            }
        }
    };
    ($($rest:tt)*) => {
        $crate::config_record!(@emit [::core::option::Option::None] $($rest)*);
    };
}
