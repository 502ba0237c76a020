//! Core types: tri-state values and the semantic field types the marshaller understands.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Keyed multi-valued association, e.g. resource labels.
///
/// A `BTreeMap` keeps the JSON encoding stable (keys sorted).
pub type MultiValued = BTreeMap<String, Vec<String>>;

/// A scalar as tracked by the declarative host: not yet resolved, explicitly
/// absent, or present with a value (which may be empty).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Value<T> {
    /// Not known until the remote side has been consulted
    Unknown,
    /// Explicitly absent
    #[default]
    Null,
    /// Present, possibly with an empty value
    Known(T),
}

impl<T> Value<T> {
    /// Create a present value
    pub fn known(value: T) -> Self {
        Self::Known(value)
    }

    /// Check if the value is unknown
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the value if present
    pub fn as_known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            Self::Unknown | Self::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Known)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Self::Known(value.to_string())
    }
}

// Documents cannot express "unknown": a missing or null entry is Null.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Value<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

impl<T: Serialize> Serialize for Value<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Known(value) => serializer.serialize_some(value),
            Self::Unknown | Self::Null => serializer.serialize_none(),
        }
    }
}

/// Semantic type of a tagged field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    OptionalString,
    OptionalBool,
    Bool,
    String,
    NullableString,
    MultiValued,
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::OptionalString => write!(f, "optional string"),
            FieldKind::OptionalBool => write!(f, "optional bool"),
            FieldKind::Bool => write!(f, "bool"),
            FieldKind::String => write!(f, "string"),
            FieldKind::NullableString => write!(f, "nullable string"),
            FieldKind::MultiValued => write!(f, "multi-valued map"),
            FieldKind::Unsupported(type_name) => write!(f, "{type_name}"),
        }
    }
}

/// A borrowed view of one field, tagged with its semantic type.
#[derive(Debug, Clone, Copy)]
pub enum FieldRef<'a> {
    OptionalString(&'a Value<String>),
    OptionalBool(&'a Value<bool>),
    Bool(bool),
    String(&'a str),
    NullableString(Option<&'a str>),
    MultiValued(Option<&'a MultiValued>),
    /// A field whose Rust type has no parameter rendering
    Unsupported(&'static str),
}

impl FieldRef<'_> {
    /// The semantic type of this field
    pub const fn kind(&self) -> FieldKind {
        match *self {
            FieldRef::OptionalString(_) => FieldKind::OptionalString,
            FieldRef::OptionalBool(_) => FieldKind::OptionalBool,
            FieldRef::Bool(_) => FieldKind::Bool,
            FieldRef::String(_) => FieldKind::String,
            FieldRef::NullableString(_) => FieldKind::NullableString,
            FieldRef::MultiValued(_) => FieldKind::MultiValued,
            FieldRef::Unsupported(type_name) => FieldKind::Unsupported(type_name),
        }
    }
}

/// Types that can appear in a field-descriptor table.
pub trait ParamField {
    /// Borrow this field as a tagged view
    fn field_ref(&self) -> FieldRef<'_>;
}

impl ParamField for Value<String> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::OptionalString(self)
    }
}

impl ParamField for Value<bool> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::OptionalBool(self)
    }
}

impl ParamField for bool {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::Bool(*self)
    }
}

impl ParamField for String {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::String(self)
    }
}

impl ParamField for Option<String> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::NullableString(self.as_deref())
    }
}

impl ParamField for Option<MultiValued> {
    fn field_ref(&self) -> FieldRef<'_> {
        FieldRef::MultiValued(self.as_ref())
    }
}

/// Declare types that may be tagged but have no rendering yet.
macro_rules! unsupported_fields {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ParamField for $ty {
                fn field_ref(&self) -> FieldRef<'_> {
                    FieldRef::Unsupported(std::any::type_name::<$ty>())
                }
            }
        )*
    };
}

unsupported_fields!(
    i32,
    i64,
    u32,
    u64,
    f64,
    Option<bool>,
    Vec<String>,
    Value<i64>,
);
