//! Canonical, tagged values produced by the normalizer.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::{FileBlob, RawValue};

// ============================================================================
// TYPE TAG
// ============================================================================

/// The category a normalized value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    String,
    Number,
    Boolean,
    Array,
    Object,
    File,
    Nullish,
}

impl TypeTag {
    /// Canonical lowercase name, as exposed in serialized output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::File => "file",
            Self::Nullish => "nullish",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// NORMALIZED VALUE
// ============================================================================

/// A value in canonical shape, ready for rule evaluation.
///
/// Strings are trimmed, numbers are plain `f64` (NaN allowed), and both
/// absent and explicit-null inputs collapse into [`NormalizedValue::Nullish`].
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedValue {
    String(String),
    Number(f64),
    Boolean(bool),
    Array(Vec<RawValue>),
    Object(IndexMap<String, RawValue>),
    File(FileBlob),
    Nullish,
}

impl NormalizedValue {
    /// Returns the tag of this value.
    #[must_use]
    pub const fn type_tag(&self) -> TypeTag {
        match self {
            Self::String(_) => TypeTag::String,
            Self::Number(_) => TypeTag::Number,
            Self::Boolean(_) => TypeTag::Boolean,
            Self::Array(_) => TypeTag::Array,
            Self::Object(_) => TypeTag::Object,
            Self::File(_) => TypeTag::File,
            Self::Nullish => TypeTag::Nullish,
        }
    }

    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Nullish)
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Textual form used by pattern rules.
    ///
    /// Strings are returned as-is, numbers and booleans are rendered. Other
    /// shapes have no textual form. The built-in pattern rules pass booleans
    /// before asking, since a boolean has size zero; custom rules may still
    /// match against `"true"` / `"false"`.
    #[must_use]
    pub fn text_form(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::String(s) => Some(Cow::Borrowed(s)),
            Self::Number(n) => Some(Cow::Owned(n.to_string())),
            Self::Boolean(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
            _ => None,
        }
    }

    /// Converts back into a raw value, so normalization can be re-applied.
    #[must_use]
    pub fn to_raw(&self) -> RawValue {
        match self {
            Self::String(s) => RawValue::String(s.clone()),
            Self::Number(n) => RawValue::Number(*n),
            Self::Boolean(b) => RawValue::Bool(*b),
            Self::Array(items) => RawValue::Array(items.clone()),
            Self::Object(map) => RawValue::Object(map.clone()),
            Self::File(blob) => RawValue::File(blob.clone()),
            Self::Nullish => RawValue::Null,
        }
    }
}

/// Serializes as `{ "type": <tag>, "value": <value> }`.
impl Serialize for NormalizedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", self.type_tag().as_str())?;
        match self {
            Self::String(s) => map.serialize_entry("value", s)?,
            Self::Number(n) => map.serialize_entry("value", n)?,
            Self::Boolean(b) => map.serialize_entry("value", b)?,
            Self::Array(items) => map.serialize_entry("value", items)?,
            Self::Object(fields) => map.serialize_entry("value", fields)?,
            Self::File(blob) => map.serialize_entry("value", blob)?,
            Self::Nullish => map.serialize_entry("value", &())?,
        }
        map.end()
    }
}
