//! Raw input values handed to the validator by the host.
//!
//! [`RawValue`] is the closed set of shapes a form body or API payload can
//! take before normalization. Everything a host wants to validate is first
//! converted into one of these variants.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ============================================================================
// FILE BLOB
// ============================================================================

/// A binary upload as exposed by the host environment.
///
/// Only the metadata is carried; rule evaluation never looks at the bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileBlob {
    /// Original file name.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// MIME type, when the host knows it.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

impl FileBlob {
    /// Creates a blob description with no content type.
    pub fn new(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            content_type: None,
        }
    }

    /// Sets the MIME type.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

// ============================================================================
// RAW VALUE
// ============================================================================

/// A field value of unknown shape, prior to normalization.
///
/// `Undefined` models a key that is absent from the data snapshot; `Null`
/// models an explicit null. Both normalize to the same `nullish` value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Absent value.
    #[default]
    Undefined,
    /// Explicit null.
    Null,
    /// Boolean.
    Bool(bool),
    /// Floating-point number (may be NaN).
    Number(f64),
    /// Text, untrimmed.
    String(String),
    /// Ordered sequence.
    Array(Vec<RawValue>),
    /// Keyed structure, insertion ordered.
    Object(IndexMap<String, RawValue>),
    /// Binary upload.
    File(FileBlob),
}

impl RawValue {
    /// Returns `true` for `Undefined` and `Null`.
    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Undefined | Self::Null)
    }

    /// Short name of the variant, for logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Undefined => "undefined",
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::File(_) => "file",
        }
    }
}

/// Parses the textual form of a number, degrading to NaN instead of failing.
pub(crate) fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

// ============================================================================
// CONVERSIONS
// ============================================================================

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        Self::Number(f64::from(value))
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for RawValue {
                fn from(value: $ty) -> Self {
                    Self::Number(value as f64)
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl From<FileBlob> for RawValue {
    fn from(value: FileBlob) -> Self {
        Self::File(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(value: Vec<T>) -> Self {
        Self::Array(value.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, RawValue>> for RawValue {
    fn from(value: IndexMap<String, RawValue>) -> Self {
        Self::Object(value)
    }
}

impl From<serde_json::Value> for RawValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => Self::Number(parse_number(&n.to_string())),
            serde_json::Value::String(s) => Self::String(s),
            serde_json::Value::Array(items) => {
                Self::Array(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for RawValue {
    fn from(value: &serde_json::Value) -> Self {
        Self::from(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(RawValue::from(None::<String>), RawValue::Null);
        assert_eq!(
            RawValue::from(Some("x")),
            RawValue::String("x".to_owned())
        );
    }

    #[test]
    fn integers_become_numbers() {
        assert_eq!(RawValue::from(42_u8), RawValue::Number(42.0));
        assert_eq!(RawValue::from(-7_i64), RawValue::Number(-7.0));
    }

    #[test]
    fn json_conversion_preserves_shape() {
        let raw = RawValue::from(json!({
            "name": " Ada ",
            "tags": ["a", "b"],
            "age": 36,
            "admin": false,
            "nickname": null
        }));

        let RawValue::Object(map) = raw else {
            panic!("expected object");
        };
        assert_eq!(map["name"], RawValue::String(" Ada ".to_owned()));
        assert_eq!(map["age"], RawValue::Number(36.0));
        assert_eq!(map["admin"], RawValue::Bool(false));
        assert_eq!(map["nickname"], RawValue::Null);
        assert!(matches!(&map["tags"], RawValue::Array(items) if items.len() == 2));
    }

    #[test]
    fn json_fractional_numbers_parse_exactly() {
        assert_eq!(RawValue::from(json!(2.5)), RawValue::Number(2.5));
    }

    #[test]
    fn parse_number_degrades_to_nan() {
        assert!(parse_number("twelve").is_nan());
        assert_eq!(parse_number(" 12.5 "), 12.5);
    }

    #[test]
    fn nullish_detection() {
        assert!(RawValue::Undefined.is_nullish());
        assert!(RawValue::Null.is_nullish());
        assert!(!RawValue::from("").is_nullish());
    }

    #[test]
    fn file_blob_serializes_content_type_as_type() {
        let blob = FileBlob::new("cv.pdf", 2048).with_content_type("application/pdf");
        let value = serde_json::to_value(&blob).unwrap();
        assert_eq!(
            value,
            json!({ "name": "cv.pdf", "size": 2048, "type": "application/pdf" })
        );
    }
}
