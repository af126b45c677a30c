//! Value normalization
//!
//! Turns a [`RawValue`] into its canonical [`NormalizedValue`]. The
//! normalizer is total: malformed input degrades (a number that cannot be
//! read becomes NaN) instead of failing, since catching bad input is the job
//! of the rules that run afterwards.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::foundation::{FileBlob, NormalizedValue, RawValue};

// ============================================================================
// HOST ENVIRONMENT
// ============================================================================

/// Capabilities of the environment the raw values come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostEnvironment {
    /// Whether the host exposes binary uploads as a distinct value kind.
    ///
    /// When `false`, [`RawValue::File`] is treated as a plain object.
    pub supports_files: bool,
}

impl HostEnvironment {
    /// A host with a file/blob abstraction (e.g. multipart form handling).
    #[must_use]
    pub const fn with_files() -> Self {
        Self {
            supports_files: true,
        }
    }

    /// A host without one.
    #[must_use]
    pub const fn without_files() -> Self {
        Self {
            supports_files: false,
        }
    }
}

impl Default for HostEnvironment {
    fn default() -> Self {
        Self::with_files()
    }
}

// ============================================================================
// NORMALIZER
// ============================================================================

/// Converts raw values into normalized values for a given host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Normalizer {
    host: HostEnvironment,
}

impl Normalizer {
    #[must_use]
    pub const fn new(host: HostEnvironment) -> Self {
        Self { host }
    }

    #[must_use]
    pub const fn host(&self) -> HostEnvironment {
        self.host
    }

    /// Normalizes one value.
    ///
    /// # Examples
    ///
    /// ```
    /// use verity_validator::foundation::{NormalizedValue, RawValue};
    /// use verity_validator::normalize::Normalizer;
    ///
    /// let normalizer = Normalizer::default();
    /// assert_eq!(
    ///     normalizer.normalize(&RawValue::from("  hello ")),
    ///     NormalizedValue::String("hello".into())
    /// );
    /// assert_eq!(normalizer.normalize(&RawValue::Undefined), NormalizedValue::Nullish);
    /// ```
    #[must_use]
    pub fn normalize(&self, raw: &RawValue) -> NormalizedValue {
        match raw {
            RawValue::Undefined | RawValue::Null => NormalizedValue::Nullish,
            RawValue::String(s) => NormalizedValue::String(s.trim().to_owned()),
            RawValue::Number(n) => NormalizedValue::Number(*n),
            RawValue::Bool(b) => NormalizedValue::Boolean(*b),
            RawValue::Array(items) => NormalizedValue::Array(items.clone()),
            RawValue::File(blob) if self.host.supports_files => {
                NormalizedValue::File(blob.clone())
            }
            RawValue::File(blob) => NormalizedValue::Object(blob_as_object(blob)),
            RawValue::Object(map) => NormalizedValue::Object(map.clone()),
        }
    }
}

fn blob_as_object(blob: &FileBlob) -> IndexMap<String, RawValue> {
    let mut map = IndexMap::with_capacity(3);
    map.insert("name".to_owned(), RawValue::String(blob.name.clone()));
    map.insert("size".to_owned(), RawValue::Number(blob.size as f64));
    map.insert(
        "type".to_owned(),
        blob.content_type.clone().map_or(RawValue::Null, RawValue::String),
    );
    map
}

/// Normalizes a value for the default host (files supported).
#[must_use]
pub fn normalize(raw: &RawValue) -> NormalizedValue {
    Normalizer::default().normalize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::TypeTag;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn strings_are_trimmed() {
        assert_eq!(
            normalize(&"\t James \n".into()),
            NormalizedValue::String("James".into())
        );
    }

    #[test]
    fn absent_and_null_collapse_to_nullish() {
        assert_eq!(normalize(&RawValue::Undefined), NormalizedValue::Nullish);
        assert_eq!(normalize(&RawValue::Null), NormalizedValue::Nullish);
        assert_eq!(normalize(&json!(null).into()), NormalizedValue::Nullish);
    }

    #[test]
    fn nan_is_kept_not_rejected() {
        let value = normalize(&RawValue::Number(f64::NAN));
        assert_eq!(value.type_tag(), TypeTag::Number);
        assert!(value.as_number().is_some_and(f64::is_nan));
    }

    #[test]
    fn arrays_and_objects_keep_their_shape() {
        let array = normalize(&json!([1, "two"]).into());
        assert_eq!(array.type_tag(), TypeTag::Array);

        let object = normalize(&json!({ "a": 1 }).into());
        assert_eq!(object.type_tag(), TypeTag::Object);
    }

    #[test]
    fn booleans_keep_their_tag() {
        assert_eq!(normalize(&true.into()), NormalizedValue::Boolean(true));
    }

    #[test]
    fn files_depend_on_host_capability() {
        let blob = FileBlob::new("avatar.png", 512).with_content_type("image/png");

        let with_files = Normalizer::new(HostEnvironment::with_files());
        assert_eq!(
            with_files.normalize(&blob.clone().into()).type_tag(),
            TypeTag::File
        );

        let without_files = Normalizer::new(HostEnvironment::without_files());
        let NormalizedValue::Object(map) = without_files.normalize(&blob.into()) else {
            panic!("expected object");
        };
        assert_eq!(map["size"], RawValue::Number(512.0));
        assert_eq!(map["type"], RawValue::String("image/png".into()));
    }

    #[test]
    fn host_environment_deserializes_with_defaults() {
        let host: HostEnvironment = serde_json::from_str("{}").unwrap();
        assert!(host.supports_files);

        let host: HostEnvironment =
            serde_json::from_str(r#"{ "supports_files": false }"#).unwrap();
        assert!(!host.supports_files);
    }
}
