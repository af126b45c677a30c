//! Size semantics shared by the size-based rules
//!
//! The "size" of a normalized value depends on its kind:
//!
//! | kind    | size                        |
//! |---------|-----------------------------|
//! | string  | character count             |
//! | number  | the number itself           |
//! | array   | element count               |
//! | file    | byte size                   |
//! | other   | `0`                         |
//!
//! A number "of size N" therefore means its value is N, not that it has N
//! digits. These helpers are public so custom rules can follow the same
//! optionality convention as the built-ins.

use crate::foundation::NormalizedValue;

/// Returns the size of a value.
///
/// # Examples
///
/// ```
/// use verity_validator::foundation::NormalizedValue;
/// use verity_validator::size::size_of;
///
/// assert_eq!(size_of(&NormalizedValue::String("James".into())), 5.0);
/// assert_eq!(size_of(&NormalizedValue::Number(42.0)), 42.0);
/// assert_eq!(size_of(&NormalizedValue::Nullish), 0.0);
/// ```
#[must_use]
pub fn size_of(value: &NormalizedValue) -> f64 {
    match value {
        NormalizedValue::String(s) => s.chars().count() as f64,
        NormalizedValue::Number(n) => *n,
        NormalizedValue::Array(items) => items.len() as f64,
        NormalizedValue::File(blob) => blob.size as f64,
        NormalizedValue::Boolean(_) | NormalizedValue::Object(_) | NormalizedValue::Nullish => 0.0,
    }
}

/// Returns `true` if `min <= size <= max`.
///
/// Both bounds are inclusive. A NaN size or bound never satisfies the check.
#[must_use]
pub fn size_within(value: &NormalizedValue, min: f64, max: f64) -> bool {
    let size = size_of(value);
    size >= min && size <= max
}

/// Returns `true` if the value's size is exactly zero.
///
/// Size and format rules pass such values without looking further, which
/// makes them implicitly optional; only `required` rejects them.
#[must_use]
pub fn is_effectively_empty(value: &NormalizedValue) -> bool {
    size_of(value) == 0.0
}

/// Returns `true` for kinds with a meaningful size.
#[must_use]
pub fn is_sized(value: &NormalizedValue) -> bool {
    matches!(
        value,
        NormalizedValue::String(_)
            | NormalizedValue::Number(_)
            | NormalizedValue::Array(_)
            | NormalizedValue::File(_)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FileBlob, RawValue};
    use indexmap::IndexMap;

    #[test]
    fn string_size_counts_chars_not_bytes() {
        assert_eq!(size_of(&NormalizedValue::String("héllo".into())), 5.0);
    }

    #[test]
    fn array_and_file_sizes() {
        let array = NormalizedValue::Array(vec![RawValue::Null, RawValue::Bool(true)]);
        assert_eq!(size_of(&array), 2.0);

        let file = NormalizedValue::File(FileBlob::new("a.bin", 1024));
        assert_eq!(size_of(&file), 1024.0);
    }

    #[test]
    fn unsized_kinds_are_zero() {
        assert_eq!(size_of(&NormalizedValue::Boolean(true)), 0.0);
        assert_eq!(size_of(&NormalizedValue::Object(IndexMap::new())), 0.0);
        assert!(!is_sized(&NormalizedValue::Boolean(true)));
        assert!(is_sized(&NormalizedValue::Number(0.0)));
    }

    #[test]
    fn within_is_inclusive_on_both_ends() {
        let five = NormalizedValue::Number(5.0);
        assert!(size_within(&five, 5.0, 5.0));
        assert!(size_within(&five, 1.0, 10.0));
        assert!(!size_within(&five, 6.0, 10.0));
    }

    #[test]
    fn nan_never_fits() {
        let nan = NormalizedValue::Number(f64::NAN);
        assert!(!size_within(&nan, f64::MIN, f64::MAX));
        assert!(!is_effectively_empty(&nan));
    }

    #[test]
    fn empty_string_is_effectively_empty() {
        assert!(is_effectively_empty(&NormalizedValue::String(String::new())));
        assert!(is_effectively_empty(&NormalizedValue::Nullish));
    }
}
