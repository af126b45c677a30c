//! Message templating
//!
//! Rule messages may contain `:token` placeholders (`"Must be at most :max
//! characters"`). They are substituted once, when the rule is built, from
//! the rule's configuration.
//!
//! Substitution is a single left-to-right pass: a token is a `:` followed by
//! the longest run of ASCII letters, digits or `_`. Known tokens are
//! replaced, unknown ones are kept verbatim, and replaced text is never
//! scanned again, so the result does not depend on parameter order.

use std::borrow::Cow;
use std::fmt;

/// Ordered token → value mapping used to render a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageParams {
    params: Vec<(Cow<'static, str>, String)>,
}

impl MessageParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing an earlier one with the same key.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(mut self, key: impl Into<Cow<'static, str>>, value: impl fmt::Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Adds a parameter in place, replacing an earlier one with the same key.
    pub fn insert(&mut self, key: impl Into<Cow<'static, str>>, value: impl fmt::Display) {
        let key = key.into();
        let value = value.to_string();
        match self.params.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }
}

fn is_token_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Renders a message template.
///
/// # Examples
///
/// ```
/// use verity_validator::template::{MessageParams, render};
///
/// let params = MessageParams::new().with("max", 10);
/// assert_eq!(
///     render("Too long, must be :max characters or less", &params),
///     "Too long, must be 10 characters or less"
/// );
/// ```
#[must_use]
pub fn render(template: &str, params: &MessageParams) -> String {
    if params.is_empty() || !template.contains(':') {
        return template.to_owned();
    }

    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(':') {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + 1..];
        let token_len = after
            .char_indices()
            .find(|&(_, c)| !is_token_char(c))
            .map_or(after.len(), |(i, _)| i);
        let token = &after[..token_len];

        match params.get(token) {
            Some(value) if !token.is_empty() => out.push_str(value),
            _ => {
                out.push(':');
                out.push_str(token);
            }
        }
        rest = &after[token_len..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_every_occurrence() {
        let params = MessageParams::new().with("min", 1).with("max", 10);
        assert_eq!(
            render(":min..:max (at least :min)", &params),
            "1..10 (at least 1)"
        );
    }

    #[test]
    fn longest_token_wins() {
        let params = MessageParams::new().with("max", 10).with("maxLength", 99);
        assert_eq!(render(":maxLength / :max", &params), "99 / 10");
    }

    #[test]
    fn unknown_tokens_are_kept() {
        let params = MessageParams::new().with("max", 3);
        assert_eq!(render("at :time, max :max", &params), "at :time, max 3");
    }

    #[test]
    fn no_recursive_expansion() {
        let params = MessageParams::new().with("a", ":b").with("b", "boom");
        assert_eq!(render("value :a", &params), "value :b");
    }

    #[test]
    fn lone_and_trailing_colons_survive() {
        let params = MessageParams::new().with("x", 1);
        assert_eq!(render("ratio: :x:", &params), "ratio: 1:");
    }

    #[test]
    fn numbers_render_without_trailing_zero() {
        let params = MessageParams::new().with("max", 10.0_f64).with("step", 2.5_f64);
        assert_eq!(render(":max by :step", &params), "10 by 2.5");
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut params = MessageParams::new().with("max", 1);
        params.insert("max", 2);
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("max"), Some("2"));
    }
}
