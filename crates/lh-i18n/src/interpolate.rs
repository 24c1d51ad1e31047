//! Named placeholder substitution
//!
//! Templates use `{name}` placeholders and `{{` / `}}` for literal braces.
//! Substitution is all-or-nothing: if a placeholder has no argument or the
//! template is malformed, the caller keeps the template as it was.
//! Conversions and format specs (`{count!r}`, `{count:>4}`) are not
//! supported and count as malformed.

use std::collections::HashMap;
use std::fmt::Display;

/// Values for named placeholders
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranslationArgs {
    values: HashMap<String, String>,
}

impl TranslationArgs {
    /// Create an empty argument set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an argument, builder style
    pub fn set<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Display,
    {
        self.insert(key, value);
        self
    }

    /// Add or replace an argument
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Display,
    {
        self.values.insert(key.into(), value.to_string());
    }

    /// Get the rendered value of an argument
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Whether no arguments were supplied
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Build [`TranslationArgs`] from `key => value` pairs
///
/// ```rust
/// use lh_i18n::translation_args;
///
/// let args = translation_args!["min" => 8, "field" => "password"];
/// assert_eq!(args.get("min"), Some("8"));
/// ```
#[macro_export]
macro_rules! translation_args {
    () => {
        $crate::TranslationArgs::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut args = $crate::TranslationArgs::new();
        $(
            args.insert($key, $value);
        )+
        args
    }};
}

/// Substitute `{name}` placeholders in `template`.
///
/// Returns `None` when a placeholder has no matching argument, carries a
/// conversion or format spec, or when the braces do not balance.
pub fn interpolate(template: &str, args: &TranslationArgs) -> Option<String> {
    let mut output = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                output.push('{');
            }
            '{' => {
                let mut field = String::new();
                loop {
                    match chars.next()? {
                        '}' => break,
                        '{' => return None,
                        other => field.push(other),
                    }
                }
                if field.contains([':', '!']) {
                    return None;
                }
                output.push_str(args.get(&field)?);
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                output.push('}');
            }
            '}' => return None,
            other => output.push(other),
        }
    }

    Some(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitutes_every_occurrence() {
        let args = translation_args!["min" => 8];
        assert_eq!(
            interpolate("At least {min} characters ({min})", &args).as_deref(),
            Some("At least 8 characters (8)")
        );
    }

    #[test]
    fn test_extra_arguments_are_ignored() {
        let args = TranslationArgs::new().set("name", "Ana").set("unused", 1);
        assert_eq!(interpolate("Hi {name}", &args).as_deref(), Some("Hi Ana"));
    }

    #[test]
    fn test_missing_argument_aborts() {
        let args = translation_args!["min" => 8];
        assert_eq!(interpolate("Between {min} and {max}", &args), None);
    }

    #[test]
    fn test_escaped_braces() {
        let args = translation_args!["name" => "x"];
        assert_eq!(
            interpolate("{{literal}} {name} }}", &args).as_deref(),
            Some("{literal} x }")
        );
    }

    #[test]
    fn test_malformed_templates() {
        let args = translation_args!["a" => 1];
        assert_eq!(interpolate("open {a", &args), None);
        assert_eq!(interpolate("stray } brace", &args), None);
        assert_eq!(interpolate("nested {a{b}}", &args), None);
        assert_eq!(interpolate("positional {}", &args), None);
    }

    #[test]
    fn test_format_spec_is_rejected() {
        let args = translation_args!["count" => 3];
        assert_eq!(interpolate("{count:>4} items", &args), None);
        assert_eq!(interpolate("{count!r} items", &args), None);
        assert_eq!(interpolate("{count} items", &args).as_deref(), Some("3 items"));
    }

    #[test]
    fn test_empty_macro() {
        assert!(translation_args![].is_empty());
    }
}
