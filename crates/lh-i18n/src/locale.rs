//! Supported locales

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported locales, in negotiation precedence order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    /// Brazilian Portuguese, the default locale
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    /// English
    #[serde(rename = "en")]
    En,
}

impl Locale {
    /// Get the language tag for this locale
    pub fn code(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::En => "en",
        }
    }

    /// Parse a locale from an exact, case-sensitive language tag
    pub fn from_code(code: &str) -> Option<Self> {
        Self::all().into_iter().find(|locale| locale.code() == code)
    }

    /// Parse a locale, substituting the default for unsupported tags
    pub fn coerce(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Get all supported locales in precedence order
    pub fn all() -> [Self; 2] {
        [Self::PtBr, Self::En]
    }

    /// Check whether this is the default locale
    pub fn is_default(self) -> bool {
        self == Self::default()
    }

    /// Get the display name for this locale
    pub fn display_name(self) -> &'static str {
        match self {
            Self::PtBr => "Português (Brasil)",
            Self::En => "English",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_portuguese() {
        assert_eq!(Locale::default(), Locale::PtBr);
        assert!(Locale::PtBr.is_default());
        assert!(!Locale::En.is_default());
    }

    #[test]
    fn test_from_code_is_exact() {
        assert_eq!(Locale::from_code("pt-BR"), Some(Locale::PtBr));
        assert_eq!(Locale::from_code("en"), Some(Locale::En));
        assert_eq!(Locale::from_code("en-US"), None);
        assert_eq!(Locale::from_code("pt-br"), None);
        assert_eq!(Locale::from_code(""), None);
    }

    #[test]
    fn test_coerce_unsupported() {
        assert_eq!(Locale::coerce("fr"), Locale::PtBr);
        assert_eq!(Locale::coerce("en"), Locale::En);
    }

    #[test]
    fn test_serde_uses_tags() {
        assert_eq!(serde_json::to_string(&Locale::PtBr).unwrap(), "\"pt-BR\"");
        let locale: Locale = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(locale, Locale::En);
        assert_eq!(Locale::En.to_string(), "en");
    }
}
