//! Error types for internationalization operations

use thiserror::Error;

/// Errors that can occur while loading translation catalogs.
///
/// Missing keys and unsupported locales are not errors; lookups degrade to
/// the raw key or the default locale instead.
#[derive(Error, Debug)]
pub enum I18nError {
    /// The default locale's catalog does not exist, so nothing can be served
    #[error("Translation catalog not found for {locale}: {path}")]
    CatalogNotFound { locale: String, path: String },

    /// A catalog exists but is not valid JSON
    #[error("Failed to parse translation catalog for {locale}: {source}")]
    CatalogParse {
        locale: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error occurred while reading a catalog
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for i18n operations
pub type I18nResult<T> = Result<T, I18nError>;

impl From<I18nError> for lh_common::LhError {
    fn from(err: I18nError) -> Self {
        let locale = match &err {
            I18nError::CatalogNotFound { locale, .. } | I18nError::CatalogParse { locale, .. } => {
                Some(locale.clone())
            }
            I18nError::Io(_) => None,
        };
        Self::localization_with_locale("Translations unavailable", locale, err)
    }
}
