//! Internationalization support for the LearnHouse API
//!
//! Translations live in one JSON catalog per locale
//! (`{locales_dir}/{locale}/messages.json`) and are addressed by dotted keys
//! such as `auth.incorrect_credentials`. This crate provides:
//!
//! - The closed set of supported locales
//! - Locale negotiation from `Accept-Language` / `X-Language` headers
//! - A load-once catalog cache with fallback to the default locale
//! - Named placeholder interpolation that never fails
//! - A per-request [`Translator`] bound to one locale
//!
//! # Example
//!
//! ```rust
//! use lh_i18n::{translation_args, Locale, MemoryCatalogSource, TranslationService};
//!
//! # fn example() -> Result<(), lh_i18n::I18nError> {
//! let source = MemoryCatalogSource::new()
//!     .with_catalog(Locale::PtBr, r#"{"validation":{"min_length":"Mínimo de {min} caracteres"}}"#)
//!     .with_catalog(Locale::En, r#"{"validation":{"min_length":"Must be at least {min} characters"}}"#);
//! let service = TranslationService::new(source);
//!
//! let message = service.translate("validation.min_length", "en", &translation_args!["min" => 8])?;
//! assert_eq!(message, "Must be at least 8 characters");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod cache;
pub mod catalog;
pub mod error;
pub mod interpolate;
pub mod locale;
pub mod negotiate;
pub mod service;
pub mod source;
pub mod translator;

pub use cache::CatalogCache;
pub use catalog::{Catalog, CatalogNode};
pub use error::{I18nError, I18nResult};
pub use interpolate::{interpolate, TranslationArgs};
pub use locale::Locale;
pub use negotiate::{parse_accept_language, resolve_locale, HeaderSource, ACCEPT_LANGUAGE, X_LANGUAGE};
pub use service::TranslationService;
pub use source::{CatalogSource, FsCatalogSource, MemoryCatalogSource, CATALOG_FILE};
pub use translator::Translator;
