//! Translation service owning the catalog cache

use crate::cache::CatalogCache;
use crate::error::I18nResult;
use crate::interpolate::{interpolate, TranslationArgs};
use crate::negotiate::{resolve_locale, HeaderSource};
use crate::source::{CatalogSource, FsCatalogSource};
use crate::translator::Translator;
use crate::Locale;
use std::path::Path;
use tracing::debug;

/// Resolves translation keys against lazily loaded catalogs.
///
/// Construct one at startup and share it (by reference or `Arc`) with every
/// request handler.
#[derive(Debug)]
pub struct TranslationService {
    cache: CatalogCache,
}

impl TranslationService {
    /// Create a service over any catalog source
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            cache: CatalogCache::new(source),
        }
    }

    /// Create a service reading `{locales_dir}/{locale}/messages.json`
    pub fn from_dir<P: AsRef<Path>>(locales_dir: P) -> Self {
        Self::new(FsCatalogSource::new(locales_dir))
    }

    /// Translate `key` for a locale tag; unsupported tags use the default.
    ///
    /// Missing keys, keys naming a subtree and placeholder mismatches never
    /// fail: the raw key (or the uninterpolated text) comes back instead.
    /// Only an unloadable default catalog is an error.
    pub fn translate(&self, key: &str, locale: &str, args: &TranslationArgs) -> I18nResult<String> {
        self.translate_locale(key, Locale::coerce(locale), args)
    }

    /// Translate `key` for an already validated locale
    pub fn translate_locale(
        &self,
        key: &str,
        locale: Locale,
        args: &TranslationArgs,
    ) -> I18nResult<String> {
        let catalog = self.cache.get(locale)?;

        let Some(text) = catalog.lookup(key) else {
            debug!("Translation key '{}' not found for {}", key, locale);
            return Ok(key.to_string());
        };

        if args.is_empty() {
            return Ok(text.to_string());
        }

        Ok(interpolate(text, args).unwrap_or_else(|| {
            debug!("Interpolation skipped for '{}' in {}", key, locale);
            text.to_string()
        }))
    }

    /// Negotiate the request's locale, then translate
    pub fn translate_with_request<H: HeaderSource + ?Sized>(
        &self,
        key: &str,
        request: &H,
        args: &TranslationArgs,
    ) -> I18nResult<String> {
        self.translate_locale(key, resolve_locale(request), args)
    }

    /// Bind a translator to the request's negotiated locale
    pub fn translator<H: HeaderSource + ?Sized>(&self, request: &H) -> Translator<'_> {
        Translator::for_request(self, request)
    }

    /// Get the underlying catalog cache
    pub fn cache(&self) -> &CatalogCache {
        &self.cache
    }
}
