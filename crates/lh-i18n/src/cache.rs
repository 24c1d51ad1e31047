//! Lazy, load-once catalog cache

use crate::catalog::Catalog;
use crate::error::{I18nError, I18nResult};
use crate::source::CatalogSource;
use crate::Locale;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Caches parsed catalogs per locale for the lifetime of the owner.
///
/// Entries are never invalidated. Two callers loading the same locale at the
/// same time may both parse it; the first stored catalog wins.
pub struct CatalogCache {
    source: Box<dyn CatalogSource>,
    entries: RwLock<HashMap<Locale, Arc<Catalog>>>,
}

impl fmt::Debug for CatalogCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogCache")
            .field("source", &"<dyn CatalogSource>")
            .field("cached", &self.cached_locales())
            .finish()
    }
}

impl CatalogCache {
    /// Create an empty cache over `source`
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Get the catalog for `locale`, loading it on first access.
    ///
    /// A missing catalog for a non-default locale resolves to the default
    /// locale's catalog, which is then cached under both locales.
    pub fn get(&self, locale: Locale) -> I18nResult<Arc<Catalog>> {
        if let Some(catalog) = self.entries.read().get(&locale) {
            return Ok(Arc::clone(catalog));
        }

        let catalog = self.load(locale)?;

        let mut entries = self.entries.write();
        Ok(Arc::clone(entries.entry(locale).or_insert(catalog)))
    }

    fn load(&self, locale: Locale) -> I18nResult<Arc<Catalog>> {
        debug!("Loading catalog for locale: {}", locale);

        let Some(raw) = self.source.read(locale)? else {
            if !locale.is_default() {
                warn!(
                    "Catalog for {} not found at {}, falling back to {}",
                    locale,
                    self.source.location(locale),
                    Locale::default()
                );
                return self.get(Locale::default());
            }

            let path = self.source.location(locale);
            error!("Default catalog not found: {}", path);
            return Err(I18nError::CatalogNotFound {
                locale: locale.code().to_string(),
                path,
            });
        };

        let catalog = Catalog::from_json(&raw).map_err(|source| {
            error!("Failed to parse catalog for {}: {}", locale, source);
            I18nError::CatalogParse {
                locale: locale.code().to_string(),
                source,
            }
        })?;

        info!("Loaded catalog for locale: {}", locale);
        Ok(Arc::new(catalog))
    }

    /// Check if a catalog is cached for the given locale
    pub fn is_cached(&self, locale: Locale) -> bool {
        self.entries.read().contains_key(&locale)
    }

    /// Locales with a cached catalog, in precedence order
    pub fn cached_locales(&self) -> Vec<Locale> {
        let entries = self.entries.read();
        Locale::all()
            .into_iter()
            .filter(|locale| entries.contains_key(locale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryCatalogSource;

    #[test]
    fn test_get_caches_catalog() {
        let cache = CatalogCache::new(
            MemoryCatalogSource::new().with_catalog(Locale::PtBr, r#"{"hello":"Olá"}"#),
        );

        assert!(!cache.is_cached(Locale::PtBr));
        let first = cache.get(Locale::PtBr).unwrap();
        let second = cache.get(Locale::PtBr).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.cached_locales(), vec![Locale::PtBr]);
    }

    #[test]
    fn test_missing_locale_falls_back_to_default() {
        let cache = CatalogCache::new(
            MemoryCatalogSource::new().with_catalog(Locale::PtBr, r#"{"hello":"Olá"}"#),
        );

        let catalog = cache.get(Locale::En).unwrap();
        assert_eq!(catalog.lookup("hello"), Some("Olá"));
        assert!(Arc::ptr_eq(&catalog, &cache.get(Locale::PtBr).unwrap()));
        assert_eq!(cache.cached_locales(), vec![Locale::PtBr, Locale::En]);
    }

    #[test]
    fn test_missing_default_is_fatal() {
        let cache = CatalogCache::new(MemoryCatalogSource::new());

        let err = cache.get(Locale::En).unwrap_err();
        match err {
            I18nError::CatalogNotFound { locale, path } => {
                assert_eq!(locale, "pt-BR");
                assert_eq!(path, "memory:pt-BR/messages.json");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(cache.cached_locales().is_empty());
    }

    #[test]
    fn test_parse_error_is_reported() {
        let cache = CatalogCache::new(MemoryCatalogSource::new().with_catalog(Locale::PtBr, "{"));

        assert!(matches!(
            cache.get(Locale::PtBr),
            Err(I18nError::CatalogParse { .. })
        ));
    }
}
