//! Backing storage for translation catalogs

use crate::error::I18nResult;
use crate::Locale;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name of every per-locale catalog
pub const CATALOG_FILE: &str = "messages.json";

/// Where raw catalog JSON comes from
pub trait CatalogSource: Send + Sync {
    /// Read the raw catalog for `locale`, or `Ok(None)` if it does not exist
    fn read(&self, locale: Locale) -> I18nResult<Option<String>>;

    /// Human readable location of the catalog, used in error messages
    fn location(&self, locale: Locale) -> String;
}

/// Reads `{base_dir}/{locale}/messages.json` from disk
#[derive(Debug, Clone)]
pub struct FsCatalogSource {
    base_dir: PathBuf,
}

impl FsCatalogSource {
    /// Create a source rooted at `base_dir`
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    /// Path of the catalog file for `locale`
    pub fn catalog_path(&self, locale: Locale) -> PathBuf {
        self.base_dir.join(locale.code()).join(CATALOG_FILE)
    }

    /// Get the base directory for catalogs
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

impl Default for FsCatalogSource {
    fn default() -> Self {
        Self::new("locales")
    }
}

impl CatalogSource for FsCatalogSource {
    fn read(&self, locale: Locale) -> I18nResult<Option<String>> {
        let path = self.catalog_path(locale);
        debug!("Reading catalog file: {:?}", path);

        if !path.exists() {
            return Ok(None);
        }

        Ok(Some(fs::read_to_string(&path)?))
    }

    fn location(&self, locale: Locale) -> String {
        self.catalog_path(locale).to_string_lossy().to_string()
    }
}

/// Serves catalogs held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalogSource {
    catalogs: HashMap<Locale, String>,
}

impl MemoryCatalogSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the raw JSON for a locale
    pub fn with_catalog(mut self, locale: Locale, raw: impl Into<String>) -> Self {
        self.catalogs.insert(locale, raw.into());
        self
    }
}

impl CatalogSource for MemoryCatalogSource {
    fn read(&self, locale: Locale) -> I18nResult<Option<String>> {
        Ok(self.catalogs.get(&locale).cloned())
    }

    fn location(&self, locale: Locale) -> String {
        format!("memory:{}/{CATALOG_FILE}", locale.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_fs_source_path_pattern() {
        let source = FsCatalogSource::new("/srv/api/locales");
        assert_eq!(
            source.catalog_path(Locale::PtBr),
            PathBuf::from("/srv/api/locales/pt-BR/messages.json")
        );
        assert_eq!(FsCatalogSource::default().base_dir(), Path::new("locales"));
    }

    #[test]
    fn test_fs_source_reads_and_reports_missing() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("en")).unwrap();
        fs::write(temp_dir.path().join("en/messages.json"), "{}").unwrap();

        let source = FsCatalogSource::new(temp_dir.path());
        assert_eq!(source.read(Locale::En).unwrap().as_deref(), Some("{}"));
        assert!(source.read(Locale::PtBr).unwrap().is_none());
    }

    #[test]
    fn test_memory_source() {
        let source = MemoryCatalogSource::new().with_catalog(Locale::En, r#"{"a":"b"}"#);
        assert_eq!(source.read(Locale::En).unwrap().as_deref(), Some(r#"{"a":"b"}"#));
        assert!(source.read(Locale::PtBr).unwrap().is_none());
        assert_eq!(source.location(Locale::PtBr), "memory:pt-BR/messages.json");
    }
}
