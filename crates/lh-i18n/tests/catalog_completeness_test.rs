//! The shipped catalogs stay in sync across locales

use lh_i18n::{translation_args, Catalog, FsCatalogSource, Locale, TranslationService};
use std::collections::BTreeSet;
use std::fs;

fn locales_dir() -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("locales")
}

fn load(locale: Locale) -> Catalog {
    let path = FsCatalogSource::new(locales_dir()).catalog_path(locale);
    let raw = fs::read_to_string(&path).unwrap_or_else(|e| panic!("{path:?}: {e}"));
    Catalog::from_json(&raw).unwrap()
}

fn placeholders(text: &str) -> BTreeSet<String> {
    text.split('{')
        .skip(1)
        .filter_map(|part| part.split_once('}').map(|(name, _)| name.to_string()))
        .collect()
}

#[test]
fn test_all_locales_have_same_keys() {
    let reference = load(Locale::default()).keys();
    assert!(!reference.is_empty());

    for locale in Locale::all() {
        assert_eq!(load(locale).keys(), reference, "key mismatch in {locale}");
    }
}

#[test]
fn test_placeholders_match_across_locales() {
    let reference = load(Locale::default());

    for locale in Locale::all() {
        let catalog = load(locale);
        for key in reference.keys() {
            assert_eq!(
                placeholders(catalog.lookup(&key).unwrap()),
                placeholders(reference.lookup(&key).unwrap()),
                "placeholder mismatch for '{key}' in {locale}"
            );
        }
    }
}

#[test]
fn test_shipped_messages() {
    let service = TranslationService::from_dir(locales_dir());

    assert_eq!(
        service
            .translate("validation.min_length", "en", &translation_args!["min" => 8])
            .unwrap(),
        "Must be at least 8 characters"
    );
    assert_eq!(
        service
            .translate("auth.incorrect_credentials", "pt-BR", &translation_args![])
            .unwrap(),
        "E-mail ou senha incorretos"
    );
}
