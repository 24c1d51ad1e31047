//! Per-request translator bound to one locale

use crate::error::I18nResult;
use crate::interpolate::TranslationArgs;
use crate::negotiate::{resolve_locale, HeaderSource};
use crate::service::TranslationService;
use crate::Locale;

/// Translator with a locale fixed at construction.
///
/// Cheap to create; make one per request rather than sharing it between
/// requests that may prefer different locales.
#[derive(Debug, Clone, Copy)]
pub struct Translator<'a> {
    service: &'a TranslationService,
    locale: Locale,
}

impl<'a> Translator<'a> {
    /// Create a translator from an optional request and an optional locale tag.
    ///
    /// An explicit locale wins over the request (and is coerced to the
    /// default when unsupported); with neither, the default locale is used.
    pub fn new(
        service: &'a TranslationService,
        request: Option<&dyn HeaderSource>,
        locale: Option<&str>,
    ) -> Self {
        let locale = match (locale, request) {
            (Some(tag), _) => Locale::coerce(tag),
            (None, Some(request)) => resolve_locale(request),
            (None, None) => Locale::default(),
        };
        Self { service, locale }
    }

    /// Create a translator for an explicit locale tag
    pub fn with_locale(service: &'a TranslationService, locale: &str) -> Self {
        Self::new(service, None, Some(locale))
    }

    /// Create a translator for the request's negotiated locale
    pub fn for_request<H: HeaderSource + ?Sized>(service: &'a TranslationService, request: &H) -> Self {
        Self {
            service,
            locale: resolve_locale(request),
        }
    }

    /// Translate a key without interpolation
    pub fn t(&self, key: &str) -> I18nResult<String> {
        self.t_with(key, &TranslationArgs::new())
    }

    /// Translate a key with interpolation arguments
    pub fn t_with(&self, key: &str, args: &TranslationArgs) -> I18nResult<String> {
        self.service.translate_locale(key, self.locale, args)
    }

    /// Get the bound locale
    pub fn locale(&self) -> Locale {
        self.locale
    }
}
