//! Locale negotiation from request headers

use crate::Locale;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// Standard language preference header
pub const ACCEPT_LANGUAGE: &str = "Accept-Language";

/// Explicit language override header, consulted after `Accept-Language`
pub const X_LANGUAGE: &str = "X-Language";

/// Anything that can look up request headers by name, case-insensitively
pub trait HeaderSource {
    /// Get the value of the header called `name`
    fn header(&self, name: &str) -> Option<&str>;
}

impl HeaderSource for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|value| value.to_str().ok())
    }
}

impl<B> HeaderSource for http::Request<B> {
    fn header(&self, name: &str) -> Option<&str> {
        self.headers().header(name)
    }
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

impl<K: AsRef<str>, V: AsRef<str>> HeaderSource for [(K, V)] {
    fn header(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_ref())
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> HeaderSource for [(K, V); N] {
    fn header(&self, name: &str) -> Option<&str> {
        self.as_slice().header(name)
    }
}

/// Pick the locale for a request.
///
/// `Accept-Language` candidates are taken in header order, ignoring quality
/// weights. Each candidate is tried as an exact tag, then by its base subtag
/// as a prefix of a supported tag, before moving on to the next one.
/// `X-Language` is only consulted when no candidate matches, and the default
/// locale is the last resort.
pub fn resolve_locale<H: HeaderSource + ?Sized>(headers: &H) -> Locale {
    let accept_language = headers
        .header(ACCEPT_LANGUAGE)
        .filter(|value| !value.is_empty());

    if let Some(accept_language) = accept_language {
        for tag in parse_accept_language(accept_language) {
            if let Some(locale) = Locale::from_code(tag).or_else(|| match_base_subtag(tag)) {
                return locale;
            }
        }
    }

    if let Some(locale) = headers
        .header(X_LANGUAGE)
        .and_then(|value| Locale::from_code(value.trim()))
    {
        return locale;
    }

    Locale::default()
}

/// Split an `Accept-Language` value into bare tags, dropping `;q=` weights.
///
/// Empty entries are kept; their empty base subtag prefixes every supported
/// tag, so `", en"` resolves to the default locale.
pub fn parse_accept_language(value: &str) -> Vec<&str> {
    value
        .split(',')
        .map(|candidate| candidate.split(';').next().unwrap_or_default().trim())
        .collect()
}

// Prefix match on purpose: "en" matches every supported tag starting with "en".
fn match_base_subtag(tag: &str) -> Option<Locale> {
    let base = tag.split('-').next().unwrap_or_default();
    Locale::all()
        .into_iter()
        .find(|locale| locale.code().starts_with(base))
}
