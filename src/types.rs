//! Core types for langmsg: catalog values and the language-keyed collection.
//! Catalogs deserialize into these; the resolver reads them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use unic_langid::LanguageIdentifier;

use crate::{error::Error, keys::ResourceKey, traits::Parser};

/// The fallback language used when the active language lacks an entry.
pub const DEFAULT_LANGUAGE: &str = "en";

/// A single localizable value: either plain text or a map of per-platform
/// variants keyed by platform identifier (`"darwin"`, `"linux"`, `"win32"`).
///
/// Untagged so catalog JSON writes either a string or an object:
///
/// ```json
/// {
///     "restart": "Please restart",
///     "activationPath": { "darwin": "Macintosh", "win32": "Windows" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ResourceValue {
    /// A plain string, used on every platform.
    Text(String),

    /// Per-platform variants. A platform absent from the map resolves to the
    /// empty segment, not an error.
    OsVariants(BTreeMap<String, String>),
}

impl ResourceValue {
    /// Resolves this value for the given platform identifier.
    ///
    /// Plain text resolves to itself; an OS-variant map resolves to the entry
    /// for `platform_id`, or `""` when the platform has no entry.
    pub fn resolve(&self, platform_id: &str) -> &str {
        match self {
            ResourceValue::Text(text) => text,
            ResourceValue::OsVariants(variants) => variants
                .get(platform_id)
                .map(String::as_str)
                .unwrap_or_default(),
        }
    }
}

impl From<&str> for ResourceValue {
    fn from(text: &str) -> Self {
        ResourceValue::Text(text.to_string())
    }
}

impl From<String> for ResourceValue {
    fn from(text: String) -> Self {
        ResourceValue::Text(text)
    }
}

/// All localized resources for an application: language code → key name →
/// [`ResourceValue`]. Read-only once handed to a resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ResourceCollection {
    languages: BTreeMap<String, BTreeMap<String, ResourceValue>>,
}

impl ResourceCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an iterator over the language codes in this collection.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// Looks up a value by exact language code and key name.
    pub fn get(&self, language: &str, key: &str) -> Option<&ResourceValue> {
        self.languages.get(language).and_then(|keys| keys.get(key))
    }

    /// Returns all entries for an exact language code.
    pub fn entries_for(&self, language: &str) -> Option<&BTreeMap<String, ResourceValue>> {
        self.languages.get(language)
    }

    pub(crate) fn insert(&mut self, language: &str, key: &str, value: ResourceValue) {
        self.languages
            .entry(language.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Check if this collection has a specific language, matching on the
    /// primary language subtag (so `"en-US"` matches a stored `"en"`).
    pub fn has_language(&self, lang: &str) -> bool {
        if self.languages.contains_key(lang) {
            return true;
        }
        let Ok(target) = lang.parse::<LanguageIdentifier>() else {
            return false;
        };
        self.languages.keys().any(|code| {
            code.parse::<LanguageIdentifier>()
                .is_ok_and(|id| id.language == target.language)
        })
    }

    /// Checks that the default-language (`"en"`) set and [`ResourceKey::ALL`]
    /// cover each other exactly: every key has an entry and every entry names
    /// a known key.
    ///
    /// A complete application catalog must satisfy this for the resolver's
    /// fallback behavior to be total; it is a startup/test-time check, not
    /// something the resolver enforces per call.
    pub fn validate_default_coverage(&self) -> Result<(), Error> {
        let defaults = self.languages.get(DEFAULT_LANGUAGE).ok_or_else(|| {
            Error::validation_error(format!("No `{}` resources in collection", DEFAULT_LANGUAGE))
        })?;

        for key in ResourceKey::ALL {
            if !defaults.contains_key(key.name()) {
                return Err(Error::validation_error(format!(
                    "Resource key `{}` has no `{}` entry",
                    key.name(),
                    DEFAULT_LANGUAGE
                )));
            }
        }

        for name in defaults.keys() {
            if name.parse::<ResourceKey>().is_err() {
                return Err(Error::validation_error(format!(
                    "`{}` entry `{}` matches no resource key",
                    DEFAULT_LANGUAGE, name
                )));
            }
        }

        Ok(())
    }
}

impl Parser for ResourceCollection {
    /// Parse from any reader.
    fn from_reader<R: std::io::BufRead>(reader: R) -> Result<Self, Error> {
        serde_json::from_reader(reader).map_err(Error::Parse)
    }

    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: std::io::Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer(&mut writer, self).map_err(Error::Parse)
    }
}
