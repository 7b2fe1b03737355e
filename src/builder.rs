/// Builder for creating a `ResourceCollection` with a fluent interface.
///
/// This builder allows you to chain method calls to add entries and language
/// blocks, load catalog files, and then build the final collection.
///
/// # Example
///
/// ```rust
/// use langmsg::{ResourceCollectionBuilder, ResourceKey};
///
/// let resources = ResourceCollectionBuilder::new()
///     .add_text("en", ResourceKey::Restart.name(), "Please restart")
///     .add_os_variant("en", ResourceKey::ActivationPath.name(), "darwin", "Macintosh")
///     .add_os_variant("en", ResourceKey::ActivationPath.name(), "win32", "Windows")
///     .build();
/// ```
use std::{collections::BTreeMap, path::Path};

use crate::{
    error::Error,
    traits::Parser,
    types::{ResourceCollection, ResourceValue},
};

#[derive(Debug, Default)]
pub struct ResourceCollectionBuilder {
    collection: ResourceCollection,
}

impl ResourceCollectionBuilder {
    /// Creates a new `ResourceCollectionBuilder` with no resources.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a plain-text entry under the given language and key name.
    ///
    /// Replaces any existing value for that `(language, key)` pair.
    pub fn add_text(mut self, language: &str, key: &str, text: impl Into<String>) -> Self {
        self.collection
            .insert(language, key, ResourceValue::Text(text.into()));
        self
    }

    /// Adds one OS variant under the given language and key name.
    ///
    /// An existing OS-variant map for that `(language, key)` pair gains the
    /// entry; an existing plain-text value is replaced by a fresh map.
    pub fn add_os_variant(
        mut self,
        language: &str,
        key: &str,
        platform_id: &str,
        text: impl Into<String>,
    ) -> Self {
        let mut variants = match self.collection.get(language, key) {
            Some(ResourceValue::OsVariants(existing)) => existing.clone(),
            _ => BTreeMap::new(),
        };
        variants.insert(platform_id.to_string(), text.into());
        self.collection
            .insert(language, key, ResourceValue::OsVariants(variants));
        self
    }

    /// Adds a whole language block at once.
    pub fn add_language<I, K>(mut self, language: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = (K, ResourceValue)>,
        K: AsRef<str>,
    {
        for (key, value) in entries {
            self.collection.insert(language, key.as_ref(), value);
        }
        self
    }

    /// Loads a JSON catalog file and merges its languages into the builder.
    ///
    /// # Returns
    ///
    /// Returns `self` for method chaining, or an `Error` if the file cannot
    /// be read or parsed.
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, Error> {
        let loaded = ResourceCollection::read_from(path)?;
        for language in loaded.languages().map(str::to_string).collect::<Vec<_>>() {
            if let Some(entries) = loaded.entries_for(&language) {
                for (key, value) in entries {
                    self.collection.insert(&language, key, value.clone());
                }
            }
        }
        Ok(self)
    }

    /// Builds the final `ResourceCollection`.
    pub fn build(self) -> ResourceCollection {
        self.collection
    }

    /// Builds the final `ResourceCollection` and validates it.
    ///
    /// Rejects empty language codes and requires the default-language set to
    /// cover every resource key (and nothing else), see
    /// [`ResourceCollection::validate_default_coverage`].
    pub fn build_and_validate(self) -> Result<ResourceCollection, Error> {
        let collection = self.build();

        for language in collection.languages() {
            if language.is_empty() {
                return Err(Error::validation_error(
                    "Collection contains an empty language code",
                ));
            }
        }

        collection.validate_default_coverage()?;

        Ok(collection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::ResourceKey;
    use indoc::indoc;
    use tempfile::NamedTempFile;

    #[test]
    fn test_builder_add_text_and_variants() {
        let resources = ResourceCollectionBuilder::new()
            .add_text("en", "restart", "Restart")
            .add_os_variant("en", "activationPath", "darwin", "Macintosh")
            .add_os_variant("en", "activationPath", "win32", "Windows")
            .build();

        assert_eq!(
            resources.get("en", "restart"),
            Some(&ResourceValue::from("Restart"))
        );
        let value = resources.get("en", "activationPath").unwrap();
        assert_eq!(value.resolve("darwin"), "Macintosh");
        assert_eq!(value.resolve("win32"), "Windows");
    }

    #[test]
    fn test_builder_variant_replaces_text_value() {
        let resources = ResourceCollectionBuilder::new()
            .add_text("en", "restart", "plain")
            .add_os_variant("en", "restart", "linux", "Linux restart")
            .build();

        let value = resources.get("en", "restart").unwrap();
        assert_eq!(value.resolve("linux"), "Linux restart");
        assert_eq!(value.resolve("darwin"), "");
    }

    #[test]
    fn test_builder_load_from_file() {
        let content = indoc! {r#"
            {
                "en": {
                    "restart": "Please restart",
                    "activationPath": { "darwin": "Macintosh", "linux": "Linux" }
                },
                "de": {
                    "restart": "Bitte neu starten"
                }
            }
        "#};

        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), content).unwrap();

        let resources = ResourceCollectionBuilder::new()
            .load_from_file(temp_file.path())
            .unwrap()
            .add_text("fr", "restart", "Veuillez redémarrer")
            .build();

        assert_eq!(resources.languages().count(), 3);
        assert_eq!(
            resources.get("de", "restart"),
            Some(&ResourceValue::from("Bitte neu starten"))
        );
        assert_eq!(
            resources.get("en", "activationPath").unwrap().resolve("linux"),
            "Linux"
        );
    }

    #[test]
    fn test_build_and_validate_requires_default_coverage() {
        let result = ResourceCollectionBuilder::new()
            .add_text("en", ResourceKey::Restart.name(), "Restart")
            .build_and_validate();
        assert!(result.is_err());

        let mut builder = ResourceCollectionBuilder::new();
        for key in ResourceKey::ALL {
            builder = builder.add_text("en", key.name(), "value");
        }
        assert!(builder.build_and_validate().is_ok());
    }

    #[test]
    fn test_build_and_validate_rejects_empty_language() {
        let mut builder = ResourceCollectionBuilder::new().add_text("", "restart", "Restart");
        for key in ResourceKey::ALL {
            builder = builder.add_text("en", key.name(), "value");
        }
        let error = builder.build_and_validate().unwrap_err();
        assert!(error.to_string().contains("empty language code"));
    }
}
