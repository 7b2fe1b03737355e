//! Message resolution: the core of langmsg.
//!
//! A [`MessageResolver`] holds an immutable `(language, resources, platform)`
//! triple and exposes one operation, [`MessageResolver::get_message`], that
//! walks the supplied parts left to right, resolves each, and concatenates
//! the results into one string.

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Error,
    keys::ResourceKey,
    platform::Platform,
    types::{DEFAULT_LANGUAGE, ResourceCollection},
};

lazy_static! {
    // Letters in any script, digits, whitespace, and prose punctuation.
    static ref ALLOWED_LITERAL_REGEX: Regex =
        Regex::new(r#"^[\p{L}\p{N}\s'.,!?:;\-()"]*$"#).unwrap();
}

/// One element of a message: a literal string, a symbolic resource key, or
/// nothing.
///
/// `Empty` renders as the empty string and exists so callers can pass through
/// optional fragments without branching; an empty `Literal` behaves the same.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessagePart {
    /// Verbatim text, validated against the allowed character set.
    Literal(String),
    /// A reference resolved through the resource collection.
    Key(ResourceKey),
    /// Contributes nothing to the message.
    Empty,
}

impl From<&str> for MessagePart {
    fn from(literal: &str) -> Self {
        MessagePart::Literal(literal.to_string())
    }
}

impl From<String> for MessagePart {
    fn from(literal: String) -> Self {
        MessagePart::Literal(literal)
    }
}

impl From<ResourceKey> for MessagePart {
    fn from(key: ResourceKey) -> Self {
        MessagePart::Key(key)
    }
}

impl<T: Into<MessagePart>> From<Option<T>> for MessagePart {
    fn from(part: Option<T>) -> Self {
        part.map_or(MessagePart::Empty, Into::into)
    }
}

/// Composes user-facing messages for one fixed language.
///
/// Immutable after construction: every [`get_message`] call is a pure
/// function of its parts and the fixed `(language, resources, platform)`
/// triple, so a resolver can be shared freely across threads.
///
/// [`get_message`]: MessageResolver::get_message
#[derive(Debug, Clone)]
pub struct MessageResolver {
    language: String,
    resources: ResourceCollection,
    platform: Platform,
}

impl MessageResolver {
    /// Creates a resolver for the given language over the given resources,
    /// using the platform of the running process for OS-variant values.
    pub fn new(language: impl Into<String>, resources: ResourceCollection) -> Self {
        Self::with_platform(language, resources, Platform::current())
    }

    /// Creates a resolver with an explicit platform, for hosts that resolve
    /// messages on behalf of another machine and for tests.
    pub fn with_platform(
        language: impl Into<String>,
        resources: ResourceCollection,
        platform: Platform,
    ) -> Self {
        MessageResolver {
            language: language.into(),
            resources,
            platform,
        }
    }

    /// The active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// The platform used for OS-variant values.
    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    /// Resolves and concatenates the given parts, in order, into one message.
    ///
    /// Literal parts are validated against the allowed character set and used
    /// verbatim. Key parts are looked up under the active language, falling
    /// back to `"en"`; OS-variant values select the resolver's platform and
    /// contribute `""` when the platform has no entry. No separators are
    /// inserted between parts, so spacing must be passed as explicit literal
    /// parts. Zero parts yield `""`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidMessagePart`] if a literal contains a disallowed
    /// character or a key is absent from both the active language and `"en"`.
    /// Failure aborts the whole call; there are no partial results.
    pub fn get_message<I>(&self, parts: I) -> Result<String, Error>
    where
        I: IntoIterator,
        I::Item: Into<MessagePart>,
    {
        let mut message = String::new();
        for part in parts {
            match part.into() {
                MessagePart::Empty => {}
                MessagePart::Literal(literal) => {
                    if !ALLOWED_LITERAL_REGEX.is_match(&literal) {
                        return Err(Error::invalid_message_part(literal));
                    }
                    message.push_str(&literal);
                }
                MessagePart::Key(key) => {
                    message.push_str(self.resolve_key(key)?);
                }
            }
        }
        Ok(message)
    }

    /// Looks up a key under the active language, then under the default
    /// language.
    fn resolve_key(&self, key: ResourceKey) -> Result<&str, Error> {
        self.resources
            .get(&self.language, key.name())
            .or_else(|| self.resources.get(DEFAULT_LANGUAGE, key.name()))
            .map(|value| value.resolve(self.platform.identifier()))
            .ok_or_else(|| Error::invalid_message_part(key.name()))
    }
}
