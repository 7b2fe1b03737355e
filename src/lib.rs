#![forbid(unsafe_code)]
//! Localized message resolution for Rust.
//!
//! Composes user-facing messages from ordered sequences of literal strings and
//! symbolic resource keys, with per-OS message variants and automatic fallback
//! to the default language (`"en"`) when the active language lacks an entry.
//!
//! # Quick Start
//!
//! ```rust
//! use langmsg::{MessagePart, MessageResolver, ResourceCollectionBuilder, ResourceKey};
//!
//! let resources = ResourceCollectionBuilder::new()
//!     .add_text("en", ResourceKey::Restart.name(), "Please restart the editor")
//!     .build();
//!
//! let resolver = MessageResolver::new("en", resources);
//! let message = resolver.get_message([
//!     MessagePart::from("10.2.1"),
//!     MessagePart::from(" "),
//!     MessagePart::from(ResourceKey::Restart),
//! ])?;
//! assert_eq!(message, "10.2.1 Please restart the editor");
//! # Ok::<(), langmsg::Error>(())
//! ```
//!
//! # Model
//!
//! - **`ResourceCollection`**: language code → key name → value, where a value
//!   is either a plain string or a map of per-platform variants.
//! - **`ResourceKey`**: closed set of stable message identifiers.
//! - **`MessageResolver`**: immutable `(language, resources, platform)` triple
//!   exposing one pure operation, [`MessageResolver::get_message`].
//!
//! Resolution never mutates the collection and performs no I/O; catalogs are
//! loaded up front (see [`traits::Parser`] and [`ResourceCollectionBuilder`]).

pub mod builder;
pub mod error;
pub mod keys;
pub mod platform;
pub mod resolver;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    builder::ResourceCollectionBuilder,
    error::Error,
    keys::ResourceKey,
    platform::Platform,
    resolver::{MessagePart, MessageResolver},
    types::{DEFAULT_LANGUAGE, ResourceCollection, ResourceValue},
};
