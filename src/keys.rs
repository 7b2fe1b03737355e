//! Symbolic identifiers for localizable message slots.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// A stable symbolic identifier for a named message slot.
///
/// Keys are unique and independent of language; the camelCase [`name`]
/// doubles as the lookup key in catalog data. Every key must have an entry
/// in the default-language set of a complete catalog (see
/// [`crate::types::ResourceCollection::validate_default_coverage`]).
///
/// [`name`]: ResourceKey::name
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ResourceKey {
    /// Prompt asking the user to restart after an update.
    Restart,
    /// Announcement that a new version is available.
    NewVersion,
    /// Per-OS path where the application activates installed components.
    ActivationPath,
    /// Notice that an update can be downloaded.
    UpdateAvailable,
    /// Pointer to the download page.
    DownloadPage,
    /// Fallback instruction to install by hand.
    InstallManually,
}

impl ResourceKey {
    /// Every key, for coverage cross-checks against catalog data.
    pub const ALL: &'static [ResourceKey] = &[
        ResourceKey::Restart,
        ResourceKey::NewVersion,
        ResourceKey::ActivationPath,
        ResourceKey::UpdateAvailable,
        ResourceKey::DownloadPage,
        ResourceKey::InstallManually,
    ];

    /// The stable string name used as the lookup key in resource data.
    pub fn name(self) -> &'static str {
        match self {
            ResourceKey::Restart => "restart",
            ResourceKey::NewVersion => "newVersion",
            ResourceKey::ActivationPath => "activationPath",
            ResourceKey::UpdateAvailable => "updateAvailable",
            ResourceKey::DownloadPage => "downloadPage",
            ResourceKey::InstallManually => "installManually",
        }
    }
}

impl Display for ResourceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for ResourceKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "restart" => Ok(ResourceKey::Restart),
            "newVersion" => Ok(ResourceKey::NewVersion),
            "activationPath" => Ok(ResourceKey::ActivationPath),
            "updateAvailable" => Ok(ResourceKey::UpdateAvailable),
            "downloadPage" => Ok(ResourceKey::DownloadPage),
            "installManually" => Ok(ResourceKey::InstallManually),
            _ => Err(format!("Unknown resource key: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trips_through_from_str() {
        for key in ResourceKey::ALL {
            assert_eq!(ResourceKey::from_str(key.name()).unwrap(), *key);
        }
    }

    #[test]
    fn test_all_names_unique() {
        let mut names: Vec<_> = ResourceKey::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ResourceKey::ALL.len());
    }

    #[test]
    fn test_from_str_invalid() {
        assert!(ResourceKey::from_str("notAKey").is_err());
        assert!(ResourceKey::from_str("Restart").is_err());
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(format!("{}", ResourceKey::NewVersion), "newVersion");
        assert_eq!(format!("{}", ResourceKey::ActivationPath), "activationPath");
    }

    #[test]
    fn test_serde_uses_camel_case_names() {
        let json = serde_json::to_string(&ResourceKey::ActivationPath).unwrap();
        assert_eq!(json, "\"activationPath\"");
        let back: ResourceKey = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ResourceKey::ActivationPath);
    }
}
