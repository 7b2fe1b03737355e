//! Runtime platform identifiers for OS-variant resource values.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The host platform a resolver selects OS-variant messages for.
///
/// The identifier strings (`"darwin"`, `"linux"`, `"win32"`) are the keys
/// catalogs use in OS-variant maps. A resolver receives its platform at
/// construction rather than reading a global at call time, so resolution
/// stays a pure function and tests can pin any platform.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Linux,
    Win32,
    /// Any other host, carried verbatim from `std::env::consts::OS`.
    Other(String),
}

impl Platform {
    /// Detects the platform of the running process.
    pub fn current() -> Self {
        match std::env::consts::OS {
            "macos" => Platform::Darwin,
            "linux" => Platform::Linux,
            "windows" => Platform::Win32,
            other => Platform::Other(other.to_string()),
        }
    }

    /// The stable identifier used as the key in OS-variant maps.
    pub fn identifier(&self) -> &str {
        match self {
            Platform::Darwin => "darwin",
            Platform::Linux => "linux",
            Platform::Win32 => "win32",
            Platform::Other(os) => os,
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier())
    }
}

impl FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "darwin" => Ok(Platform::Darwin),
            "linux" => Ok(Platform::Linux),
            "win32" => Ok(Platform::Win32),
            "" => Err("Empty platform identifier".to_string()),
            other => Ok(Platform::Other(other.to_string())),
        }
    }
}
