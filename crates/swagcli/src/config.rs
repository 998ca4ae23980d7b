//! Configuration of the `swagcli` binary.
//!
//! Loaded from a JSON file passed with `--config`. Every field is optional:
//!
//! ```json
//! {
//!   "defaultProfile": "latest",
//!   "profiles": ["latest", "2020-09-01-hybrid"],
//!   "ps": { "version": "0.1.0", "commit": "cbbe228f" }
//! }
//! ```

use std::path::{Path, PathBuf};

use swagcli_ps::{DEFAULT_MODULE_VERSION, DEFAULT_PROFILE};

/// Errors loading or using the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file `{}`", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`].
    #[error("failed to parse config file `{}`", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The profile is not one of the configured profiles.
    #[error("unknown profile `{profile}`, expected one of: {}", allowed.join(", "))]
    UnknownProfile {
        profile: String,
        allowed: Vec<String>,
    },
}

/// `swagcli` configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// The CLI profile used when none is given on the command line.
    pub default_profile: String,

    /// The CLI profiles that may be selected. Empty means any.
    pub profiles: Vec<String>,

    /// PowerShell module options.
    pub ps: PsOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: DEFAULT_PROFILE.to_string(),
            profiles: Vec::new(),
            ps: PsOptions::default(),
        }
    }
}

/// PowerShell module options.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PsOptions {
    /// The version given to generated modules.
    pub version: String,

    /// The specs repository commit recorded in generated configurations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
}

impl Default for PsOptions {
    fn default() -> Self {
        Self {
            version: DEFAULT_MODULE_VERSION.to_string(),
            commit: None,
        }
    }
}

impl Config {
    /// Loads the configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parses the configuration from a JSON document.
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Returns `requested`, or the default profile, after checking it is allowed.
    pub fn resolve_profile<'a>(
        &'a self,
        requested: Option<&'a str>,
    ) -> Result<&'a str, ConfigError> {
        let profile = requested.unwrap_or(self.default_profile.as_str());
        if !self.profiles.is_empty() && !self.profiles.iter().any(|p| p == profile) {
            return Err(ConfigError::UnknownProfile {
                profile: profile.to_string(),
                allowed: self.profiles.clone(),
            });
        }
        Ok(profile)
    }
}
