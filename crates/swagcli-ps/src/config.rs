//! PowerShell module configuration.

use swagcli_core::Verb;

/// Version given to newly generated PowerShell modules.
pub const DEFAULT_MODULE_VERSION: &str = "0.1.0";

/// Configuration of the PowerShell module generated from a CLI module.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PsConfiguration {
    /// The specs repository commit the module is generated from.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub commit: Option<String>,

    /// The module version.
    pub version: String,

    /// The module name (e.g. `Databricks`).
    pub module_name: String,

    /// The swagger readme file, relative to the specs repository.
    pub readme_file: String,

    /// Subjects removed from the module altogether.
    #[serde(default)]
    pub removed_subjects: Vec<String>,

    /// Individual commands removed from subjects that are otherwise kept.
    #[serde(default)]
    pub removed_verbs: Vec<RemovedVerb>,
}

/// A command removed from the module, identified by subject and verb.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RemovedVerb {
    /// The command subject.
    pub subject: String,

    /// The command verb.
    pub verb: Verb,
}

impl RemovedVerb {
    /// Creates a new `RemovedVerb`.
    pub fn new(subject: impl Into<String>, verb: Verb) -> Self {
        Self {
            subject: subject.into(),
            verb,
        }
    }
}
