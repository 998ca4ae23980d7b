//! Inferred command name variants.

use super::Verb;

/// One candidate name for the command generated from an operation.
///
/// A command name reads as `<verb>-<subject><suffix>`: `Get-VirtualMachine`,
/// `Get-Workspace` with suffix `ByResourceGroup`, and so on. An operation may produce more
/// than one variant, e.g. `Workspaces_CreateOrUpdate` yields a `New` and an `Update` variant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CommandVariant {
    /// The joined, singularized and deduplicated subject fragments.
    pub subject: String,

    /// The canonical verb the action maps to.
    pub verb: Verb,

    /// The joined trailing words, empty when the action had none.
    #[serde(rename = "variant")]
    pub suffix: String,

    /// The action word the verb was resolved from.
    pub action: String,
}

impl CommandVariant {
    /// Creates a new `CommandVariant` with an empty suffix.
    pub fn new(subject: impl Into<String>, verb: Verb, action: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            verb,
            suffix: String::new(),
            action: action.into(),
        }
    }

    /// Sets the suffix of the variant.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Returns the command name, `<verb>-<subject><suffix>`.
    pub fn command_name(&self) -> String {
        format!("{}-{}{}", self.verb, self.subject, self.suffix)
    }
}
