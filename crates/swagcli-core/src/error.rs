//! Error types shared by the swagcli crates.
//!
//! Malformed or ambiguous operation names are not errors: they are logged and degrade to a
//! best-effort name. The variants below are the conditions that abort a generation run, either
//! because a caller broke a contract or because the inputs violate an assumption the
//! generator is not built to handle.

/// Result type used throughout swagcli.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that abort a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The operation id does not have the `Group_Action` shape name inference requires.
    #[error("invalid operation id `{operation_id}`: {reason}")]
    InvalidOperationId {
        operation_id: String,
        reason: &'static str,
    },

    /// A command path cannot be placed in a profile tree.
    #[error("invalid command path `{path}`: {reason}")]
    InvalidCommandPath { path: String, reason: &'static str },

    /// The inferred variants of one operation disagree on the subject.
    #[error("operation `{operation_id}` has different subjects: {subjects:?}")]
    SubjectConflict {
        operation_id: String,
        subjects: Vec<String>,
    },

    /// The same command was registered with two api versions.
    #[error("multiple versions for command `{command}`: {first}, {second}")]
    CommandVersionConflict {
        command: String,
        first: String,
        second: String,
    },

    /// A swagger tag lists more than one api version of the same resource.
    #[error("tag `{tag}` contains multiple api versions of resource `{resource_id}`: {versions:?}")]
    MultipleApiVersions {
        tag: String,
        resource_id: String,
        versions: Vec<String>,
    },

    /// The commands of a module do not map to exactly one (plane, module, resource provider)
    /// tuple.
    #[error("expected exactly one plane, module and resource provider, found: {tags:?}")]
    MultipleModuleTags { tags: Vec<String> },

    /// The CLI module does not exist in the catalog.
    #[error("module `{0}` not found")]
    ModuleNotFound(String),

    /// The profile does not exist in the CLI module.
    #[error("profile `{profile}` not found in module `{module}`")]
    ProfileNotFound { module: String, profile: String },

    /// The CLI command has no command model in the catalog.
    #[error("command `{0}` not found in the command catalog")]
    CommandNotFound(String),

    /// The CLI command references a version the command model does not have.
    #[error("version `{version}` of command `{command}` not found in the command catalog")]
    VersionNotFound { command: String, version: String },

    /// No resource configuration was found for a resource.
    #[error("resource configuration `{resource_id}` ({version}) not found in the command catalog")]
    ResourceConfigurationNotFound {
        resource_id: String,
        version: String,
    },

    /// The resource provider is unknown to the swagger catalog.
    #[error("resource provider `{0}` not found")]
    ResourceProviderNotFound(String),

    /// The swagger tag has no resources.
    #[error("resources not found for tag `{0}`")]
    TagNotFound(String),
}
