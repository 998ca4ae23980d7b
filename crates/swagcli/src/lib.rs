//! # swagcli
//!
//! Derive CLI and PowerShell command names from swagger definitions.
//!
//! This crate is the entry point of the workspace: it re-exports the data model from
//! `swagcli-core`, the name inference from `swagcli-naming` and the PowerShell configuration
//! generation from `swagcli-ps`, and holds the configuration of the `swagcli` binary.

pub mod config;

// Re-export the member crates for access to their modules
pub use swagcli_core;
pub use swagcli_naming as naming;
pub use swagcli_ps as ps;
// Re-export all main types at the crate root for convenience
pub use swagcli_core::{
    Catalog, CliModule, CommandCatalog, CommandGroup, CommandPath, CommandSpec, CommandVariant,
    CommandsMap, Error, HttpMethod, Map, Profile, ProfileBuilder, ProfileCommand, ResourceMap,
    ResourceProvider, Result, SwaggerCatalog, SwaggerResource, Verb, profile::collect_tag_commands,
};
pub use swagcli_naming::{infer, resolve};
pub use swagcli_ps::{ModuleDiff, PsConfigGenerator, PsConfiguration};
