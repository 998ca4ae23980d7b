//! # swagcli-core
//!
//! Core types for swagcli.
//!
//! This crate holds the read-only data model the name-inference engine works on: swagger
//! resources and their operation sets, the command model catalog the CLI is generated from,
//! the CLI command profile tree and the inferred command variants.

pub mod aaz;
pub mod catalog;
pub mod error;
pub mod http;
pub mod map;
pub mod profile;
pub mod swagger;
pub mod variant;
pub mod verb;

// Re-export main types at the crate root for convenience
pub use self::{
    aaz::{
        CommandOperation, CommandSpec, CommandSpecVersion, ConfiguredCommand, ConfiguredResource,
        ResourceConfiguration, ResourceRef,
    },
    catalog::{Catalog, CommandCatalog, SwaggerCatalog},
    error::{Error, Result},
    http::HttpMethod,
    map::Map,
    profile::{
        CliModule, CommandGroup, CommandPath, CommandsMap, Profile, ProfileBuilder,
        ProfileCommand,
    },
    swagger::{ResourceMap, ResourceProvider, SwaggerResource},
    variant::CommandVariant,
    verb::Verb,
};
