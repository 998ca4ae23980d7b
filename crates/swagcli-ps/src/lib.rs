//! # swagcli-ps
//!
//! PowerShell module configuration for swagcli.
//!
//! A PowerShell module is generated from a whole swagger tag, while the matching CLI module
//! usually exposes only part of it. This crate diffs the two ([`ModuleDiff`]) and renders the
//! outcome as a [`PsConfiguration`]: the subjects and the individual commands the
//! PowerShell module has to drop.

pub mod config;
pub mod generator;
pub mod module_diff;

pub use self::{
    config::{DEFAULT_MODULE_VERSION, PsConfiguration, RemovedVerb},
    generator::{DEFAULT_PROFILE, PsConfigGenerator},
    module_diff::{
        CliResource, CliResources, ModuleDiff, PsOperation, PsSubject, classify_operations,
        reconcile_put_variants,
    },
};
