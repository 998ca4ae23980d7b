//! # swagcli-naming
//!
//! Command name inference for swagger operations.
//!
//! Given an operation id such as `Workspaces_ListByResourceGroup` and the resource it belongs
//! to, this crate derives the command names a generated CLI or PowerShell module exposes:
//!
//! - [`operation_group::resolve`]: the operation group name of a resource (`Workspace`).
//! - [`command_name::infer`]: the `(verb, subject, suffix)` variants of one operation.
//! - [`verb_map`]: the action word to canonical verb table.
//! - [`inflect`]: singular forms of camel-case identifiers.
//!
//! ```
//! use swagcli_core::{HttpMethod, SwaggerResource, Verb};
//!
//! let resource = SwaggerResource::new(
//!     "/subscriptions/{}/providers/microsoft.compute/virtualmachines/{}",
//!     "2023-03-01",
//! )
//! .operation("VirtualMachines_Get", HttpMethod::Get);
//!
//! let group = swagcli_naming::resolve(&resource).expect("operation ids are well formed");
//! let variants = swagcli_naming::infer("VirtualMachines_Get", &group).unwrap();
//!
//! assert_eq!(variants.len(), 1);
//! assert_eq!(variants[0].verb, Verb::Get);
//! assert_eq!(variants[0].command_name(), "Get-VirtualMachine");
//! ```

pub mod command_name;
pub mod fuzz;
pub mod inflect;
pub mod operation_group;
pub mod verb_map;

pub use self::{
    command_name::{create_variant, infer},
    inflect::singularize,
    operation_group::resolve,
    verb_map::lookup,
};
