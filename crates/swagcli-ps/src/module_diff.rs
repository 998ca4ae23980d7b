//! Classification of swagger operations against an existing CLI module.
//!
//! The PowerShell module is generated from the full swagger tag, while the CLI module only
//! exposes part of it. Every operation of the tag is classified as kept or removed, named
//! with [`command_name::infer`] and grouped by subject, so the PowerShell configuration can
//! remove whatever the CLI does not expose.

use swagcli_core::{
    CommandPath, CommandVariant, Error, HttpMethod, Map, ResourceConfiguration, ResourceMap,
    Result, SwaggerResource, Verb,
};
use swagcli_naming::{command_name, inflect, operation_group};

use crate::config::RemovedVerb;

/// A swagger resource as used by the commands of a CLI module.
#[derive(Debug, Clone)]
pub struct CliResource<'a> {
    /// The swagger path template of the resource.
    pub path: String,

    /// The resource configuration the commands come from.
    pub cfg: &'a ResourceConfiguration,

    /// The CLI commands generated from the resource.
    pub commands: Vec<CommandPath>,

    /// The sub-resources the commands are limited to.
    pub subresources: Vec<String>,
}

impl<'a> CliResource<'a> {
    /// Creates a new `CliResource` with no commands.
    pub fn new(cfg: &'a ResourceConfiguration) -> Self {
        Self {
            path: String::new(),
            cfg,
            commands: Vec::new(),
            subresources: Vec::new(),
        }
    }

    /// Sets the path template.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Adds a CLI command.
    pub fn command<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.commands.push(names.into_iter().map(Into::into).collect());
        self
    }

    /// Adds a sub-resource.
    pub fn subresource(mut self, subresource: impl Into<String>) -> Self {
        self.subresources.push(subresource.into());
        self
    }
}

/// CLI resources keyed by resource id.
pub type CliResources<'a> = Map<String, CliResource<'a>>;

/// A swagger operation and the PowerShell command names inferred for it.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PsOperation {
    /// The operation id.
    #[serde(rename = "operationId")]
    pub operation_id: String,

    /// The HTTP method of the operation.
    pub method: HttpMethod,

    /// The id of the resource the operation belongs to.
    #[serde(rename = "resourceId")]
    pub resource_id: String,

    /// Whether the operation is removed from the PowerShell module.
    pub removed: bool,

    /// The inferred command name variants.
    pub variants: Vec<CommandVariant>,
}

impl PsOperation {
    /// Creates a new `PsOperation` with no variants.
    pub fn new(
        operation_id: impl Into<String>,
        method: HttpMethod,
        resource_id: impl Into<String>,
        removed: bool,
    ) -> Self {
        Self {
            operation_id: operation_id.into(),
            method,
            resource_id: resource_id.into(),
            removed,
            variants: Vec::new(),
        }
    }
}

/// The operations sharing one inferred subject.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct PsSubject {
    /// Operations keyed by operation id.
    pub operations: Map<String, PsOperation>,
}

impl PsSubject {
    /// Returns true when every operation of the subject is removed.
    pub fn is_removable(&self) -> bool {
        self.operations.values().all(|op| op.removed)
    }
}

/// The PowerShell view of a swagger tag: every operation, grouped by subject.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize)]
pub struct ModuleDiff {
    /// Subjects keyed by name.
    pub subjects: Map<String, PsSubject>,
}

impl ModuleDiff {
    /// Classifies the operations of `swagger_resources` against `cli_resources`.
    ///
    /// Only the first api version listed for each resource is considered. Fails when an
    /// operation id cannot be named, when a CLI command is missing from its resource
    /// configuration, or when the variants of one operation disagree on the subject.
    pub fn build(swagger_resources: &ResourceMap, cli_resources: &CliResources<'_>) -> Result<Self> {
        let mut subjects: Map<String, PsSubject> = Map::new();

        for (resource_id, versions) in swagger_resources {
            let Some(resource) = versions.values().next() else {
                continue;
            };
            let _span = tracing::debug_span!("module_diff", %resource_id).entered();

            let group_name = operation_group::resolve(resource);
            if group_name.is_none() {
                tracing::warn!(
                    resource_id = %resource_id,
                    "Operation group unresolved, naming each operation after its own group"
                );
            }

            let operations = classify_operations(resource, cli_resources.get(resource_id))?;

            let mut inferred = Vec::with_capacity(operations.len());
            for operation in operations.values() {
                let group_name = match &group_name {
                    Some(name) => name.clone(),
                    None => own_group_name(&operation.operation_id),
                };
                let variants = command_name::infer(&operation.operation_id, &group_name)?;
                inferred.push(reconcile_put_variants(operation, variants, &operations));
            }

            for (mut operation, variants) in operations.into_values().zip(inferred) {
                operation.variants = variants;
                let Some(subject) = subject_of(&operation)? else {
                    tracing::debug!(
                        operation_id = %operation.operation_id,
                        "Every variant is covered by the patch operation, skipping"
                    );
                    continue;
                };
                subjects
                    .entry(subject)
                    .or_default()
                    .operations
                    .insert(operation.operation_id.clone(), operation);
            }
        }

        Ok(Self { subjects })
    }

    /// Returns the subjects whose operations are all removed.
    pub fn removed_subjects(&self) -> Vec<String> {
        self.subjects
            .iter()
            .filter(|(_, subject)| subject.is_removable())
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Returns the `(subject, verb)` pairs of removed operations in subjects that are kept.
    pub fn removed_verbs(&self) -> Vec<RemovedVerb> {
        self.subjects
            .values()
            .filter(|subject| !subject.is_removable())
            .flat_map(|subject| subject.operations.values())
            .filter(|op| op.removed)
            .flat_map(|op| &op.variants)
            .map(|variant| RemovedVerb::new(variant.subject.clone(), variant.verb))
            .collect()
    }
}

/// Classifies the operations of one swagger resource.
///
/// Without a CLI counterpart every operation is removed. Otherwise the operations the CLI
/// commands call are kept, and of the remaining ones only `patch` operations are kept.
pub fn classify_operations(
    resource: &SwaggerResource,
    cli_resource: Option<&CliResource<'_>>,
) -> Result<Map<String, PsOperation>> {
    let mut operations = Map::new();

    let Some(cli_resource) = cli_resource else {
        for (operation_id, method) in &resource.operations {
            operations.insert(
                operation_id.clone(),
                PsOperation::new(operation_id, *method, &resource.id, true),
            );
        }
        return Ok(operations);
    };

    for names in &cli_resource.commands {
        let command = cli_resource
            .cfg
            .find_command(names)
            .ok_or_else(|| Error::CommandNotFound(names.join(" ")))?;

        for operation_id in command.http_operation_ids() {
            // Commands may also call operations of other resources of the configuration
            let Some(method) = resource.operations.get(operation_id) else {
                continue;
            };
            operations.insert(
                operation_id.to_string(),
                PsOperation::new(operation_id, *method, &resource.id, false),
            );
        }
    }

    for (operation_id, method) in &resource.operations {
        if operations.contains_key(operation_id) {
            continue;
        }
        // Generic update commands are generated from the patch operation
        let removed = *method != HttpMethod::Patch;
        operations.insert(
            operation_id.clone(),
            PsOperation::new(operation_id, *method, &resource.id, removed),
        );
    }

    Ok(operations)
}

/// Settles the `Update` variants of a `put` operation against its sibling operations.
///
/// Without a `get` sibling there is no generic update, so `Update` becomes `Set`. With one,
/// the `Update` variant is dropped when the first `patch` sibling is kept, since that
/// operation already provides the update command. Variants of other methods pass through.
pub fn reconcile_put_variants(
    operation: &PsOperation,
    variants: Vec<CommandVariant>,
    siblings: &Map<String, PsOperation>,
) -> Vec<CommandVariant> {
    if operation.method != HttpMethod::Put {
        return variants;
    }

    let has_get = siblings.values().any(|op| op.method == HttpMethod::Get);
    let patch_kept = siblings
        .values()
        .find(|op| op.method == HttpMethod::Patch)
        .is_some_and(|op| !op.removed);

    variants
        .into_iter()
        .filter_map(|mut variant| {
            if variant.verb != Verb::Update {
                return Some(variant);
            }
            if !has_get {
                variant.verb = Verb::Set;
                return Some(variant);
            }
            (!patch_kept).then_some(variant)
        })
        .collect()
}

fn own_group_name(operation_id: &str) -> String {
    let group = operation_id.split('_').next().unwrap_or_default();
    inflect::singularize(group).unwrap_or_else(|| group.to_string())
}

fn subject_of(operation: &PsOperation) -> Result<Option<String>> {
    let mut subjects: Vec<&str> = operation
        .variants
        .iter()
        .map(|variant| variant.subject.as_str())
        .collect();
    subjects.sort_unstable();
    subjects.dedup();

    match subjects.as_slice() {
        [] => Ok(None),
        [subject] => Ok(Some(subject.to_string())),
        _ => Err(Error::SubjectConflict {
            operation_id: operation.operation_id.clone(),
            subjects: subjects.iter().map(|s| s.to_string()).collect(),
        }),
    }
}
