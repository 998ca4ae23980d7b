//! Operation group name resolution.
//!
//! Swagger files group operations by a prefix of their operation id:
//! `Workspaces_CreateOrUpdate`, `Workspaces_Get` and `Workspaces_ListBySubscription` all
//! belong to the `Workspaces` operation group. Some files use a `[Verb][Group]` spelling
//! instead (`GetWorkspace`). The group name of a resource is the single group its
//! operations agree on, singularized.

use std::{cmp::Reverse, sync::LazyLock};

use regex::Regex;
use swagcli_core::{HttpMethod, SwaggerResource};

use crate::{fuzz, inflect};

/// `[Verb][OperationGroupName]`: one word, then one or more capitalized words.
static VERB_GROUP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z][a-z0-9]+)(([A-Z][a-z0-9]*)+)$").expect("verb group regex is valid")
});

/// Leading segments that are a verb rather than a group name (`Get_Workspaces`).
const VERB_PREFIXES: [&str; 5] = ["create", "get", "update", "delete", "patch"];

/// Resolves the operation group name of a resource.
///
/// Returns `None` when any operation id of the resource cannot be parsed. When the
/// operations disagree, the candidate most similar to the resource id wins; candidates with
/// equal scores are left in the order their operations were listed and the first one is
/// taken. That order is not meaningful: it follows the resource's operation map.
pub fn resolve(resource: &SwaggerResource) -> Option<String> {
    let mut candidates: Vec<Option<String>> = Vec::new();
    for (operation_id, method) in &resource.operations {
        let candidate = parse_group_name(resource, operation_id, *method);
        if !candidates.contains(&candidate) {
            candidates.push(candidate);
        }
    }

    let mut names = candidates.into_iter().collect::<Option<Vec<String>>>()?;
    if names.len() > 1 {
        tracing::debug!(
            resource_id = %resource.id,
            candidates = ?names,
            "Operation group candidates disagree, ranking by similarity to the resource id"
        );
        names.sort_by_cached_key(|name| Reverse(fuzz::partial_ratio(&resource.id, name)));
    }
    names.into_iter().next()
}

/// Parses the operation group name out of one operation id.
///
/// Returns `None` (and logs the offending operation) when the operation id matches neither
/// the `[Group]_[Action]` nor the `[Verb][Group]` convention.
pub fn parse_group_name(
    resource: &SwaggerResource,
    operation_id: &str,
    method: HttpMethod,
) -> Option<String> {
    let value = operation_id.trim().replace('-', "_");

    let group_name = if value.contains('_') {
        let mut parts = value.split('_');
        let first = parts.next().unwrap_or_default();
        if VERB_PREFIXES.contains(&first.to_lowercase().as_str()) {
            parts.next().unwrap_or_default().to_string()
        } else {
            first.to_string()
        }
    } else {
        let value = value.replace(' ', "");
        let Some(captures) = VERB_GROUP_PATTERN.captures(&value) else {
            tracing::error!(
                file = %resource.file_path,
                path = %resource.path,
                method = %method,
                operation_id = %operation_id,
                "InvalidOperationIdFormat: operationId should be in format of \
                 '[OperationGroupName]_[OperationName]' or '[Verb][OperationGroupName]'"
            );
            return None;
        };
        captures[2].to_string()
    };

    Some(inflect::singularize(&group_name).unwrap_or(group_name))
}
