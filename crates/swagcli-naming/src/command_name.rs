//! Command name inference.
//!
//! Derives `(subject, verb, suffix)` names from an operation id such as
//! `Workspaces_ListByResourceGroup`, given the operation group name of its resource:
//!
//! | Operation id                          | Variants                                    |
//! |---------------------------------------|---------------------------------------------|
//! | `VirtualMachines_Get`                 | `Get-VirtualMachine`                        |
//! | `Workspaces_CreateOrUpdate`           | `New-Workspace`, `Update-Workspace`         |
//! | `Workspaces_ListByResourceGroup`      | `Get-Workspace` + `ByResourceGroup`         |
//! | `Workspaces_ListOutboundNetworkDependenciesEndpoints` | `Get-WorkspaceOutboundNetworkDependencyEndpoint` |
//!
//! The action part of the operation id is split into capitalized words and decomposed
//! recursively: `Or` splits it into two independent names, a preposition marker moves the
//! rest of the words into the suffix, and otherwise the first known action word becomes the
//! verb with the words around it forming the subject.

use std::collections::HashSet;

use swagcli_core::{CommandVariant, Error, Result, Verb};

use crate::{inflect, verb_map};

/// Word dropped from actions before decomposition (`ListAll` is `List`).
const NOISE_WORD: &str = "All";

/// Conjunction splitting an action into two (`CreateOrUpdate`).
const CONJUNCTION: &str = "Or";

/// Markers that start a trailing suffix, checked in this order.
const SUFFIX_MARKERS: [&str; 6] = ["With", "At", "By", "For", "In", "Of"];

/// Infers the command name variants of an operation.
///
/// `operation_id` must be `Group_Action`; anything else is a caller error. The result is
/// never empty.
pub fn infer(operation_id: &str, group_name: &str) -> Result<Vec<CommandVariant>> {
    let _span = tracing::debug_span!("infer_command_names", %operation_id).entered();

    let mut parts = operation_id.split('_');
    let (Some(_), Some(action), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(Error::InvalidOperationId {
            operation_id: operation_id.to_string(),
            reason: "expected exactly one `_` between the group and the action",
        });
    };

    let action = inflect::capitalize(action);
    if verb_map::is_known(&action) {
        return Ok(vec![create_variant(&action, &[group_name], &[])]);
    }

    let words = inflect::words(&action);
    let variants = decompose(&words, group_name, &[]);
    if variants.is_empty() {
        return Err(Error::InvalidOperationId {
            operation_id: operation_id.to_string(),
            reason: "the action has no capitalized words",
        });
    }
    Ok(variants)
}

/// Builds a variant from an action word, the subject fragments and the suffix words.
///
/// Actions without a mapped verb keep their own word at the front of the subject (except
/// `Post`, which carries no meaning), so distinct `Invoke` operations get distinct names.
/// Subject fragments are singularized and deduplicated, keeping the first occurrence.
pub fn create_variant(action: &str, subject: &[&str], suffix: &[&str]) -> CommandVariant {
    let verb = verb_map::lookup(action);

    let mut fragments = Vec::with_capacity(subject.len() + 1);
    if verb == Verb::Invoke && !action.eq_ignore_ascii_case("post") {
        fragments.push(action);
    }
    fragments.extend_from_slice(subject);

    let mut seen = HashSet::new();
    let fragments: Vec<String> = fragments
        .into_iter()
        .map(|fragment| {
            inflect::singularize(fragment)
                .filter(|singular| !singular.is_empty())
                .unwrap_or_else(|| fragment.to_string())
        })
        .filter(|fragment| seen.insert(fragment.clone()))
        .collect();

    CommandVariant::new(fragments.concat(), verb, action).suffix(suffix.concat())
}

fn decompose(words: &[&str], group_name: &str, suffix: &[&str]) -> Vec<CommandVariant> {
    let words: Vec<&str> = words
        .iter()
        .copied()
        .filter(|word| *word != NOISE_WORD)
        .collect();

    match words.as_slice() {
        [] => Vec::new(),
        &[action] => vec![create_variant(action, &[group_name], suffix)],
        &[first, second] => {
            if verb_map::is_known(first) {
                vec![create_variant(first, &[group_name, second], suffix)]
            } else if verb_map::is_known(second) {
                vec![create_variant(second, &[group_name, first], suffix)]
            } else {
                tracing::warn!(
                    "Operation {first}/{second} is inferred without finding action"
                );
                vec![create_variant(first, &[group_name, second], suffix)]
            }
        }
        _ => decompose_compound(&words, group_name, suffix),
    }
}

fn decompose_compound(words: &[&str], group_name: &str, suffix: &[&str]) -> Vec<CommandVariant> {
    if let Some(idx) = words.iter().position(|word| *word == CONJUNCTION) {
        // `A Or B C` reads as `A C` and `B C`
        let rest = words.get(idx + 2..).unwrap_or_default();
        let left: Vec<&str> = words[..idx].iter().chain(rest).copied().collect();
        let right = &words[idx + 1..];

        let mut variants = decompose(&left, group_name, suffix);
        if right.is_empty() {
            tracing::warn!(words = ?words, "Nothing follows `Or`, ignoring it");
        } else {
            variants.extend(decompose(right, group_name, suffix));
        }
        return variants;
    }

    for marker in SUFFIX_MARKERS {
        match words.iter().position(|word| *word == marker) {
            Some(idx) if idx > 0 => {
                let suffix: Vec<&str> = words[idx..].iter().chain(suffix).copied().collect();
                return decompose(&words[..idx], group_name, &suffix);
            }
            _ => {}
        }
    }

    let last = words.len() - 1;
    match words.iter().position(|word| verb_map::is_known(word)) {
        Some(0) => vec![create_variant(words[0], &with_group(group_name, &words[1..]), suffix)],
        Some(idx) if idx == last => {
            vec![create_variant(words[idx], &with_group(group_name, &words[..idx]), suffix)]
        }
        Some(idx) => {
            let suffix: Vec<&str> = words[idx + 1..].iter().chain(suffix).copied().collect();
            vec![create_variant(words[idx], &with_group(group_name, &words[..idx]), &suffix)]
        }
        None => {
            tracing::warn!(
                "Operation {}/{} is inferred without finding action",
                words[0],
                words[1]
            );
            vec![create_variant(words[0], &with_group(group_name, &words[1..]), suffix)]
        }
    }
}

fn with_group<'a>(group_name: &'a str, fragments: &[&'a str]) -> Vec<&'a str> {
    std::iter::once(group_name)
        .chain(fragments.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_variant_removes_duplicate_fragments_keeping_first_occurrence() {
        //* When
        let variant = create_variant("Get", &["Workspace", "Workspace", "Cluster"], &[]);

        //* Then
        assert_eq!(variant.subject, "WorkspaceCluster");
        assert_eq!(variant.verb, Verb::Get);
    }

    #[test]
    fn create_variant_deduplicates_after_singularizing() {
        //* When
        let variant = create_variant("List", &["Workspace", "Workspaces"], &["By", "Name"]);

        //* Then
        assert_eq!(variant.subject, "Workspace");
        assert_eq!(variant.suffix, "ByName");
    }

    #[test]
    fn create_variant_with_unmapped_action_prefixes_the_subject() {
        //* When
        let variant = create_variant("Frobnicate", &["Widget"], &[]);

        //* Then
        assert_eq!(variant.verb, Verb::Invoke);
        assert_eq!(variant.subject, "FrobnicateWidget");
        assert_eq!(variant.action, "Frobnicate");
    }

    #[test]
    fn create_variant_with_post_action_keeps_the_subject() {
        //* When
        let variant = create_variant("Post", &["Widget"], &[]);

        //* Then
        assert_eq!(variant.verb, Verb::Invoke);
        assert_eq!(variant.subject, "Widget");
    }

    #[test]
    fn create_variant_with_mapped_invoke_action_still_prefixes_the_subject() {
        //* When
        let variant = create_variant("Execute", &["Script"], &[]);

        //* Then
        assert_eq!(variant.verb, Verb::Invoke);
        assert_eq!(variant.subject, "ExecuteScript");
    }

    #[test]
    fn create_variant_with_fragment_without_word_runs_keeps_the_fragment() {
        //* When
        let variant = create_variant("Get", &["vm"], &[]);

        //* Then
        assert_eq!(variant.subject, "vm");
    }

    #[test]
    fn decompose_drops_noise_word_everywhere() {
        //* When
        let variants = decompose(&["List", "All"], "Workspace", &[]);

        //* Then
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].action, "List");
        assert_eq!(variants[0].subject, "Workspace");
    }

    #[test]
    fn decompose_with_two_words_and_verb_second_uses_the_first_as_subject() {
        //* When
        let variants = decompose(&["Keys", "Regenerate"], "Workspace", &[]);

        //* Then
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].action, "Regenerate");
        assert_eq!(variants[0].verb, Verb::New);
        assert_eq!(variants[0].subject, "WorkspaceKey");
    }

    #[test]
    fn decompose_with_two_unknown_words_falls_back_to_the_first_word() {
        //* When
        let variants = decompose(&["Foo", "Bar"], "Workspace", &[]);

        //* Then
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].verb, Verb::Invoke);
        assert_eq!(variants[0].action, "Foo");
        assert_eq!(variants[0].subject, "FooWorkspaceBar");
    }

    #[test]
    fn decompose_with_three_unknown_words_falls_back_to_the_first_word() {
        //* When
        let variants = decompose(&["Foo", "Bar", "Baz"], "Workspace", &[]);

        //* Then
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].verb, Verb::Invoke);
        assert_eq!(variants[0].subject, "FooWorkspaceBarBaz");
        assert_eq!(variants[0].suffix, "");
    }

    #[test]
    fn decompose_with_conjunction_and_trailing_words_shares_them_on_both_sides() {
        //* When
        let variants = decompose(&["Create", "Or", "Update", "Widget"], "Workspace", &[]);

        //* Then
        let names: Vec<(Verb, &str)> = variants
            .iter()
            .map(|v| (v.verb, v.subject.as_str()))
            .collect();
        assert_eq!(
            names,
            [
                (Verb::New, "WorkspaceWidget"),
                (Verb::Update, "WorkspaceWidget")
            ]
        );
    }

    #[test]
    fn decompose_with_trailing_conjunction_keeps_the_left_side() {
        //* When
        let variants = decompose(&["Start", "Vm", "Or"], "Lab", &[]);

        //* Then
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].action, "Start");
        assert_eq!(variants[0].subject, "LabVm");
    }

    #[test]
    fn decompose_with_marker_at_first_position_tries_the_next_marker() {
        //* When
        let variants = decompose(&["By", "Owner", "Get", "For", "Site"], "Slot", &[]);

        //* Then
        assert_eq!(variants.len(), 1);
        assert_eq!(variants[0].action, "Get");
        assert_eq!(variants[0].subject, "SlotByOwner");
        assert_eq!(variants[0].suffix, "ForSite");
    }

    #[test]
    fn decompose_with_nested_suffixes_keeps_reading_order() {
        //* When
        let variants = decompose(&["Vm", "Restart", "Now", "By", "Group"], "Lab", &[]);

        //* Then
        assert_eq!(variants[0].action, "Restart");
        assert_eq!(variants[0].subject, "LabVm");
        assert_eq!(variants[0].suffix, "NowByGroup");
    }
}
