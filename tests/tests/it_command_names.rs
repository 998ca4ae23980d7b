//! Integration tests for command name inference.

use swagcli::{Error, HttpMethod, SwaggerResource, Verb, naming};

#[test]
fn infer_with_single_known_action_returns_one_variant() {
    //* Given
    let actions = ["Get", "Delete", "List", "Create", "Update", "Start", "Restart", "Regenerate"];

    for action in actions {
        //* When
        let variants = swagcli::infer(&format!("Workspaces_{action}"), "Workspace")
            .expect("operation id should be valid");

        //* Then
        assert_eq!(variants.len(), 1, "one variant for {action}");
        assert_eq!(variants[0].action, action);
        assert_eq!(variants[0].subject, "Workspace");
        assert_eq!(variants[0].suffix, "");
    }
}

#[test]
fn infer_with_lowercase_action_capitalizes_it() {
    //* When
    let variants = swagcli::infer("Workspaces_get", "Workspace").expect("operation id should be valid");

    //* Then
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].action, "Get");
    assert_eq!(variants[0].verb, Verb::Get);
}

#[test]
fn infer_with_create_or_update_returns_two_variants() {
    //* When
    let variants = swagcli::infer("Workspaces_CreateOrUpdate", "Workspace")
        .expect("operation id should be valid");

    //* Then
    insta::assert_json_snapshot!(variants, @r#"
    [
      {
        "subject": "Workspace",
        "verb": "New",
        "variant": "",
        "action": "Create"
      },
      {
        "subject": "Workspace",
        "verb": "Update",
        "variant": "",
        "action": "Update"
      }
    ]
    "#);
}

#[test]
fn infer_with_preposition_moves_the_rest_into_the_suffix() {
    //* When
    let variants = swagcli::infer("Workspaces_ListByResourceGroup", "Workspace")
        .expect("operation id should be valid");

    //* Then
    assert_eq!(variants.len(), 1);
    let variant = &variants[0];
    assert_eq!(variant.action, "List");
    assert_eq!(variant.verb, Verb::Get);
    assert_eq!(variant.subject, "Workspace");
    assert_eq!(variant.suffix, "ByResourceGroup");
    assert_eq!(variant.command_name(), "Get-WorkspaceByResourceGroup");
}

#[test]
fn infer_with_leading_verb_singularizes_every_subject_word() {
    //* When
    let variants = swagcli::infer("Workspaces_ListOutboundNetworkDependenciesEndpoints", "Workspace")
        .expect("operation id should be valid");

    //* Then
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].verb, Verb::Get);
    assert_eq!(
        variants[0].subject,
        "WorkspaceOutboundNetworkDependencyEndpoint"
    );
}

#[test]
fn infer_with_subject_words_before_the_marker_keeps_them_in_the_subject() {
    //* When
    let variants = swagcli::infer("WebApps_ListHostNameBindingsBySlot", "Site")
        .expect("operation id should be valid");

    //* Then
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].action, "List");
    assert_eq!(variants[0].subject, "SiteHostNameBinding");
    assert_eq!(variants[0].suffix, "BySlot");
}

#[test]
fn infer_with_latin_plural_subject_uses_its_singular() {
    //* When
    let variants = swagcli::infer("Workspaces_ListMetadata", "Workspace")
        .expect("operation id should be valid");

    //* Then
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].command_name(), "Get-WorkspaceMetadatum");
}

#[test]
fn infer_with_verb_after_the_subject_word_finds_the_verb() {
    //* When
    let variants = swagcli::infer("Workspaces_KeysRegenerate", "Workspace")
        .expect("operation id should be valid");

    //* Then
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].verb, Verb::New);
    assert_eq!(variants[0].subject, "WorkspaceKey");
}

#[test]
fn infer_with_no_known_verb_prefixes_the_first_word() {
    //* Given
    let cases = [
        ("Workspaces_FooBar", "FooWorkspaceBar"),
        ("Workspaces_FooBarBaz", "FooWorkspaceBarBaz"),
    ];

    for (operation_id, subject) in cases {
        //* When
        let variants = swagcli::infer(operation_id, "Workspace").expect("operation id should be valid");

        //* Then
        assert_eq!(variants.len(), 1, "one variant for {operation_id}");
        assert_eq!(variants[0].verb, Verb::Invoke);
        assert_eq!(variants[0].subject, subject);
    }
}

#[test]
fn infer_with_conjunction_and_trailing_words_keeps_them_on_both_variants() {
    //* When
    let variants = swagcli::infer("Workspaces_CreateOrUpdateWidget", "Workspace")
        .expect("operation id should be valid");

    //* Then
    insta::assert_json_snapshot!(variants, @r#"
    [
      {
        "subject": "WorkspaceWidget",
        "verb": "New",
        "variant": "",
        "action": "Create"
      },
      {
        "subject": "WorkspaceWidget",
        "verb": "Update",
        "variant": "",
        "action": "Update"
      }
    ]
    "#);
}

#[test]
fn infer_with_unmapped_action_uses_invoke_and_keeps_the_action() {
    //* When
    let variants = swagcli::infer("Workspaces_Frobnicate", "Workspace")
        .expect("operation id should be valid");

    //* Then
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0].verb, Verb::Invoke);
    assert_eq!(variants[0].subject, "FrobnicateWorkspace");
    assert_eq!(variants[0].command_name(), "Invoke-FrobnicateWorkspace");
}

#[test]
fn infer_with_post_action_does_not_prefix_the_subject() {
    //* When
    let variants = swagcli::infer("Workspaces_Post", "Workspace").expect("operation id should be valid");

    //* Then
    assert_eq!(variants[0].verb, Verb::Invoke);
    assert_eq!(variants[0].subject, "Workspace");
}

#[test]
fn infer_with_malformed_operation_id_fails() {
    //* Given
    let operation_ids = ["WorkspacesGet", "Workspaces_Get_Now", "Workspaces_", "Workspaces_get2"];

    for operation_id in &operation_ids[..3] {
        //* When
        let result = swagcli::infer(operation_id, "Workspace");

        //* Then
        assert!(
            matches!(result, Err(Error::InvalidOperationId { .. })),
            "{operation_id} should be rejected"
        );
    }

    // A lowercase action still has a capitalized word once capitalized
    assert!(swagcli::infer(operation_ids[3], "Workspace").is_ok());
}

#[test]
fn create_variant_with_repeated_fragments_keeps_the_first_occurrence() {
    //* When
    let variant = naming::create_variant("Get", &["Workspace", "Workspace", "Cluster"], &[]);

    //* Then
    assert_eq!(variant.subject, "WorkspaceCluster");
}

#[test]
fn infer_with_resolved_group_name_names_the_command_end_to_end() {
    //* Given
    let resource = SwaggerResource::new(
        "/subscriptions/{}/resourcegroups/{}/providers/microsoft.compute/virtualmachines/{}",
        "2023-03-01",
    )
    .operation("VirtualMachines_Get", HttpMethod::Get);

    //* When
    let group_name = swagcli::resolve(&resource).expect("group name should resolve");
    let variants = swagcli::infer("VirtualMachines_Get", &group_name)
        .expect("operation id should be valid");

    //* Then
    assert_eq!(group_name, "VirtualMachine");
    insta::assert_json_snapshot!(variants, @r#"
    [
      {
        "subject": "VirtualMachine",
        "verb": "Get",
        "variant": "",
        "action": "Get"
      }
    ]
    "#);
}

#[test]
fn singularize_with_golden_list_matches_inflection_rules() {
    //* Given
    let golden = [
        ("VirtualMachines", "VirtualMachine"),
        ("Datum", "Datum"),
        ("Data", "Datum"),
        ("PrivateEndpointConnections", "PrivateEndpointConnection"),
        ("FirewallPolicies", "FirewallPolicy"),
        ("Addresses", "Address"),
        ("IpAddress", "IpAddress"),
        ("Children", "Child"),
        ("Metadata", "Metadatum"),
        ("Bases", "Base"),
        ("Campus", "Campus"),
        ("Consensus", "Consensus"),
        ("Analytics", "Analytics"),
        ("Media", "Media"),
    ];

    for (input, expected) in golden {
        //* When
        let singular = naming::singularize(input);

        //* Then
        assert_eq!(singular.as_deref(), Some(expected), "singularize({input})");
    }
}
