//! Integration tests for the PowerShell module diff and configuration.

use swagcli::{
    Error, HttpMethod, ModuleDiff, PsConfigGenerator, SwaggerResource, Verb,
    ps::{CliResource, CliResources},
};
use testlib::{
    API_VERSION, OPERATIONS_ID, PEERING_ID, TAG, WORKSPACE_ID, WORKSPACES_BY_GROUP_ID, names,
};

#[test]
fn generate_with_databricks_module_removes_what_the_cli_does_not_expose() {
    testlib::init_tracing();

    //* Given
    let catalog = testlib::databricks_catalog();

    //* When
    let config = PsConfigGenerator::new(&catalog, "databricks")
        .generate()
        .expect("configuration should generate");

    //* Then
    insta::assert_json_snapshot!(config, @r#"
    {
      "version": "0.1.0",
      "moduleName": "Databricks",
      "readmeFile": "specification/databricks/resource-manager/readme.md",
      "removedSubjects": [
        "Operation",
        "VirtualNetworkPeering"
      ],
      "removedVerbs": [
        {
          "subject": "Workspace",
          "verb": "Remove"
        }
      ]
    }
    "#);
}

#[test]
fn generate_with_version_and_commit_records_them() {
    //* Given
    let catalog = testlib::databricks_catalog();

    //* When
    let config = PsConfigGenerator::new(&catalog, "databricks")
        .version("1.2.0")
        .commit("cbbe228fd422db02b65e2748f83df5f2bcad7581")
        .generate()
        .expect("configuration should generate");

    //* Then
    assert_eq!(config.version, "1.2.0");
    assert_eq!(
        config.commit.as_deref(),
        Some("cbbe228fd422db02b65e2748f83df5f2bcad7581")
    );
}

#[test]
fn build_module_diff_classifies_every_operation_of_the_tag() {
    //* Given
    let provider = testlib::databricks_provider();
    let swagger_resources = provider.resource_map_by_tag(TAG).expect("tag should exist");
    let workspace_cfg = testlib::workspace_configuration();
    let list_cfg = testlib::workspace_list_configuration();

    let mut cli_resources = CliResources::new();
    cli_resources.insert(
        WORKSPACE_ID.to_string(),
        CliResource::new(&workspace_cfg)
            .command(names("databricks workspace show"))
            .command(names("databricks workspace update")),
    );
    cli_resources.insert(
        WORKSPACES_BY_GROUP_ID.to_string(),
        CliResource::new(&list_cfg).command(names("databricks workspace list")),
    );

    //* When
    let diff = ModuleDiff::build(swagger_resources, &cli_resources).expect("diff should build");

    //* Then
    let workspace = &diff.subjects["Workspace"];
    assert!(!workspace.is_removable());
    assert!(!workspace.operations["Workspaces_Get"].removed);
    assert!(!workspace.operations["Workspaces_CreateOrUpdate"].removed);
    assert!(!workspace.operations["Workspaces_Update"].removed, "untouched patch is kept");
    assert!(workspace.operations["Workspaces_Delete"].removed);
    assert!(!workspace.operations["Workspaces_ListByResourceGroup"].removed);
    assert!(
        workspace.operations["Workspaces_ListBySubscription"].removed,
        "the subscription list resource has no CLI counterpart here"
    );

    let put_verbs: Vec<Verb> = workspace.operations["Workspaces_CreateOrUpdate"]
        .variants
        .iter()
        .map(|v| v.verb)
        .collect();
    assert_eq!(
        put_verbs,
        [Verb::New],
        "the kept patch operation provides the update command"
    );

    let list = &workspace.operations["Workspaces_ListByResourceGroup"].variants[0];
    assert_eq!(list.command_name(), "Get-WorkspaceByResourceGroup");

    let operations = &diff.subjects["Operation"];
    assert!(operations.is_removable());
    assert_eq!(operations.operations["Operations_List"].resource_id, OPERATIONS_ID);

    let peering = &diff.subjects["VirtualNetworkPeering"];
    assert!(peering.is_removable());
    assert_eq!(peering.operations["VirtualNetworkPeerings_Get"].resource_id, PEERING_ID);
}

#[test]
fn build_module_diff_with_put_and_no_get_renames_update_to_set() {
    //* Given
    let resource = SwaggerResource::new(WORKSPACE_ID, API_VERSION)
        .operation("Workspaces_CreateOrUpdate", HttpMethod::Put)
        .operation("Workspaces_Delete", HttpMethod::Delete);
    let provider = testlib::databricks_provider().resource("package-put-only", resource);
    let swagger_resources = provider
        .resource_map_by_tag("package-put-only")
        .expect("tag should exist");

    //* When
    let diff = ModuleDiff::build(swagger_resources, &CliResources::new())
        .expect("diff should build");

    //* Then
    let put = &diff.subjects["Workspace"].operations["Workspaces_CreateOrUpdate"];
    let verbs: Vec<Verb> = put.variants.iter().map(|v| v.verb).collect();
    assert_eq!(verbs, [Verb::New, Verb::Set]);
    assert_eq!(diff.removed_subjects(), ["Workspace"]);
}

#[test]
fn generate_with_unknown_module_fails() {
    //* Given
    let catalog = testlib::databricks_catalog();

    //* When
    let result = PsConfigGenerator::new(&catalog, "network").generate();

    //* Then
    assert!(matches!(result, Err(Error::ModuleNotFound(name)) if name == "network"));
}

#[test]
fn generate_with_unknown_profile_fails() {
    //* Given
    let catalog = testlib::databricks_catalog();

    //* When
    let result = PsConfigGenerator::new(&catalog, "databricks")
        .profile("2020-09-01-hybrid")
        .generate();

    //* Then
    assert!(matches!(result, Err(Error::ProfileNotFound { .. })));
}

#[test]
fn generate_with_command_missing_from_the_catalog_fails() {
    //* Given
    let mut catalog = testlib::databricks_catalog();
    catalog
        .commands
        .retain(|command| command.names != names("databricks workspace show"));

    //* When
    let result = PsConfigGenerator::new(&catalog, "databricks").generate();

    //* Then
    assert!(matches!(
        result,
        Err(Error::CommandNotFound(command)) if command == "databricks workspace show"
    ));
}

#[test]
fn generate_with_resources_of_two_providers_fails() {
    //* Given
    let mut catalog = testlib::databricks_catalog();
    catalog.configurations[1].resources[1].rp_name = "Microsoft.Other".to_string();

    //* When
    let result = PsConfigGenerator::new(&catalog, "databricks").generate();

    //* Then
    assert!(
        matches!(result, Err(Error::MultipleModuleTags { ref tags }) if tags.len() == 2),
        "one plane, module and resource provider per PowerShell module"
    );
}

#[test]
fn deserialize_catalog_from_json_generates_the_same_configuration() {
    //* Given
    let catalog = testlib::databricks_catalog();
    let json = serde_json::to_string(&catalog).expect("catalog should serialize");

    //* When
    let loaded: swagcli::Catalog = serde_json::from_str(&json).expect("catalog should deserialize");

    //* Then
    let expected = PsConfigGenerator::new(&catalog, "databricks").generate().expect("generate");
    let actual = PsConfigGenerator::new(&loaded, "databricks").generate().expect("generate");
    assert_eq!(actual, expected);
}
