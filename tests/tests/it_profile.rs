//! Integration tests for building CLI command profiles.

use swagcli::{
    Catalog, Error, Profile, ProfileBuilder, ResourceProvider, SwaggerResource, collect_tag_commands,
    swagcli_core::{
        CommandOperation, ConfiguredCommand, ConfiguredResource, ResourceConfiguration,
    },
};
use testlib::{API_VERSION, PLANE, RP_NAME, TAG, WORKSPACE_ID, names};

#[test]
fn build_profile_with_nested_groups_serializes_the_tree() {
    //* Given
    let builder = ProfileBuilder::new("latest")
        .command(["vm", "show"], "2021-01-01")
        .command(["vm", "disk", "attach"], "2021-01-01");

    //* When
    let profile = builder.build().expect("profile should build");

    //* Then
    insta::assert_json_snapshot!(profile, @r#"
    {
      "name": "latest",
      "commandGroups": {
        "vm": {
          "names": [
            "vm"
          ],
          "commandGroups": {
            "disk": {
              "names": [
                "vm",
                "disk"
              ],
              "commands": {
                "attach": {
                  "names": [
                    "vm",
                    "disk",
                    "attach"
                  ],
                  "version": "2021-01-01",
                  "registered": true
                }
              }
            }
          },
          "commands": {
            "show": {
              "names": [
                "vm",
                "show"
              ],
              "version": "2021-01-01",
              "registered": true
            }
          }
        }
      }
    }
    "#);
}

#[test]
fn build_profile_with_deep_command_creates_missing_ancestors() {
    //* Given
    let builder = ProfileBuilder::new("latest")
        .command(["network", "vnet", "subnet", "nat", "show"], "2022-01-01")
        .command(["network", "vnet", "list"], "2022-01-01");

    //* When
    let profile = builder.build().expect("profile should build");

    //* Then
    let vnet = &profile.command_groups["network"].command_groups["vnet"];
    assert_eq!(vnet.commands.len(), 1);
    let nat = &vnet.command_groups["subnet"].command_groups["nat"];
    assert_eq!(nat.names, names("network vnet subnet nat"));
    assert_eq!(nat.commands["show"].version, "2022-01-01");

    let commands: Vec<String> = profile.commands().iter().map(|c| c.names.join(" ")).collect();
    assert_eq!(
        commands,
        ["network vnet list", "network vnet subnet nat show"],
        "a group's commands come before its child groups"
    );
}

#[test]
fn collect_tag_commands_with_databricks_tag_returns_every_configured_command() {
    testlib::init_tracing();

    //* Given
    let catalog = testlib::databricks_catalog();
    let provider = testlib::databricks_provider();

    //* When
    let commands = collect_tag_commands(&catalog, &provider, TAG).expect("commands should collect");
    let profile = Profile::from_commands("latest", &commands).expect("profile should build");

    //* Then
    let workspace = &profile.command_groups["databricks"].command_groups["workspace"];
    let mut registered: Vec<&str> = workspace.commands.keys().map(String::as_str).collect();
    registered.sort_unstable();
    assert_eq!(
        registered,
        ["create", "delete", "list", "show", "update"],
        "resources without a configuration are skipped"
    );
    assert!(workspace.commands.values().all(|c| c.version == API_VERSION));
}

#[test]
fn collect_tag_commands_with_unknown_tag_fails() {
    //* Given
    let catalog = testlib::databricks_catalog();
    let provider = testlib::databricks_provider();

    //* When
    let result = collect_tag_commands(&catalog, &provider, "package-2023-02-01");

    //* Then
    assert!(matches!(result, Err(Error::TagNotFound(tag)) if tag == "package-2023-02-01"));
}

#[test]
fn collect_tag_commands_with_two_api_versions_of_a_resource_fails() {
    //* Given
    let catalog = testlib::databricks_catalog();
    let provider = ResourceProvider::new(PLANE, vec!["databricks".into()], RP_NAME, TAG)
        .resource(TAG, testlib::workspace())
        .resource(TAG, SwaggerResource::new(WORKSPACE_ID, "2023-02-01"));

    //* When
    let result = collect_tag_commands(&catalog, &provider, TAG);

    //* Then
    assert!(
        matches!(result, Err(Error::MultipleApiVersions { ref versions, .. }) if versions.len() == 2),
        "a tag must pin one api version per resource"
    );
}

#[test]
fn collect_tag_commands_with_command_in_two_versions_fails() {
    //* Given
    let other_id = "/subscriptions/{}/providers/microsoft.databricks/workspaces";
    let configured = |id: &str| {
        ConfiguredResource::new(PLANE, id, API_VERSION, vec!["databricks".into()], RP_NAME)
    };
    let catalog = Catalog::new()
        .configuration(
            ResourceConfiguration::new()
                .resource(configured(WORKSPACE_ID))
                .command(
                    ConfiguredCommand::new(names("databricks workspace show"), "2018-04-01")
                        .operation(CommandOperation::http("Workspaces_Get")),
                ),
        )
        .configuration(
            ResourceConfiguration::new()
                .resource(configured(other_id))
                .command(ConfiguredCommand::new(
                    names("databricks workspace show"),
                    "2021-04-01-preview",
                )),
        );
    let provider = ResourceProvider::new(PLANE, vec!["databricks".into()], RP_NAME, TAG)
        .resource(TAG, SwaggerResource::new(WORKSPACE_ID, API_VERSION))
        .resource(TAG, SwaggerResource::new(other_id, API_VERSION));

    //* When
    let result = collect_tag_commands(&catalog, &provider, TAG);

    //* Then
    assert!(matches!(
        result,
        Err(Error::CommandVersionConflict { ref command, .. }) if command == "databricks workspace show"
    ));
}
