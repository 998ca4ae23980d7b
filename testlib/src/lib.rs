//! Shared fixtures for the swagcli integration tests.
//!
//! The fixtures model the `Microsoft.Databricks` resource provider: five swagger resources
//! under the `package-2018-04-01` tag, and a CLI module exposing the workspace commands only.

use swagcli_core::{
    Catalog, CliModule, CommandOperation, CommandSpec, CommandSpecVersion, ConfiguredCommand,
    ConfiguredResource, HttpMethod, ProfileBuilder, ResourceConfiguration, ResourceProvider,
    ResourceRef, SwaggerResource,
};

pub const PLANE: &str = "mgmt-plane";
pub const RP_NAME: &str = "Microsoft.Databricks";
pub const TAG: &str = "package-2018-04-01";
pub const API_VERSION: &str = "2018-04-01";

pub const WORKSPACE_ID: &str =
    "/subscriptions/{}/resourcegroups/{}/providers/microsoft.databricks/workspaces/{}";
pub const WORKSPACES_BY_GROUP_ID: &str =
    "/subscriptions/{}/resourcegroups/{}/providers/microsoft.databricks/workspaces";
pub const WORKSPACES_BY_SUBSCRIPTION_ID: &str =
    "/subscriptions/{}/providers/microsoft.databricks/workspaces";
pub const OPERATIONS_ID: &str = "/providers/microsoft.databricks/operations";
pub const PEERING_ID: &str = "/subscriptions/{}/resourcegroups/{}/providers/microsoft.databricks/workspaces/{}/virtualnetworkpeerings/{}";

/// Installs a test-friendly `tracing` subscriber, once per test binary.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Builds a command name path.
pub fn names(path: &str) -> Vec<String> {
    path.split(' ').map(str::to_string).collect()
}

/// The workspace resource: get, create or update, update and delete.
pub fn workspace() -> SwaggerResource {
    SwaggerResource::new(WORKSPACE_ID, API_VERSION)
        .path("/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/Microsoft.Databricks/workspaces/{workspaceName}")
        .file_path("specification/databricks/resource-manager/Microsoft.Databricks/stable/2018-04-01/databricks.json")
        .operation("Workspaces_Get", HttpMethod::Get)
        .operation("Workspaces_Delete", HttpMethod::Delete)
        .operation("Workspaces_CreateOrUpdate", HttpMethod::Put)
        .operation("Workspaces_Update", HttpMethod::Patch)
}

/// The swagger resource provider with every resource of the default tag.
pub fn databricks_provider() -> ResourceProvider {
    ResourceProvider::new(PLANE, vec!["databricks".to_string()], RP_NAME, TAG)
        .readme_path(
            "/home/dev/azure-rest-api-specs/specification/databricks/resource-manager/readme.md",
        )
        .resource(TAG, workspace())
        .resource(
            TAG,
            SwaggerResource::new(WORKSPACES_BY_GROUP_ID, API_VERSION)
                .operation("Workspaces_ListByResourceGroup", HttpMethod::Get),
        )
        .resource(
            TAG,
            SwaggerResource::new(WORKSPACES_BY_SUBSCRIPTION_ID, API_VERSION)
                .operation("Workspaces_ListBySubscription", HttpMethod::Get),
        )
        .resource(
            TAG,
            SwaggerResource::new(OPERATIONS_ID, API_VERSION)
                .operation("Operations_List", HttpMethod::Get),
        )
        .resource(
            TAG,
            SwaggerResource::new(PEERING_ID, API_VERSION)
                .operation("VirtualNetworkPeerings_Get", HttpMethod::Get)
                .operation("VirtualNetworkPeerings_Delete", HttpMethod::Delete)
                .operation("VirtualNetworkPeerings_CreateOrUpdate", HttpMethod::Put),
        )
}

/// The resource configuration of the workspace commands.
pub fn workspace_configuration() -> ResourceConfiguration {
    ResourceConfiguration::new()
        .resource(configured_resource(WORKSPACE_ID))
        .command(
            ConfiguredCommand::new(names("databricks workspace show"), API_VERSION)
                .operation(CommandOperation::http("Workspaces_Get")),
        )
        .command(
            ConfiguredCommand::new(names("databricks workspace create"), API_VERSION)
                .operation(CommandOperation::http("Workspaces_CreateOrUpdate")),
        )
        .command(
            ConfiguredCommand::new(names("databricks workspace update"), API_VERSION)
                .operation(CommandOperation::http("Workspaces_Get"))
                .operation(CommandOperation::Instance)
                .operation(CommandOperation::http("Workspaces_CreateOrUpdate")),
        )
        .command(
            ConfiguredCommand::new(names("databricks workspace delete"), API_VERSION)
                .operation(CommandOperation::http("Workspaces_Delete")),
        )
}

/// The resource configuration of the workspace list command.
pub fn workspace_list_configuration() -> ResourceConfiguration {
    ResourceConfiguration::new()
        .resource(configured_resource(WORKSPACES_BY_GROUP_ID))
        .resource(configured_resource(WORKSPACES_BY_SUBSCRIPTION_ID))
        .command(
            ConfiguredCommand::new(names("databricks workspace list"), API_VERSION)
                .operation(CommandOperation::http("Workspaces_ListByResourceGroup"))
                .operation(CommandOperation::http("Workspaces_ListBySubscription")),
        )
}

/// The full catalog: the `databricks` CLI module, whose `latest` profile registers every
/// workspace command except `delete`, the command models, their resource configurations and
/// the swagger resource provider.
pub fn databricks_catalog() -> Catalog {
    let profile = ProfileBuilder::new("latest")
        .command(names("databricks workspace show"), API_VERSION)
        .command(names("databricks workspace create"), API_VERSION)
        .command(names("databricks workspace update"), API_VERSION)
        .command(names("databricks workspace list"), API_VERSION)
        .build()
        .expect("fixture profile should build");

    let mut catalog = Catalog::new()
        .module(CliModule::new("databricks").profile(profile))
        .configuration(workspace_configuration())
        .configuration(workspace_list_configuration())
        .provider(databricks_provider());

    for command in ["show", "create", "update", "delete"] {
        let path = format!("databricks workspace {command}");
        catalog = catalog.command(command_spec(&path, WORKSPACE_ID));
    }
    catalog.command(command_spec("databricks workspace list", WORKSPACES_BY_GROUP_ID))
}

fn command_spec(path: &str, resource_id: &str) -> CommandSpec {
    CommandSpec::new(names(path)).version(
        CommandSpecVersion::new(API_VERSION)
            .resource(ResourceRef::new(PLANE, resource_id, API_VERSION)),
    )
}

fn configured_resource(resource_id: &str) -> ConfiguredResource {
    ConfiguredResource::new(
        PLANE,
        resource_id,
        API_VERSION,
        vec!["databricks".to_string()],
        RP_NAME,
    )
}
