//! Integration tests for operation group name resolution.

use swagcli::{HttpMethod, SwaggerResource};

fn init() {
    testlib::init_tracing();
}

#[test]
fn resolve_with_one_malformed_operation_id_returns_none() {
    init();

    //* Given
    let resource = testlib::workspace().operation("bad operation", HttpMethod::Post);

    //* When
    let group_name = swagcli::resolve(&resource);

    //* Then
    assert_eq!(
        group_name, None,
        "a single unparseable operation id poisons the whole resource"
    );
}

#[test]
fn resolve_with_well_formed_operation_ids_returns_the_singular_group() {
    init();

    //* When
    let group_name = swagcli::resolve(&testlib::workspace());

    //* Then
    assert_eq!(group_name.as_deref(), Some("Workspace"));
}

#[test]
fn resolve_with_verb_group_operation_ids_strips_the_verb() {
    init();

    //* Given
    let resource = SwaggerResource::new(
        "/subscriptions/{}/providers/microsoft.hdinsight/clusters",
        "2021-06-01",
    )
    .operation("ListClusters", HttpMethod::Get)
    .operation("Get_Clusters", HttpMethod::Get);

    //* When
    let group_name = swagcli::resolve(&resource);

    //* Then
    assert_eq!(group_name.as_deref(), Some("Cluster"));
}

#[test]
fn resolve_with_disagreeing_operations_prefers_the_name_closest_to_the_resource_id() {
    init();

    //* Given
    let resource = SwaggerResource::new(
        "/subscriptions/{}/resourcegroups/{}/providers/microsoft.compute/virtualmachines/{}",
        "2023-03-01",
    )
    .operation("Usage_List", HttpMethod::Get)
    .operation("VirtualMachines_Get", HttpMethod::Get);

    //* When
    let group_name = swagcli::resolve(&resource);

    //* Then
    assert_eq!(group_name.as_deref(), Some("VirtualMachine"));
}
