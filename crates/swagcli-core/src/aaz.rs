//! Command model catalog ("AAZ") types.
//!
//! The CLI commands are generated from command models. A command model names the swagger
//! resources (and api versions) it was built from; the resource configuration holds the
//! commands derived from those resources together with the HTTP operations each command
//! issues.

/// A command in the command model catalog, with every api version it supports.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandSpec {
    /// The command name path, e.g. `["databricks", "workspace", "create"]`.
    pub names: Vec<String>,

    /// The versions of the command.
    #[serde(default)]
    pub versions: Vec<CommandSpecVersion>,
}

impl CommandSpec {
    /// Creates a new `CommandSpec` with no versions.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            versions: Vec::new(),
        }
    }

    /// Adds a version to the command.
    pub fn version(mut self, version: CommandSpecVersion) -> Self {
        self.versions.push(version);
        self
    }

    /// Returns the version named `name`.
    pub fn find_version(&self, name: &str) -> Option<&CommandSpecVersion> {
        self.versions.iter().find(|v| v.name == name)
    }
}

/// One version of a command model.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandSpecVersion {
    /// The version name (an api version such as `2018-04-01`).
    pub name: String,

    /// The swagger resources the version was generated from.
    #[serde(default)]
    pub resources: Vec<ResourceRef>,
}

impl CommandSpecVersion {
    /// Creates a new `CommandSpecVersion` with no resources.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            resources: Vec::new(),
        }
    }

    /// Adds a resource reference to the version.
    pub fn resource(mut self, resource: ResourceRef) -> Self {
        self.resources.push(resource);
        self
    }
}

/// Reference to a swagger resource at one api version.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct ResourceRef {
    /// The plane (`mgmt-plane`, `data-plane`).
    pub plane: String,

    /// The resource id.
    pub id: String,

    /// The api version.
    pub version: String,

    /// The sub-resource path, when the command only touches part of the resource.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subresource: Option<String>,
}

impl ResourceRef {
    /// Creates a new `ResourceRef`.
    pub fn new(
        plane: impl Into<String>,
        id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            plane: plane.into(),
            id: id.into(),
            version: version.into(),
            subresource: None,
        }
    }

    /// Sets the sub-resource path.
    pub fn subresource(mut self, subresource: impl Into<String>) -> Self {
        self.subresource = Some(subresource.into());
        self
    }
}

/// The command configuration generated for a group of swagger resources.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct ResourceConfiguration {
    /// The swagger resources the configuration covers.
    #[serde(default)]
    pub resources: Vec<ConfiguredResource>,

    /// The commands of the configuration.
    #[serde(default)]
    pub commands: Vec<ConfiguredCommand>,
}

impl ResourceConfiguration {
    /// Creates a new empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a resource to the configuration.
    pub fn resource(mut self, resource: ConfiguredResource) -> Self {
        self.resources.push(resource);
        self
    }

    /// Adds a command to the configuration.
    pub fn command(mut self, command: ConfiguredCommand) -> Self {
        self.commands.push(command);
        self
    }

    /// Returns true when the configuration covers `resource_id` at `version` on `plane`.
    pub fn covers(&self, plane: &str, resource_id: &str, version: &str) -> bool {
        self.resources
            .iter()
            .any(|r| r.plane == plane && r.id == resource_id && r.version == version)
    }

    /// Returns the command with the given name path.
    pub fn find_command(&self, names: &[String]) -> Option<&ConfiguredCommand> {
        self.commands.iter().find(|c| c.names == names)
    }
}

/// A swagger resource as recorded in a resource configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfiguredResource {
    /// The plane (`mgmt-plane`, `data-plane`).
    pub plane: String,

    /// The resource id.
    pub id: String,

    /// The api version.
    pub version: String,

    /// The swagger path template.
    #[serde(default)]
    pub path: String,

    /// The swagger module path segments.
    #[serde(rename = "modNames")]
    pub mod_names: Vec<String>,

    /// The resource provider name.
    #[serde(rename = "rpName")]
    pub rp_name: String,

    /// The sub-resource path, when only part of the resource is configured.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub subresource: Option<String>,
}

impl ConfiguredResource {
    /// Creates a new `ConfiguredResource`.
    pub fn new(
        plane: impl Into<String>,
        id: impl Into<String>,
        version: impl Into<String>,
        mod_names: Vec<String>,
        rp_name: impl Into<String>,
    ) -> Self {
        Self {
            plane: plane.into(),
            id: id.into(),
            version: version.into(),
            path: String::new(),
            mod_names,
            rp_name: rp_name.into(),
            subresource: None,
        }
    }

    /// Sets the swagger path template.
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Sets the sub-resource path.
    pub fn subresource(mut self, subresource: impl Into<String>) -> Self {
        self.subresource = Some(subresource.into());
        self
    }

    /// Returns the `(plane, module names, resource provider)` tuple the resource belongs to.
    ///
    /// Module names are joined with `/`.
    pub fn module_tag(&self) -> (String, String, String) {
        (
            self.plane.clone(),
            self.mod_names.join("/"),
            self.rp_name.clone(),
        )
    }
}

/// A command of a resource configuration.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ConfiguredCommand {
    /// The command name path.
    pub names: Vec<String>,

    /// The command version.
    pub version: String,

    /// The operations the command runs, in order.
    #[serde(default)]
    pub operations: Vec<CommandOperation>,
}

impl ConfiguredCommand {
    /// Creates a new `ConfiguredCommand` with no operations.
    pub fn new(names: Vec<String>, version: impl Into<String>) -> Self {
        Self {
            names,
            version: version.into(),
            operations: Vec::new(),
        }
    }

    /// Adds an operation to the command.
    pub fn operation(mut self, operation: CommandOperation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Returns the operation ids of the command's HTTP operations.
    pub fn http_operation_ids(&self) -> impl Iterator<Item = &str> {
        self.operations.iter().filter_map(|op| match op {
            CommandOperation::Http { operation_id } => Some(operation_id.as_str()),
            CommandOperation::Instance => None,
        })
    }
}

/// An operation run by a command.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CommandOperation {
    /// A call to a swagger operation.
    Http {
        #[serde(rename = "operationId")]
        operation_id: String,
    },
    /// A client-side step on the instance (e.g. the merge step of a generic update).
    Instance,
}

impl CommandOperation {
    /// Creates an HTTP operation.
    pub fn http(operation_id: impl Into<String>) -> Self {
        Self::Http {
            operation_id: operation_id.into(),
        }
    }
}
