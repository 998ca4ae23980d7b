//! Read-only access to the command model catalog and the swagger specs.
//!
//! Generation only ever reads from these sources. The traits are the seam where a
//! repository-backed loader plugs in; [`Catalog`] is the in-memory implementation, loaded
//! from a JSON document.

use super::{CliModule, CommandSpec, ResourceConfiguration, ResourceProvider, map::Map};

/// Lookup of CLI modules, command models and resource configurations.
pub trait CommandCatalog {
    /// Returns the CLI module named `name`.
    fn load_module(&self, name: &str) -> Option<&CliModule>;

    /// Returns the command model with the given name path.
    fn find_command(&self, names: &[String]) -> Option<&CommandSpec>;

    /// Returns the resource configuration that covers `resource_id` at `version`.
    fn resource_configuration(
        &self,
        plane: &str,
        resource_id: &str,
        version: &str,
    ) -> Option<&ResourceConfiguration>;
}

/// Lookup of swagger resource providers.
pub trait SwaggerCatalog {
    /// Returns the resource provider `rp_name` of the swagger module `mod_names`.
    fn resource_provider(
        &self,
        plane: &str,
        mod_names: &[String],
        rp_name: &str,
    ) -> Option<&ResourceProvider>;
}

/// In-memory catalog holding CLI modules, command models, resource configurations and
/// swagger resource providers.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Catalog {
    /// CLI modules keyed by module name.
    #[serde(default)]
    pub modules: Map<String, CliModule>,

    /// Command models.
    #[serde(default)]
    pub commands: Vec<CommandSpec>,

    /// Resource configurations.
    #[serde(default)]
    pub configurations: Vec<ResourceConfiguration>,

    /// Swagger resource providers.
    #[serde(default)]
    pub providers: Vec<ResourceProvider>,
}

impl Catalog {
    /// Creates a new empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a CLI module.
    pub fn module(mut self, module: CliModule) -> Self {
        self.modules.insert(module.name.clone(), module);
        self
    }

    /// Adds a command model.
    pub fn command(mut self, command: CommandSpec) -> Self {
        self.commands.push(command);
        self
    }

    /// Adds a resource configuration.
    pub fn configuration(mut self, configuration: ResourceConfiguration) -> Self {
        self.configurations.push(configuration);
        self
    }

    /// Adds a swagger resource provider.
    pub fn provider(mut self, provider: ResourceProvider) -> Self {
        self.providers.push(provider);
        self
    }
}

impl CommandCatalog for Catalog {
    fn load_module(&self, name: &str) -> Option<&CliModule> {
        self.modules.get(name)
    }

    fn find_command(&self, names: &[String]) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.names == names)
    }

    fn resource_configuration(
        &self,
        plane: &str,
        resource_id: &str,
        version: &str,
    ) -> Option<&ResourceConfiguration> {
        self.configurations
            .iter()
            .find(|cfg| cfg.covers(plane, resource_id, version))
    }
}

impl SwaggerCatalog for Catalog {
    fn resource_provider(
        &self,
        plane: &str,
        mod_names: &[String],
        rp_name: &str,
    ) -> Option<&ResourceProvider> {
        self.providers
            .iter()
            .find(|rp| rp.plane == plane && rp.mod_names == mod_names && rp.name == rp_name)
    }
}
