//! PowerShell configuration generation for a CLI module.

use swagcli_core::{CommandCatalog, Error, Map, Result, SwaggerCatalog};
use swagcli_naming::inflect;

use crate::{
    config::{DEFAULT_MODULE_VERSION, PsConfiguration},
    module_diff::{CliResource, CliResources, ModuleDiff},
};

/// Name of the CLI profile the module commands are read from by default.
pub const DEFAULT_PROFILE: &str = "latest";

/// `(plane, module names joined with "/", resource provider)`.
type ModuleTag = (String, String, String);

/// Generates the PowerShell configuration of a CLI module.
///
/// The commands of the module profile are traced back through the command catalog to the
/// swagger resource provider they come from. The provider's default tag is then diffed
/// against the commands to find what the PowerShell module should leave out.
#[derive(Debug)]
pub struct PsConfigGenerator<'a, C> {
    catalog: &'a C,
    module_name: String,
    profile: String,
    version: String,
    commit: Option<String>,
}

impl<'a, C> PsConfigGenerator<'a, C>
where
    C: CommandCatalog + SwaggerCatalog,
{
    /// Creates a new generator for the CLI module `module_name`.
    pub fn new(catalog: &'a C, module_name: impl Into<String>) -> Self {
        Self {
            catalog,
            module_name: module_name.into(),
            profile: DEFAULT_PROFILE.to_string(),
            version: DEFAULT_MODULE_VERSION.to_string(),
            commit: None,
        }
    }

    /// Sets the CLI profile to read the commands from.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Sets the module version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Sets the specs repository commit.
    pub fn commit(mut self, commit: impl Into<String>) -> Self {
        self.commit = Some(commit.into());
        self
    }

    /// Generates the configuration.
    pub fn generate(&self) -> Result<PsConfiguration> {
        let _span = tracing::info_span!("ps_config", module = %self.module_name).entered();

        let cli_profile = self.cli_profile()?;
        if cli_profile.len() > 1 {
            return Err(Error::MultipleModuleTags {
                tags: cli_profile
                    .keys()
                    .map(|(plane, mod_names, rp_name)| format!("{plane}/{mod_names}/{rp_name}"))
                    .collect(),
            });
        }
        let Some(((plane, mod_names, rp_name), cli_resources)) = cli_profile.into_iter().next()
        else {
            return Err(Error::MultipleModuleTags { tags: Vec::new() });
        };

        let mod_names: Vec<String> = mod_names.split('/').map(str::to_string).collect();
        let provider = self
            .catalog
            .resource_provider(&plane, &mod_names, &rp_name)
            .ok_or_else(|| Error::ResourceProviderNotFound(rp_name.clone()))?;
        let swagger_resources = provider
            .resource_map_by_tag(&provider.default_tag)
            .filter(|resources| !resources.is_empty())
            .ok_or_else(|| Error::TagNotFound(provider.default_tag.clone()))?;

        tracing::debug!(
            plane = %plane,
            resource_provider = %rp_name,
            tag = %provider.default_tag,
            resources = swagger_resources.len(),
            "Diffing the default tag against the CLI commands"
        );
        let diff = ModuleDiff::build(swagger_resources, &cli_resources)?;

        let module_name = mod_names.first().map(String::as_str).unwrap_or_default();
        Ok(PsConfiguration {
            commit: self.commit.clone(),
            version: self.version.clone(),
            module_name: inflect::capitalize(module_name).into_owned(),
            readme_file: provider.readme_relative_path(),
            removed_subjects: diff.removed_subjects(),
            removed_verbs: diff.removed_verbs(),
        })
    }

    /// Groups the resources the profile commands are generated from by module tag.
    fn cli_profile(&self) -> Result<Map<ModuleTag, CliResources<'a>>> {
        let module = self
            .catalog
            .load_module(&self.module_name)
            .ok_or_else(|| Error::ModuleNotFound(self.module_name.clone()))?;
        let profile = module
            .find_profile(&self.profile)
            .ok_or_else(|| Error::ProfileNotFound {
                module: self.module_name.clone(),
                profile: self.profile.clone(),
            })?;

        let mut cli_profile: Map<ModuleTag, CliResources<'a>> = Map::new();
        for command in profile.commands() {
            let command_name = command.names.join(" ");
            let spec = self
                .catalog
                .find_command(&command.names)
                .ok_or_else(|| Error::CommandNotFound(command_name.clone()))?;
            let version = spec
                .find_version(&command.version)
                .ok_or_else(|| Error::VersionNotFound {
                    command: command_name.clone(),
                    version: command.version.clone(),
                })?;
            let Some(resource) = version.resources.first() else {
                tracing::warn!(
                    command = %command_name,
                    version = %command.version,
                    "Command version has no swagger resource, skipping"
                );
                continue;
            };
            let cfg = self
                .catalog
                .resource_configuration(&resource.plane, &resource.id, &resource.version)
                .ok_or_else(|| Error::ResourceConfigurationNotFound {
                    resource_id: resource.id.clone(),
                    version: resource.version.clone(),
                })?;

            for cfg_resource in &cfg.resources {
                let cli_resource = cli_profile
                    .entry(cfg_resource.module_tag())
                    .or_default()
                    .entry(cfg_resource.id.clone())
                    .or_insert_with(|| CliResource::new(cfg).path(cfg_resource.path.clone()));
                cli_resource.commands.push(command.names.clone());
                if let Some(subresource) = &cfg_resource.subresource {
                    cli_resource.subresources.push(subresource.clone());
                }
            }
        }

        Ok(cli_profile)
    }
}
