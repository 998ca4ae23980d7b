//! CLI command profiles.
//!
//! A profile is the tree of command groups and commands a CLI module registers, each command
//! pinned to one api version. Profiles are built from a flat map of command paths to
//! versions, in any order.

use std::collections::HashMap;

use super::{CommandCatalog, Error, ResourceProvider, Result, map::Map};

/// A command name path, e.g. `["databricks", "workspace", "create"]`.
pub type CommandPath = Vec<String>;

/// Command paths mapped to the version each command is registered with.
pub type CommandsMap = Map<CommandPath, String>;

/// A CLI module and the profiles it registers commands in.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CliModule {
    /// The module (or extension) name.
    pub name: String,

    /// Profiles keyed by profile name.
    #[serde(default)]
    pub profiles: Map<String, Profile>,
}

impl CliModule {
    /// Creates a new `CliModule` with no profiles.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profiles: Map::new(),
        }
    }

    /// Adds a profile, replacing any profile with the same name.
    pub fn profile(mut self, profile: Profile) -> Self {
        self.profiles.insert(profile.name.clone(), profile);
        self
    }

    /// Returns the profile named `name`.
    pub fn find_profile(&self, name: &str) -> Option<&Profile> {
        self.profiles.get(name)
    }
}

/// The root of a command tree.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    /// The profile name (e.g. `latest`).
    pub name: String,

    /// Top level command groups keyed by name.
    #[serde(rename = "commandGroups", default)]
    pub command_groups: Map<String, CommandGroup>,
}

impl Profile {
    /// Creates a new empty profile.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command_groups: Map::new(),
        }
    }

    /// Builds a profile from a flat map of command paths to versions.
    ///
    /// Every command group on the way to a command is created exactly once, however the
    /// commands are ordered. Commands need at least one enclosing group.
    pub fn from_commands(name: impl Into<String>, commands: &CommandsMap) -> Result<Self> {
        let root_names: CommandPath = Vec::new();
        let mut table: HashMap<CommandPath, GroupNode> = HashMap::new();
        table.insert(root_names.clone(), GroupNode::default());

        for (names, version) in commands {
            let Some((command_name, group_names)) = names.split_last() else {
                return Err(Error::InvalidCommandPath {
                    path: String::new(),
                    reason: "command path is empty",
                });
            };
            if group_names.is_empty() {
                return Err(Error::InvalidCommandPath {
                    path: names.join(" "),
                    reason: "commands must belong to a command group",
                });
            }

            let mut group_names = group_names.to_vec();
            table
                .entry(group_names.clone())
                .or_default()
                .commands
                .insert(
                    command_name.clone(),
                    ProfileCommand::new(names.clone(), version.clone()),
                );

            // Link the group to its parent, then keep climbing until an ancestor that was
            // already in the table is reached.
            while let Some(child) = group_names.pop() {
                let linked = table.contains_key(&group_names);
                let parent = table.entry(group_names.clone()).or_default();
                if !parent.groups.contains(&child) {
                    parent.groups.push(child);
                }
                if linked {
                    break;
                }
            }
        }

        let root = table.remove(&root_names).unwrap_or_default();
        let mut command_groups = Map::new();
        for child in root.groups {
            let group = assemble(vec![child.clone()], &mut table);
            command_groups.insert(child, group);
        }

        Ok(Self {
            name: name.into(),
            command_groups,
        })
    }

    /// Returns every command of the profile, depth-first, a group's commands before its
    /// child groups.
    pub fn commands(&self) -> Vec<&ProfileCommand> {
        let mut commands = Vec::new();
        for group in self.command_groups.values() {
            group.collect_commands(&mut commands);
        }
        commands
    }
}

/// A command group of a profile.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CommandGroup {
    /// The full name path of the group.
    pub names: Vec<String>,

    /// Child command groups keyed by name.
    #[serde(
        rename = "commandGroups",
        default,
        skip_serializing_if = "Map::is_empty"
    )]
    pub command_groups: Map<String, CommandGroup>,

    /// Commands keyed by name.
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub commands: Map<String, ProfileCommand>,
}

impl CommandGroup {
    /// Creates a new empty command group.
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            command_groups: Map::new(),
            commands: Map::new(),
        }
    }

    fn collect_commands<'a>(&'a self, commands: &mut Vec<&'a ProfileCommand>) {
        commands.extend(self.commands.values());
        for group in self.command_groups.values() {
            group.collect_commands(commands);
        }
    }
}

/// A command registered in a profile.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ProfileCommand {
    /// The full name path of the command.
    pub names: Vec<String>,

    /// The api version the command is generated from.
    pub version: String,

    /// Whether the command is registered in the CLI.
    #[serde(default = "registered_default")]
    pub registered: bool,
}

impl ProfileCommand {
    /// Creates a new registered command.
    pub fn new(names: Vec<String>, version: impl Into<String>) -> Self {
        Self {
            names,
            version: version.into(),
            registered: true,
        }
    }
}

fn registered_default() -> bool {
    true
}

/// Builder for [`Profile`].
///
/// Collects `(command path, version)` pairs and builds the tree with
/// [`Profile::from_commands`].
#[derive(Debug, Clone, Default)]
pub struct ProfileBuilder {
    name: String,
    commands: Vec<(CommandPath, String)>,
}

impl ProfileBuilder {
    /// Creates a new `ProfileBuilder` for the profile `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    /// Adds a command.
    pub fn command<I, S>(mut self, names: I, version: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.commands.push((names, version.into()));
        self
    }

    /// Builds the profile.
    ///
    /// Fails when a command is added twice with different versions, or when a command path
    /// cannot be placed in the tree.
    pub fn build(self) -> Result<Profile> {
        let mut commands = CommandsMap::new();
        for (names, version) in self.commands {
            insert_command(&mut commands, names, version)?;
        }
        Profile::from_commands(self.name, &commands)
    }
}

/// Inserts a command into `commands`, rejecting a second, different version of the same
/// command.
pub fn insert_command(
    commands: &mut CommandsMap,
    names: CommandPath,
    version: String,
) -> Result<()> {
    if let Some(existing) = commands.get(&names) {
        if *existing != version {
            return Err(Error::CommandVersionConflict {
                command: names.join(" "),
                first: existing.clone(),
                second: version,
            });
        }
        return Ok(());
    }
    commands.insert(names, version);
    Ok(())
}

/// Collects the commands generated for the resources of a swagger tag.
///
/// Each resource of the tag must come in exactly one api version. Resources without a
/// resource configuration in the catalog are logged and skipped.
pub fn collect_tag_commands(
    catalog: &impl CommandCatalog,
    provider: &ResourceProvider,
    tag: &str,
) -> Result<CommandsMap> {
    let resource_map = provider
        .resource_map_by_tag(tag)
        .filter(|resources| !resources.is_empty())
        .ok_or_else(|| Error::TagNotFound(tag.to_string()))?;

    let mut commands = CommandsMap::new();
    for (resource_id, versions) in resource_map {
        let version = match versions.len() {
            0 => continue,
            1 => versions.keys().next().cloned().unwrap_or_default(),
            _ => {
                return Err(Error::MultipleApiVersions {
                    tag: tag.to_string(),
                    resource_id: resource_id.clone(),
                    versions: versions.keys().cloned().collect(),
                });
            }
        };

        let Some(cfg) = catalog.resource_configuration(&provider.plane, resource_id, &version)
        else {
            tracing::error!(
                resource_id = %resource_id,
                version = %version,
                "Command models not exist for resource"
            );
            continue;
        };

        for command in &cfg.commands {
            insert_command(&mut commands, command.names.clone(), command.version.clone())?;
        }
    }

    Ok(commands)
}

#[derive(Debug, Default)]
struct GroupNode {
    groups: Vec<String>,
    commands: Map<String, ProfileCommand>,
}

fn assemble(names: CommandPath, table: &mut HashMap<CommandPath, GroupNode>) -> CommandGroup {
    let node = table.remove(&names).unwrap_or_default();
    let mut group = CommandGroup::new(names.clone());
    group.commands = node.commands;
    for child in node.groups {
        let mut child_names = names.clone();
        child_names.push(child.clone());
        let child_group = assemble(child_names, table);
        group.command_groups.insert(child, child_group);
    }
    group
}
