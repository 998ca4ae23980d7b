use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use swagcli::{
    Catalog, CommandsMap, Profile, ProfileBuilder, PsConfigGenerator, SwaggerCatalog,
    SwaggerResource, collect_tag_commands, config::Config,
};
use tracing_subscriber::EnvFilter;

/// Derive CLI and PowerShell command names from swagger definitions.
#[derive(Debug, Parser)]
#[command(name = "swagcli", version, about, long_about = None)]
struct Cli {
    /// Log level filter (error, warn, info, debug, trace). Defaults to `RUST_LOG`, then `warn`
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Infer the command name variants of an operation id
    Infer {
        /// The operation id, e.g. `Workspaces_ListByResourceGroup`
        operation_id: String,

        /// The operation group name of the operation's resource
        #[arg(short, long)]
        group: String,
    },

    /// Resolve the operation group name of a swagger resource
    GroupName {
        /// Path to a JSON swagger resource
        #[arg(short, long)]
        resource: PathBuf,
    },

    /// Build a command profile from a list of commands
    Profile {
        /// Path to a JSON list of `{"names": [...], "version": "..."}` commands
        #[arg(long)]
        commands: PathBuf,

        /// The profile name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Build the command profile generated for a swagger tag
    SwaggerTag {
        /// Path to a JSON catalog
        #[arg(long)]
        catalog: PathBuf,

        /// The plane of the resource provider
        #[arg(long, default_value = "mgmt-plane")]
        plane: String,

        /// The swagger module, segments separated by `/`
        #[arg(short, long)]
        module: String,

        /// The resource provider name, e.g. `Microsoft.Databricks`
        #[arg(long)]
        rp: String,

        /// The readme tag, e.g. `package-2018-04-01`
        #[arg(short, long)]
        tag: String,

        /// The profile name
        #[arg(short, long)]
        name: Option<String>,
    },

    /// Generate the PowerShell configuration of a CLI module
    PsConfig {
        /// Path to a JSON catalog
        #[arg(long)]
        catalog: PathBuf,

        /// The CLI module name
        #[arg(short, long)]
        module: String,

        /// The CLI profile to read the module commands from
        #[arg(short, long)]
        profile: Option<String>,
    },
}

#[derive(Debug, serde::Deserialize)]
struct CommandEntry {
    names: Vec<String>,
    version: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    tracing::debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Infer {
            operation_id,
            group,
        } => {
            let variants = swagcli::infer(&operation_id, &group)?;
            print_json(&variants)
        }
        Commands::GroupName { resource } => {
            let resource: SwaggerResource = read_json(&resource)?;
            print_json(&swagcli::resolve(&resource))
        }
        Commands::Profile { commands, name } => {
            let entries: Vec<CommandEntry> = read_json(&commands)?;
            let profile = config.resolve_profile(name.as_deref())?;
            let profile = entries
                .into_iter()
                .fold(ProfileBuilder::new(profile), |builder, entry| {
                    builder.command(entry.names, entry.version)
                })
                .build()?;
            print_json(&profile)
        }
        Commands::SwaggerTag {
            catalog,
            plane,
            module,
            rp,
            tag,
            name,
        } => {
            let catalog: Catalog = read_json(&catalog)?;
            let mod_names: Vec<String> = module.split('/').map(str::to_string).collect();
            let provider = catalog
                .resource_provider(&plane, &mod_names, &rp)
                .with_context(|| format!("resource provider `{rp}` not found in `{module}`"))?;
            let commands: CommandsMap = collect_tag_commands(&catalog, provider, &tag)?;
            let profile = config.resolve_profile(name.as_deref())?;
            print_json(&Profile::from_commands(profile, &commands)?)
        }
        Commands::PsConfig {
            catalog,
            module,
            profile,
        } => {
            let catalog: Catalog = read_json(&catalog)?;
            let profile = config.resolve_profile(profile.as_deref())?;
            let mut generator = PsConfigGenerator::new(&catalog, module)
                .profile(profile)
                .version(config.ps.version.as_str());
            if let Some(commit) = &config.ps.commit {
                generator = generator.commit(commit.as_str());
            }
            print_json(&generator.generate()?)
        }
    }
}

fn init_tracing(level: Option<&str>) {
    let filter = match level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read `{}`", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse `{}`", path.display()))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{json}");
    Ok(())
}
