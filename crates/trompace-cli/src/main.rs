use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use trompace_client::Config;
use trompace_core::mutations::{EntityType, Relationship};
use trompace_core::LinkVerb;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "trompace", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the client config file (default: $TROMPACE_CLIENT_CONFIG,
    /// then ~/.config/trompace/client.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Show or initialise the client configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
    /// Print a CE bearer token, requesting a new one if needed
    ///
    /// A cached token is reused until it expires. The token is written to
    /// the cache file named after the configured host, in
    /// `auth.token_cache_dir` or the current directory.
    Token {
        /// Discard the cached token and request a new one
        #[arg(long)]
        refresh: bool,

        /// Print an `Authorization` header value instead of the bare token
        #[arg(long)]
        header: bool,
    },
    /// Print the mutation deleting a node
    Delete {
        /// media-object, person, music-composition or entry-point
        entity: EntityType,
        identifier: String,
    },
    /// Print the mutation adding, merging or removing a relationship
    Link {
        /// Relationship name, e.g. MediaObjectEncoding
        relationship: Relationship,
        /// add, merge or remove
        verb: LinkVerb,
        from: String,
        to: String,
    },
    /// Print the mutation creating an entry point
    CreateEntryPoint(commands::mutation::EntryPointArgs),
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Show the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file at the default path
    Init,
}

fn init_logging(config: Option<&Config>) {
    let level = config.map_or("warn", |config| config.logging.level.as_str());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref());
    init_logging(config.as_ref().ok());

    match cli.command {
        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let config = config.context("Failed to load configuration")?;
                commands::config::show_config(&config)?;
            }
            ConfigAction::Path => commands::config::show_path(cli.config.as_deref()),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
        Commands::Token { refresh, header } => {
            let config = config.context("Failed to load configuration")?;
            commands::token::print_token(&config, refresh, header).await?;
        }
        Commands::Delete { entity, identifier } => {
            commands::mutation::print_delete(entity, &identifier);
        }
        Commands::Link {
            relationship,
            verb,
            from,
            to,
        } => {
            commands::mutation::print_link(relationship, verb, &from, &to);
        }
        Commands::CreateEntryPoint(args) => {
            commands::mutation::print_create_entry_point(args)?;
        }
    }

    Ok(())
}
