use anyhow::Result;
use clap::{Parser, Subcommand};
use sync_settings::commands::*;
use sync_settings::gist::{DiagnosticLogger, TracingLogger};
use sync_settings::{config::Settings, constants};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sync-settings")]
#[command(about = "Back up and synchronize editor settings through a GitHub Gist")]
#[command(version)]
struct Cli {
    /// Settings file path
    #[arg(short, long, global = true, default_value_t = constants::config::DEFAULT_SETTINGS_FILE.to_string())]
    config: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a settings file
    Init {
        /// Directory whose files are synced (defaults to the current directory)
        #[arg(short, long)]
        directory: Option<String>,

        /// Overwrite existing file if it exists
        #[arg(long)]
        overwrite: bool,
    },

    /// Upload the local files as a new gist
    Create {
        /// Description of the gist
        #[arg(short, long)]
        description: Option<String>,

        /// Create a public gist instead of a secret one
        #[arg(long)]
        public: bool,

        /// Store the new gist id in the settings file
        #[arg(long)]
        save: bool,
    },

    /// Upload the local files to the configured gist
    Upload,

    /// Download the configured gist into the local directory
    Download,

    /// Delete the configured gist
    Delete {
        /// Keep the gist id in the settings file
        #[arg(long)]
        keep_id: bool,
    },

    /// List the revisions of the configured gist
    History {
        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,
    },

    /// Show the local sync configuration
    Status,

    /// Print or change a single setting
    Config {
        /// Setting name (access_token, gist_id, http_proxy, https_proxy,
        /// directory, excluded_files, version_file)
        key: String,

        /// New value; prints the current value when omitted
        value: Option<String>,

        /// Clear the setting
        #[arg(long, conflicts_with = "value")]
        unset: bool,
    },
}

fn init_logging(verbose: bool) {
    let default_level = if verbose {
        "sync_settings=debug"
    } else {
        "sync_settings=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Init writes a fresh file, so a broken existing one must not stop it
    let settings = if matches!(cli.command, Commands::Init { .. }) {
        Settings::new()
    } else {
        Settings::load(&cli.config)?
    };
    let context = CommandContext::new(settings, cli.config);

    tracing::debug!(settings = %context.settings_path, "settings loaded");

    if let Err(e) = execute_command(cli.command, &context).await {
        TracingLogger.exception(&*e);
        std::process::exit(1);
    }
    Ok(())
}

async fn execute_command(command: Commands, context: &CommandContext) -> Result<()> {
    match command {
        Commands::Init {
            directory,
            overwrite,
        } => {
            InitCommand {
                directory,
                overwrite,
            }
            .execute(context)
            .await
        }
        Commands::Create {
            description,
            public,
            save,
        } => {
            CreateCommand {
                description,
                public,
                save,
            }
            .execute(context)
            .await
        }
        Commands::Upload => UploadCommand.execute(context).await,
        Commands::Download => DownloadCommand.execute(context).await,
        Commands::Delete { keep_id } => DeleteCommand { keep_id }.execute(context).await,
        Commands::History { json } => HistoryCommand { json }.execute(context).await,
        Commands::Status => StatusCommand.execute(context).await,
        Commands::Config { key, value, unset } => {
            ConfigCommand { key, value, unset }.execute(context).await
        }
    }
}
