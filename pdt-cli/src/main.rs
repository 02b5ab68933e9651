//! PDT Studio command-line tool.
//!
//! Usage:
//!   pdt-studio device-id
//!   pdt-studio activate <KEY>
//!   pdt-studio status
//!   pdt-studio issue-key --days 30 [--device CPU-XXXXXXXXXXXXXXXX]
//!   pdt-studio storyboard inspect <FILE>
//!   pdt-studio storyboard load <FILE>
//!   pdt-studio storyboard show
//!   pdt-studio storyboard new

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pdt_cli::{commands, StudioConfig};
use pdt_license::{FileStore, LicenseGate};
use pdt_storyboard::SessionStore;
use std::path::PathBuf;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "pdt-studio")]
#[command(about = "PDT Studio license and storyboard tools")]
struct Args {
    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory holding the device id, saved key and storyboard session
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print this device's id
    DeviceId,
    /// Validate and save an activation key
    Activate {
        /// The key to activate
        key: String,
    },
    /// Re-check the saved key
    Status,
    /// Mint an activation key
    IssueKey {
        /// Validity in days
        #[arg(short, long)]
        days: i64,
        /// Device id to bind to (defaults to this device)
        #[arg(long)]
        device: Option<String>,
    },
    /// Storyboard file tools
    #[command(subcommand)]
    Storyboard(StoryboardCommand),
}

#[derive(Subcommand, Debug)]
enum StoryboardCommand {
    /// Summarize an exported storyboard
    Inspect {
        /// Exported storyboard JSON
        file: PathBuf,
    },
    /// Replace the saved session with an exported storyboard
    Load {
        /// Exported storyboard JSON
        file: PathBuf,
    },
    /// Summarize the saved session
    Show,
    /// Discard the saved session
    New,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = StudioConfig::load(args.config.as_deref())?;
    let data_dir = || -> Result<PathBuf> {
        let dir = config.resolve_data_dir(args.data_dir.as_deref())?;
        debug!(data_dir = %dir.display(), "Using data directory");
        Ok(dir)
    };
    let open_gate = || -> Result<LicenseGate<FileStore>> {
        let dir = data_dir()?;
        let store = FileStore::in_dir(&dir)
            .with_context(|| format!("Failed to open store in {}", dir.display()))?;
        Ok(LicenseGate::new(store, config.license.clone()))
    };
    let session = || -> Result<SessionStore> { Ok(SessionStore::in_dir(&data_dir()?)) };

    let output = match &args.command {
        Command::DeviceId => commands::device_id(&open_gate()?)?,
        Command::Activate { key } => commands::activate(&open_gate()?, key, config.locale)?,
        Command::Status => commands::status(&open_gate()?, config.locale)?,
        Command::IssueKey { days, device } => {
            commands::issue_key(&open_gate()?, device.as_deref(), *days)?
        }
        Command::Storyboard(StoryboardCommand::Inspect { file }) => {
            commands::inspect_storyboard(file)?
        }
        Command::Storyboard(StoryboardCommand::Load { file }) => {
            commands::load_session(session()?, file)?
        }
        Command::Storyboard(StoryboardCommand::Show) => commands::show_session(session()?)?,
        Command::Storyboard(StoryboardCommand::New) => commands::new_session(&session()?)?,
    };
    println!("{output}");
    Ok(())
}
