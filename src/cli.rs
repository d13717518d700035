use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

use crate::config::{ClientConfig, PlayArgs};
use crate::infrastructure::logging::{init_file_logging, init_stderr_logging, BoundaryLogger};
use crate::release::{self, BuildTarget, GitHubClient, ReleaseEvent};
use crate::session;

/// Terminal client for the multiplayer board game
#[derive(Parser, Debug)]
#[command(name = "board-game-client", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub play: PlayArgs,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect to the game server and play (default)
    Play,

    /// Release packaging steps run by CI
    #[command(subcommand)]
    Release(ReleaseCommand),
}

#[derive(Subcommand, Debug)]
pub enum ReleaseCommand {
    /// Print the build matrix as JSON
    Matrix,

    /// Copy a built binary into the dist directory under its artifact name
    Stage {
        #[arg(long)]
        os: String,
        #[arg(long)]
        binary: PathBuf,
        #[arg(long, default_value = "dist")]
        out: PathBuf,
    },

    /// Upload a staged artifact to the release that triggered this run
    Publish {
        #[arg(long)]
        os: String,
        #[arg(long, default_value = "dist")]
        dist: PathBuf,
    },

    /// Check a workflow file against the release rules
    VerifyWorkflow {
        #[arg(default_value = ".github/workflows/release.yml")]
        path: PathBuf,
    },
}

pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        None | Some(Command::Play) => play(&cli.play).await,
        Some(Command::Release(command)) => {
            init_stderr_logging();
            run_release(command).await
        }
    }
}

async fn play(args: &PlayArgs) -> Result<()> {
    let config = ClientConfig::from_args(args)?;
    let _log_guard = init_file_logging(&config.log_dir)
        .with_context(|| format!("Failed to open log directory {}", config.log_dir.display()))?;

    info!(server = %config.server_uri, "Starting board game client");
    session::run(config).await?;
    Ok(())
}

async fn run_release(command: ReleaseCommand) -> Result<()> {
    match command {
        ReleaseCommand::Matrix => {
            println!("{}", serde_json::to_string(&BuildTarget::matrix())?);
        }
        ReleaseCommand::Stage { os, binary, out } => {
            let target = BuildTarget::from_os(&os)?;
            let staged = release::stage_artifact(target, &binary, &out)?;
            println!("{}", staged.display());
        }
        ReleaseCommand::Publish { os, dist } => {
            let target = BuildTarget::from_os(&os)?;
            let event = ReleaseEvent::from_env()?;
            let client = GitHubClient::from_env()?;

            let asset = release::publish_artifact(&client, &event, target, &dist, &BoundaryLogger::new()).await?;
            println!("{}", asset.browser_download_url);
        }
        ReleaseCommand::VerifyWorkflow { path } => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            release::verify_workflow(&content)?;
            info!(path = %path.display(), "Workflow satisfies release rules");
        }
    }
    Ok(())
}
