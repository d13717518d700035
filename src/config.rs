use clap::Args;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Please set the SERVER_URI environment variable.")]
    MissingServerUri,

    #[error("Invalid SERVER_URI. It should start with 'ws://'.")]
    InvalidScheme,
}

/// Flags for the interactive `play` mode
#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    /// WebSocket endpoint of the game server (ws://host:port)
    #[arg(long, env = "SERVER_URI")]
    pub server_uri: Option<String>,

    /// Draw the outer walls with box-drawing characters
    #[arg(
        long,
        env = "PRETTY_WALLS",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub pretty_walls: bool,

    /// Directory for session log files
    #[arg(long, env = "BOARD_GAME_CLIENT_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

/// Validated settings for one game session
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub server_uri: String,
    pub pretty_walls: bool,
    pub log_dir: PathBuf,
}

impl ClientConfig {
    pub fn from_args(args: &PlayArgs) -> Result<Self, ConfigError> {
        Ok(Self {
            server_uri: validate_server_uri(args.server_uri.as_deref())?,
            pretty_walls: args.pretty_walls,
            log_dir: args.log_dir.clone().unwrap_or_else(default_log_dir),
        })
    }
}

pub fn validate_server_uri(uri: Option<&str>) -> Result<String, ConfigError> {
    let uri = uri.map(str::trim).filter(|u| !u.is_empty()).ok_or(ConfigError::MissingServerUri)?;

    if !uri.starts_with("ws://") {
        return Err(ConfigError::InvalidScheme);
    }

    Ok(uri.to_string())
}

fn default_log_dir() -> PathBuf {
    std::env::temp_dir().join("board-game-client")
}
