use serde::Deserialize;
use std::env;

use super::error::ReleaseError;

/// Subset of the `release` webhook payload GitHub Actions writes to `GITHUB_EVENT_PATH`
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseEvent {
    pub action: String,
    pub release: Release,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    pub id: u64,
    pub tag_name: String,
    #[serde(default)]
    pub upload_url: Option<String>,
}

impl ReleaseEvent {
    /// Accept only a `release` event whose action is `created`
    pub fn parse_created(event_name: &str, payload: &str) -> Result<Self, ReleaseError> {
        if event_name != "release" {
            return Err(Self::refusal(event_name, "n/a"));
        }

        let event: ReleaseEvent = serde_json::from_str(payload)?;
        if event.action != "created" {
            return Err(Self::refusal(event_name, &event.action));
        }

        Ok(event)
    }

    fn refusal(event_name: &str, action: &str) -> ReleaseError {
        ReleaseError::NotReleaseCreated {
            event: event_name.to_string(),
            action: action.to_string(),
        }
    }

    /// Read the triggering event from the Actions runner environment
    pub fn from_env() -> Result<Self, ReleaseError> {
        let event_name = env::var("GITHUB_EVENT_NAME").map_err(|_| ReleaseError::MissingEnv("GITHUB_EVENT_NAME"))?;
        if event_name != "release" {
            return Err(Self::refusal(&event_name, "n/a"));
        }

        let event_path = env::var("GITHUB_EVENT_PATH").map_err(|_| ReleaseError::MissingEnv("GITHUB_EVENT_PATH"))?;
        let payload = std::fs::read_to_string(event_path)?;
        Self::parse_created(&event_name, &payload)
    }
}
