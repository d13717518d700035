use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReleaseError {
    #[error("Unknown build target '{0}' (expected one of: {1})")]
    UnknownTarget(String, String),

    #[error("Refusing to publish: triggered by '{event}' event (action: {action}), expected a created release")]
    NotReleaseCreated { event: String, action: String },

    #[error("{0} not set")]
    MissingEnv(&'static str),

    #[error("GITHUB_REPOSITORY must look like owner/repo, got '{0}'")]
    InvalidRepository(String),

    #[error("Artifact not found: {0}")]
    ArtifactMissing(PathBuf),

    #[error("Artifact is not executable: {0}")]
    NotExecutable(PathBuf),

    #[error("GitHub API error ({status}): {body}")]
    GitHub { status: u16, body: String },

    #[error("Workflow check failed:\n  - {}", .0.join("\n  - "))]
    Workflow(Vec<String>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}
