use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::env;

use super::error::ReleaseError;
use super::event::Release;

/// Asset record returned after an upload
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub browser_download_url: String,
}

/// Where release assets go
#[async_trait]
pub trait ReleaseHost: Send + Sync {
    /// Attach `content` to `release` under `name`
    async fn upload_asset(&self, release: &Release, name: &str, content: Vec<u8>) -> Result<Asset, ReleaseError>;
}

pub struct GitHubClient {
    client: Client,
    token: String,
    owner: String,
    repo: String,
}

impl GitHubClient {
    pub fn new(token: String, owner: String, repo: String) -> Self {
        Self {
            client: Client::new(),
            token,
            owner,
            repo,
        }
    }

    /// Build from `GITHUB_TOKEN` and `GITHUB_REPOSITORY`
    pub fn from_env() -> Result<Self, ReleaseError> {
        let token = env::var("GITHUB_TOKEN").map_err(|_| ReleaseError::MissingEnv("GITHUB_TOKEN"))?;
        let repository = env::var("GITHUB_REPOSITORY").map_err(|_| ReleaseError::MissingEnv("GITHUB_REPOSITORY"))?;
        let (owner, repo) = split_repository(&repository)?;

        Ok(Self::new(token, owner.to_string(), repo.to_string()))
    }

    /// Upload endpoint for a release, with the URI template suffix removed
    fn upload_url(&self, release: &Release) -> String {
        match &release.upload_url {
            Some(url) => url.split('{').next().unwrap_or(url).to_string(),
            None => format!(
                "https://uploads.github.com/repos/{}/{}/releases/{}/assets",
                self.owner, self.repo, release.id
            ),
        }
    }
}

#[async_trait]
impl ReleaseHost for GitHubClient {
    async fn upload_asset(&self, release: &Release, name: &str, content: Vec<u8>) -> Result<Asset, ReleaseError> {
        let url = self.upload_url(release);
        let response = self.client
            .post(&url)
            .query(&[("name", name)])
            .header("Authorization", format!("Bearer {}", self.token))
            .header("User-Agent", "board-game-client-release")
            .header("Accept", "application/vnd.github+json")
            .header("Content-Type", "application/octet-stream")
            .body(content)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await?;
            return Err(ReleaseError::GitHub { status, body });
        }

        Ok(response.json().await?)
    }
}

pub fn split_repository(repository: &str) -> Result<(&str, &str), ReleaseError> {
    match repository.split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => Ok((owner, repo)),
        _ => Err(ReleaseError::InvalidRepository(repository.to_string())),
    }
}
