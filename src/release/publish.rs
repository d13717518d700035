use std::path::Path;
use tracing::info;

use super::error::ReleaseError;
use super::event::ReleaseEvent;
use super::github::{Asset, ReleaseHost};
use super::stage::ensure_uploadable;
use super::target::BuildTarget;
use crate::infrastructure::logging::{BoundaryLogger, Timer};

/// Upload the staged artifact for `target` from `dist` to the triggering release.
///
/// No retries: the first failure is returned.
pub async fn publish_artifact<H: ReleaseHost>(
    host: &H,
    event: &ReleaseEvent,
    target: &BuildTarget,
    dist: &Path,
    logger: &BoundaryLogger,
) -> Result<Asset, ReleaseError> {
    let name = target.artifact_name();
    let path = dist.join(&name);
    ensure_uploadable(target, &path)?;

    let content = tokio::fs::read(&path).await?;
    let operation = format!("upload {} ({} bytes) to {}", name, content.len(), event.release.tag_name);

    let timer = Timer::start();
    logger.external_call("publish", "GitHub", &operation);

    match host.upload_asset(&event.release, &name, content).await {
        Ok(asset) => {
            logger.external_done("publish", "GitHub", &operation, timer.elapsed_ms());
            info!(asset_id = asset.id, asset = %asset.name, url = %asset.browser_download_url, "Release asset uploaded");
            Ok(asset)
        }
        Err(e) => {
            logger.external_error("publish", "GitHub", &operation, timer.elapsed_ms(), &e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::release::event::Release;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeHost {
        uploads: Mutex<Vec<(u64, String, Vec<u8>)>>,
        attempts: Mutex<usize>,
        fail: bool,
    }

    #[async_trait]
    impl ReleaseHost for FakeHost {
        async fn upload_asset(&self, release: &Release, name: &str, content: Vec<u8>) -> Result<Asset, ReleaseError> {
            *self.attempts.lock().unwrap() += 1;
            if self.fail {
                return Err(ReleaseError::GitHub {
                    status: 422,
                    body: "already_exists".to_string(),
                });
            }
            self.uploads.lock().unwrap().push((release.id, name.to_string(), content));
            Ok(Asset {
                id: 1,
                name: name.to_string(),
                browser_download_url: format!("https://example.invalid/{}", name),
            })
        }
    }

    fn event() -> ReleaseEvent {
        ReleaseEvent {
            action: "created".to_string(),
            release: Release {
                id: 99,
                tag_name: "v1.0.0".to_string(),
                upload_url: None,
            },
        }
    }

    #[tokio::test]
    async fn test_publish_uploads_staged_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("board-game-client-windows.exe"), b"MZ").unwrap();

        let host = FakeHost::default();
        let target = BuildTarget::from_os("windows").unwrap();
        let asset = publish_artifact(&host, &event(), target, tmp.path(), &BoundaryLogger::new())
            .await
            .unwrap();

        assert_eq!(asset.name, "board-game-client-windows.exe");
        let uploads = host.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0], (99, "board-game-client-windows.exe".to_string(), b"MZ".to_vec()));
    }

    #[tokio::test]
    async fn test_publish_without_staged_artifact_uploads_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let host = FakeHost::default();
        let target = BuildTarget::from_os("macos").unwrap();

        let result = publish_artifact(&host, &event(), target, tmp.path(), &BoundaryLogger::new()).await;

        assert!(matches!(result, Err(ReleaseError::ArtifactMissing(_))));
        assert!(host.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_upload_failure_is_not_retried() {
        let tmp = tempfile::tempdir().unwrap();
        std::fs::write(tmp.path().join("board-game-client-windows.exe"), b"MZ").unwrap();

        let host = FakeHost {
            fail: true,
            ..Default::default()
        };
        let target = BuildTarget::from_os("windows").unwrap();
        let result = publish_artifact(&host, &event(), target, tmp.path(), &BoundaryLogger::new()).await;

        assert!(matches!(result, Err(ReleaseError::GitHub { status: 422, .. })));
        assert_eq!(*host.attempts.lock().unwrap(), 1);
    }
}
