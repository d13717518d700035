use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use super::error::ReleaseError;
use super::target::BuildTarget;

/// Copy a built binary into `out_dir` under its release artifact name.
///
/// Targets that need it get mode 0755 on the copy.
pub fn stage_artifact(target: &BuildTarget, binary: &Path, out_dir: &Path) -> Result<PathBuf, ReleaseError> {
    if !binary.is_file() {
        return Err(ReleaseError::ArtifactMissing(binary.to_path_buf()));
    }

    fs::create_dir_all(out_dir)?;
    let dest = out_dir.join(target.artifact_name());
    if is_same_file(binary, &dest)? {
        info!(path = %dest.display(), "Binary already staged in place, skipping copy");
    } else {
        fs::copy(binary, &dest)?;
    }

    if target.needs_exec_bit {
        mark_executable(&dest)?;
    }

    info!(
        target = target.os,
        from = %binary.display(),
        to = %dest.display(),
        "Staged release artifact"
    );
    Ok(dest)
}

fn is_same_file(a: &Path, b: &Path) -> std::io::Result<bool> {
    if !b.exists() {
        return Ok(false);
    }
    Ok(fs::canonicalize(a)? == fs::canonicalize(b)?)
}

/// Check a staged artifact is ready to upload
pub fn ensure_uploadable(target: &BuildTarget, path: &Path) -> Result<(), ReleaseError> {
    if !path.is_file() {
        return Err(ReleaseError::ArtifactMissing(path.to_path_buf()));
    }
    if target.needs_exec_bit && !is_executable(path)? {
        return Err(ReleaseError::NotExecutable(path.to_path_buf()));
    }
    Ok(())
}

#[cfg(unix)]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn mark_executable(path: &Path) -> std::io::Result<()> {
    tracing::debug!(path = %path.display(), "No permission bits on this platform");
    Ok(())
}

#[cfg(unix)]
fn is_executable(path: &Path) -> std::io::Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    Ok(fs::metadata(path)?.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> std::io::Result<bool> {
    tracing::debug!(path = %path.display(), "Skipping executable bit check on this platform");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_binary(dir: &Path) -> PathBuf {
        let path = dir.join("board-game-client");
        fs::write(&path, b"\x7fELF fake").unwrap();
        path
    }

    #[test]
    fn test_stage_uses_artifact_name() {
        let tmp = tempfile::tempdir().unwrap();
        let binary = fake_binary(tmp.path());
        let out = tmp.path().join("dist");

        let target = BuildTarget::from_os("windows").unwrap();
        let staged = stage_artifact(target, &binary, &out).unwrap();

        assert_eq!(staged, out.join("board-game-client-windows.exe"));
        assert_eq!(fs::read(&staged).unwrap(), b"\x7fELF fake");
    }

    #[cfg(unix)]
    #[test]
    fn test_macos_artifact_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let binary = fake_binary(tmp.path());
        fs::set_permissions(&binary, fs::Permissions::from_mode(0o644)).unwrap();

        let target = BuildTarget::from_os("macos").unwrap();
        let staged = stage_artifact(target, &binary, tmp.path()).unwrap();

        let mode = fs::metadata(&staged).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        assert!(ensure_uploadable(target, &staged).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_non_executable_macos_artifact_rejected() {
        use std::os::unix::fs::PermissionsExt;

        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("board-game-client-macos");
        fs::write(&path, b"bin").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o644)).unwrap();

        let target = BuildTarget::from_os("macos").unwrap();
        assert!(matches!(
            ensure_uploadable(target, &path),
            Err(ReleaseError::NotExecutable(_))
        ));
    }

    #[test]
    fn test_staging_in_place_keeps_contents() {
        let tmp = tempfile::tempdir().unwrap();
        let out = tmp.path().join("dist");
        fs::create_dir_all(&out).unwrap();
        let binary = out.join("board-game-client-windows.exe");
        fs::write(&binary, b"MZ payload").unwrap();

        let target = BuildTarget::from_os("windows").unwrap();
        // Same file reached through a different spelling of the path
        let staged = stage_artifact(target, &out.join(".").join("board-game-client-windows.exe"), &out).unwrap();

        assert_eq!(staged, binary);
        assert_eq!(fs::read(&staged).unwrap(), b"MZ payload");
    }

    #[test]
    fn test_missing_binary() {
        let tmp = tempfile::tempdir().unwrap();
        let target = BuildTarget::from_os("macos").unwrap();

        assert!(matches!(
            stage_artifact(target, &tmp.path().join("nope"), tmp.path()),
            Err(ReleaseError::ArtifactMissing(_))
        ));
        assert!(matches!(
            ensure_uploadable(target, &tmp.path().join("nope")),
            Err(ReleaseError::ArtifactMissing(_))
        ));
    }
}
