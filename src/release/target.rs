use serde::Serialize;

use super::error::ReleaseError;

pub const BINARY_NAME: &str = "board-game-client";

/// One entry of the release build matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
    /// Label used in artifact names (`macos`, `windows`)
    pub os: &'static str,
    /// CI runner image
    pub runner: &'static str,
    /// Executable file extension, empty where the platform has none
    pub ext: &'static str,
    #[serde(skip)]
    pub needs_exec_bit: bool,
}

const TARGETS: [BuildTarget; 2] = [
    BuildTarget {
        os: "macos",
        runner: "macos-latest",
        ext: "",
        needs_exec_bit: true,
    },
    BuildTarget {
        os: "windows",
        runner: "windows-latest",
        ext: ".exe",
        needs_exec_bit: false,
    },
];

#[derive(Debug, Serialize)]
pub struct Matrix {
    pub include: &'static [BuildTarget],
}

impl BuildTarget {
    pub fn all() -> &'static [BuildTarget] {
        &TARGETS
    }

    pub fn from_os(os: &str) -> Result<&'static BuildTarget, ReleaseError> {
        TARGETS.iter().find(|t| t.os == os).ok_or_else(|| {
            let known: Vec<&str> = TARGETS.iter().map(|t| t.os).collect();
            ReleaseError::UnknownTarget(os.to_string(), known.join(", "))
        })
    }

    /// `board-game-client-<os><ext>`
    pub fn artifact_name(&self) -> String {
        format!("{}-{}{}", BINARY_NAME, self.os, self.ext)
    }

    /// Matrix in the shape GitHub Actions expects for `strategy.matrix`
    pub fn matrix() -> Matrix {
        Matrix { include: &TARGETS }
    }
}
