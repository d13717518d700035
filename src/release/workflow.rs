use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};

use super::error::ReleaseError;
use super::target::BuildTarget;

// =============================================================================
// YAML shape (only the parts the release rules care about)
// =============================================================================

#[derive(Debug, Deserialize)]
struct GitHubWorkflow {
    #[serde(default)]
    on: WorkflowTrigger,

    #[serde(default)]
    jobs: BTreeMap<String, Job>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(untagged)]
enum WorkflowTrigger {
    #[default]
    None,
    Simple(String),
    Array(Vec<String>),
    Object(HashMap<String, serde_yaml::Value>),
}

#[derive(Debug, Deserialize)]
struct Job {
    #[serde(default)]
    strategy: Option<Strategy>,
}

#[derive(Debug, Deserialize)]
struct Strategy {
    #[serde(rename = "fail-fast", default)]
    fail_fast: Option<bool>,

    #[serde(default)]
    matrix: Option<Matrix>,
}

#[derive(Debug, Deserialize)]
struct Matrix {
    #[serde(default)]
    include: Vec<MatrixEntry>,
}

#[derive(Debug, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
struct MatrixEntry {
    os: String,
    runner: String,
    #[serde(default)]
    ext: String,
}

// =============================================================================
// Checks
// =============================================================================

/// Lint a release workflow against the build matrix the binary knows about.
///
/// Returns every rule the workflow breaks; an empty list means it is fine.
pub fn check_workflow(content: &str) -> Result<Vec<String>, ReleaseError> {
    let workflow: GitHubWorkflow = serde_yaml::from_str(content)?;
    let mut violations = check_trigger(&workflow.on);

    let matrix_jobs: Vec<(&String, &Strategy)> = workflow
        .jobs
        .iter()
        .filter_map(|(name, job)| {
            job.strategy
                .as_ref()
                .filter(|s| s.matrix.is_some())
                .map(|s| (name, s))
        })
        .collect();

    if matrix_jobs.is_empty() {
        violations.push("no job defines a build matrix".to_string());
    }

    for (name, strategy) in matrix_jobs {
        if strategy.fail_fast != Some(false) {
            violations.push(format!(
                "job '{}' must set strategy.fail-fast: false so platform builds finish independently",
                name
            ));
        }

        let mut actual: Vec<&MatrixEntry> = strategy
            .matrix
            .as_ref()
            .map(|m| m.include.iter().collect())
            .unwrap_or_default();
        actual.sort();

        let mut expected: Vec<MatrixEntry> = BuildTarget::all()
            .iter()
            .map(|t| MatrixEntry {
                os: t.os.to_string(),
                runner: t.runner.to_string(),
                ext: t.ext.to_string(),
            })
            .collect();
        expected.sort();

        if actual.iter().copied().ne(expected.iter()) {
            violations.push(format!(
                "job '{}' matrix is {:?}, expected {:?}",
                name,
                actual.iter().map(|e| format!("{}/{}/{:?}", e.os, e.runner, e.ext)).collect::<Vec<_>>(),
                expected.iter().map(|e| format!("{}/{}/{:?}", e.os, e.runner, e.ext)).collect::<Vec<_>>(),
            ));
        }
    }

    Ok(violations)
}

/// Fail with every violation listed
pub fn verify_workflow(content: &str) -> Result<(), ReleaseError> {
    let violations = check_workflow(content)?;
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ReleaseError::Workflow(violations))
    }
}

fn check_trigger(trigger: &WorkflowTrigger) -> Vec<String> {
    let obj = match trigger {
        WorkflowTrigger::Object(obj) => obj,
        WorkflowTrigger::Simple(s) => {
            return vec![format!("trigger '{}' must be `release` restricted to `types: [created]`", s)];
        }
        WorkflowTrigger::Array(arr) => {
            return vec![format!("trigger {:?} must be `release` restricted to `types: [created]`", arr)];
        }
        WorkflowTrigger::None => return vec!["workflow has no trigger".to_string()],
    };

    let mut violations: Vec<String> = obj
        .keys()
        .filter(|k| k.as_str() != "release")
        .map(|k| format!("workflow must not run on '{}'", k))
        .collect();

    let types: Option<Vec<&str>> = obj
        .get("release")
        .and_then(|release| release.get("types"))
        .and_then(|types| types.as_sequence())
        .map(|seq| seq.iter().filter_map(|t| t.as_str()).collect());

    match types {
        Some(types) if types == ["created"] => {}
        Some(types) => violations.push(format!("release types are {:?}, expected [\"created\"]", types)),
        None => violations.push("release trigger must list `types: [created]`".to_string()),
    }

    violations.sort();
    violations
}
