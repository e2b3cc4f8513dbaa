use crate::git::BranchSource;
use crate::status::Status;
use regex::Regex;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Branch names are restricted to the safe subset monitoring configs use.
const BRANCH_PATTERN: &str = r"^[\w-]+$";

#[derive(Debug, Error)]
pub enum CheckError {
    /// Bad or malformed input, rejected before the repository is touched.
    #[error("{0}")]
    Usage(String),
    /// Failure from the repository layer or anything else unexpected.
    #[error(transparent)]
    Runtime(#[from] anyhow::Error),
}

/// Result of a completed check: a status plus the line to print for it.
#[derive(Debug)]
pub struct Outcome {
    pub status: Status,
    pub message: String,
}

fn validate_branch_name(branch: &str) -> Result<(), CheckError> {
    if branch.is_empty() {
        return Err(CheckError::Usage("expected branch not defined".to_string()));
    }
    let pattern = Regex::new(BRANCH_PATTERN).expect("hardcoded pattern compiles");
    if !pattern.is_match(branch) {
        return Err(CheckError::Usage(format!(
            "invalid branch name '{branch}', must be alphanumeric with underscores or hyphens"
        )));
    }
    Ok(())
}

fn resolve_directory(directory: &Path) -> Result<PathBuf, CheckError> {
    let resolved = directory.canonicalize().map_err(|e| {
        CheckError::Usage(format!(
            "directory '{}' does not exist: {e}",
            directory.display()
        ))
    })?;
    if !resolved.is_dir() {
        return Err(CheckError::Usage(format!(
            "'{}' is not a directory",
            resolved.display()
        )));
    }
    Ok(resolved)
}

/// Runs the whole check: validate inputs, read the active branch, compare.
/// The branch pattern is checked first so malformed input never reaches the
/// filesystem; a mismatch is the CRITICAL outcome, not an error.
pub fn run(
    source: &impl BranchSource,
    directory: &Path,
    expected_branch: &str,
) -> Result<Outcome, CheckError> {
    validate_branch_name(expected_branch)?;
    let directory = resolve_directory(directory)?;
    let current_branch = source.active_branch(&directory)?;
    if current_branch == expected_branch {
        Ok(Outcome {
            status: Status::Ok,
            message: format!(
                "branch '{current_branch}' currently checked out in directory '{}'",
                directory.display()
            ),
        })
    } else {
        Ok(Outcome {
            status: Status::Critical,
            message: format!(
                "branch '{current_branch}' checked out, expecting '{expected_branch}' in directory '{}'",
                directory.display()
            ),
        })
    }
}
