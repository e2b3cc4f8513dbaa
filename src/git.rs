use anyhow::{anyhow, Context, Result};
use git2::Repository;
use std::path::Path;

/// Narrow seam over the repository reader so the checker can run against a
/// fake in tests instead of needing a working copy on disk.
pub trait BranchSource {
    fn active_branch(&self, path: &Path) -> Result<String>;
}

/// Reads the checked-out branch of an on-disk working copy through libgit2.
pub struct GitWorkingCopy;

impl BranchSource for GitWorkingCopy {
    fn active_branch(&self, path: &Path) -> Result<String> {
        let repo = Repository::open(path).with_context(|| {
            format!(
                "unable to open repo {}, is it really a git repo?",
                path.display()
            )
        })?;
        current_branch(&repo)
    }
}

fn current_branch(repo: &Repository) -> Result<String> {
    let head = repo.head().context("failed to resolve HEAD")?;
    if !head.is_branch() {
        return Err(anyhow!("HEAD is detached, not on a valid git branch"));
    }
    head.shorthand()
        .map(String::from)
        .ok_or_else(|| anyhow!("failed to resolve branch name"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::Status;
    use git2::{RepositoryInitOptions, Signature};
    use tempfile::TempDir;

    fn repo_on_branch(branch: &str) -> TempDir {
        let dir = TempDir::new().expect("create tempdir");
        let mut opts = RepositoryInitOptions::new();
        opts.initial_head(branch);
        let repo = Repository::init_opts(dir.path(), &opts).expect("init repo");
        let mut index = repo.index().expect("open index");
        let tree_id = index.write_tree().expect("write tree");
        let tree = repo.find_tree(tree_id).expect("find tree");
        let sig = Signature::now("tester", "tester@localhost").expect("signature");
        repo.commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
            .expect("commit");
        dir
    }

    #[test]
    fn reads_the_checked_out_branch_name() {
        let dir = repo_on_branch("main");
        let branch = GitWorkingCopy
            .active_branch(dir.path())
            .expect("read branch");
        assert_eq!(branch, "main");
    }

    #[test]
    fn fails_on_a_directory_that_is_not_a_repo() {
        let dir = TempDir::new().expect("create tempdir");
        let err = GitWorkingCopy.active_branch(dir.path()).unwrap_err();
        assert!(err.to_string().contains("unable to open repo"));
    }

    #[test]
    fn checkout_on_expected_branch_is_ok_end_to_end() {
        let dir = repo_on_branch("main");
        let outcome = crate::check::run(&GitWorkingCopy, dir.path(), "main").expect("check runs");
        assert_eq!(outcome.status, Status::Ok);
        assert!(outcome
            .message
            .contains("branch 'main' currently checked out"));
    }

    #[test]
    fn checkout_on_other_branch_is_critical_end_to_end() {
        let dir = repo_on_branch("main");
        let outcome =
            crate::check::run(&GitWorkingCopy, dir.path(), "release").expect("check runs");
        assert_eq!(outcome.status, Status::Critical);
        assert!(outcome
            .message
            .contains("branch 'main' checked out, expecting 'release'"));
    }

    #[test]
    fn plain_directory_is_a_runtime_error_end_to_end() {
        let dir = TempDir::new().expect("create tempdir");
        let err = crate::check::run(&GitWorkingCopy, dir.path(), "main").unwrap_err();
        assert!(matches!(err, crate::check::CheckError::Runtime(_)));
    }

    #[test]
    fn fails_on_a_detached_head() {
        let dir = repo_on_branch("main");
        let repo = Repository::open(dir.path()).expect("reopen repo");
        let commit_id = repo
            .head()
            .and_then(|h| h.peel_to_commit())
            .expect("head commit")
            .id();
        repo.set_head_detached(commit_id).expect("detach head");
        let err = GitWorkingCopy.active_branch(dir.path()).unwrap_err();
        assert!(err.to_string().contains("detached"));
    }
}
