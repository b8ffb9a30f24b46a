use anyhow::{Context, Result};
use gix::Repository;
use std::path::Path;

/// Open an existing git repository (bare or not)
pub fn open_repo(root: &Path) -> Result<Repository> {
    gix::open(root).with_context(|| format!("Failed to open repository {}", root.display()))
}

/// Subject of the commit `HEAD` points to, `None` for an unborn `HEAD`.
///
/// Matches `git log -1 --pretty=format:%s`: the first paragraph of the
/// message, folded onto one line.
pub fn last_subject(repo: &Repository) -> Result<Option<String>> {
    let mut head = repo.head().context("Failed to read HEAD")?;
    if head.is_unborn() {
        return Ok(None);
    }

    let commit = head
        .peel_to_commit_in_place()
        .context("Failed to resolve HEAD commit")?;
    let message = commit.message().context("Failed to decode commit message")?;
    Ok(Some(message.summary().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exec;
    use tempfile::TempDir;

    fn has_git() -> bool {
        which::which("git").is_ok()
    }

    #[test]
    fn test_last_subject_of_empty_repository() {
        if !has_git() {
            return;
        }
        let dir = TempDir::new().unwrap();
        exec!(dir.path(); "git"; "init", "--bare", "-q", "empty.git").unwrap();

        let repo = open_repo(&dir.path().join("empty.git")).unwrap();
        assert_eq!(last_subject(&repo).unwrap(), None);
    }

    #[test]
    fn test_last_subject_reads_first_paragraph() {
        if !has_git() {
            return;
        }
        let dir = TempDir::new().unwrap();
        let root = dir.path();
        exec!(root; "git"; "init", "-q").unwrap();
        exec!(
            root; "git";
            "-c", "user.name=test", "-c", "user.email=test@example.com",
            "commit", "-q", "--allow-empty", "-m", "Update to abc1234\n\nbody text"
        )
        .unwrap();

        let repo = open_repo(root).unwrap();
        assert_eq!(
            last_subject(&repo).unwrap().as_deref(),
            Some("Update to abc1234")
        );
    }

    #[test]
    fn test_open_missing_repository() {
        let dir = TempDir::new().unwrap();
        assert!(open_repo(&dir.path().join("missing")).is_err());
    }
}
