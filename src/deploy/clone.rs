//! Transient bare clone of the remote.

use super::DeployError;
use crate::{debug, log, utils::git::Git};
use anyhow::Result;
use std::{fs, io, path::Path};

/// Directory name `git clone --bare` would pick for `remote`.
///
/// The last segment of the URL (split on `/` or `:`) with `.git` appended
/// when missing.
pub fn bare_clone_name(remote: &str) -> String {
    let trimmed = remote.trim_end_matches(|c: char| c == '/' || c == '\\');
    let mut segments = trimmed.rsplit(|c: char| c == '/' || c == ':' || c == '\\');
    let base = match segments.next() {
        // `/srv/repo/.git` clones as `repo.git`
        Some(".git") => segments.next(),
        last => last,
    }
    .filter(|base| !base.is_empty())
    .unwrap_or("remote");

    if base.ends_with(".git") {
        base.to_string()
    } else {
        format!("{base}.git")
    }
}

/// Subject of the remote's latest commit, `None` if the remote is empty.
///
/// Clones into `<scratch>/<bare_clone_name>` and removes the clone on every
/// exit path. An existing directory at that path is never touched.
pub fn fetch_remote_subject<G: Git + ?Sized>(
    git: &G,
    remote: &str,
    scratch: &Path,
) -> Result<Option<String>> {
    let path = scratch.join(bare_clone_name(remote));
    if path.exists() {
        return Err(DeployError::CloneDirOccupied(path).into());
    }

    let path = scopeguard::guard(path, |path| remove_clone(&path));
    git.clone_bare(remote, &path)?;
    git.last_subject(&path)
}

fn remove_clone(path: &Path) {
    match fs::remove_dir_all(path) {
        Ok(()) => debug!("deploy"; "removed {}", path.display()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => log!("warning"; "failed to remove {}: {}", path.display(), err),
    }
}
