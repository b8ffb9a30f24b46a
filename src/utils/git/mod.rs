//! Git access for the deploy routine.
//!
//! The [`Git`] trait is everything the routine needs from git. [`GitCli`]
//! drives the `git` binary for anything touching the network or a working
//! tree, and reads commit metadata from the bare clone with gix.

mod repo;

pub use repo::{last_subject, open_repo};

use crate::utils::exec::{Cmd, FilterRule, cmd};
use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

/// Git progress chatter that is not worth echoing.
pub const GIT_FILTER: FilterRule = FilterRule::new(&[
    "hint:",
    "Cloning into",
    "warning: You appear to have cloned an empty repository.",
    "done.",
]);

/// Operations the deploy routine performs through git.
pub trait Git {
    /// Abbreviated hash of `HEAD` in the repository at `repo`.
    fn short_head(&self, repo: &Path) -> Result<String>;

    /// Clone `remote` as a bare repository into `into`.
    fn clone_bare(&self, remote: &str, into: &Path) -> Result<()>;

    /// Subject line of the latest commit in the bare clone at `bare`.
    ///
    /// `None` when the repository has no commits yet.
    fn last_subject(&self, bare: &Path) -> Result<Option<String>>;

    /// Run `git <args>` inside `dir`.
    fn run(&self, dir: &Path, args: &[&str]) -> Result<()>;
}

/// [`Git`] backed by the `git` executable found on `PATH`.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
}

impl GitCli {
    /// Locate the `git` executable.
    pub fn locate() -> Result<Self> {
        let program = which::which("git").context("`git` not found in PATH")?;
        Ok(Self { program })
    }

    fn git_cmd(&self) -> Cmd {
        cmd(&self.program).filter(&GIT_FILTER)
    }
}

impl Git for GitCli {
    fn short_head(&self, repo: &Path) -> Result<String> {
        let output = self
            .git_cmd()
            .args(["rev-parse", "--short", "HEAD"])
            .cwd(repo)
            .run()
            .with_context(|| format!("Failed to resolve HEAD in {}", repo.display()))?;

        let hash = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if hash.is_empty() {
            bail!("`git rev-parse` printed no revision for {}", repo.display());
        }
        Ok(hash)
    }

    fn clone_bare(&self, remote: &str, into: &Path) -> Result<()> {
        self.git_cmd()
            .args(["clone", "--bare", remote])
            .arg(into)
            .run()
            .with_context(|| format!("Failed to clone `{remote}`"))?;
        Ok(())
    }

    fn last_subject(&self, bare: &Path) -> Result<Option<String>> {
        let repo = open_repo(bare)?;
        last_subject(&repo)
    }

    fn run(&self, dir: &Path, args: &[&str]) -> Result<()> {
        self.git_cmd().args(args).cwd(dir).run()?;
        Ok(())
    }
}
