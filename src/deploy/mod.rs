//! Check-and-publish routine.
//!
//! One decision, made once: does the remote's latest commit already carry the
//! message for the current revision? If so there is nothing to do. Otherwise
//! the build output directory becomes a fresh repository that is force-pushed
//! over the remote branch.
//!
//! ```text
//! rev-parse ──► clone --bare ──► subject == "Update to <hash>" ?
//!                                   │ yes: UpToDate
//!                                   └ no:  init ► config ► add ► commit ► remote ► push
//! ```

mod clone;
mod step;


pub use clone::fetch_remote_subject;
pub use step::publish_plan;

use crate::{
    config::DeployConfig,
    log,
    logger::{step_done, step_failed},
    utils::git::Git,
};
use anyhow::{Context, Result};
use std::path::PathBuf;
use thiserror::Error;

/// Deploy failures that are not plain git failures.
#[derive(Debug, Error)]
pub enum DeployError {
    #[error("clone path `{0}` already exists, remove it or pick another scratch directory")]
    CloneDirOccupied(PathBuf),

    #[error("publish directory `{0}` does not exist or is not a directory")]
    PublishDirMissing(PathBuf),
}

/// Result of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Remote already carries the current revision.
    UpToDate,
    /// Remote is behind, but publishing was not requested.
    Pending,
    /// Build output was force-pushed.
    Published,
}

/// Commit message that marks `revision` as published.
pub fn commit_message(prefix: &str, revision: &str) -> String {
    format!("{prefix}{revision}")
}

/// What the remote holds compared to the local revision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub revision: String,
    pub expected: String,
    pub remote: Option<String>,
}

impl Comparison {
    /// Exact match only; an empty remote is never current.
    pub fn is_current(&self) -> bool {
        self.remote.as_deref() == Some(self.expected.as_str())
    }
}

/// Runs the routine against one configuration.
pub struct Deployer<'a, G: Git> {
    git: &'a G,
    config: &'a DeployConfig,
}

impl<'a, G: Git> Deployer<'a, G> {
    pub const fn new(git: &'a G, config: &'a DeployConfig) -> Self {
        Self { git, config }
    }

    /// Resolve the local revision and read the remote's latest subject.
    pub fn compare(&self) -> Result<Comparison> {
        let revision = self.git.short_head(&self.config.source.root)?;
        log!("deploy"; "Current repository hash: {}", revision);

        let expected = self.config.commit_message(&revision);
        let remote = fetch_remote_subject(
            self.git,
            &self.config.target.remote,
            &self.config.target.scratch,
        )?;

        Ok(Comparison {
            revision,
            expected,
            remote,
        })
    }

    /// Report whether a publish is needed, without publishing.
    pub fn status(&self) -> Result<Outcome> {
        let comparison = self.compare()?;
        if comparison.is_current() {
            log!("deploy"; "Already up to date");
            return Ok(Outcome::UpToDate);
        }

        match &comparison.remote {
            Some(subject) => log!(
                "deploy"; "Deploy needed for {}, remote is at `{}`",
                comparison.revision, subject
            ),
            None => log!(
                "deploy"; "Deploy needed for {}, remote has no commits",
                comparison.revision
            ),
        }
        Ok(Outcome::Pending)
    }

    /// Publish the build output unless the remote is already current.
    pub fn publish(&self) -> Result<Outcome> {
        let comparison = self.compare()?;
        if comparison.is_current() {
            log!("deploy"; "Already up to date");
            return Ok(Outcome::UpToDate);
        }

        log!("deploy"; "Deploy");
        self.push_output(&comparison.expected)?;
        Ok(Outcome::Published)
    }

    /// Run every publish step in order. The first failure aborts the rest.
    fn push_output(&self, message: &str) -> Result<()> {
        let dir = &self.config.target.dir;
        if !dir.is_dir() {
            return Err(DeployError::PublishDirMissing(dir.clone()).into());
        }

        for step in publish_plan(self.config, message) {
            if let Err(err) = self.git.run(dir, &step.args()) {
                step_failed(&step.to_string());
                return Err(err).with_context(|| format!("publish step `{}` failed", step.name()));
            }
            step_done(&step.to_string());
        }
        Ok(())
    }
}
