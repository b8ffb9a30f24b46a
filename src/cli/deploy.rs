//! `publish` and `status` commands.

use crate::{
    config::DeployConfig,
    deploy::{Deployer, Outcome},
    utils::git::GitCli,
};
use anyhow::Result;

/// Publish the build output if the remote is behind.
pub fn publish(config: &DeployConfig) -> Result<Outcome> {
    let git = GitCli::locate()?;
    Deployer::new(&git, config).publish()
}

/// Report whether the remote is behind.
pub fn status(config: &DeployConfig) -> Result<Outcome> {
    let git = GitCli::locate()?;
    Deployer::new(&git, config).status()
}
