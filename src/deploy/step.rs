//! The publish sequence as data.

use crate::config::DeployConfig;
use std::fmt;

/// Name the published remote is registered under.
pub const REMOTE_NAME: &str = "origin";

/// One git invocation of the publish sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PublishStep {
    /// `git init -b <branch>`; re-initializing is harmless.
    Init { branch: String },
    /// `git config user.name <name>`
    UserName(String),
    /// `git config user.email <email>`, possibly empty.
    UserEmail(String),
    /// `git add -A`
    StageAll,
    /// `git commit -m <message>`
    Commit { message: String },
    /// `git remote add origin <url>`
    AddRemote { url: String },
    /// `git push -f origin <branch>`
    ForcePush { branch: String },
}

impl PublishStep {
    /// Arguments passed to git, without the program name.
    pub fn args(&self) -> Vec<&str> {
        match self {
            Self::Init { branch } => vec!["init", "-b", branch.as_str()],
            Self::UserName(name) => vec!["config", "user.name", name.as_str()],
            Self::UserEmail(email) => vec!["config", "user.email", email.as_str()],
            Self::StageAll => vec!["add", "-A"],
            Self::Commit { message } => vec!["commit", "-m", message.as_str()],
            Self::AddRemote { url } => vec!["remote", "add", REMOTE_NAME, url.as_str()],
            Self::ForcePush { branch } => vec!["push", "-f", REMOTE_NAME, branch.as_str()],
        }
    }

    /// Short label for error messages.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Init { .. } => "init",
            Self::UserName(_) => "user.name",
            Self::UserEmail(_) => "user.email",
            Self::StageAll => "add",
            Self::Commit { .. } => "commit",
            Self::AddRemote { .. } => "remote add",
            Self::ForcePush { .. } => "push",
        }
    }
}

impl fmt::Display for PublishStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "git")?;
        for arg in self.args() {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{arg}'")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}

/// Steps that publish the build output with `message`, in execution order.
pub fn publish_plan(config: &DeployConfig, message: &str) -> Vec<PublishStep> {
    let branch = &config.target.branch;
    vec![
        PublishStep::Init {
            branch: branch.clone(),
        },
        PublishStep::UserName(config.commit.name.clone()),
        PublishStep::UserEmail(config.commit.email.clone()),
        PublishStep::StageAll,
        PublishStep::Commit {
            message: message.to_string(),
        },
        PublishStep::AddRemote {
            url: config.target.remote.clone(),
        },
        PublishStep::ForcePush {
            branch: branch.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_plan_order_and_args() {
        let config = DeployConfig::default();
        let plan = publish_plan(&config, "Update to abc1234");
        let args: Vec<Vec<&str>> = plan.iter().map(PublishStep::args).collect();

        assert_eq!(
            args,
            vec![
                vec!["init", "-b", "main"],
                vec!["config", "user.name", "rustmath-bot"],
                vec!["config", "user.email", ""],
                vec!["add", "-A"],
                vec!["commit", "-m", "Update to abc1234"],
                vec![
                    "remote",
                    "add",
                    "origin",
                    "git@github.com:mirkootter/math-demo.git"
                ],
                vec!["push", "-f", "origin", "main"],
            ]
        );
    }

    #[test]
    fn test_publish_plan_uses_configured_branch() {
        let mut config = DeployConfig::default();
        config.target.branch = "gh-pages".into();
        let plan = publish_plan(&config, "m");
        assert_eq!(plan.first().map(PublishStep::args), Some(vec!["init", "-b", "gh-pages"]));
        assert_eq!(
            plan.last().map(PublishStep::args),
            Some(vec!["push", "-f", "origin", "gh-pages"])
        );
    }

    #[test]
    fn test_step_display_quotes_empty_and_spaced_args() {
        assert_eq!(
            PublishStep::UserEmail(String::new()).to_string(),
            "git config user.email ''"
        );
        assert_eq!(
            PublishStep::Commit {
                message: "Update to abc1234".into()
            }
            .to_string(),
            "git commit -m 'Update to abc1234'"
        );
        assert_eq!(PublishStep::StageAll.to_string(), "git add -A");
    }
}
