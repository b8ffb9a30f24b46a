//! `[target]` section configuration.
//!
//! Where the built output goes.
//!
//! ```toml
//! [target]
//! remote = "git@github.com:mirkootter/math-demo.git"  # SSH or HTTPS URL
//! branch = "main"                                     # force-pushed branch
//! dir = "demo/dist"                                   # build output to publish
//! scratch = "."                                       # parent of the bare clone
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Remote the math demo is published to.
pub const DEFAULT_REMOTE: &str = "git@github.com:mirkootter/math-demo.git";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetConfig {
    /// Repository URL (HTTPS or SSH format).
    pub remote: String,

    /// Branch overwritten on every publish.
    pub branch: String,

    /// Build output directory that becomes the published tree.
    pub dir: PathBuf,

    /// Directory the transient bare clone is created in.
    pub scratch: PathBuf,
}

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            remote: DEFAULT_REMOTE.to_string(),
            branch: "main".to_string(),
            dir: PathBuf::from("demo/dist"),
            scratch: PathBuf::from("."),
        }
    }
}

impl TargetConfig {
    pub const REMOTE: FieldPath = FieldPath::new("target.remote");
    pub const BRANCH: FieldPath = FieldPath::new("target.branch");

    /// Validate target configuration.
    ///
    /// # Checks
    /// - `remote` is not blank
    /// - `branch` is not blank and has no whitespace
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.remote.trim().is_empty() {
            diag.error_with_hint(
                Self::REMOTE,
                format!("{} must not be empty", Self::REMOTE),
                "use an SSH (git@host:user/repo.git) or HTTPS URL",
            );
        }

        if self.branch.trim().is_empty() {
            diag.error(Self::BRANCH, format!("{} must not be empty", Self::BRANCH));
        } else if self.branch.chars().any(char::is_whitespace) {
            diag.error(
                Self::BRANCH,
                format!("{} contains whitespace: `{}`", Self::BRANCH, self.branch),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_target_config() {
        let config = test_parse_config(
            r#"[target]
remote = "https://github.com/user/site.git"
branch = "gh-pages"
dir = "public"
scratch = "/tmp""#,
        );

        assert_eq!(config.target.remote, "https://github.com/user/site.git");
        assert_eq!(config.target.branch, "gh-pages");
        assert_eq!(config.target.dir, PathBuf::from("public"));
        assert_eq!(config.target.scratch, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_target_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.target.remote, DEFAULT_REMOTE);
        assert_eq!(config.target.branch, "main");
        assert_eq!(config.target.dir, PathBuf::from("demo/dist"));
        assert_eq!(config.target.scratch, PathBuf::from("."));
    }

    #[test]
    fn test_target_validate() {
        let mut diag = ConfigDiagnostics::new();
        TargetConfig::default().validate(&mut diag);
        assert!(!diag.has_errors());

        let target = TargetConfig {
            remote: "  ".into(),
            branch: "my branch".into(),
            ..TargetConfig::default()
        };
        let mut diag = ConfigDiagnostics::new();
        target.validate(&mut diag);
        assert_eq!(diag.errors().len(), 2);
        assert_eq!(diag.errors()[0].field, TargetConfig::REMOTE);
        assert_eq!(diag.errors()[1].field, TargetConfig::BRANCH);
    }
}
