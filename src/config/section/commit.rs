//! `[commit]` section configuration.
//!
//! The synthetic commit made in the build output directory.
//!
//! ```toml
//! [commit]
//! prefix = "Update to "   # message is "<prefix><short hash>"
//! name = "rustmath-bot"   # user.name
//! email = ""              # user.email, empty is allowed
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommitConfig {
    /// Prepended to the short hash to form the commit message.
    pub prefix: String,

    /// Committer name.
    pub name: String,

    /// Committer email.
    pub email: String,
}

impl Default for CommitConfig {
    fn default() -> Self {
        Self {
            prefix: "Update to ".to_string(),
            name: "rustmath-bot".to_string(),
            email: String::new(),
        }
    }
}

impl CommitConfig {
    pub const NAME: FieldPath = FieldPath::new("commit.name");

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::NAME,
                format!("{} must not be empty", Self::NAME),
                "git refuses to commit with an empty author name",
            );
        }
    }
}
