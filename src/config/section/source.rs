//! `[source]` section configuration.
//!
//! ```toml
//! [source]
//! root = "."    # repository whose HEAD names the published revision
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Repository whose `HEAD` is published.
    pub root: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::PathBuf;

    #[test]
    fn test_source_config() {
        let config = test_parse_config("[source]\nroot = \"../app\"");
        assert_eq!(config.source.root, PathBuf::from("../app"));
    }

    #[test]
    fn test_source_config_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.source.root, PathBuf::from("."));
    }
}
