//! Deploy configuration management for `deploy.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # [source], [target], [commit]
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! ├── util.rs        # config discovery, path resolution
//! └── mod.rs         # DeployConfig (this file)
//! ```
//!
//! The file is optional. Without it every value falls back to its default,
//! which publishes `demo/dist` to the math demo repository.
//!
//! Paths from the file resolve against the directory holding it. Paths from
//! the command line resolve against the working directory.

pub mod section;
pub mod types;
mod util;

pub use section::{CommitConfig, SourceConfig, TargetConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, TargetArgs},
    debug, log,
};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use util::{find_config_file, resolve_path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing deploy.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeployConfig {
    /// Repository that names the revision
    #[serde(default)]
    pub source: SourceConfig,

    /// Publish destination
    #[serde(default)]
    pub target: TargetConfig,

    /// Synthetic commit settings
    #[serde(default)]
    pub commit: CommitConfig,
}

impl DeployConfig {
    /// Config file looked up when `-C` is not given.
    pub const FILE_NAME: &'static str = "deploy.toml";

    /// Load configuration for the given command line.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        Self::load_from(&cwd, cli.config.as_deref(), cli.target_args())
    }

    /// Load configuration as if started in `cwd`.
    ///
    /// An explicit config path must exist; the default one may be absent.
    fn load_from(cwd: &Path, explicit: Option<&Path>, args: &TargetArgs) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => {
                let path = resolve_path(cwd, path);
                if !path.is_file() {
                    bail!(ConfigError::NotFound(path));
                }
                Some(path)
            }
            None => find_config_file(cwd, Path::new(Self::FILE_NAME)),
        };

        let mut config = match &config_path {
            Some(path) => {
                debug!("config"; "using {}", path.display());
                Self::from_path(path)?
            }
            None => {
                debug!("config"; "no {} found, using defaults", Self::FILE_NAME);
                Self::default()
            }
        };

        let root = config_path
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);

        config.finalize(&root);
        config.apply_overrides(args, cwd);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignoring:", path.display());
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Resolve config-file paths against `root`.
    fn finalize(&mut self, root: &Path) {
        self.source.root = resolve_path(root, &self.source.root);
        self.target.dir = resolve_path(root, &self.target.dir);
        self.target.scratch = resolve_path(root, &self.target.scratch);
    }

    /// Apply command-line overrides. Paths resolve against `cwd`.
    fn apply_overrides(&mut self, args: &TargetArgs, cwd: &Path) {
        if let Some(remote) = &args.remote {
            self.target.remote.clone_from(remote);
        }
        if let Some(branch) = &args.branch {
            self.target.branch.clone_from(branch);
        }
        if let Some(dir) = &args.dir {
            self.target.dir = resolve_path(cwd, dir);
        }
        if let Some(source) = &args.source {
            self.source.root = resolve_path(cwd, source);
        }
        if let Some(scratch) = &args.scratch {
            self.target.scratch = resolve_path(cwd, scratch);
        }
    }

    /// Validate all sections, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.target.validate(&mut diag);
        self.commit.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }

    /// Commit message published for `revision`.
    pub fn commit_message(&self, revision: &str) -> String {
        crate::deploy::commit_message(&self.commit.prefix, revision)
    }
}

/// Parse a config snippet for tests, failing on unknown fields.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> DeployConfig {
    let (parsed, ignored) = DeployConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = DeployConfig::parse_with_ignored("[target\nremote = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_field_detected() {
        let (_, ignored) =
            DeployConfig::parse_with_ignored("[target]\nremote = \"x\"\nforce = true").unwrap();
        assert!(ignored.iter().any(|f| f.contains("force")));

        let (_, ignored) = DeployConfig::parse_with_ignored("[hooks]\npre = 1").unwrap();
        assert!(ignored.iter().any(|f| f.contains("hooks")));
    }

    #[test]
    fn test_load_defaults_from_empty_config() {
        let dir = TempDir::new().unwrap();
        let cwd = dir.path().join("work");
        fs::create_dir_all(&cwd).unwrap();
        fs::write(dir.path().join(DeployConfig::FILE_NAME), "").unwrap();

        let config = DeployConfig::load_from(&cwd, None, &TargetArgs::default()).unwrap();
        assert_eq!(config.source.root, dir.path().join("."));
        assert_eq!(config.target.dir, dir.path().join("demo/dist"));
        assert_eq!(config.target.remote, TargetConfig::default().remote);
        assert_eq!(config.commit_message("abc1234"), "Update to abc1234");
    }

    #[test]
    fn test_load_resolves_paths_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("demo");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            dir.path().join(DeployConfig::FILE_NAME),
            "[source]\nroot = \"app\"\n[target]\ndir = \"out\"\nscratch = \"/tmp\"\n",
        )
        .unwrap();

        let config = DeployConfig::load_from(&nested, None, &TargetArgs::default()).unwrap();
        assert_eq!(config.source.root, dir.path().join("app"));
        assert_eq!(config.target.dir, dir.path().join("out"));
        assert_eq!(config.target.scratch, PathBuf::from("/tmp"));
    }

    #[test]
    fn test_cli_overrides_resolve_against_cwd() {
        let dir = TempDir::new().unwrap();
        let cwd = dir.path().join("ci");
        fs::create_dir_all(&cwd).unwrap();
        fs::write(dir.path().join(DeployConfig::FILE_NAME), "[target]\ndir = \"out\"\n").unwrap();

        let args = TargetArgs {
            remote: Some("https://example.com/site.git".into()),
            branch: Some("pages".into()),
            dir: Some(PathBuf::from("dist")),
            ..TargetArgs::default()
        };
        let config = DeployConfig::load_from(&cwd, None, &args).unwrap();
        assert_eq!(config.target.remote, "https://example.com/site.git");
        assert_eq!(config.target.branch, "pages");
        assert_eq!(config.target.dir, cwd.join("dist"));
    }

    #[test]
    fn test_explicit_config_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = DeployConfig::load_from(
            dir.path(),
            Some(Path::new("missing.toml")),
            &TargetArgs::default(),
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::NotFound(_))
        ));
    }

    #[test]
    fn test_validation_errors_are_collected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ci.toml");
        fs::write(&path, "[target]\nremote = \"\"\n[commit]\nname = \"\"\n").unwrap();

        let err =
            DeployConfig::load_from(dir.path(), Some(path.as_path()), &TargetArgs::default()).unwrap_err();
        match err.downcast_ref::<ConfigError>() {
            Some(ConfigError::Diagnostics(diag)) => assert_eq!(diag.errors().len(), 2),
            other => panic!("expected diagnostics, got {other:?}"),
        }
    }
}
