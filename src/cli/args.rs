//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Publish a built demo directory once per source revision
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: deploy.toml, searched upward from cwd)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Echo every git invocation
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Compare the remote with the current revision and publish if it differs
    #[command(visible_alias = "p")]
    Publish {
        #[command(flatten)]
        args: TargetArgs,
    },

    /// Compare the remote with the current revision without publishing
    #[command(visible_alias = "s")]
    Status {
        #[command(flatten)]
        args: TargetArgs,
    },
}

/// Overrides for `deploy.toml`, shared by all subcommands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct TargetArgs {
    /// Remote repository URL to publish to
    #[arg(short, long, value_hint = clap::ValueHint::Url)]
    pub remote: Option<String>,

    /// Remote branch to force-push
    #[arg(short, long)]
    pub branch: Option<String>,

    /// Build output directory to publish
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub dir: Option<PathBuf>,

    /// Repository whose HEAD names the published revision
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// Directory that holds the transient bare clone
    #[arg(long, value_hint = clap::ValueHint::DirPath)]
    pub scratch: Option<PathBuf>,
}

impl Cli {
    pub const fn target_args(&self) -> &TargetArgs {
        match &self.command {
            Commands::Publish { args } | Commands::Status { args } => args,
        }
    }
}
