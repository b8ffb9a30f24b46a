//! Command-line interface module.

mod args;
pub mod deploy;

pub use args::{Cli, Commands, TargetArgs};
