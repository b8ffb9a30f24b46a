//! Utility modules for the deploy helper.

pub mod exec;
pub mod git;
