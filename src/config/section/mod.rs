//! Configuration section definitions.
//!
//! Each module corresponds to a section in `deploy.toml`:
//!
//! | Module   | TOML Section | Purpose                                  |
//! |----------|--------------|------------------------------------------|
//! | `source` | `[source]`   | Repository that names the revision       |
//! | `target` | `[target]`   | Remote, branch, output and scratch dirs  |
//! | `commit` | `[commit]`   | Message prefix and committer identity    |

mod commit;
mod source;
mod target;

pub use commit::CommitConfig;
pub use source::SourceConfig;
pub use target::TargetConfig;
