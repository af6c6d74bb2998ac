//! Script command implementations
//!
//! Each file extends `Session` with the behavior of one script command or
//! lifecycle step:
//!
//! - `init`: reset the workspace and seed the repository
//! - `include`: read a script file, including nested scripts
//! - `run_command`: classify a single line and dispatch it
//! - `git`: pass a subcommand to git and track it in the diagram
//! - `commit`: write, stage and commit a numbered file
//! - `show_version`: annotate branches with computed versions
//! - `config`: install the version-computation configuration
//! - `finalize`: write the diagram and render it

pub mod commit;
pub mod config;
pub mod finalize;
pub mod git;
pub mod include;
pub mod init;
pub mod run_command;
pub mod show_version;
