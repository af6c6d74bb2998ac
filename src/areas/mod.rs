//! Stateful run components
//!
//! - `session`: the script interpreter session and its branch bookkeeping
//! - `settings`: run configuration gathered from the command line
//! - `tools`: external tool invocation (git, gitversion, plantuml)
//! - `workspace`: the scratch directory the scripted repository lives in

pub mod session;
pub mod settings;
pub mod tools;
pub mod workspace;
