//! Data types and pure algorithms
//!
//! - `branch`: branch names and diagram participant identifiers
//! - `diagram`: the append-only sequence-diagram model
//! - `script`: script line filtering and command classification
//! - `subcommand`: git subcommand pattern table
//! - `version`: gitversion output and display selection

pub mod branch;
pub mod diagram;
pub mod script;
pub mod subcommand;
pub mod version;
