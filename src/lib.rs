//! Sample builder
//!
//! Interprets a scenario script of version-control steps, drives git through
//! it in a scratch workspace, asks gitversion for the resulting versions and
//! records the whole history as a PlantUML sequence diagram.
//!
//! - `areas`: the interpreter session and the resources it owns
//! - `artifacts`: branch, diagram, script, subcommand and version types
//! - `commands`: one `impl Session` per script command

pub mod areas;
pub mod artifacts;
pub mod commands;
