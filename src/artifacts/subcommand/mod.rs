//! Version-control subcommand tracking
//!
//! Every `git ...` script line is matched against an ordered pattern table.
//! A matching entry turns its captures into a `SubCommandAction`, which the
//! session then applies to its branch state and the diagram. Patterns are
//! anchored and mutually exclusive, so registration order only matters for
//! readability.

pub mod action;
pub mod matcher;

pub const INIT_PATTERN: &str = r"^init$";
pub const RENAME_DEFAULT_BRANCH_PATTERN: &str = r"^branch -m main$";
pub const TAG_PATTERN: &str = r"^tag ([^-\s]\S*)$";
pub const DELETE_BRANCH_PATTERN: &str = r"^branch -[dD] (\S+)$";
pub const CREATE_BRANCH_PATTERN: &str = r"^branch ([^-\s]\S*)$";
pub const CREATE_AND_CHECKOUT_PATTERN: &str = r"^checkout -b (\S+)$";
pub const CHECKOUT_PATTERN: &str = r"^checkout ([^-\s]\S*)$";
pub const MERGE_PATTERN: &str = r"^merge (?:--no-ff )?([^-\s]\S*)$";
