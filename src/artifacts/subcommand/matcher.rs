use crate::artifacts::subcommand::action::SubCommandAction;
use crate::artifacts::subcommand::{
    CHECKOUT_PATTERN, CREATE_AND_CHECKOUT_PATTERN, CREATE_BRANCH_PATTERN, DELETE_BRANCH_PATTERN,
    INIT_PATTERN, MERGE_PATTERN, RENAME_DEFAULT_BRANCH_PATTERN, TAG_PATTERN,
};
use anyhow::Context;
use regex::Regex;

type Handler = fn(&[&str]) -> anyhow::Result<SubCommandAction>;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubCommandError {
    #[error("git subcommand '{0}' was not handled")]
    Unhandled(String),
}

struct Entry {
    pattern: Regex,
    handler: Handler,
}

/// Ordered (pattern, handler) table for `git` script lines.
pub struct SubCommandMatcher {
    entries: Vec<Entry>,
}

impl SubCommandMatcher {
    pub fn new() -> anyhow::Result<Self> {
        let mut matcher = SubCommandMatcher {
            entries: Vec::new(),
        };

        matcher.add_entry(INIT_PATTERN, SubCommandAction::ignore)?;
        matcher.add_entry(RENAME_DEFAULT_BRANCH_PATTERN, SubCommandAction::ignore)?;
        matcher.add_entry(TAG_PATTERN, SubCommandAction::tag)?;
        matcher.add_entry(DELETE_BRANCH_PATTERN, SubCommandAction::delete_branch)?;
        matcher.add_entry(CREATE_BRANCH_PATTERN, SubCommandAction::create_branch)?;
        matcher.add_entry(
            CREATE_AND_CHECKOUT_PATTERN,
            SubCommandAction::create_and_checkout,
        )?;
        matcher.add_entry(CHECKOUT_PATTERN, SubCommandAction::checkout)?;
        matcher.add_entry(MERGE_PATTERN, SubCommandAction::merge)?;

        Ok(matcher)
    }

    fn add_entry(&mut self, pattern: &str, handler: Handler) -> anyhow::Result<()> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("invalid subcommand pattern: {pattern}"))?;

        self.entries.push(Entry { pattern, handler });

        Ok(())
    }

    /// Runs the handler of the first pattern matching the whole subcommand.
    pub fn resolve(&self, subcommand: &str) -> anyhow::Result<SubCommandAction> {
        for entry in &self.entries {
            if let Some(captures) = entry.pattern.captures(subcommand) {
                let args = captures
                    .iter()
                    .skip(1)
                    .map(|group| group.map_or("", |m| m.as_str()))
                    .collect::<Vec<_>>();

                return (entry.handler)(&args)
                    .with_context(|| format!("failed to handle git subcommand '{subcommand}'"));
            }
        }

        Err(SubCommandError::Unhandled(subcommand.to_string()).into())
    }

    #[cfg(test)]
    fn matching_entries(&self, subcommand: &str) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.pattern.is_match(subcommand))
            .count()
    }
}
