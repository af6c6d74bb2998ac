//! Script parsing
//!
//! - `command`: classification of a script line into a `ScriptCommand`
//!
//! Scripts are plain UTF-8 text with one command per line. Blank lines and
//! lines whose first non-space character is `#` are skipped, and trailing
//! whitespace is stripped before classification. A leading byte-order mark
//! is ignored.

pub mod command;

pub const COMMENT_PREFIX: char = '#';
pub const BYTE_ORDER_MARK: char = '\u{feff}';

/// Yields the lines of a script that carry a command.
pub fn executable_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(content)
        .lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty() && !line.trim_start().starts_with(COMMENT_PREFIX))
}
