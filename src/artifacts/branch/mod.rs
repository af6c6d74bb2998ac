pub mod branch_id;
pub mod branch_name;

/// Git's ref-name rules, plus `"` which cannot appear in a diagram participant.
pub const INVALID_BRANCH_NAME_REGEX: &str =
    r#"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|^-|[\x00-\x20\*:\?\[\\~\^\x7f"]"#;

/// The branch a fresh scratch repository is renamed to before the seed commit.
pub const BOOTSTRAP_BRANCH: &str = "main";
