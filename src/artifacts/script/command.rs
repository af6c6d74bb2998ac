const GIT_COMMAND: &str = "git";
const COMMIT_COMMAND: &str = "commit";
const SHOW_VERSION_COMMAND: &str = "showver";
const TITLE_COMMAND: &str = "title";
const VERSION_COMMAND: &str = "ver";
const INCLUDE_COMMAND: &str = "include";
const CONFIG_COMMAND: &str = "config";

const SHOW_ALL_VERB: &str = "all";

/// Keywords in the order they are tried; the first match wins.
pub const COMMAND_KEYWORDS: [&str; 7] = [
    GIT_COMMAND,
    COMMIT_COMMAND,
    SHOW_VERSION_COMMAND,
    TITLE_COMMAND,
    VERSION_COMMAND,
    INCLUDE_COMMAND,
    CONFIG_COMMAND,
];

/// A classified script line. Argument payloads are everything after the
/// keyword and one separating space, untrimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    Git(String),
    Commit(String),
    ShowVersion { all: bool },
    Title(String),
    Version(String),
    Include(String),
    Config(String),
    Unknown(String),
}

impl ScriptCommand {
    pub fn classify(line: &str) -> anyhow::Result<Self> {
        let Some((keyword, argument)) = COMMAND_KEYWORDS
            .iter()
            .find_map(|keyword| split_keyword(line, keyword).map(|arg| (*keyword, arg)))
        else {
            return Ok(ScriptCommand::Unknown(line.to_string()));
        };

        if keyword == SHOW_VERSION_COMMAND {
            return Ok(ScriptCommand::ShowVersion {
                all: argument == Some(SHOW_ALL_VERB),
            });
        }

        let argument = argument
            .filter(|arg| !arg.is_empty())
            .ok_or_else(|| anyhow::anyhow!("command '{}' requires an argument", keyword))?
            .to_string();

        Ok(match keyword {
            GIT_COMMAND => ScriptCommand::Git(argument),
            COMMIT_COMMAND => ScriptCommand::Commit(argument),
            TITLE_COMMAND => ScriptCommand::Title(argument),
            VERSION_COMMAND => ScriptCommand::Version(argument),
            INCLUDE_COMMAND => ScriptCommand::Include(argument),
            _ => ScriptCommand::Config(argument),
        })
    }
}

// `Some(None)` for a bare keyword, `Some(Some(arg))` for `keyword arg`.
fn split_keyword<'a>(line: &'a str, keyword: &str) -> Option<Option<&'a str>> {
    let rest = line.strip_prefix(keyword)?;

    if rest.is_empty() {
        Some(None)
    } else {
        rest.strip_prefix(' ').map(Some)
    }
}
