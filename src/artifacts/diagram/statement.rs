use crate::artifacts::branch::branch_id::BranchId;
use crate::artifacts::branch::branch_name::BranchName;

const PARTICIPANT_COLOR: &str = "#99FF99";

/// One line of PlantUML sequence-diagram markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Open,
    Close,
    Title(String),
    Participant {
        name: BranchName,
        id: BranchId,
        created: bool,
    },
    BranchFrom {
        parent: BranchName,
        parent_id: BranchId,
        id: BranchId,
    },
    Commit {
        id: BranchId,
        counter: u32,
    },
    Tag {
        id: BranchId,
        tag: String,
    },
    Version {
        id: BranchId,
        text: String,
        same_line: bool,
    },
    Merge {
        to: BranchId,
        from: BranchId,
    },
    Destroy(BranchId),
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Statement::Open => write!(f, "@startuml"),
            Statement::Close => write!(f, "@enduml"),
            Statement::Title(title) => write!(f, "title {title}"),
            Statement::Participant { name, id, created } => {
                let create = if *created { "create " } else { "" };
                write!(f, "{create}participant \"{name}\" as {id} {PARTICIPANT_COLOR}")
            }
            Statement::BranchFrom {
                parent,
                parent_id,
                id,
            } => write!(f, "{parent_id} -> {id}: branch from {parent}"),
            Statement::Commit { id, counter } => write!(f, "{id} -> {id}: commit #{counter}"),
            Statement::Tag { id, tag } => write!(f, "{id} -> {id}: tag {tag}"),
            Statement::Version {
                id,
                text,
                same_line,
            } => {
                let slash = if *same_line { "/ " } else { "" };
                write!(f, "{slash}rnote over {id}: {text}")
            }
            Statement::Merge { to, from } => write!(f, "{to} <- {from}: merge"),
            Statement::Destroy(id) => write!(f, "destroy {id}"),
        }
    }
}
