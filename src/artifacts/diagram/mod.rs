//! Sequence-diagram model of a scripted repository history
//!
//! The diagram is an append-only log of PlantUML statements plus the mapping
//! from logical branch names to participant identifiers. Every mutation
//! resolves all the names it needs before appending, so a failed call leaves
//! the log untouched.

pub mod statement;

use crate::artifacts::branch::branch_id::BranchId;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::version::version_kind::VersionKind;
use anyhow::Context;
use statement::Statement;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const DIAGRAM_EXTENSION: &str = "uml";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("attempt to create duplicate branch: {0}")]
    DuplicateBranch(BranchName),
    #[error("branch {0} not found in diagram")]
    UnknownBranch(BranchName),
    #[error("diagram has already been written")]
    AlreadyFinalized,
}

#[derive(Debug)]
pub struct Diagram {
    statements: Vec<Statement>,
    branches: HashMap<BranchName, BranchId>,
    last_id: Option<BranchId>,
    version_kind: VersionKind,
    finalized: bool,
}

impl Default for Diagram {
    fn default() -> Self {
        Self::new()
    }
}

impl Diagram {
    pub fn new() -> Self {
        Diagram {
            statements: vec![Statement::Open],
            branches: HashMap::new(),
            last_id: None,
            version_kind: VersionKind::default(),
            finalized: false,
        }
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.statements.iter().map(ToString::to_string)
    }

    pub fn branch_id(&self, name: &BranchName) -> Result<BranchId, DiagramError> {
        self.branches
            .get(name)
            .copied()
            .ok_or_else(|| DiagramError::UnknownBranch(name.clone()))
    }

    pub fn version_kind(&self) -> &VersionKind {
        &self.version_kind
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), DiagramError> {
        self.append(Statement::Title(title.to_string()))
    }

    pub fn set_version(&mut self, kind: VersionKind) {
        self.version_kind = kind;
    }

    pub fn add_branch(
        &mut self,
        name: &BranchName,
        parent: Option<&BranchName>,
    ) -> Result<BranchId, DiagramError> {
        self.ensure_open()?;

        if self.branches.contains_key(name) {
            return Err(DiagramError::DuplicateBranch(name.clone()));
        }

        let parent = parent
            .map(|parent| self.branch_id(parent).map(|parent_id| (parent, parent_id)))
            .transpose()?;

        let id = self.last_id.map_or(BranchId::new(1), |last| last.next());
        self.last_id = Some(id);
        self.branches.insert(name.clone(), id);

        self.statements.push(Statement::Participant {
            name: name.clone(),
            id,
            created: parent.is_some(),
        });

        if let Some((parent, parent_id)) = parent {
            self.statements.push(Statement::BranchFrom {
                parent: parent.clone(),
                parent_id,
                id,
            });
        }

        Ok(id)
    }

    pub fn add_commit(&mut self, name: &BranchName, counter: u32) -> Result<(), DiagramError> {
        let id = self.branch_id(name)?;
        self.append(Statement::Commit { id, counter })
    }

    pub fn add_tag(&mut self, name: &BranchName, tag: &str) -> Result<(), DiagramError> {
        let id = self.branch_id(name)?;
        self.append(Statement::Tag {
            id,
            tag: tag.to_string(),
        })
    }

    pub fn add_version(
        &mut self,
        name: &BranchName,
        text: &str,
        same_line: bool,
    ) -> Result<(), DiagramError> {
        let id = self.branch_id(name)?;
        self.append(Statement::Version {
            id,
            text: text.to_string(),
            same_line,
        })
    }

    pub fn add_merge(&mut self, to: &BranchName, from: &BranchName) -> Result<(), DiagramError> {
        let to = self.branch_id(to)?;
        let from = self.branch_id(from)?;
        self.append(Statement::Merge { to, from })
    }

    /// Retires the participant. The name stays mapped so it can neither be
    /// recreated nor renumbered.
    pub fn delete_branch(&mut self, name: &BranchName) -> Result<(), DiagramError> {
        let id = self.branch_id(name)?;
        self.append(Statement::Destroy(id))
    }

    /// Closes the log and writes it to `<output_dir>/<name>.uml`.
    pub fn write(&mut self, output_dir: &Path, name: &str) -> anyhow::Result<PathBuf> {
        self.ensure_open()?;

        std::fs::create_dir_all(output_dir).with_context(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;

        let path = output_dir.join(format!("{name}.{DIAGRAM_EXTENSION}"));

        self.statements.push(Statement::Close);
        self.finalized = true;

        let mut content = self.lines().collect::<Vec<_>>().join("\n");
        content.push('\n');

        std::fs::write(&path, content)
            .with_context(|| format!("failed to write diagram {}", path.display()))?;

        Ok(path)
    }

    fn append(&mut self, statement: Statement) -> Result<(), DiagramError> {
        self.ensure_open()?;
        self.statements.push(statement);
        Ok(())
    }

    fn ensure_open(&self) -> Result<(), DiagramError> {
        if self.finalized {
            return Err(DiagramError::AlreadyFinalized);
        }

        Ok(())
    }
}
