use crate::areas::settings::Settings;
use crate::areas::tools::{ToolInvocation, ToolRunner};
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::diagram::Diagram;
use crate::artifacts::subcommand::matcher::SubCommandMatcher;
use indexmap::IndexSet;
use std::path::{Path, PathBuf};
use tokio_util::sync::CancellationToken;

/// One run of the script interpreter.
///
/// Owns everything a script mutates: the diagram, the branch bookkeeping, the
/// commit counter and the stack of scripts currently being read. Command
/// implementations live in `crate::commands`, one `impl Session` per command.
pub struct Session<R: ToolRunner> {
    settings: Settings,
    runner: R,
    workspace: Workspace,
    diagram: Diagram,
    matcher: SubCommandMatcher,
    current_branch: BranchName,
    active_branches: IndexSet<BranchName>,
    file_stack: Vec<PathBuf>,
    commit_counter: u32,
    cancellation: CancellationToken,
}

impl<R: ToolRunner> Session<R> {
    pub fn new(
        settings: Settings,
        runner: R,
        cancellation: CancellationToken,
    ) -> anyhow::Result<Self> {
        let workspace = Workspace::new(settings.workspace_dir().into_boxed_path());

        Ok(Session {
            settings,
            runner,
            workspace,
            diagram: Diagram::new(),
            matcher: SubCommandMatcher::new()?,
            current_branch: BranchName::bootstrap(),
            active_branches: IndexSet::new(),
            file_stack: Vec::new(),
            commit_counter: 0,
            cancellation,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn diagram(&self) -> &Diagram {
        &self.diagram
    }

    pub(crate) fn diagram_mut(&mut self) -> &mut Diagram {
        &mut self.diagram
    }

    pub(crate) fn matcher(&self) -> &SubCommandMatcher {
        &self.matcher
    }

    pub fn current_branch(&self) -> &BranchName {
        &self.current_branch
    }

    pub(crate) fn set_current_branch(&mut self, branch: BranchName) {
        self.current_branch = branch;
    }

    /// Branches a `showver all` reports on, in creation order.
    pub fn active_branches(&self) -> &IndexSet<BranchName> {
        &self.active_branches
    }

    pub(crate) fn activate_branch(&mut self, branch: BranchName) {
        self.active_branches.insert(branch);
    }

    pub(crate) fn deactivate_branch(&mut self, branch: &BranchName) {
        self.active_branches.shift_remove(branch);
    }

    pub fn commit_counter(&self) -> u32 {
        self.commit_counter
    }

    pub(crate) fn next_commit(&mut self) -> u32 {
        self.commit_counter += 1;
        self.commit_counter
    }

    pub fn include_depth(&self) -> usize {
        self.file_stack.len()
    }

    pub(crate) fn push_file(&mut self, path: PathBuf) {
        self.file_stack.push(path);
    }

    pub(crate) fn pop_file(&mut self) {
        self.file_stack.pop();
    }

    /// Resolves a script-relative path against the directory of the innermost
    /// script being read, or returns it unchanged at top level.
    pub fn resolve_script_path(&self, file_name: &Path) -> PathBuf {
        match self.file_stack.last().and_then(|top| top.parent()) {
            Some(parent) => parent.join(file_name),
            None => file_name.to_path_buf(),
        }
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    pub(crate) fn ensure_not_cancelled(&self) -> anyhow::Result<()> {
        if self.cancellation.is_cancelled() {
            anyhow::bail!("run cancelled");
        }

        Ok(())
    }

    /// Runs an external tool in the workspace, honoring cancellation.
    pub(crate) async fn run_tool(&self, program: &str, args: &[&str]) -> anyhow::Result<String> {
        self.run_tool_in(program, args, self.workspace.path()).await
    }

    pub(crate) async fn run_tool_in(
        &self,
        program: &str,
        args: &[&str],
        working_dir: &Path,
    ) -> anyhow::Result<String> {
        self.ensure_not_cancelled()?;

        let invocation = ToolInvocation::new(
            program.to_string(),
            args.iter().map(ToString::to_string).collect(),
            working_dir.to_path_buf(),
        );

        self.runner.run(&invocation).await
    }
}
