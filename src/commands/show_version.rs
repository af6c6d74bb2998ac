use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::version::version_info::VersionInfo;
use anyhow::Context;

impl<R: ToolRunner> Session<R> {
    /// Annotates the current branch, or every active branch on one row, with
    /// its computed version.
    pub async fn show_version(&mut self, all: bool) -> anyhow::Result<()> {
        let branches = if all {
            self.active_branches().iter().cloned().collect::<Vec<_>>()
        } else {
            vec![self.current_branch().clone()]
        };

        for (position, branch) in branches.iter().enumerate() {
            self.add_version_to_diagram(branch, position > 0).await?;
        }

        Ok(())
    }

    async fn add_version_to_diagram(
        &mut self,
        branch: &BranchName,
        same_line: bool,
    ) -> anyhow::Result<()> {
        self.diagram().branch_id(branch)?;

        self.run_git(&["checkout", branch.as_ref()]).await?;

        let gitversion = self.settings().gitversion().to_string();
        let output = self.run_tool(&gitversion, &[]).await?;

        let current = self.current_branch().clone();
        self.run_git(&["checkout", current.as_ref()]).await?;

        let info = VersionInfo::try_parse(&output)
            .with_context(|| format!("unexpected gitversion output for branch {branch}"))?;
        let text = info.display(self.diagram().version_kind())?;

        self.diagram_mut().add_version(branch, &text, same_line)?;

        Ok(())
    }
}
