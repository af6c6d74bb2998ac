use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use crate::artifacts::subcommand::action::SubCommandAction;

impl<R: ToolRunner> Session<R> {
    /// Runs a git subcommand in the workspace and mirrors it in the diagram.
    ///
    /// The subcommand is matched before git runs, so an untracked subcommand
    /// never reaches the repository.
    pub async fn git(&mut self, subcommand: &str) -> anyhow::Result<()> {
        let action = self.matcher().resolve(subcommand)?;

        let args = subcommand.split_whitespace().collect::<Vec<_>>();
        self.run_git(&args).await?;

        self.apply_subcommand(action)
    }

    pub(crate) async fn run_git(&self, args: &[&str]) -> anyhow::Result<String> {
        let git = self.settings().git().to_string();
        self.run_tool(&git, args).await
    }

    pub fn apply_subcommand(&mut self, action: SubCommandAction) -> anyhow::Result<()> {
        let current = self.current_branch().clone();

        match action {
            SubCommandAction::Ignore => {}
            SubCommandAction::Tag(tag) => self.diagram_mut().add_tag(&current, &tag)?,
            SubCommandAction::DeleteBranch(branch) => {
                self.diagram_mut().delete_branch(&branch)?;
                self.deactivate_branch(&branch);
            }
            SubCommandAction::CreateBranch(branch) => {
                self.diagram_mut().add_branch(&branch, Some(&current))?;
                self.activate_branch(branch);
            }
            SubCommandAction::CreateAndCheckout(branch) => {
                self.diagram_mut().add_branch(&branch, Some(&current))?;
                self.activate_branch(branch.clone());
                self.set_current_branch(branch);
            }
            SubCommandAction::Checkout(branch) => {
                self.diagram().branch_id(&branch)?;
                self.set_current_branch(branch);
            }
            SubCommandAction::Merge(branch) => self.diagram_mut().add_merge(&current, &branch)?,
        }

        Ok(())
    }
}
