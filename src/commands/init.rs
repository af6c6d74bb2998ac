use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;

const SEED_FILE: &str = "file1.txt";

impl<R: ToolRunner> Session<R> {
    /// Recreates the scratch workspace and seeds it with a repository on the
    /// bootstrap branch holding exactly one commit.
    pub async fn init(&mut self) -> anyhow::Result<()> {
        self.workspace()
            .reset()
            .context("failed to prepare scratch workspace")?;

        self.run_command("git init").await?;
        self.run_command("git branch -m main").await?;

        let bootstrap = BranchName::bootstrap();
        self.diagram_mut().add_branch(&bootstrap, None)?;
        self.activate_branch(bootstrap.clone());
        self.set_current_branch(bootstrap);

        // gitversion needs at least one commit to work at all
        self.run_command(&format!("commit {SEED_FILE}"))
            .await
            .context("seed commit failed")?;

        tracing::info!(
            workspace = %self.workspace().path().display(),
            "workspace initialized"
        );

        Ok(())
    }
}
