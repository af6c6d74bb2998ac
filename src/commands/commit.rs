use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use std::path::Path;

impl<R: ToolRunner> Session<R> {
    /// Overwrites `file_name` with the next commit number and commits it on
    /// the current branch.
    pub async fn commit(&mut self, file_name: &str) -> anyhow::Result<()> {
        let number = self.next_commit();

        self.workspace()
            .write_file(Path::new(file_name), &format!("Commit #{number}\n"))?;

        let message = format!("Commit #{number}");
        self.run_git(&["add", file_name]).await?;
        self.run_git(&["commit", "-m", message.as_str()]).await?;

        let current = self.current_branch().clone();
        self.diagram_mut().add_commit(&current, number)?;

        Ok(())
    }
}
