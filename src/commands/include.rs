use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use crate::artifacts::script::executable_lines;
use anyhow::Context;
use std::path::Path;

impl<R: ToolRunner> Session<R> {
    /// Runs every command line of a script. Nested paths resolve against the
    /// directory of the including script.
    pub async fn process_file(&mut self, file_name: impl AsRef<Path>) -> anyhow::Result<()> {
        let path = self.resolve_script_path(file_name.as_ref());

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read script {}", path.display()))?;

        self.push_file(path.clone());
        let result = self.process_lines(&content).await;
        self.pop_file();

        result.with_context(|| format!("in script {}", path.display()))
    }

    async fn process_lines(&mut self, content: &str) -> anyhow::Result<()> {
        for line in executable_lines(content) {
            self.run_command(line).await?;
        }

        Ok(())
    }
}
