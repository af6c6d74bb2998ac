use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use std::path::Path;

impl<R: ToolRunner> Session<R> {
    /// Installs a script-relative file as the workspace's GitVersion.yml.
    pub fn config(&mut self, file_name: &str) -> anyhow::Result<()> {
        let source = self.resolve_script_path(Path::new(file_name));

        self.workspace().install_config(&source)?;

        tracing::debug!(source = %source.display(), "installed version configuration");

        Ok(())
    }
}
