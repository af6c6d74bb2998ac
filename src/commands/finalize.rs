use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use anyhow::Context;
use std::path::PathBuf;

impl<R: ToolRunner> Session<R> {
    /// Writes the diagram to `<output>/<name>.uml` and renders it with
    /// plantuml. The written file is kept even if rendering fails.
    pub async fn finalize(&mut self, name: &str) -> anyhow::Result<PathBuf> {
        let output_dir = self.settings().output_dir().to_path_buf();

        let path = self.diagram_mut().write(&output_dir, name)?;
        tracing::info!("wrote {}", path.display());

        if self.settings().render() {
            tracing::info!("running plantuml");

            let plantuml = self.settings().plantuml().to_string();
            let file = std::fs::canonicalize(&path)
                .with_context(|| format!("failed to resolve {}", path.display()))?;
            let working_dir = file.parent().unwrap_or(output_dir.as_path()).to_path_buf();
            let file = file.to_string_lossy().into_owned();

            self.run_tool_in(&plantuml, &[file.as_str()], &working_dir)
                .await
                .with_context(|| format!("failed to render {}", path.display()))?;
        }

        Ok(path)
    }
}
