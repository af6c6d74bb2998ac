use anyhow::Context;
use std::path::Path;

/// File name the version-computation tool reads its configuration from.
pub const CONFIG_FILE_NAME: &str = "GitVersion.yml";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Destroys any previous contents and recreates the directory empty.
    pub fn reset(&self) -> anyhow::Result<()> {
        if self.path.exists() {
            std::fs::remove_dir_all(&self.path).with_context(|| {
                format!("failed to clear workspace {}", self.path.display())
            })?;
        }

        std::fs::create_dir_all(&self.path)
            .with_context(|| format!("failed to create workspace {}", self.path.display()))?;

        Ok(())
    }

    pub fn write_file(&self, file_path: &Path, content: &str) -> anyhow::Result<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }

        std::fs::write(&path, content)
            .with_context(|| format!("failed to write file {}", path.display()))?;

        Ok(())
    }

    pub fn read_file(&self, file_path: &Path) -> anyhow::Result<String> {
        let path = self.path.join(file_path);

        std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read file {}", path.display()))
    }

    /// Copies `source` over the version-computation configuration file.
    pub fn install_config(&self, source: &Path) -> anyhow::Result<()> {
        let destination = self.path.join(CONFIG_FILE_NAME);

        std::fs::copy(source, &destination).with_context(|| {
            format!(
                "failed to copy config {} to {}",
                source.display(),
                destination.display()
            )
        })?;

        Ok(())
    }
}
