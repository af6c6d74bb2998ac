use anyhow::Context;
use derive_new::new;
use std::future::Future;
use std::path::{Path, PathBuf};

/// A single blocking call to an external program.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct ToolInvocation {
    program: String,
    args: Vec<String>,
    working_dir: PathBuf,
}

impl ToolInvocation {
    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }
}

impl std::fmt::Display for ToolInvocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Runs external tools to completion and returns their captured stdout.
///
/// A non-zero exit status is an error carrying the captured output.
pub trait ToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> impl Future<Output = anyhow::Result<String>>;
}

/// Spawns real subprocesses.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

impl ToolRunner for ProcessRunner {
    async fn run(&self, invocation: &ToolInvocation) -> anyhow::Result<String> {
        tracing::debug!(
            program = invocation.program(),
            args = ?invocation.args(),
            cwd = %invocation.working_dir().display(),
            "running tool"
        );

        let output = tokio::process::Command::new(invocation.program())
            .args(invocation.args())
            .current_dir(invocation.working_dir())
            .kill_on_drop(true)
            .output()
            .await
            .with_context(|| format!("failed to start '{invocation}'"))?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!(
                "'{}' failed with {}\n{}{}",
                invocation,
                output.status,
                stdout,
                stderr
            );
        }

        Ok(stdout)
    }
}
