use crate::areas::session::Session;
use crate::areas::tools::ToolRunner;
use crate::artifacts::script::command::ScriptCommand;
use crate::artifacts::version::version_kind::VersionKind;

impl<R: ToolRunner> Session<R> {
    pub async fn run_command(&mut self, line: &str) -> anyhow::Result<()> {
        self.ensure_not_cancelled()?;

        tracing::info!("command: {}", line);

        match ScriptCommand::classify(line)? {
            ScriptCommand::Git(subcommand) => self.git(&subcommand).await?,
            ScriptCommand::Commit(file_name) => self.commit(&file_name).await?,
            ScriptCommand::ShowVersion { all } => self.show_version(all).await?,
            ScriptCommand::Title(title) => self.diagram_mut().set_title(&title)?,
            ScriptCommand::Version(kind) => self.diagram_mut().set_version(VersionKind::parse(&kind)),
            ScriptCommand::Include(file_name) => Box::pin(self.process_file(file_name)).await?,
            ScriptCommand::Config(file_name) => self.config(&file_name)?,
            ScriptCommand::Unknown(line) => {
                if !self.settings().lenient() {
                    anyhow::bail!("do not know how to handle command: \"{}\"", line);
                }

                tracing::warn!("do not know how to handle command: \"{}\"", line);
            }
        }

        Ok(())
    }
}
