use clap::Args;
use std::path::{Path, PathBuf};

const DEFAULT_WORKSPACE_DIR: &str = "sample-builder";

/// Run configuration. Every option can also come from the environment.
#[derive(Debug, Clone, Args)]
pub struct Settings {
    #[arg(
        long,
        env = "SAMPLE_BUILDER_WORKSPACE",
        help = "Scratch directory for the generated repository (destroyed on every run)"
    )]
    workspace: Option<PathBuf>,
    #[arg(
        long,
        env = "SAMPLE_BUILDER_OUTPUT",
        default_value = "OUTPUT",
        help = "Directory the diagram source and image are written to"
    )]
    output: PathBuf,
    #[arg(long, env = "SAMPLE_BUILDER_GIT", default_value = "git", help = "Version-control tool")]
    git: String,
    #[arg(
        long,
        env = "SAMPLE_BUILDER_GITVERSION",
        default_value = "gitversion",
        help = "Version-computation tool"
    )]
    gitversion: String,
    #[arg(
        long,
        env = "SAMPLE_BUILDER_PLANTUML",
        default_value = "plantuml",
        help = "Diagram rendering tool"
    )]
    plantuml: String,
    #[arg(long, help = "Write the diagram source without rendering it")]
    no_render: bool,
    #[arg(long, help = "Skip unknown script commands instead of failing")]
    lenient: bool,
}

impl Settings {
    pub fn new(workspace: PathBuf, output: PathBuf) -> Self {
        Settings {
            workspace: Some(workspace),
            output,
            git: "git".to_string(),
            gitversion: "gitversion".to_string(),
            plantuml: "plantuml".to_string(),
            no_render: false,
            lenient: false,
        }
    }

    pub fn with_lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn with_render(mut self, render: bool) -> Self {
        self.no_render = !render;
        self
    }

    pub fn workspace_dir(&self) -> PathBuf {
        self.workspace
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_WORKSPACE_DIR))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output
    }

    pub fn git(&self) -> &str {
        &self.git
    }

    pub fn gitversion(&self) -> &str {
        &self.gitversion
    }

    pub fn plantuml(&self) -> &str {
        &self.plantuml
    }

    pub fn render(&self) -> bool {
        !self.no_render
    }

    pub fn lenient(&self) -> bool {
        self.lenient
    }
}
