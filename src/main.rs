use clap::Parser;
use colored::Colorize;
use sample_builder::areas::session::Session;
use sample_builder::areas::settings::Settings;
use sample_builder::areas::tools::ProcessRunner;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "You must specify the file to process.";

#[derive(Parser)]
#[command(
    name = "sample-builder",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Generate versioning sample diagrams from scenario scripts",
    long_about = "Runs a scenario script of git steps in a scratch repository, \
    queries gitversion along the way and writes the resulting history \
    as a PlantUML sequence diagram.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The scenario script to process")]
    script: Option<PathBuf>,
    #[arg(short, long, help = "Log every tool invocation")]
    verbose: bool,
    #[command(flatten)]
    settings: Settings,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let Some(script) = cli.script else {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    };

    let cancellation = CancellationToken::new();
    let signal_token = cancellation.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            eprintln!("*** Cancel event triggered ***");
            signal_token.cancel();
        }
    });

    match run(&script, cli.settings, cancellation).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(
    script: &Path,
    settings: Settings,
    cancellation: CancellationToken,
) -> anyhow::Result<()> {
    let name = script
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .ok_or_else(|| anyhow::anyhow!("script path has no file name: {}", script.display()))?;

    let mut session = Session::new(settings, ProcessRunner, cancellation)?;
    session.init().await?;
    session.process_file(script).await?;
    session.finalize(&name).await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
