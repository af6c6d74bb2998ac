use crate::common::read_lines;
use crate::common::runner::RecordingRunner;
use crate::common::session::{init_session, new_session, run_all, settings_for, work_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sample_builder::areas::session::Session;
use tokio_util::sync::CancellationToken;

#[rstest]
#[tokio::test]
async fn finalize_writes_bookended_diagram_and_renders_it(work_dir: TempDir) {
    let (mut session, runner) = init_session(&work_dir).await;
    run_all(
        &mut session,
        &["title Simple", "git branch dev", "git tag v1.0.0"],
    )
    .await;

    let path = session.finalize("simple").await.unwrap();

    assert_eq!(path, work_dir.path().join("OUTPUT").join("simple.uml"));
    assert_eq!(
        read_lines(&path),
        vec![
            "@startuml",
            "participant \"main\" as b1 #99FF99",
            "b1 -> b1: commit #1",
            "title Simple",
            "create participant \"dev\" as b2 #99FF99",
            "b1 -> b2: branch from main",
            "b1 -> b1: tag v1.0.0",
            "@enduml",
        ]
    );

    let render = runner
        .invocations()
        .into_iter()
        .find(|invocation| invocation.program() == "plantuml")
        .expect("plantuml was not invoked");
    let rendered = std::path::PathBuf::from(&render.args()[0]);
    assert_eq!(rendered.file_name(), path.file_name());
    assert_eq!(Some(render.working_dir()), rendered.parent());
}

#[rstest]
#[tokio::test]
async fn render_can_be_skipped(work_dir: TempDir) {
    let runner = RecordingRunner::default();
    let settings = settings_for(&work_dir).with_render(false);
    let mut session = Session::new(settings, runner.clone(), CancellationToken::new()).unwrap();
    session.init().await.unwrap();

    let path = session.finalize("quiet").await.unwrap();

    assert!(path.exists());
    assert!(runner.command_lines("plantuml").is_empty());
}

#[rstest]
#[tokio::test]
async fn render_failure_keeps_written_diagram(work_dir: TempDir) {
    let runner = RecordingRunner::failing("plantuml");
    let mut session = new_session(&work_dir, runner);
    session.init().await.unwrap();

    let err = session.finalize("broken").await.unwrap_err();

    assert!(format!("{err:#}").contains("failed to render"));
    let lines = read_lines(&work_dir.path().join("OUTPUT").join("broken.uml"));
    assert_eq!(lines.first().map(String::as_str), Some("@startuml"));
    assert_eq!(lines.last().map(String::as_str), Some("@enduml"));
}
