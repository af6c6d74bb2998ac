use crate::common::runner::RecordingRunner;
use crate::common::session::{diagram_lines, init_session, new_session, run_all, work_dir};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

fn version_lines(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter(|line| line.contains("rnote over"))
        .cloned()
        .collect()
}

#[rstest]
#[tokio::test]
async fn show_all_annotates_each_active_branch_on_one_row(work_dir: TempDir) {
    let (mut session, runner) = init_session(&work_dir).await;
    run_all(&mut session, &["git branch dev", "git checkout dev"]).await;
    let git_calls_before = runner.command_lines("git").len();

    run_all(&mut session, &["showver all"]).await;

    assert_eq!(
        version_lines(&diagram_lines(&session)),
        vec![
            "rnote over b1: 1.0.0-main.1",
            "/ rnote over b2: 1.0.0-dev.1",
        ]
    );
    assert_eq!(session.current_branch().as_ref(), "dev");
    assert_eq!(runner.checked_out(), "dev");
    assert_eq!(
        runner.command_lines("git")[git_calls_before..].to_vec(),
        vec!["checkout main", "checkout dev", "checkout dev", "checkout dev"]
    );
    assert_eq!(runner.command_lines("gitversion"), vec!["", ""]);
}

#[rstest]
#[tokio::test]
async fn show_current_annotates_only_current_branch(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;
    run_all(&mut session, &["git branch dev", "showver"]).await;

    assert_eq!(
        version_lines(&diagram_lines(&session)),
        vec!["rnote over b1: 1.0.0-main.1"]
    );
}

#[rstest]
#[tokio::test]
async fn deleted_branch_is_skipped_by_show_all(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;
    run_all(
        &mut session,
        &[
            "git branch dev",
            "git branch feature",
            "git branch -d dev",
            "showver all",
        ],
    )
    .await;

    assert_eq!(
        version_lines(&diagram_lines(&session)),
        vec![
            "rnote over b1: 1.0.0-main.1",
            "/ rnote over b3: 1.0.0-feature.1",
        ]
    );
}

#[rstest]
#[tokio::test]
async fn version_kind_selects_displayed_field(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;
    run_all(&mut session, &["ver semver", "showver", "ver mmp", "showver"]).await;

    assert_eq!(
        version_lines(&diagram_lines(&session)),
        vec!["rnote over b1: 1.0.0-main", "rnote over b1: 1.0.0"]
    );
}

#[rstest]
#[case("not json")]
#[case(r#"{ "SemVer": "1.0.0" }"#)]
#[tokio::test]
async fn unparseable_version_output_is_fatal(work_dir: TempDir, #[case] output: &str) {
    let runner = RecordingRunner::with_version_output(output);
    let mut session = new_session(&work_dir, runner);
    session.init().await.unwrap();
    let before = diagram_lines(&session);

    let err = session.run_command("showver").await.unwrap_err();

    assert!(format!("{err:#}").contains("could not deserialize version info"));
    assert_eq!(diagram_lines(&session), before);
}

#[rstest]
#[tokio::test]
async fn failing_version_tool_is_fatal(work_dir: TempDir) {
    let mut session = new_session(&work_dir, RecordingRunner::failing("gitversion"));
    session.init().await.unwrap();

    assert!(session.run_command("showver all").await.is_err());
}
