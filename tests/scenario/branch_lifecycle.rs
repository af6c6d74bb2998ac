use crate::common::session::{diagram_lines, init_session, run_all, work_dir};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Word;
use pretty_assertions::assert_eq;
use rstest::rstest;
use sample_builder::artifacts::diagram::DiagramError;

#[rstest]
#[tokio::test]
async fn branch_commit_and_merge_back(work_dir: TempDir) {
    let (mut session, runner) = init_session(&work_dir).await;

    run_all(
        &mut session,
        &[
            "git branch dev",
            "git checkout dev",
            "commit a.txt",
            "git checkout main",
            "git merge dev",
        ],
    )
    .await;

    assert_eq!(
        diagram_lines(&session),
        vec![
            "@startuml",
            "participant \"main\" as b1 #99FF99",
            "b1 -> b1: commit #1",
            "create participant \"dev\" as b2 #99FF99",
            "b1 -> b2: branch from main",
            "b2 -> b2: commit #2",
            "b1 <- b2: merge",
        ]
    );
    assert_eq!(session.current_branch().as_ref(), "main");
    assert_eq!(
        runner.command_lines("git")[4..].to_vec(),
        vec![
            "branch dev",
            "checkout dev",
            "add a.txt",
            "commit -m Commit #2",
            "checkout main",
            "merge dev",
        ]
    );
}

#[rstest]
#[tokio::test]
async fn branch_identifiers_follow_creation_order(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;
    let names = (0..5)
        .map(|i| format!("{}{}", Word().fake::<String>(), i))
        .collect::<Vec<_>>();

    for name in &names {
        session.run_command(&format!("git branch {name}")).await.unwrap();
    }

    for (position, name) in names.iter().enumerate() {
        let branch = sample_builder::artifacts::branch::branch_name::BranchName::try_parse(
            name.as_str(),
        )
        .unwrap();
        assert_eq!(
            session.diagram().branch_id(&branch).unwrap().to_string(),
            format!("b{}", position + 2)
        );
    }
}

#[rstest]
#[tokio::test]
async fn duplicate_branch_is_fatal_and_leaves_diagram_untouched(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;
    run_all(&mut session, &["git branch dev"]).await;
    let before = diagram_lines(&session);

    let err = session.run_command("git branch dev").await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DiagramError>(),
        Some(DiagramError::DuplicateBranch(_))
    ));
    assert_eq!(diagram_lines(&session), before);
}

#[rstest]
#[case("git checkout ghost")]
#[case("git merge ghost")]
#[case("git branch -d ghost")]
#[tokio::test]
async fn unknown_branch_is_a_lookup_error(work_dir: TempDir, #[case] line: &str) {
    let (mut session, _) = init_session(&work_dir).await;
    let before = diagram_lines(&session);

    let err = session.run_command(line).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DiagramError>(),
        Some(DiagramError::UnknownBranch(_))
    ));
    assert_eq!(diagram_lines(&session), before);
    assert_eq!(session.current_branch().as_ref(), "main");
}

#[rstest]
#[tokio::test]
async fn tag_lands_on_current_branch(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;

    run_all(
        &mut session,
        &["git branch release", "git checkout release", "git tag v1.0.0"],
    )
    .await;

    assert_eq!(
        diagram_lines(&session).last().map(String::as_str),
        Some("b2 -> b2: tag v1.0.0")
    );
}

#[rstest]
#[tokio::test]
async fn deleted_branch_leaves_active_set_but_keeps_history(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;
    run_all(
        &mut session,
        &[
            "git branch feature",
            "git checkout feature",
            "commit f.txt",
            "git checkout main",
            "git merge feature",
        ],
    )
    .await;
    let before = diagram_lines(&session);

    run_all(&mut session, &["git branch -d feature"]).await;

    let after = diagram_lines(&session);
    assert_eq!(after[..before.len()].to_vec(), before);
    assert_eq!(after.last().map(String::as_str), Some("destroy b2"));
    assert_eq!(
        session
            .active_branches()
            .iter()
            .map(|branch| branch.to_string())
            .collect::<Vec<_>>(),
        vec!["main"]
    );
    assert!(session.run_command("git branch feature").await.is_err());
}

#[rstest]
#[tokio::test]
async fn checkout_with_create_flag_switches_to_new_branch(work_dir: TempDir) {
    let (mut session, _) = init_session(&work_dir).await;

    run_all(&mut session, &["git checkout -b hotfix", "commit fix.txt"]).await;

    assert_eq!(session.current_branch().as_ref(), "hotfix");
    assert_eq!(
        diagram_lines(&session)[3..].to_vec(),
        vec![
            "create participant \"hotfix\" as b2 #99FF99",
            "b1 -> b2: branch from main",
            "b2 -> b2: commit #2",
        ]
    );
}
