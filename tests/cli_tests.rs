//! Binary-level tests for the diagnostic CLI.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::repository::*;

mod cli_tests {
    use super::*;

    #[test]
    fn test_status_shows_branch_and_files() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        create_file(&repo.path, "newfile.txt", "new content")?;

        let mut cmd = Command::cargo_bin("scenegit")?;
        cmd.arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("On branch"))
            .stdout(predicate::str::contains("newfile.txt"));
        Ok(())
    }

    #[test]
    fn test_status_reports_clean_tree() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("scenegit")?;
        cmd.arg("status")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Working directory clean"));
        Ok(())
    }

    #[test]
    fn test_status_outside_repository_fails() -> anyhow::Result<()> {
        let dir = setup_workdir()?;

        let mut cmd = Command::cargo_bin("scenegit")?;
        cmd.arg("status")
            .current_dir(&dir.path)
            .assert()
            .failure()
            .stdout(predicate::str::contains("No git repository found"));
        Ok(())
    }

    #[test]
    fn test_log_shows_commit_messages() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        let mut cmd = Command::cargo_bin("scenegit")?;
        cmd.arg("log")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("initial commit"));
        Ok(())
    }

    #[test]
    fn test_branches_marks_current_first() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        run_git(&repo.path, &["branch", "feature-a"]);
        run_git(&repo.path, &["checkout", "feature-a"]);

        let mut cmd = Command::cargo_bin("scenegit")?;
        let assert = cmd.arg("branches").current_dir(&repo.path).assert().success();
        let stdout = String::from_utf8(assert.get_output().stdout.clone())?;
        let first_line = stdout.lines().next().unwrap_or_default();
        assert!(first_line.starts_with('*'));
        assert!(first_line.contains("feature-a"));
        Ok(())
    }

    #[test]
    fn test_stage_commit_log_round_trip() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let document = create_file(&repo.path, "scene.txt", "scene data")?;
        create_file(&repo.path, "asset.txt", "asset")?;

        Command::cargo_bin("scenegit")?
            .args(["stage", "--all"])
            .current_dir(&repo.path)
            .assert()
            .success();

        Command::cargo_bin("scenegit")?
            .args(["commit", "-m", "first save"])
            .arg("--document")
            .arg(&document)
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Committed"));

        Command::cargo_bin("scenegit")?
            .arg("log")
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("first save"));
        Ok(())
    }

    #[test]
    fn test_commit_rejects_empty_message() -> anyhow::Result<()> {
        let repo = setup_test_repo()?;
        let document = create_file(&repo.path, "scene.txt", "scene data")?;

        Command::cargo_bin("scenegit")?
            .args(["commit", "-m", "  "])
            .arg("--document")
            .arg(&document)
            .current_dir(&repo.path)
            .assert()
            .failure()
            .stdout(predicate::str::contains("commit message cannot be empty"));
        Ok(())
    }

    #[test]
    fn test_stash_save_and_pop() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;
        create_file(&repo.path, "initial.txt", "modified")?;

        Command::cargo_bin("scenegit")?
            .args(["stash", "-m", "wip"])
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Stashed"));

        Command::cargo_bin("scenegit")?
            .args(["stash", "--pop"])
            .current_dir(&repo.path)
            .assert()
            .success()
            .stdout(predicate::str::contains("Popped"));
        Ok(())
    }
}
