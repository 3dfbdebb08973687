use crate::common::command::{repository_dir, run_lit_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
fn init_repository_successfully(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let git_path = repository_dir.path().canonicalize()?.join(".git");

    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Initialized empty repository: .+\n$")?)
        .stdout(predicate::str::contains(git_path.display().to_string()));

    assert!(git_path.join("objects").is_dir());
    assert!(git_path.join("refs").join("heads").is_dir());
    assert!(git_path.join("refs").join("tags").is_dir());
    assert!(git_path.join("config").is_file());
    assert!(git_path.join("description").is_file());
    assert_eq!(std::fs::read_to_string(git_path.join("config.json"))?, "");
    assert_eq!(
        std::fs::read_to_string(git_path.join("HEAD"))?,
        "ref: refs/heads/master\n"
    );
    assert!(!git_path.join("index").exists());

    Ok(())
}

#[rstest]
fn init_repository_at_a_new_path(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    run_lit_command(repository_dir.path(), &["init", "nested/project"])
        .assert()
        .success();

    assert!(
        repository_dir
            .path()
            .join("nested/project/.git/objects")
            .is_dir()
    );

    Ok(())
}

#[rstest]
fn reinit_keeps_index_and_identity(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = repository_dir.path();
    run_lit_command(dir, &["init"]).assert().success();
    std::fs::write(dir.join("a.txt"), "a")?;
    run_lit_command(dir, &["add", "a.txt"]).assert().success();
    run_lit_command(dir, &["config", "alice", "a@x.com"])
        .assert()
        .success();
    let index = std::fs::read_to_string(dir.join(".git/index"))?;

    run_lit_command(dir, &["init"]).assert().success();

    assert_eq!(std::fs::read_to_string(dir.join(".git/index"))?, index);
    assert!(std::fs::read_to_string(dir.join(".git/config.json"))?.contains("alice"));

    Ok(())
}

#[rstest]
fn run_in_another_directory(repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let project = repository_dir.path().join("project");
    std::fs::create_dir_all(&project)?;

    run_lit_command(repository_dir.path(), &["-C", "project", "init"])
        .assert()
        .success();

    assert!(project.join(".git").is_dir());
    assert!(!repository_dir.path().join(".git").exists());

    Ok(())
}
