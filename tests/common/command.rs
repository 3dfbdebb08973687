use crate::common::AUTHOR_DATE;
use crate::common::file::{FileSpec, write_file};
use assert_cmd::Command;
use assert_fs::TempDir;
use derive_new::new;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn repository_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn init_repository_dir(repository_dir: TempDir) -> TempDir {
    run_lit_command(repository_dir.path(), &["init"])
        .assert()
        .success();

    repository_dir
}

/// A repository with `1.txt`, `a/2.txt` and `a/b/3.txt` staged
#[fixture]
pub fn staged_repository_dir(init_repository_dir: TempDir) -> TempDir {
    let repository_dir = init_repository_dir;

    write_file(FileSpec::new(
        repository_dir.path().join("1.txt"),
        "one".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("2.txt"),
        "two".to_string(),
    ));
    write_file(FileSpec::new(
        repository_dir.path().join("a").join("b").join("3.txt"),
        "three".to_string(),
    ));

    run_lit_command(repository_dir.path(), &["add", "."])
        .assert()
        .success();

    repository_dir
}

/// An initialized repository with a configured author identity
#[fixture]
pub fn configured_repository_dir(init_repository_dir: TempDir) -> TempDir {
    run_lit_command(init_repository_dir.path(), &["config", "alice", "a@x.com"])
        .assert()
        .success();

    init_repository_dir
}

pub fn run_lit_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("lit").expect("Failed to find lit binary");
    cmd.envs(vec![("NO_COLOR", "1")]);
    cmd.env_remove("GIT_AUTHOR_DATE");
    cmd.env_remove("LIT_LOG");
    cmd.current_dir(dir);
    for arg in args {
        cmd.arg(arg);
    }
    cmd
}

pub fn lit_commit(dir: &Path, message: &str) -> Command {
    let mut cmd = run_lit_command(dir, &["commit", "-m", message]);
    cmd.envs(vec![("GIT_AUTHOR_DATE", AUTHOR_DATE)]); // %Y-%m-%d %H:%M:%S %z
    cmd
}

/// Run a command expected to succeed and return its stdout
pub fn lit_stdout(dir: &Path, args: &[&str]) -> Result<String, Box<dyn std::error::Error>> {
    let output = run_lit_command(dir, args).assert().success();
    let stdout = output.get_output().stdout.clone();

    Ok(String::from_utf8(stdout)?)
}

/// Commit and return the id printed by `lit commit`
pub fn lit_commit_id(dir: &Path, message: &str) -> Result<String, Box<dyn std::error::Error>> {
    let output = lit_commit(dir, message).assert().success();
    let stdout = String::from_utf8(output.get_output().stdout.clone())?;

    let commit_id = stdout
        .trim()
        .strip_prefix("Committed to master: ")
        .ok_or("unexpected commit output")?;

    Ok(commit_id.to_string())
}

#[derive(Debug, Clone, new)]
pub struct RandomAuthor {
    pub name: String,
    pub email: String,
}

pub fn generate_random_author() -> RandomAuthor {
    use fake::Fake;
    use fake::faker::internet::en::FreeEmail;
    use fake::faker::name::en::Name;

    let name = Name().fake::<String>().replace(" ", "_");
    let email = FreeEmail().fake::<String>();
    RandomAuthor::new(name, email)
}
