use crate::common::command::{init_repository_dir, lit_stdout, run_lit_command};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use fake::Fake;
use fake::faker::lorem::en::Words;
use predicates::prelude::predicate;
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

const HELLO_OID: &str = "ce013625030ba8dba906f756967f9e9ca394464a";

#[rstest]
fn hash_object_without_writing(init_repository_dir: TempDir) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    write_file(FileSpec::new(dir.join("hello.txt"), "hello\n".to_string()));

    assert_eq!(
        lit_stdout(dir, &["hash-object", "hello.txt"])?,
        format!("{HELLO_OID}\n")
    );
    assert!(!dir.join(".git/objects/ce").exists());

    Ok(())
}

#[rstest]
fn write_blob_object_successfully(
    init_repository_dir: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    let dir = init_repository_dir.path();
    let content = Words(5..10).fake::<Vec<String>>().join(" ");
    write_file(FileSpec::new(dir.join("words.txt"), content.clone()));

    let oid = lit_stdout(dir, &["hash-object", "-w", "words.txt"])?;
    let oid = oid.trim();

    assert_eq!(lit_stdout(dir, &["cat-file", "-p", oid])?, content);

    Ok(())
}

#[rstest]
fn cat_file_of_unknown_object_fails(init_repository_dir: TempDir) {
    run_lit_command(init_repository_dir.path(), &["cat-file", "-p", HELLO_OID])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("does not exist"));
}
