use assert_cmd::Command;
use assert_fs::fixture::{FileWriteStr, PathChild};
use predicates::prelude::predicate;

#[test]
fn init_from_stdin_reports_the_repository_path() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let dir_absolute_path = dir.path().canonicalize()?.display().to_string();
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path()).write_stdin("git init\n");

    sut.assert()
        .success()
        .stdout(predicate::str::is_match(
            r"^Initialized empty mini-git repository in .+\n$",
        )?)
        .stdout(predicate::str::contains(dir_absolute_path));

    Ok(())
}

#[test]
fn exec_flag_runs_a_single_command_line() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path()).arg("--exec").arg("git init");

    sut.assert().success().stdout(predicate::str::contains(
        "Initialized empty mini-git repository in",
    ));

    Ok(())
}

#[test]
fn unknown_verbs_are_reported_without_side_effects() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path())
        .write_stdin("git frobnicate\nnot git at all\n");

    sut.assert().success().stdout(predicate::str::is_match(
        r"^No command with that name exists\.\nNo command with that name exists\.\n$",
    )?);

    assert!(!dir.path().join(".mini-git").exists());

    Ok(())
}

#[test]
fn blank_lines_produce_no_output() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path()).write_stdin("\n   \n");

    sut.assert().success().stdout(predicate::str::is_empty());

    Ok(())
}

#[test]
fn commands_before_init_are_refused() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path()).write_stdin("git status\n");

    sut.assert().success().stdout(predicate::str::contains(
        "Not in an initialized mini-git repository.",
    ));

    Ok(())
}

#[test]
fn reinitialization_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path()).write_stdin("git init\ngit init\n");

    sut.assert().success().stdout(predicate::str::contains(
        "A mini-git repository already exists in this directory.",
    ));

    Ok(())
}

#[test]
fn checkout_answers_not_supported() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path())
        .write_stdin("git init\ngit checkout dev\n");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("checkout is not supported."));

    Ok(())
}

#[test]
fn add_and_commit_print_a_root_commit_summary() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.txt").write_str("hi")?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path())
        .write_stdin("git init\ngit add a.txt\ngit commit \"first commit\"\n");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("[master (root-commit) "))
        .stdout(predicate::str::contains("] first commit"));

    Ok(())
}

#[test]
fn quoted_messages_keep_their_spaces() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.txt").write_str("hi")?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path()).write_stdin(
        "git init\ngit add a.txt\ngit commit \"a message with several words\n",
    );

    // the unterminated quote closes at end of line
    sut.assert()
        .success()
        .stdout(predicate::str::contains("] a message with several words"));

    Ok(())
}

#[test]
fn status_renders_the_branch_and_sections() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.txt").write_str("hi")?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path())
        .write_stdin("git init\ngit status\n");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("On branch master"))
        .stdout(predicate::str::contains("Untracked files:"))
        .stdout(predicate::str::contains("a.txt"));

    Ok(())
}

#[test]
fn log_renders_each_commit_with_its_date() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    dir.child("a.txt").write_str("hi")?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path())
        .write_stdin("git init\ngit add a.txt\ngit commit \"first\"\ngit log\n");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("commit "))
        .stdout(predicate::str::contains("Date:   "))
        .stdout(predicate::str::contains("    first"));

    Ok(())
}

#[test]
fn missing_operands_print_usage() -> Result<(), Box<dyn std::error::Error>> {
    let dir = assert_fs::TempDir::new()?;
    let mut sut = Command::cargo_bin("mini-git")?;

    sut.current_dir(dir.path()).write_stdin("git init\ngit add\n");

    sut.assert()
        .success()
        .stdout(predicate::str::contains("usage: git add <file>"));

    Ok(())
}
