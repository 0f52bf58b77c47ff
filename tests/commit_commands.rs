use mini_git::artifacts::branch::branch_name::BranchName;
use mini_git::artifacts::objects::object_id::ObjectId;
use mini_git::commands::porcelain::commit::CommitOutcome;
use mini_git::engine::response::Response;
use pretty_assertions::assert_eq;

mod common;

use common::world::TestWorld;
use common::dispatch;

fn committed_id(response: &Response) -> ObjectId {
    match response {
        Response::Commit(CommitOutcome::Committed(summary)) => summary.commit_id.clone(),
        other => panic!("expected a commit summary, got {:?}", other),
    }
}

#[test]
fn first_commit_is_the_root_and_advances_master() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");

    let response = dispatch(&engine, "git commit \"first\"");

    let Response::Commit(CommitOutcome::Committed(summary)) = &response else {
        panic!("expected a commit summary, got {:?}", response);
    };
    assert!(summary.is_root);
    assert_eq!(summary.branch.as_ref(), "master");
    assert_eq!(summary.message, "first");

    // the branch pointer now names the new commit
    assert_eq!(world.branch_ref("master"), summary.commit_id.as_ref());

    // one blob and one commit in the store
    let objects_dir = world.metadata_path().join("objects");
    assert_eq!(std::fs::read_dir(&objects_dir).unwrap().count(), 2);
}

#[test]
fn commit_tree_is_a_complete_snapshot() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    world.write_file("dir/b.txt", "there");
    dispatch(&engine, "git add a.txt");
    dispatch(&engine, "git add dir/b.txt");

    let commit_id = committed_id(&dispatch(&engine, "git commit \"first\""));

    let repository = world.repository();
    let commit = repository.resolve_commit(&commit_id).unwrap();

    assert_eq!(
        commit.tree().get("a.txt"),
        Some(&ObjectId::fingerprint_file("a.txt", "hi"))
    );
    assert_eq!(
        commit.tree().get("dir/b.txt"),
        Some(&ObjectId::fingerprint_file("dir/b.txt", "there"))
    );
    assert_eq!(commit.tree().len(), 2);
    assert_eq!(commit.parent(), None);
}

#[test]
fn commit_clears_the_committed_entries_from_the_stage() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    world.write_file("b.txt", "there");
    dispatch(&engine, "git add a.txt");
    dispatch(&engine, "git add b.txt");

    dispatch(&engine, "git commit \"first\"");

    assert!(world.repository().stage().load().unwrap().is_empty());
}

#[test]
fn commit_with_nothing_staged_is_refused() {
    let world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");

    let response = dispatch(&engine, "git commit \"vacuous\"");

    assert_eq!(response, Response::Commit(CommitOutcome::NothingToCommit));
    // no commit object was created
    assert_eq!(world.branch_ref("master"), "");
}

#[test]
fn commit_with_an_empty_message_is_refused() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");

    let response = dispatch(&engine, "git commit \"\"");

    assert_eq!(response, Response::Commit(CommitOutcome::EmptyMessage));
    assert_eq!(world.branch_ref("master"), "");
}

#[test]
fn recommitting_unchanged_content_repeats_the_parent_tree() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");
    let first_id = committed_id(&dispatch(&engine, "git commit \"first\""));

    // re-add the unchanged file: legal, and the second commit is accepted
    dispatch(&engine, "git add a.txt");
    let second_id = committed_id(&dispatch(&engine, "git commit \"second\""));

    let repository = world.repository();
    let first = repository.resolve_commit(&first_id).unwrap();
    let second = repository.resolve_commit(&second_id).unwrap();

    assert_ne!(first_id, second_id);
    assert_eq!(second.parent(), Some(&first_id));
    assert_eq!(second.tree(), first.tree());
}

#[test]
fn committed_records_never_change() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");
    let commit_id = committed_id(&dispatch(&engine, "git commit \"first\""));

    let before = world.repository().resolve_commit(&commit_id).unwrap();

    // later operations leave the stored record untouched
    world.write_file("a.txt", "changed");
    dispatch(&engine, "git add a.txt");
    dispatch(&engine, "git commit \"second\"");
    dispatch(&engine, "git rm a.txt");

    let after = world.repository().resolve_commit(&commit_id).unwrap();
    assert_eq!(before, after);
}

#[test]
fn commit_moves_only_the_current_branch_pointer() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");
    dispatch(&engine, "git commit \"first\"");
    dispatch(&engine, "git branch dev");
    let dev_before = world.branch_ref("dev");

    world.write_file("b.txt", "there");
    dispatch(&engine, "git add b.txt");
    let second_id = committed_id(&dispatch(&engine, "git commit \"second\""));

    assert_eq!(world.branch_ref("master"), second_id.as_ref());
    assert_eq!(world.branch_ref("dev"), dev_before);
}

#[test]
fn removal_commits_drop_the_file_from_the_snapshot() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    world.write_file("b.txt", "there");
    dispatch(&engine, "git add a.txt");
    dispatch(&engine, "git add b.txt");
    dispatch(&engine, "git commit \"first\"");

    dispatch(&engine, "git rm b.txt");
    let second_id = committed_id(&dispatch(&engine, "git commit \"drop b\""));

    let commit = world.repository().resolve_commit(&second_id).unwrap();
    assert!(commit.tree().contains_key("a.txt"));
    assert!(!commit.tree().contains_key("b.txt"));
}

#[test]
fn a_missing_referenced_commit_fails_hard() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");
    let commit_id = committed_id(&dispatch(&engine, "git commit \"first\""));

    // simulate corruption: the ref still names the id, the object is gone
    std::fs::remove_file(world.object_path(commit_id.as_ref())).unwrap();

    let repository = world.repository();
    let branch = BranchName::try_parse("master".to_string()).unwrap();
    assert!(repository.log(&branch).is_err());
}
