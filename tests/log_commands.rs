use mini_git::engine::response::Response;
use pretty_assertions::assert_eq;

mod common;

use common::world::TestWorld;
use common::dispatch;

fn log_entries(response: Response) -> Vec<mini_git::artifacts::log::LogEntry> {
    match response {
        Response::Log(entries) => entries,
        other => panic!("expected log entries, got {:?}", other),
    }
}

#[test]
fn log_before_any_commit_is_empty() {
    let world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");

    assert_eq!(log_entries(dispatch(&engine, "git log")), vec![]);
}

#[test]
fn log_walks_the_chain_newest_first() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");
    dispatch(&engine, "git commit \"first\"");
    world.write_file("b.txt", "there");
    dispatch(&engine, "git add b.txt");
    dispatch(&engine, "git commit \"second\"");

    let entries = log_entries(dispatch(&engine, "git log"));

    assert_eq!(
        entries
            .iter()
            .map(|entry| entry.message.as_str())
            .collect::<Vec<_>>(),
        vec!["second", "first"]
    );
    assert_eq!(entries[0].id.as_ref(), world.branch_ref("master"));
}

#[test]
fn log_keeps_multi_line_messages_intact() {
    let mut world = TestWorld::new();
    let engine = world.engine();

    dispatch(&engine, "git init");
    world.write_file("a.txt", "hi");
    dispatch(&engine, "git add a.txt");
    dispatch(&engine, "git commit \"subject line\"");

    let entries = log_entries(dispatch(&engine, "git log"));

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].message, "subject line");
}
