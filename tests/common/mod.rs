#![allow(dead_code)]

pub mod world;

use mini_git::engine::Engine;
use mini_git::engine::response::Response;

/// Dispatch a sequence of command lines, returning every response.
pub fn dispatch_all(engine: &Engine, lines: &[&str]) -> Vec<Response> {
    lines
        .iter()
        .copied()
        .map(|line| {
            engine
                .dispatch(line)
                .unwrap_or_else(|err| panic!("command {:?} failed: {err:?}", line))
        })
        .collect()
}

/// Dispatch one command line and return its response.
pub fn dispatch(engine: &Engine, line: &str) -> Response {
    dispatch_all(engine, &[line]).pop().unwrap()
}
