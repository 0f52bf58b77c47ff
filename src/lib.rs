//! mini-git: a minimal version-control engine
//!
//! A content-addressable object store plus a staged-commit workflow with
//! named branches and a HEAD pointer, for a single local working tree.
//! The `areas` module holds the repository core; `engine` dispatches
//! command lines to the handlers in `commands`; `view` renders the typed
//! responses.

pub mod areas;
pub mod artifacts;
pub mod commands;
pub mod engine;
pub mod view;
