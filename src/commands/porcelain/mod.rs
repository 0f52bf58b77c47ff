//! User-facing command operations
//!
//! ## Commands
//!
//! - `init`: create the metadata layout and the default branch
//! - `add`: stage a file for the next commit
//! - `commit`: snapshot the staged changes
//! - `status`: report staged, changed, and untracked files
//! - `rm`: unstage a file or mark it for removal
//! - `log`: walk the commit chain from the current head
//! - `branch`: create a named pointer at the current head
//! - `checkout`: recognized but not supported

pub mod add;
pub mod branch;
pub mod commit;
pub mod init;
pub mod log;
pub mod rm;
pub mod status;
