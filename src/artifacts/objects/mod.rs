//! Stored object types and their on-disk records
//!
//! Every object in the store is identified by a SHA-1 fingerprint and is
//! persisted as a self-describing record:
//!
//! `<kind> <version>\0<network-endian, length-prefixed fields>`
//!
//! Two kinds exist:
//!
//! - **Blob**: one file's content at staging time
//! - **Commit**: a full snapshot (filename -> blob id) with message,
//!   timestamp, and parent link

pub mod blob;
pub mod commit;
pub mod object;
pub mod object_id;
pub mod object_kind;

/// Length of a SHA-1 hash in hexadecimal format
pub const OBJECT_ID_LENGTH: usize = 40;

/// Version written into every object record header
pub const RECORD_VERSION: u32 = 1;
