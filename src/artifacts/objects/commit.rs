//! Commit object
//!
//! A commit is a complete snapshot of the working tree at commit time:
//! a mapping from every tracked filename to its blob id, not a delta.
//! Commits form a singly-linked chain through `parent` — there are no
//! merge commits in this design.
//!
//! ## Record body
//!
//! ```text
//! <u32 message length><message bytes>
//! <i64 timestamp, seconds since epoch, UTC>
//! <u8 parent flag>[<20-byte parent id>]
//! <u32 tree entry count>
//!   per entry: <u32 name length><name bytes><20-byte blob id>
//! ```
//!
//! Tree entries are written in filename order so the serialized record,
//! and therefore the commit id, is deterministic.

use crate::artifacts::objects::object::{Object, Packable, Unpackable, record_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use anyhow::Context;
use byteorder::{ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::io::{BufRead, Read, Write};

/// Immutable snapshot record. Never modified once written; the commit
/// operation is the only producer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    message: String,
    timestamp: DateTime<Utc>,
    parent: Option<ObjectId>,
    tree: BTreeMap<String, ObjectId>,
}

impl Commit {
    /// Create a commit stamped with the current time.
    ///
    /// `parent` is absent only for the root commit of a branch chain.
    pub fn new(message: String, parent: Option<ObjectId>, tree: BTreeMap<String, ObjectId>) -> Self {
        // the record stores whole seconds, so in-memory commits must agree
        // with their deserialized form
        let now = Utc::now();
        let timestamp = DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now);

        Commit {
            message,
            timestamp,
            parent,
            tree,
        }
    }

    pub fn new_with_timestamp(
        message: String,
        timestamp: DateTime<Utc>,
        parent: Option<ObjectId>,
        tree: BTreeMap<String, ObjectId>,
    ) -> Self {
        Commit {
            message,
            timestamp,
            parent,
            tree,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// First line of the message, for short-form display.
    pub fn short_message(&self) -> String {
        self.message.lines().next().unwrap_or("").to_string()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn parent(&self) -> Option<&ObjectId> {
        self.parent.as_ref()
    }

    pub fn tree(&self) -> &BTreeMap<String, ObjectId> {
        &self.tree
    }
}

impl Packable for Commit {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut commit_bytes = Vec::new();
        commit_bytes.write_all(record_header(&self.object_kind()).as_bytes())?;

        commit_bytes.write_u32::<byteorder::NetworkEndian>(self.message.len() as u32)?;
        commit_bytes.write_all(self.message.as_bytes())?;

        commit_bytes.write_i64::<byteorder::NetworkEndian>(self.timestamp.timestamp())?;

        match &self.parent {
            Some(parent) => {
                commit_bytes.write_u8(1)?;
                parent.write_h40_to(&mut commit_bytes)?;
            }
            None => commit_bytes.write_u8(0)?,
        }

        commit_bytes.write_u32::<byteorder::NetworkEndian>(self.tree.len() as u32)?;
        for (name, blob_id) in &self.tree {
            commit_bytes.write_u32::<byteorder::NetworkEndian>(name.len() as u32)?;
            commit_bytes.write_all(name.as_bytes())?;
            blob_id.write_h40_to(&mut commit_bytes)?;
        }

        Ok(Bytes::from(commit_bytes))
    }
}

impl Unpackable for Commit {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        // the record header has already been read
        let message_len = reader.read_u32::<byteorder::NetworkEndian>()? as usize;
        let mut message = vec![0; message_len];
        reader.read_exact(&mut message)?;
        let message = String::from_utf8(message)?;

        let timestamp_secs = reader.read_i64::<byteorder::NetworkEndian>()?;
        let timestamp = DateTime::from_timestamp(timestamp_secs, 0)
            .context("Invalid commit record: timestamp out of range")?;

        let parent = match reader.read_u8()? {
            0 => None,
            1 => Some(ObjectId::read_h40_from(&mut reader)?),
            flag => anyhow::bail!("Invalid commit record: parent flag {}", flag),
        };

        let entry_count = reader.read_u32::<byteorder::NetworkEndian>()?;
        let mut tree = BTreeMap::new();
        for _ in 0..entry_count {
            let name_len = reader.read_u32::<byteorder::NetworkEndian>()? as usize;
            let mut name = vec![0; name_len];
            reader.read_exact(&mut name)?;
            let blob_id = ObjectId::read_h40_from(&mut reader)?;
            tree.insert(String::from_utf8(name)?, blob_id);
        }

        Ok(Self::new_with_timestamp(message, timestamp, parent, tree))
    }
}

impl Object for Commit {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Commit
    }

    fn display(&self) -> String {
        let mut lines = vec![];

        if let Some(parent) = &self.parent {
            lines.push(format!("parent {}", parent.as_ref()));
        }
        lines.push(format!("timestamp {}", self.timestamp.timestamp()));
        for (name, blob_id) in &self.tree {
            lines.push(format!("{} {}", blob_id.as_ref(), name));
        }
        lines.push(String::new());
        lines.push(self.message.to_string());

        lines.join("\n")
    }
}
