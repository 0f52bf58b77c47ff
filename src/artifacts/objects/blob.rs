//! Blob object
//!
//! A blob stores one file's content as it was at staging time. Identity is
//! computed from the logical filename plus the content, so the id is part
//! of the record and survives deserialization unchanged.
//!
//! ## Record body
//!
//! `<20-byte id><u32 content length><content bytes>`

use crate::artifacts::objects::object::{Object, Packable, Unpackable, record_header};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use byteorder::{ReadBytesExt, WriteBytesExt};
use bytes::Bytes;
use std::io::{BufRead, Read, Write};

/// Immutable stored representation of one file's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    id: ObjectId,
    content: String,
}

impl Blob {
    /// Create a blob for a file, fingerprinting (logical name, content).
    pub fn new(logical_name: &str, content: String) -> Self {
        let id = ObjectId::fingerprint_file(logical_name, &content);
        Blob { id, content }
    }

    /// Rebuild a blob from its stored parts.
    pub fn from_record(id: ObjectId, content: String) -> Self {
        Blob { id, content }
    }

    pub fn id(&self) -> &ObjectId {
        &self.id
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Packable for Blob {
    fn serialize(&self) -> anyhow::Result<Bytes> {
        let mut blob_bytes = Vec::new();
        blob_bytes.write_all(record_header(&self.object_kind()).as_bytes())?;

        self.id.write_h40_to(&mut blob_bytes)?;
        blob_bytes.write_u32::<byteorder::NetworkEndian>(self.content.len() as u32)?;
        blob_bytes.write_all(self.content.as_bytes())?;

        Ok(Bytes::from(blob_bytes))
    }
}

impl Unpackable for Blob {
    fn deserialize(mut reader: impl BufRead) -> anyhow::Result<Self> {
        // the record header has already been read
        let id = ObjectId::read_h40_from(&mut reader)?;

        let content_len = reader.read_u32::<byteorder::NetworkEndian>()? as usize;
        let mut content = vec![0; content_len];
        reader.read_exact(&mut content)?;

        Ok(Self::from_record(id, String::from_utf8(content)?))
    }
}

impl Object for Blob {
    fn object_kind(&self) -> ObjectKind {
        ObjectKind::Blob
    }

    fn display(&self) -> String {
        self.content.to_string()
    }

    fn object_id(&self) -> anyhow::Result<ObjectId> {
        Ok(self.id.clone())
    }
}
