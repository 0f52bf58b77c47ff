//! Object identifier (SHA-1 fingerprint)
//!
//! Object IDs are 40-character hexadecimal strings. A blob's id is the
//! fingerprint of its logical filename concatenated with its content, so
//! the same bytes under two different filenames produce two distinct ids
//! and a rename changes the id even when the content is unchanged. A
//! commit's id is the fingerprint of its serialized record.
//!
//! ## Storage
//!
//! Objects live in a flat directory: `.mini-git/objects/<40-hex-id>`

use crate::artifacts::objects::OBJECT_ID_LENGTH;
use sha1::{Digest, Sha1};
use std::io;
use std::path::PathBuf;

/// A 40-character hexadecimal SHA-1 fingerprint, used as both object
/// identity and storage key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct ObjectId(String);

impl ObjectId {
    /// Parse and validate an object ID from a string
    pub fn try_parse(id: String) -> anyhow::Result<Self> {
        if id.len() != OBJECT_ID_LENGTH {
            return Err(anyhow::anyhow!("Invalid object ID length: {}", id.len()));
        }
        if !id.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow::anyhow!("Invalid object ID characters: {}", id));
        }
        Ok(Self(id))
    }

    /// Fingerprint a file by its logical name and content.
    ///
    /// Identity is `sha1(logical_name + content)` — the filename is part
    /// of the key, which makes the store deduplicating per (name, content)
    /// pair rather than per content.
    pub fn fingerprint_file(logical_name: &str, content: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(logical_name.as_bytes());
        hasher.update(content.as_bytes());
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Fingerprint an already-serialized record (used for commits).
    pub fn fingerprint_record(record: &[u8]) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(record);
        Self(format!("{:x}", hasher.finalize()))
    }

    /// Write the object ID in binary format (20 bytes)
    ///
    /// Converts the 40-char hex string to 20 bytes and writes them to the
    /// given writer. Used when serializing commit trees and stage entries.
    pub fn write_h40_to<W: io::Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let hex40 = self.as_ref();

        // Process a nibble at a time
        for i in (0..OBJECT_ID_LENGTH).step_by(2) {
            let byte = u8::from_str_radix(&hex40[i..i + 2], 16)
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "Invalid hex digit"))?;
            writer.write_all(&[byte])?;
        }

        Ok(())
    }

    /// Read an object ID from binary format (20 bytes)
    pub fn read_h40_from<R: io::Read + ?Sized>(reader: &mut R) -> anyhow::Result<Self> {
        let mut hex40 = String::with_capacity(OBJECT_ID_LENGTH);
        let mut buffer = [0; 1];

        for _ in 0..(OBJECT_ID_LENGTH / 2) {
            reader.read_exact(&mut buffer)?;
            let hex_pair = &format!("{:02x}", u8::from_be_bytes(buffer));
            hex40.push_str(hex_pair);
        }

        Self::try_parse(hex40)
    }

    /// Convert to the file name used inside the objects directory.
    ///
    /// The layout is flat: the full 40-character id is the file name.
    pub fn to_path(&self) -> PathBuf {
        PathBuf::from(&self.0)
    }

    /// First 7 characters of the id, for display.
    pub fn to_short_oid(&self) -> String {
        self.0.split_at(7).0.to_string()
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ObjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
