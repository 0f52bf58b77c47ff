use crate::artifacts::objects::RECORD_VERSION;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use anyhow::Result;
use bytes::Bytes;
use std::io::BufRead;
use std::path::PathBuf;

pub trait Packable {
    fn serialize(&self) -> Result<Bytes>;
}

pub trait Unpackable {
    fn deserialize(reader: impl BufRead) -> Result<Self>
    where
        Self: Sized;
}

pub trait Object: Packable {
    fn object_kind(&self) -> ObjectKind;

    fn display(&self) -> String;

    /// Identity of the object as stored on disk.
    ///
    /// The default fingerprints the serialized record; blobs override this
    /// since their id is computed from (logical filename, content) instead.
    fn object_id(&self) -> Result<ObjectId> {
        Ok(ObjectId::fingerprint_record(&self.serialize()?))
    }

    fn object_path(&self) -> Result<PathBuf> {
        Ok(self.object_id()?.to_path())
    }
}

/// Record header shared by every object kind: `<kind> <version>\0`
pub fn record_header(kind: &ObjectKind) -> String {
    format!("{} {}\0", kind.as_str(), RECORD_VERSION)
}
