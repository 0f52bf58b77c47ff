//! Content-addressable object store
//!
//! Persists blobs and commits under `.mini-git/objects/<40-hex-id>` — one
//! file per object, flat, named by the object's fingerprint. Objects are
//! write-once: an id that already exists on disk is assumed
//! content-identical and is never overwritten (hash collisions are an
//! accepted risk, not detected). Records are zlib-compressed on disk;
//! fingerprints are always computed over the uncompressed record or the
//! logical content, never the compressed bytes.

use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::{Object, Unpackable};
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::object_kind::ObjectKind;
use anyhow::Context;
use bytes::Bytes;
use derive_new::new;
use fake::rand;
use std::io::{BufRead, Cursor, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, new)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Whether an object with this fingerprint is already stored.
    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.path.join(object_id.to_path()).is_file()
    }

    /// Persist an object unless its id already exists on disk.
    pub fn store<O: Object>(&self, object: &O) -> anyhow::Result<()> {
        let object_path = self.path.join(object.object_path()?);
        if object_path.exists() {
            return Ok(());
        }

        let object_content = object.serialize()?;
        self.write_object(object_path, object_content)
    }

    /// Load a blob by id. A missing or wrong-kind backing file for a
    /// referenced id is corruption and fails hard.
    pub fn load_blob(&self, object_id: &ObjectId) -> anyhow::Result<Blob> {
        let (object_kind, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_kind {
            ObjectKind::Blob => Blob::deserialize(object_reader),
            kind => Err(anyhow::anyhow!(
                "Object {} is a {}, expected a blob",
                object_id,
                kind
            )),
        }
    }

    /// Load a commit by id, failing hard when the backing file is absent.
    pub fn load_commit(&self, object_id: &ObjectId) -> anyhow::Result<Commit> {
        let (object_kind, object_reader) = self.parse_object_as_bytes(object_id)?;

        match object_kind {
            ObjectKind::Commit => Commit::deserialize(object_reader),
            kind => Err(anyhow::anyhow!(
                "Object {} is a {}, expected a commit",
                object_id,
                kind
            )),
        }
    }

    fn parse_object_as_bytes(
        &self,
        object_id: &ObjectId,
    ) -> anyhow::Result<(ObjectKind, impl BufRead)> {
        let object_path = self.path.join(object_id.to_path());
        let object_content = self.read_object(object_path)?;
        let mut object_reader = Cursor::new(object_content);

        let object_kind = ObjectKind::parse_record_header(&mut object_reader)?;

        Ok((object_kind, object_reader))
    }

    fn read_object(&self, object_path: PathBuf) -> anyhow::Result<Bytes> {
        let object_content = std::fs::read(&object_path).context(format!(
            "Unable to read object file {}",
            object_path.display()
        ))?;

        Self::decompress(object_content.into())
    }

    fn write_object(&self, object_path: PathBuf, object_content: Bytes) -> anyhow::Result<()> {
        let object_dir = object_path
            .parent()
            .context(format!("Invalid object path {}", object_path.display()))?;
        std::fs::create_dir_all(object_dir).context(format!(
            "Unable to create object directory {}",
            object_dir.display()
        ))?;
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content = Self::compress(object_content)?;

        let mut file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_object_path)
            .context(format!(
                "Unable to open object file {}",
                temp_object_path.display()
            ))?;

        file.write_all(&object_content).context(format!(
            "Unable to write object file {}",
            temp_object_path.display()
        ))?;

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, &object_path).context(format!(
            "Unable to rename object file to {}",
            object_path.display()
        ))?;

        Ok(())
    }

    fn compress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder
            .write_all(&data)
            .context("Unable to compress object content")?;

        encoder
            .finish()
            .map(|compressed_content| compressed_content.into())
            .context("Unable to finish compressing object content")
    }

    fn decompress(data: Bytes) -> anyhow::Result<Bytes> {
        let mut decoder = flate2::read::ZlibDecoder::new(&*data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .context("Unable to decompress object content")?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
