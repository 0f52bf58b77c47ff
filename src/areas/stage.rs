//! Staging index area
//!
//! Owns the single `.mini-git/index` file. Loading never fails on an
//! absent or empty file — that is the empty stage, not an error. Every
//! mutating command saves the stage back after changing it.

use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::stage::checksum::Checksum;
use crate::artifacts::stage::{HEADER_SIZE, SIGNATURE, Stage, VERSION};
use anyhow::anyhow;
use byteorder::{ByteOrder, WriteBytesExt};
use derive_new::new;
use std::collections::{BTreeMap, BTreeSet};
use std::io::Write;
use std::path::Path;

#[derive(Debug, new)]
pub struct StageArea {
    path: Box<Path>,
}

impl StageArea {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stage from disk.
    ///
    /// An absent or zero-length index file yields an empty stage. A
    /// present file is checksum-verified; corruption fails hard.
    pub fn load(&self) -> anyhow::Result<Stage> {
        if !self.path.exists() {
            return Ok(Stage::default());
        }

        let file = std::fs::File::open(&self.path)?;
        if file.metadata()?.len() == 0 {
            return Ok(Stage::default());
        }

        let mut reader = Checksum::new(file);
        let (additions_count, removals_count) = Self::parse_header(&mut reader)?;

        let mut additions = BTreeMap::new();
        for _ in 0..additions_count {
            let (name, blob_id) = Self::parse_addition(&mut reader)?;
            additions.insert(name, blob_id);
        }

        let mut removals = BTreeSet::new();
        for _ in 0..removals_count {
            removals.insert(Self::parse_name(&mut reader)?);
        }

        reader.verify()?;

        Ok(Stage::new(additions, removals))
    }

    /// Persist the stage, replacing the previous index file.
    pub fn save(&self, stage: &Stage) -> anyhow::Result<()> {
        let file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.path)?;

        let mut writer = Checksum::new(file);

        let mut header = Vec::with_capacity(HEADER_SIZE);
        header.write_all(SIGNATURE.as_bytes())?;
        header.write_u32::<byteorder::NetworkEndian>(VERSION)?;
        header.write_u32::<byteorder::NetworkEndian>(stage.additions().len() as u32)?;
        header.write_u32::<byteorder::NetworkEndian>(stage.removals().len() as u32)?;
        writer.write(&header)?;

        for (name, blob_id) in stage.additions() {
            let mut entry = Vec::new();
            entry.write_u32::<byteorder::NetworkEndian>(name.len() as u32)?;
            entry.write_all(name.as_bytes())?;
            blob_id.write_h40_to(&mut entry)?;
            writer.write(&entry)?;
        }

        for name in stage.removals() {
            let mut entry = Vec::new();
            entry.write_u32::<byteorder::NetworkEndian>(name.len() as u32)?;
            entry.write_all(name.as_bytes())?;
            writer.write(&entry)?;
        }

        writer.write_checksum()
    }

    fn parse_header(reader: &mut Checksum<std::fs::File>) -> anyhow::Result<(u32, u32)> {
        let header = reader.read(HEADER_SIZE)?;

        if &header[..4] != SIGNATURE.as_bytes() {
            return Err(anyhow!("Invalid stage file signature"));
        }

        let version = byteorder::NetworkEndian::read_u32(&header[4..8]);
        if version != VERSION {
            return Err(anyhow!("Unsupported stage file version: {}", version));
        }

        let additions_count = byteorder::NetworkEndian::read_u32(&header[8..12]);
        let removals_count = byteorder::NetworkEndian::read_u32(&header[12..16]);

        Ok((additions_count, removals_count))
    }

    fn parse_addition(
        reader: &mut Checksum<std::fs::File>,
    ) -> anyhow::Result<(String, ObjectId)> {
        let name = Self::parse_name(reader)?;
        let id_bytes = reader.read(20)?;
        let blob_id = ObjectId::read_h40_from(&mut std::io::Cursor::new(id_bytes))?;

        Ok((name, blob_id))
    }

    fn parse_name(reader: &mut Checksum<std::fs::File>) -> anyhow::Result<String> {
        let len_bytes = reader.read(4)?;
        let name_len = byteorder::NetworkEndian::read_u32(&len_bytes) as usize;
        let name_bytes = reader.read(name_len)?;

        Ok(String::from_utf8(name_bytes.to_vec())?)
    }
}
