//! Working-tree scanner
//!
//! Walks the working directory (the metadata directory excluded) and
//! fingerprints every plain file the same way the content store would,
//! without writing anything. Filenames are full relative paths joined
//! with `/` regardless of the host separator, so snapshots are portable.

use crate::areas::repository::METADATA_DIR;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::collections::BTreeMap;
use std::path::{Component, Path};
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Fingerprint every plain file in the working tree.
    ///
    /// Read-only input for status and diff computations; traversal order
    /// is irrelevant since results land in a name-keyed mapping.
    pub fn current_snapshot(&self) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        let mut snapshot = BTreeMap::new();

        for entry in WalkDir::new(&self.path)
            .into_iter()
            .filter_entry(|entry| !Self::is_metadata_dir(entry.path()))
        {
            let entry = entry?;
            if !entry.path().is_file() {
                continue;
            }

            let logical_name = self.logical_name(entry.path())?;
            let content = std::fs::read_to_string(entry.path())
                .with_context(|| format!("failed to read workspace file {:?}", entry.path()))?;

            snapshot.insert(
                logical_name.clone(),
                ObjectId::fingerprint_file(&logical_name, &content),
            );
        }

        Ok(snapshot)
    }

    pub fn file_exists(&self, logical_name: &str) -> bool {
        self.path.join(logical_name).is_file()
    }

    pub fn read_file(&self, logical_name: &str) -> anyhow::Result<String> {
        let file_path = self.path.join(logical_name);

        std::fs::read_to_string(&file_path)
            .with_context(|| format!("failed to read workspace file {:?}", file_path))
    }

    pub fn remove_file(&self, logical_name: &str) -> anyhow::Result<()> {
        let file_path = self.path.join(logical_name);

        std::fs::remove_file(&file_path)
            .with_context(|| format!("failed to remove workspace file {:?}", file_path))
    }

    /// Full relative path with `/` as the segment joiner.
    fn logical_name(&self, path: &Path) -> anyhow::Result<String> {
        let relative = path
            .strip_prefix(self.path.as_ref())
            .with_context(|| format!("path {:?} is outside the workspace", path))?;

        let segments = relative
            .components()
            .filter_map(|component| match component {
                Component::Normal(segment) => segment.to_str(),
                _ => None,
            })
            .collect::<Vec<_>>();

        Ok(segments.join("/"))
    }

    fn is_metadata_dir(path: &Path) -> bool {
        path.file_name()
            .map(|name| name == METADATA_DIR)
            .unwrap_or(false)
    }
}
