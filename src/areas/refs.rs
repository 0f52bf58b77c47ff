//! Branch references and the HEAD pointer
//!
//! Branches are named, mutable pointers to commit ids, one text file per
//! branch under `refs/heads/`. HEAD is a single file naming the current
//! branch through the `ref: refs/heads/<name>` indirection.
//!
//! Absence is data here: a missing or empty branch file means "branch
//! exists but has no commit yet" (or "no branch file at all") and reads
//! as `None`, never as an error. Malformed content, by contrast, is an
//! explicit failure.

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head_pointer::{decode_head_pointer, encode_head_pointer};
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the metadata directory (`.mini-git`)
    path: Box<Path>,
}

impl Refs {
    /// Branch the HEAD indirection currently names.
    ///
    /// `None` when the HEAD file does not exist; malformed HEAD content
    /// is an error, not a default.
    pub fn current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD file at {:?}", head_path))?;

        decode_head_pointer(&content).map(Some)
    }

    /// Point HEAD at the given branch.
    pub fn write_head_pointer(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.write_ref_file(&self.head_path(), &encode_head_pointer(branch_name))
    }

    /// Commit id a branch points to.
    ///
    /// An absent or empty branch file signals "no commit yet" and reads
    /// as `None`; an unparsable id is corruption and fails.
    pub fn read_branch_head(&self, branch_name: &BranchName) -> anyhow::Result<Option<ObjectId>> {
        let branch_path = self.branch_path(branch_name);
        if !branch_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&branch_path)
            .with_context(|| format!("failed to read ref file at {:?}", branch_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        ObjectId::try_parse(content.to_string()).map(Some)
    }

    /// Advance a branch pointer to a new commit id.
    pub fn set_branch_head(
        &self,
        branch_name: &BranchName,
        commit_id: &ObjectId,
    ) -> anyhow::Result<()> {
        self.write_ref_file(&self.branch_path(branch_name), commit_id.as_ref())
    }

    /// Create a branch file with no commit yet.
    pub fn init_branch_file(&self, branch_name: &BranchName) -> anyhow::Result<()> {
        self.write_ref_file(&self.branch_path(branch_name), "")
    }

    pub fn branch_exists(&self, branch_name: &BranchName) -> bool {
        self.branch_path(branch_name).is_file()
    }

    /// All branch names under `refs/heads/`, in name order.
    pub fn list_branches(&self) -> anyhow::Result<Vec<BranchName>> {
        let heads_path = self.heads_path();

        let mut branches = WalkDir::new(&heads_path)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                if entry.path().is_file() {
                    let relative_path = entry.path().strip_prefix(heads_path.as_ref()).ok()?;
                    BranchName::try_parse(relative_path.to_string_lossy().to_string()).ok()
                } else {
                    None
                }
            })
            .collect::<Vec<_>>();
        branches.sort();

        Ok(branches)
    }

    fn write_ref_file(&self, path: &Path, raw_ref: &str) -> anyhow::Result<()> {
        std::fs::create_dir_all(path.parent().with_context(|| {
            format!(
                "failed to create parent directories for ref file at {:?}",
                path
            )
        })?)?;

        std::fs::write(path, raw_ref.as_bytes())
            .with_context(|| format!("failed to write ref file at {:?}", path))
    }

    fn branch_path(&self, branch_name: &BranchName) -> Box<Path> {
        self.heads_path().join(branch_name.as_ref()).into_boxed_path()
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn refs_path(&self) -> Box<Path> {
        self.path.join("refs").into_boxed_path()
    }

    pub fn heads_path(&self) -> Box<Path> {
        self.refs_path().join("heads").into_boxed_path()
    }
}
