//! Repository facade
//!
//! Composes the content store, staging index, reference store, and
//! working-tree scanner, and is the single owner of the on-disk layout:
//!
//! ```text
//! .mini-git/
//!   objects/<40-hex-id>
//!   index
//!   HEAD
//!   refs/heads/<branchName>
//! ```
//!
//! No other component constructs metadata paths or writes into the
//! metadata directory.

use crate::areas::database::Database;
use crate::areas::refs::Refs;
use crate::areas::stage::StageArea;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object::Object;
use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use std::collections::BTreeMap;
use std::path::Path;

/// Name of the metadata directory inside the working tree
pub const METADATA_DIR: &str = ".mini-git";

pub struct Repository {
    path: Box<Path>,
    database: Database,
    stage: StageArea,
    workspace: Workspace,
    refs: Refs,
}

impl Repository {
    pub fn new(path: &Path) -> anyhow::Result<Self> {
        let path = path
            .canonicalize()
            .with_context(|| format!("invalid working directory {:?}", path))?;

        let git_path = path.join(METADATA_DIR);
        let database = Database::new(git_path.join("objects").into_boxed_path());
        let stage = StageArea::new(git_path.join("index").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            database,
            stage,
            workspace,
            refs,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> Box<Path> {
        self.path.join(METADATA_DIR).into_boxed_path()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn stage(&self) -> &StageArea {
        &self.stage
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    /// Whether the metadata layout is complete: the metadata directory,
    /// the objects directory, and both ref directories must be present.
    pub fn repository_exists(&self) -> bool {
        [
            self.git_path(),
            self.database.objects_path().into(),
            self.refs.refs_path(),
            self.refs.heads_path(),
        ]
        .iter()
        .all(|dir| dir.is_dir())
    }

    /// Derive the current branch from the HEAD indirection.
    ///
    /// `None` means "no repository yet" — the display layer omits its
    /// branch suffix for it. An initialized repository without a HEAD
    /// file falls back to the default branch.
    pub fn derive_current_branch(&self) -> anyhow::Result<Option<BranchName>> {
        if !self.repository_exists() {
            return Ok(None);
        }

        match self.refs.current_branch()? {
            Some(branch) => Ok(Some(branch)),
            None => Ok(Some(BranchName::default_branch())),
        }
    }

    /// Allocate and persist a new commit, then advance the branch pointer.
    ///
    /// The commit id is the fingerprint of the serialized record, assigned
    /// here at write time.
    pub fn commit_snapshot(
        &self,
        branch: &BranchName,
        message: &str,
        parent: Option<ObjectId>,
        tree: BTreeMap<String, ObjectId>,
    ) -> anyhow::Result<ObjectId> {
        let commit = Commit::new(message.to_string(), parent, tree);
        let commit_id = commit.object_id()?;

        self.database.store(&commit)?;
        self.refs.set_branch_head(branch, &commit_id)?;

        Ok(commit_id)
    }

    /// Look up a commit a ref or parent link points to.
    ///
    /// A referenced id with no backing file is corruption and fails hard;
    /// it is never treated as absence.
    pub fn resolve_commit(&self, commit_id: &ObjectId) -> anyhow::Result<Commit> {
        self.database
            .load_commit(commit_id)
            .with_context(|| format!("referenced commit {} is missing from the store", commit_id))
    }

    /// Head commit of a branch, `None` before the first commit.
    pub fn head_commit(&self, branch: &BranchName) -> anyhow::Result<Option<Commit>> {
        match self.refs.read_branch_head(branch)? {
            Some(commit_id) => Ok(Some(self.resolve_commit(&commit_id)?)),
            None => Ok(None),
        }
    }

    /// Snapshot tree of a branch's head commit, empty before the first
    /// commit.
    pub fn head_tree(&self, branch: &BranchName) -> anyhow::Result<BTreeMap<String, ObjectId>> {
        Ok(self
            .head_commit(branch)?
            .map(|commit| commit.tree().clone())
            .unwrap_or_default())
    }
}
