use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(CommitSummary),
    NothingToCommit,
    EmptyMessage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitSummary {
    pub branch: BranchName,
    pub commit_id: ObjectId,
    pub message: String,
    pub is_root: bool,
}

impl Repository {
    /// Snapshot the staged changes as a new commit on the current branch.
    ///
    /// The tree is the parent's tree plus staged additions minus staged
    /// removals — a complete snapshot, not a delta. Committed entries are
    /// cleared from the stage; nothing else in it is touched.
    pub fn commit(&self, branch: &BranchName, message: &str) -> anyhow::Result<CommitOutcome> {
        let message = message.trim();
        if message.is_empty() {
            return Ok(CommitOutcome::EmptyMessage);
        }

        let mut stage = self.stage().load()?;
        if stage.is_empty() {
            return Ok(CommitOutcome::NothingToCommit);
        }

        let parent = self.refs().read_branch_head(branch)?;
        let mut tree = match &parent {
            Some(parent_id) => self.resolve_commit(parent_id)?.tree().clone(),
            None => Default::default(),
        };

        let committed_files = stage.pending_files();
        for (file, blob_id) in stage.additions() {
            tree.insert(file.clone(), blob_id.clone());
        }
        for file in stage.removals() {
            tree.remove(file);
        }

        let is_root = parent.is_none();
        let commit_id = self.commit_snapshot(branch, message, parent, tree)?;

        for file in &committed_files {
            stage.clear_entry(file);
        }
        self.stage().save(&stage)?;

        Ok(CommitOutcome::Committed(CommitSummary {
            branch: branch.clone(),
            commit_id,
            message: message.lines().next().unwrap_or("").to_string(),
            is_root,
        }))
    }
}
