use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::status::{StatusReport, name_ordered};

impl Repository {
    /// Compute the working-tree status against the head commit and the
    /// stage. The scanner provides the current snapshot; all comparison
    /// happens here, nothing is written.
    pub fn status(&self, branch: &BranchName) -> anyhow::Result<StatusReport> {
        let stage = self.stage().load()?;
        let head_tree = self.head_tree(branch)?;
        let snapshot = self.workspace().current_snapshot()?;
        let branches = self.refs().list_branches()?;

        // the expected content of a tracked file is its staged version if
        // one is pending, otherwise the committed version
        let mut tracked = head_tree.clone();
        for (file, blob_id) in stage.additions() {
            tracked.insert(file.clone(), blob_id.clone());
        }

        let mut modified = Vec::new();
        let mut deleted = Vec::new();
        for (file, expected_id) in &tracked {
            if stage.is_staged_for_removal(file) {
                continue;
            }

            match snapshot.get(file) {
                Some(actual_id) if actual_id != expected_id => modified.push(file.clone()),
                Some(_) => {}
                None => deleted.push(file.clone()),
            }
        }

        let untracked = snapshot
            .keys()
            .filter(|file| !tracked.contains_key(*file))
            .cloned()
            .collect::<Vec<_>>();

        Ok(StatusReport {
            current_branch: branch.clone(),
            branches,
            staged: name_ordered(stage.additions().keys().cloned()),
            removed: name_ordered(stage.removals().iter().cloned()),
            modified: name_ordered(modified),
            deleted: name_ordered(deleted),
            untracked: name_ordered(untracked),
        })
    }

    /// Whether the stage has no pending entries, as reported to callers
    /// that must refuse vacuous commits.
    pub fn staged_empty(&self) -> anyhow::Result<bool> {
        Ok(self.stage().load()?.is_empty())
    }
}
