//! Working-tree status report
//!
//! Computed by the status handler from three inputs: the head commit's
//! tree, the stage, and the working-tree snapshot. The report is pure
//! data; rendering belongs to the view layer.

use crate::artifacts::branch::branch_name::BranchName;
use std::collections::BTreeSet;

// Terminology:
// - staged/removed files: pending entries recorded in the stage
// - modified/deleted files: tracked files whose workspace content differs
//   from the staged or committed version (changes not yet staged)
// - untracked files: workspace files with no committed or staged entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub current_branch: BranchName,
    pub branches: Vec<BranchName>,
    pub staged: Vec<String>,
    pub removed: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub untracked: Vec<String>,
}

impl StatusReport {
    pub fn is_clean(&self) -> bool {
        self.staged.is_empty()
            && self.removed.is_empty()
            && self.modified.is_empty()
            && self.deleted.is_empty()
            && self.untracked.is_empty()
    }
}

/// Name-ordered vector from any set of filenames.
pub fn name_ordered(names: impl IntoIterator<Item = String>) -> Vec<String> {
    names.into_iter().collect::<BTreeSet<_>>().into_iter().collect()
}
