use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::log::LogEntry;

impl Repository {
    /// Walk the commit chain from the current head, newest first.
    ///
    /// An empty history (no commit yet) yields an empty list. A parent
    /// link pointing at a missing object is corruption and fails hard.
    pub fn log(&self, branch: &BranchName) -> anyhow::Result<Vec<LogEntry>> {
        let mut entries = Vec::new();
        let mut cursor = self.refs().read_branch_head(branch)?;

        while let Some(commit_id) = cursor {
            let commit = self.resolve_commit(&commit_id)?;

            entries.push(LogEntry::new(
                commit_id,
                commit.timestamp(),
                commit.message().to_string(),
            ));

            cursor = commit.parent().cloned();
        }

        Ok(entries)
    }
}
