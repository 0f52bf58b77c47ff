use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BranchOutcome {
    Created(BranchName),
    AlreadyExists(String),
    InvalidName(String),
}

impl Repository {
    /// Create a named pointer at the current branch's head.
    ///
    /// HEAD does not move — the new branch exists alongside the current
    /// one. Before the first commit the new branch starts empty, like the
    /// default branch at init.
    pub fn branch(&self, current: &BranchName, name: &str) -> anyhow::Result<BranchOutcome> {
        let new_branch = match BranchName::try_parse(name.to_string()) {
            Ok(branch) => branch,
            Err(_) => return Ok(BranchOutcome::InvalidName(name.to_string())),
        };

        if self.refs().branch_exists(&new_branch) {
            return Ok(BranchOutcome::AlreadyExists(name.to_string()));
        }

        match self.refs().read_branch_head(current)? {
            Some(head_id) => self.refs().set_branch_head(&new_branch, &head_id)?,
            None => self.refs().init_branch_file(&new_branch)?,
        }

        Ok(BranchOutcome::Created(new_branch))
    }
}
