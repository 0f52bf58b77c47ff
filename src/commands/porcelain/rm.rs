use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RmOutcome {
    /// A pending addition was dropped; the working file is untouched.
    Unstaged { file: String },
    /// The file was tracked in the head commit: its removal is now staged
    /// and the working copy is gone.
    Removed { file: String },
    /// Neither staged nor tracked — nothing to do.
    NoReason { file: String },
}

impl Repository {
    pub fn rm(&self, branch: &BranchName, file: &str) -> anyhow::Result<RmOutcome> {
        let mut stage = self.stage().load()?;

        if stage.is_staged_for_addition(file) {
            stage.clear_entry(file);
            self.stage().save(&stage)?;

            return Ok(RmOutcome::Unstaged {
                file: file.to_string(),
            });
        }

        let head_tree = self.head_tree(branch)?;
        if head_tree.contains_key(file) {
            stage.stage_removal(file);
            self.stage().save(&stage)?;

            if self.workspace().file_exists(file) {
                self.workspace().remove_file(file)?;
            }

            return Ok(RmOutcome::Removed {
                file: file.to_string(),
            });
        }

        Ok(RmOutcome::NoReason {
            file: file.to_string(),
        })
    }
}
