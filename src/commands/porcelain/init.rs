use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;
use std::fs;
use std::path::PathBuf;

impl Repository {
    /// Create the metadata layout and the default branch.
    ///
    /// The default branch starts with no commit: its ref file exists but
    /// is empty until the first commit advances it. The dispatcher has
    /// already rejected re-initialization, so this only ever runs against
    /// a missing layout.
    pub fn init(&self) -> anyhow::Result<PathBuf> {
        fs::create_dir_all(self.database().objects_path())
            .context("Failed to create objects directory")?;

        fs::create_dir_all(self.refs().refs_path()).context("Failed to create refs directory")?;

        fs::create_dir_all(self.refs().heads_path())
            .context("Failed to create refs/heads directory")?;

        let default_branch = BranchName::default_branch();
        self.refs()
            .write_head_pointer(&default_branch)
            .context("Failed to create initial HEAD reference")?;

        if !self.refs().branch_exists(&default_branch) {
            self.refs()
                .init_branch_file(&default_branch)
                .context("Failed to create default branch file")?;
        }

        // create the index file so loading yields an empty stage
        if !self.stage().path().exists() {
            fs::write(self.stage().path(), b"").context("Failed to create index file")?;
        }

        Ok(self.path().to_path_buf())
    }
}
