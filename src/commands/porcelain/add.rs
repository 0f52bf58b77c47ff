use crate::areas::repository::Repository;
use crate::artifacts::objects::blob::Blob;
use crate::artifacts::objects::object_id::ObjectId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    Staged { file: String, blob_id: ObjectId },
    FileMissing { file: String },
}

impl Repository {
    /// Stage a file for the next commit.
    ///
    /// The blob is written through to the object store immediately, even
    /// if the stage is never committed — storage may grow with blobs no
    /// commit references, which is accepted. Staging a file identical to
    /// the committed version is legal and still records the addition.
    pub fn add(&self, file: &str) -> anyhow::Result<AddOutcome> {
        if !self.workspace().file_exists(file) {
            return Ok(AddOutcome::FileMissing {
                file: file.to_string(),
            });
        }

        let content = self.workspace().read_file(file)?;
        let blob = Blob::new(file, content);

        // write-once: an already-stored id short-circuits before writing
        self.database().store(&blob)?;

        let mut stage = self.stage().load()?;
        stage.stage_addition(file, blob.id().clone());
        self.stage().save(&stage)?;

        Ok(AddOutcome::Staged {
            file: file.to_string(),
            blob_id: blob.id().clone(),
        })
    }
}
