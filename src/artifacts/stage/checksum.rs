use crate::artifacts::stage::CHECKSUM_SIZE;
use anyhow::anyhow;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::io::{Read, Write};

/// Reader/writer wrapper that folds every byte into a running SHA-1
/// digest, so the stage file can carry a trailing integrity checksum.
#[derive(Debug)]
pub struct Checksum<F> {
    file: F,
    digest: Sha1,
}

impl<F> Checksum<F> {
    pub fn new(file: F) -> Self {
        Checksum {
            file,
            digest: Sha1::new(),
        }
    }
}

impl<F: Read> Checksum<F> {
    pub fn read(&mut self, size: usize) -> anyhow::Result<Bytes> {
        let mut buffer = vec![0; size];
        self.file
            .read_exact(&mut buffer)
            .map_err(|_| anyhow!("Unexpected end-of-file while reading stage file"))?;

        self.digest.update(&buffer);
        Ok(Bytes::from(buffer))
    }

    pub fn verify(&mut self) -> anyhow::Result<()> {
        let mut expected_checksum = [0u8; CHECKSUM_SIZE];
        self.file.read_exact(&mut expected_checksum)?;

        let actual_checksum = self.digest.clone().finalize();
        let actual_checksum = actual_checksum.as_slice();

        if expected_checksum != actual_checksum {
            return Err(anyhow!("Checksum does not match value stored on disk"));
        }

        Ok(())
    }
}

impl<F: Write> Checksum<F> {
    pub fn write(&mut self, data: &[u8]) -> anyhow::Result<()> {
        self.file.write_all(data)?;
        self.digest.update(data);
        Ok(())
    }

    pub fn write_checksum(&mut self) -> anyhow::Result<()> {
        let checksum = self.digest.clone().finalize();
        self.file
            .write_all(checksum.as_slice())
            .map_err(|_| anyhow!("Failed to write checksum to stage file"))?;

        Ok(())
    }
}
