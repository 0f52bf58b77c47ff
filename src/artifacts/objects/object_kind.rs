use crate::artifacts::objects::RECORD_VERSION;
use std::io::BufRead;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectKind {
    Blob,
    Commit,
}

impl ObjectKind {
    pub fn as_str(&self) -> &str {
        match self {
            ObjectKind::Blob => "blob",
            ObjectKind::Commit => "commit",
        }
    }

    /// Read a record header (`<kind> <version>\0`) from the reader,
    /// leaving it positioned at the start of the record body.
    pub fn parse_record_header(data_reader: &mut impl BufRead) -> anyhow::Result<ObjectKind> {
        let mut kind = Vec::new();
        data_reader.read_until(b' ', &mut kind)?;

        let kind = String::from_utf8(kind)?;
        let kind = kind.trim();

        let mut version = Vec::new();
        data_reader.read_until(b'\0', &mut version)?;
        let version = String::from_utf8(version)?;
        let version = version.trim_end_matches('\0').parse::<u32>()?;

        if version != RECORD_VERSION {
            anyhow::bail!("Unsupported object record version: {}", version);
        }

        ObjectKind::try_from(kind)
    }
}

impl TryFrom<&str> for ObjectKind {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> anyhow::Result<Self> {
        match value {
            "blob" => Ok(ObjectKind::Blob),
            "commit" => Ok(ObjectKind::Commit),
            _ => Err(anyhow::anyhow!("Invalid object kind: {}", value)),
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
