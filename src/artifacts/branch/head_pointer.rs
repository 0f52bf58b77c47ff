//! HEAD indirection codec
//!
//! HEAD is a single text file naming the currently checked-out branch:
//! `ref: refs/heads/<branchName>`. Encoding and decoding go through this
//! fixed-grammar pair; malformed content is an explicit failure, never a
//! silent default.

use crate::artifacts::branch::branch_name::BranchName;
use anyhow::Context;

const HEAD_POINTER_REGEX: &str = r"^ref: refs/heads/(.+)$";

pub fn encode_head_pointer(branch_name: &BranchName) -> String {
    format!("ref: refs/heads/{}", branch_name)
}

pub fn decode_head_pointer(content: &str) -> anyhow::Result<BranchName> {
    let re = regex::Regex::new(HEAD_POINTER_REGEX)
        .with_context(|| format!("invalid head pointer regex: {HEAD_POINTER_REGEX}"))?;

    let captures = re
        .captures(content.trim())
        .with_context(|| format!("malformed HEAD content: {:?}", content))?;

    BranchName::try_parse(captures[1].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encodes_branch_into_ref_line() {
        let branch = BranchName::try_parse("master".to_string()).unwrap();
        assert_eq!(encode_head_pointer(&branch), "ref: refs/heads/master");
    }

    #[test]
    fn decode_roundtrips_encode() {
        let branch = BranchName::try_parse("feature/login".to_string()).unwrap();
        let decoded = decode_head_pointer(&encode_head_pointer(&branch)).unwrap();
        assert_eq!(decoded, branch);
    }

    #[test]
    fn decode_tolerates_trailing_newline() {
        let decoded = decode_head_pointer("ref: refs/heads/master\n").unwrap();
        assert_eq!(decoded.as_ref(), "master");
    }

    #[test]
    fn decode_fails_on_malformed_content() {
        assert!(decode_head_pointer("").is_err());
        assert!(decode_head_pointer("refs/heads/master").is_err());
        assert!(decode_head_pointer("ref: refs/tags/v1").is_err());
        assert!(decode_head_pointer("deadbeef").is_err());
    }
}
