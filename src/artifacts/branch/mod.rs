pub mod branch_name;
pub mod head_pointer;

pub const DEFAULT_BRANCH: &str = "master";

pub const INVALID_BRANCH_NAME_REGEX: &str =
    r"^\.|\/\.|\.\.|^\/|\/$|\.lock$|@\{|[\x00-\x20\*:\?\[\\~\^\x7f]";
