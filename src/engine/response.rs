use crate::artifacts::log::LogEntry;
use crate::artifacts::status::StatusReport;
use crate::commands::porcelain::add::AddOutcome;
use crate::commands::porcelain::branch::BranchOutcome;
use crate::commands::porcelain::commit::CommitOutcome;
use crate::commands::porcelain::rm::RmOutcome;
use std::path::PathBuf;

/// Everything a dispatched command can answer with.
///
/// Usage and precondition responses carry no payload and guarantee the
/// command had no side effects. Payload variants are pure data for the
/// view layer to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    NoInput,
    UnknownCommand,
    Usage(&'static str),
    NotInitialized,
    AlreadyInitialized,
    NotSupported(&'static str),
    Initialized(PathBuf),
    Add(AddOutcome),
    Commit(CommitOutcome),
    Status(StatusReport),
    Rm(RmOutcome),
    Log(Vec<LogEntry>),
    Branch(BranchOutcome),
}
