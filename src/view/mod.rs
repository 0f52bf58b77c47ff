//! Presentation layer
//!
//! Renders typed responses for the terminal. This is the only place that
//! turns outcomes into user-facing text; color degrades automatically
//! when stdout is not a terminal.

use crate::commands::porcelain::add::AddOutcome;
use crate::commands::porcelain::branch::BranchOutcome;
use crate::commands::porcelain::commit::CommitOutcome;
use crate::commands::porcelain::rm::RmOutcome;
use crate::artifacts::log::LogEntry;
use crate::artifacts::status::StatusReport;
use crate::engine::response::Response;
use colored::Colorize;
use std::io::Write;

pub fn render<W: Write>(writer: &mut W, response: &Response) -> anyhow::Result<()> {
    match response {
        Response::NoInput => {}
        Response::UnknownCommand => {
            writeln!(writer, "No command with that name exists.")?;
        }
        Response::Usage(usage) => {
            writeln!(writer, "usage: {}", usage)?;
        }
        Response::NotInitialized => {
            writeln!(writer, "Not in an initialized mini-git repository.")?;
        }
        Response::AlreadyInitialized => {
            writeln!(
                writer,
                "A mini-git repository already exists in this directory."
            )?;
        }
        Response::NotSupported(verb) => {
            writeln!(writer, "{} is not supported.", verb)?;
        }
        Response::Initialized(path) => {
            writeln!(
                writer,
                "Initialized empty mini-git repository in {}",
                path.display()
            )?;
        }
        Response::Add(outcome) => render_add(writer, outcome)?,
        Response::Commit(outcome) => render_commit(writer, outcome)?,
        Response::Status(report) => render_status(writer, report)?,
        Response::Rm(outcome) => render_rm(writer, outcome)?,
        Response::Log(entries) => render_log(writer, entries)?,
        Response::Branch(outcome) => render_branch(writer, outcome)?,
    }

    Ok(())
}

fn render_add<W: Write>(writer: &mut W, outcome: &AddOutcome) -> anyhow::Result<()> {
    match outcome {
        AddOutcome::Staged { .. } => {}
        AddOutcome::FileMissing { file } => {
            writeln!(writer, "File does not exist: {}", file)?;
        }
    }

    Ok(())
}

fn render_commit<W: Write>(writer: &mut W, outcome: &CommitOutcome) -> anyhow::Result<()> {
    match outcome {
        CommitOutcome::Committed(summary) => {
            let root_marker = if summary.is_root { "(root-commit) " } else { "" };
            writeln!(
                writer,
                "[{} {}{}] {}",
                summary.branch,
                root_marker,
                summary.commit_id.to_short_oid(),
                summary.message
            )?;
        }
        CommitOutcome::NothingToCommit => {
            writeln!(writer, "No changes added to the commit.")?;
        }
        CommitOutcome::EmptyMessage => {
            writeln!(writer, "Please enter a commit message.")?;
        }
    }

    Ok(())
}

fn render_status<W: Write>(writer: &mut W, report: &StatusReport) -> anyhow::Result<()> {
    writeln!(writer, "On branch {}", report.current_branch)?;

    writeln!(writer, "Branches:")?;
    for branch in &report.branches {
        if branch == &report.current_branch {
            writeln!(writer, "* {}", branch.to_string().green())?;
        } else {
            writeln!(writer, "  {}", branch)?;
        }
    }

    render_status_section(writer, "Staged files:", &report.staged)?;
    render_status_section(writer, "Removed files:", &report.removed)?;

    if !report.modified.is_empty() || !report.deleted.is_empty() {
        writeln!(writer, "Not staged for commit:")?;
        for file in &report.modified {
            writeln!(writer, "    modified: {}", file)?;
        }
        for file in &report.deleted {
            writeln!(writer, "    deleted:  {}", file)?;
        }
    }

    render_status_section(writer, "Untracked files:", &report.untracked)?;

    if report.is_clean() {
        writeln!(writer, "Nothing to commit, working tree clean.")?;
    }

    Ok(())
}

fn render_status_section<W: Write>(
    writer: &mut W,
    title: &str,
    files: &[String],
) -> anyhow::Result<()> {
    if files.is_empty() {
        return Ok(());
    }

    writeln!(writer, "{}", title)?;
    for file in files {
        writeln!(writer, "    {}", file)?;
    }

    Ok(())
}

fn render_rm<W: Write>(writer: &mut W, outcome: &RmOutcome) -> anyhow::Result<()> {
    match outcome {
        RmOutcome::Unstaged { .. } => {}
        RmOutcome::Removed { file } => {
            writeln!(writer, "rm '{}'", file)?;
        }
        RmOutcome::NoReason { .. } => {
            writeln!(writer, "No reason to remove the file.")?;
        }
    }

    Ok(())
}

fn render_log<W: Write>(writer: &mut W, entries: &[LogEntry]) -> anyhow::Result<()> {
    for entry in entries {
        writeln!(writer, "commit {}", entry.id.to_string().yellow())?;
        writeln!(writer, "Date:   {}", entry.readable_timestamp())?;
        writeln!(writer)?;
        for line in entry.message.lines() {
            writeln!(writer, "    {}", line)?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

fn render_branch<W: Write>(writer: &mut W, outcome: &BranchOutcome) -> anyhow::Result<()> {
    match outcome {
        BranchOutcome::Created(_) => {}
        BranchOutcome::AlreadyExists(_) => {
            writeln!(writer, "A branch with that name already exists.")?;
        }
        BranchOutcome::InvalidName(name) => {
            writeln!(writer, "'{}' is not a valid branch name.", name)?;
        }
    }

    Ok(())
}
