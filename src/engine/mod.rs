//! Command dispatcher
//!
//! Tokenizes one command line, routes it to a command handler, and
//! enforces the repository-level preconditions: every verb except `init`
//! requires an initialized repository, and `init` refuses to run twice.
//! The dispatcher returns typed responses only — user-facing text is the
//! view layer's concern, and internal failures (I/O, corruption)
//! propagate as errors rather than being folded into a response kind.

pub mod response;
pub mod tokenizer;

use crate::areas::repository::Repository;
use crate::engine::response::Response;
use crate::engine::tokenizer::tokenize;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Leading token every command line must carry
const COMMAND_PREFIX: &str = "git";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Init,
    Add,
    Commit,
    Status,
    Rm,
    Log,
    Branch,
    Checkout,
}

static VERBS: phf::Map<&'static str, Verb> = phf::phf_map! {
    "init" => Verb::Init,
    "add" => Verb::Add,
    "commit" => Verb::Commit,
    "status" => Verb::Status,
    "rm" => Verb::Rm,
    "log" => Verb::Log,
    "branch" => Verb::Branch,
    "checkout" => Verb::Checkout,
};

pub struct Engine {
    workdir: PathBuf,
}

impl Engine {
    pub fn new(workdir: impl AsRef<Path>) -> Self {
        Engine {
            workdir: workdir.as_ref().to_path_buf(),
        }
    }

    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Shell prompt prefix: the working directory, suffixed with the
    /// current branch when a repository exists.
    pub fn prompt(&self) -> anyhow::Result<String> {
        let repository = Repository::new(&self.workdir)?;

        Ok(match repository.derive_current_branch()? {
            Some(branch) => format!("{}({})", self.workdir.display(), branch),
            None => self.workdir.display().to_string(),
        })
    }

    /// Parse, validate, and fully execute one command line.
    pub fn dispatch(&self, line: &str) -> anyhow::Result<Response> {
        if line.trim().is_empty() {
            return Ok(Response::NoInput);
        }

        let tokens = tokenize(line);
        if tokens.len() < 2 || tokens[0] != COMMAND_PREFIX {
            return Ok(Response::UnknownCommand);
        }

        let Some(verb) = VERBS.get(tokens[1].as_str()) else {
            return Ok(Response::UnknownCommand);
        };

        let repository = Repository::new(&self.workdir)?;

        if *verb == Verb::Init {
            return if repository.repository_exists() {
                Ok(Response::AlreadyInitialized)
            } else {
                repository.init().map(Response::Initialized)
            };
        }

        if !repository.repository_exists() {
            return Ok(Response::NotInitialized);
        }

        // the branch is derived fresh for every command instead of being
        // cached across dispatches, so it always reflects the HEAD file
        let branch = repository
            .derive_current_branch()?
            .context("unable to derive the current branch")?;

        match verb {
            Verb::Init => unreachable!("init is handled before the precondition check"),
            Verb::Add => match Self::single_operand(&tokens) {
                Some(file) => repository.add(file).map(Response::Add),
                None => Ok(Response::Usage("git add <file>")),
            },
            Verb::Commit => match Self::single_operand(&tokens) {
                Some(message) => repository.commit(&branch, message).map(Response::Commit),
                None => Ok(Response::Usage("git commit <message>")),
            },
            Verb::Status => repository.status(&branch).map(Response::Status),
            Verb::Rm => match Self::single_operand(&tokens) {
                Some(file) => repository.rm(&branch, file).map(Response::Rm),
                None => Ok(Response::Usage("git rm <file>")),
            },
            Verb::Log => repository.log(&branch).map(Response::Log),
            Verb::Branch => match Self::single_operand(&tokens) {
                Some(name) => repository.branch(&branch, name).map(Response::Branch),
                None => Ok(Response::Usage("git branch <name>")),
            },
            Verb::Checkout => Ok(Response::NotSupported("checkout")),
        }
    }

    fn single_operand(tokens: &[String]) -> Option<&str> {
        match tokens {
            [_, _, operand] => Some(operand.as_str()),
            _ => None,
        }
    }
}
