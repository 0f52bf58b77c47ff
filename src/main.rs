use anyhow::Result;
use clap::Parser;
use is_terminal::IsTerminal;
use mini_git::engine::Engine;
use mini_git::view;
use std::io::{BufRead, Write};

#[derive(Parser)]
#[command(
    name = "mini-git",
    version = "0.1.0",
    about = "A minimal version-control engine",
    long_about = "mini-git is a minimal version-control engine: a content-addressable \
    object store plus a staged-commit workflow with named branches and a HEAD pointer. \
    Without --exec it reads command lines (e.g. `git add a.txt`) from standard input.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(index = 1, help = "The working directory to operate on")]
    path: Option<String>,

    #[arg(
        short = 'e',
        long = "exec",
        help = "Run a single command line and exit"
    )]
    exec: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let workdir = match &cli.path {
        Some(path) => std::path::PathBuf::from(path).canonicalize()?,
        None => std::env::current_dir()?,
    };
    let engine = Engine::new(&workdir);

    let mut stdout = std::io::stdout();

    if let Some(line) = &cli.exec {
        let response = engine.dispatch(line)?;
        view::render(&mut stdout, &response)?;
        return Ok(());
    }

    // one command per line until end of input; the prompt is only shown
    // on an interactive terminal so piped sessions stay clean
    let interactive = std::io::stdin().is_terminal();
    let stdin = std::io::stdin();

    loop {
        if interactive {
            write!(stdout, "{}> ", engine.prompt()?)?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let response = engine.dispatch(line.trim_end_matches(['\r', '\n']))?;
        view::render(&mut stdout, &response)?;
    }

    Ok(())
}
