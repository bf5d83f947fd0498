use crate::config::Config;
use crate::script::{parse_script, Command, Step};
use anyhow::{anyhow, Context, Result};
use clap::Args;
use colored::Colorize;
use linepad_editor::{Edit, EditSession};
use serde_json::json;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Args)]
pub struct RunArgs {
    /// File to edit
    pub file: PathBuf,

    /// Script file with one command per line
    #[arg(short, long, conflicts_with = "exec")]
    pub script: Option<PathBuf>,

    /// Inline command (repeatable); read from stdin if no script is given
    #[arg(short = 'e', long = "exec")]
    pub exec: Vec<String>,

    /// Write the result here instead of the input file (script `save` too)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Save the result back to the input file
    #[arg(short, long, conflicts_with = "output")]
    pub in_place: bool,

    /// Print the resulting document to stdout
    #[arg(short, long)]
    pub print: bool,

    /// Undo depth (overrides config)
    #[arg(long)]
    pub history: Option<usize>,

    /// Start from an empty document if the file does not exist
    #[arg(long)]
    pub create: bool,
}

pub fn run(args: RunArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let capacity = args.history.unwrap_or(config.history_capacity);
    if capacity == 0 {
        return Err(anyhow!("--history must be at least 1"));
    }

    let source = read_script(&args)?;
    let steps = parse_script(&source)?;

    let opened = if args.create || config.create_missing {
        EditSession::open_or_create(&args.file, capacity)
    } else {
        EditSession::open(&args.file, capacity)
    };
    let mut session = opened.with_context(|| format!("cannot open {}", args.file.display()))?;
    if let Some(output) = &args.output {
        // Script `save` writes the output file; the input is only read.
        session.retarget(output);
    }

    let stdout = io::stdout();
    execute(&mut session, &steps, &mut stdout.lock())?;

    if let Some(output) = &args.output {
        session
            .save_as(output)
            .with_context(|| format!("cannot write {}", output.display()))?;
        eprintln!("  {} wrote {}", "✓".green(), output.display());
    } else if args.in_place && session.is_dirty() {
        session
            .save()
            .with_context(|| format!("cannot write {}", args.file.display()))?;
        eprintln!("  {} wrote {}", "✓".green(), args.file.display());
    }

    if args.print || (args.output.is_none() && !args.in_place) {
        session.document().write_to(stdout.lock())?;
    }

    Ok(())
}

fn read_script(args: &RunArgs) -> Result<String> {
    if let Some(path) = &args.script {
        return std::fs::read_to_string(path)
            .with_context(|| format!("cannot read script {}", path.display()));
    }

    if !args.exec.is_empty() {
        return Ok(args.exec.join("\n"));
    }

    let mut source = String::new();
    io::stdin().read_to_string(&mut source)?;
    Ok(source)
}

/// Replay `steps` against `session`, writing `print`/`history` output to `out`
pub fn execute<W: Write>(session: &mut EditSession, steps: &[Step], out: &mut W) -> Result<()> {
    for step in steps {
        execute_step(session, &step.command, out)
            .with_context(|| format!("script line {}", step.line))?;
    }
    Ok(())
}

fn execute_step<W: Write>(session: &mut EditSession, command: &Command, out: &mut W) -> Result<()> {
    match command {
        Command::Type(text) => {
            session.insert_str(text)?;
        }
        Command::Newline => {
            session.insert_char('\n')?;
        }
        Command::Backspace(count) => {
            for _ in 0..*count {
                if !session.delete_before_cursor()? {
                    info!("Nothing to delete at start of document");
                    break;
                }
            }
        }
        Command::Move(dir, count) => {
            for _ in 0..*count {
                if !session.move_cursor(*dir) {
                    info!(?dir, cursor = ?session.cursor(), "Cursor blocked at edge");
                    break;
                }
            }
        }
        Command::Undo(count) => {
            for _ in 0..*count {
                if !session.undo()? {
                    info!("Nothing to undo");
                    break;
                }
            }
        }
        Command::Redo(count) => {
            for _ in 0..*count {
                if !session.redo()? {
                    info!("Nothing to redo");
                    break;
                }
            }
        }
        Command::Save => {
            session.save()?;
        }
        Command::Print => {
            session.document().write_to(&mut *out)?;
        }
        Command::History => {
            let history = session.history();
            let dump = json!({
                "capacity": history.capacity(),
                "undo": history.undo_edits().collect::<Vec<&Edit>>(),
                "redo": history.redo_edits().collect::<Vec<&Edit>>(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&dump)?)?;
        }
    }

    Ok(())
}
