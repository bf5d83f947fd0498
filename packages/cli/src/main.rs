mod commands;
mod config;
mod script;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{init, run, show, InitArgs, RunArgs, ShowArgs};
use tracing::Level;

/// Linepad - line-oriented text editing with bounded undo/redo
#[derive(Parser, Debug)]
#[command(name = "linepad")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a default linepad.config.json
    Init(InitArgs),

    /// Replay an editing script against a file
    Run(RunArgs),

    /// Print a file with line numbers
    Show(ShowArgs),
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Run(args) => run(args, &cwd),
        Command::Show(args) => show(args),
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
