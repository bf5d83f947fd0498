//! Editing scripts: one command per line, replayed against an edit session.
//!
//! ```text
//! # comment
//! type Hello, world
//! newline
//! left 3
//! backspace 2
//! undo
//! save
//! ```

use anyhow::{anyhow, bail, Result};
use linepad_editor::CursorDir;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert the text character by character
    Type(String),
    Newline,
    Backspace(usize),
    Move(CursorDir, usize),
    Undo(usize),
    Redo(usize),
    Save,
    Print,
    History,
}

/// A command and the script line it came from (1-based)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub line: usize,
    pub command: Command,
}

pub fn parse_script(source: &str) -> Result<Vec<Step>> {
    let mut steps = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim_start();
        if text.trim_end().is_empty() || text.starts_with('#') {
            continue;
        }

        let command = parse_command(text).map_err(|e| anyhow!("script line {}: {}", line, e))?;
        steps.push(Step { line, command });
    }

    Ok(steps)
}

fn parse_command(text: &str) -> Result<Command> {
    let (name, rest) = match text.split_once(' ') {
        Some((name, rest)) => (name, rest),
        None => (text.trim_end(), ""),
    };

    // `type` keeps its argument verbatim, trailing spaces included.
    if name == "type" {
        if rest.is_empty() {
            bail!("type needs text");
        }
        return Ok(Command::Type(rest.to_string()));
    }

    let count = || parse_count(rest.trim());
    let command = match name {
        "newline" => no_count(Command::Newline, rest)?,
        "backspace" => Command::Backspace(count()?),
        "left" => Command::Move(CursorDir::Left, count()?),
        "right" => Command::Move(CursorDir::Right, count()?),
        "up" => Command::Move(CursorDir::Up, count()?),
        "down" => Command::Move(CursorDir::Down, count()?),
        "undo" => Command::Undo(count()?),
        "redo" => Command::Redo(count()?),
        "save" => no_count(Command::Save, rest)?,
        "print" => no_count(Command::Print, rest)?,
        "history" => no_count(Command::History, rest)?,
        other => bail!("unknown command '{}'", other),
    };

    Ok(command)
}

fn parse_count(arg: &str) -> Result<usize> {
    if arg.is_empty() {
        return Ok(1);
    }
    arg.parse()
        .map_err(|_| anyhow!("expected a repeat count, got '{}'", arg))
}

fn no_count(command: Command, rest: &str) -> Result<Command> {
    if !rest.trim().is_empty() {
        bail!("{:?} takes no argument", command);
    }
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn commands(source: &str) -> Vec<Command> {
        parse_script(source)
            .unwrap()
            .into_iter()
            .map(|step| step.command)
            .collect()
    }

    #[test]
    fn test_parse_basic_script() {
        let script = "type abc\nundo\nnewline\nbackspace\n";
        assert_eq!(
            commands(script),
            vec![
                Command::Type("abc".to_string()),
                Command::Undo(1),
                Command::Newline,
                Command::Backspace(1),
            ]
        );
    }

    #[test]
    fn test_type_keeps_spacing() {
        assert_eq!(
            commands("type   two  spaces # not a comment "),
            vec![Command::Type("  two  spaces # not a comment ".to_string())]
        );
    }

    #[test]
    fn test_counts_and_motion() {
        assert_eq!(
            commands("left 3\n  down\nredo 2"),
            vec![
                Command::Move(CursorDir::Left, 3),
                Command::Move(CursorDir::Down, 1),
                Command::Redo(2),
            ]
        );
    }

    #[test]
    fn test_comments_and_blank_lines_skipped() {
        let steps = parse_script("# header\n\n   \nprint\n").unwrap();
        assert_eq!(
            steps,
            vec![Step {
                line: 4,
                command: Command::Print
            }]
        );
    }

    #[test]
    fn test_errors_name_the_line() {
        let err = parse_script("print\njump 4\n").unwrap_err();
        assert!(err.to_string().contains("script line 2"));
        assert!(err.to_string().contains("jump"));

        assert!(parse_script("left many").is_err());
        assert!(parse_script("save now").is_err());
        assert!(parse_script("type").is_err());
    }
}
