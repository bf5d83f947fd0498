use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Undo depth to write into the config
    #[arg(long)]
    pub history: Option<usize>,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = PathBuf::from(cwd).join(DEFAULT_CONFIG_NAME);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    let mut config = Config::default();
    if let Some(history) = args.history {
        config.history_capacity = history;
    }
    config.validate()?;

    let content = serde_json::to_string_pretty(&config)?;
    fs::write(&config_path, content + "\n")?;

    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();

        init(
            InitArgs {
                history: Some(25),
                force: false,
            },
            cwd,
        )
        .unwrap();

        let config = Config::load(cwd).unwrap();
        assert_eq!(config.history_capacity, 25);
    }

    #[test]
    fn test_init_keeps_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().to_str().unwrap();
        fs::write(dir.path().join(DEFAULT_CONFIG_NAME), r#"{"historyCapacity": 3}"#).unwrap();

        init(InitArgs { history: None, force: false }, cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap().history_capacity, 3);

        init(InitArgs { history: None, force: true }, cwd).unwrap();
        assert_eq!(Config::load(cwd).unwrap(), Config::default());
    }
}
