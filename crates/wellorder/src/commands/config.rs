use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let path = Config::path()?;
    let config = Config::load_or_default()?;

    println!("{} {}", "Config file:".bold(), path.display());
    if !path.exists() {
        println!("{}", "(not created yet, showing defaults)".dimmed());
    }
    println!();
    println!(
        "defaults.plate_size: {}",
        config
            .plate_size()
            .map_or_else(|| "96 (default)".to_string(), |s| s.to_string())
    );
    println!(
        "defaults.pattern:    {}",
        config
            .pattern()
            .map_or_else(|| "spiral (default)".to_string(), |p| p.to_string())
    );
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let path = Config::path()?;
    Config::set_in_file(&path, key, value)?;
    println!("{} {key} = {value}", "Set".green().bold());
    println!("Saved to {}", path.display());
    Ok(())
}
