use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;

use crate::core::config::Config;
use crate::core::variants::expand_tilde;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("show", _)) => execute_show(),
        Some(("set-assets", sub_matches)) => execute_set_assets(sub_matches),
        Some(("set-terminal", sub_matches)) => execute_set_terminal(sub_matches),
        _ => {
            println!("Use 'sysdeck config --help' for more information.");
            Ok(())
        }
    }
}

fn execute_show() -> Result<()> {
    let config = Config::load()?;

    println!("{}", "Assets directory:".white());
    println!(
        "  {}",
        config.assets_dir()?.display().to_string().cyan().bold()
    );

    println!("{}", "Terminal override:".white());
    match config.terminal() {
        Some(terminal) => println!("  {}", terminal.cyan().bold()),
        None => println!("  {}", "(auto-detect)".dimmed()),
    }

    Ok(())
}

fn execute_set_assets(matches: &ArgMatches) -> Result<()> {
    let dir = matches
        .get_one::<String>("dir")
        .context("Directory argument is required")?;

    if !expand_tilde(dir)?.exists() {
        println!(
            "{}",
            format!("⚠️  Warning: Path '{}' does not exist", dir).yellow()
        );
        println!(
            "{}",
            "The path will be saved but may not be usable until created.".dimmed()
        );
    }

    let mut config = Config::load()?;
    config.set_assets_dir(dir.clone());
    config.save()?;

    println!("{} {}", "✓ Assets directory set to:".green(), dir);

    Ok(())
}

fn execute_set_terminal(matches: &ArgMatches) -> Result<()> {
    let terminal = matches
        .get_one::<String>("terminal")
        .context("Terminal argument is required")?;

    let mut config = Config::load()?;
    config.set_terminal(terminal.clone());
    config.save()?;

    println!(
        "{} {}",
        "✓ Terminal set to:".green(),
        terminal.cyan().bold()
    );

    Ok(())
}
