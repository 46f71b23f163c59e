use anyhow::{Context, Result};
use clap::ArgMatches;
use colored::Colorize;
use dialoguer::Confirm;
use std::process::Command;

use crate::core::config::Config;
use crate::core::dispatch;
use crate::core::pkgmgr::{self, PmOperation};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("install", sub_matches)) => execute_install(sub_matches),
        Some(("check", sub_matches)) => execute_check(sub_matches),
        Some(("cleanup", _)) => execute_cleanup(),
        Some(("orphans", sub_matches)) => execute_orphans(sub_matches),
        _ => {
            println!("Use 'sysdeck pkg --help' for more information.");
            Ok(())
        }
    }
}

fn packages_from(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("packages")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn execute_install(matches: &ArgMatches) -> Result<()> {
    let packages = packages_from(matches);
    let command = pkgmgr::command_or_fallback(PmOperation::Install, &packages);

    println!("{} {}", "Installing:".bold(), packages.join(" ").cyan());
    println!("{} {}", "Command:".dimmed(), command.green());

    let config = Config::load()?;
    dispatch::run_in_terminal(&command, config.terminal());

    Ok(())
}

/// Check is neither privileged nor long-running, so it runs right here
/// instead of going through a terminal window.
fn execute_check(matches: &ArgMatches) -> Result<()> {
    let packages = packages_from(matches);
    let command = pkgmgr::command_or_fallback(PmOperation::Check, &packages);

    println!("{} {}", "Running:".dimmed(), command.green());
    println!();

    let status = Command::new("bash")
        .arg("-c")
        .arg(&command)
        .status()
        .with_context(|| format!("Failed to run check command: {}", command))?;

    println!();
    if status.success() {
        println!("{}", "✓ All listed packages are installed".green().bold());
    } else {
        println!("{}", "✗ At least one package is not installed".yellow());
    }

    Ok(())
}

fn execute_cleanup() -> Result<()> {
    let command = pkgmgr::command_or_fallback(PmOperation::Cleanup, &[]);

    println!("{}", "Cleaning package caches...".cyan());
    println!("{} {}", "Command:".dimmed(), command.green());

    let config = Config::load()?;
    dispatch::run_in_terminal(&command, config.terminal());

    Ok(())
}

fn execute_orphans(matches: &ArgMatches) -> Result<()> {
    let command = pkgmgr::command_or_fallback(PmOperation::Orphans, &[]);

    println!("{}", "Removing orphaned packages...".cyan());
    println!("{} {}", "Command:".dimmed(), command.green());

    if !matches.get_flag("yes") {
        println!();
        let proceed = Confirm::new()
            .with_prompt("Remove all orphaned packages?")
            .default(false)
            .interact()?;

        if !proceed {
            println!();
            println!("{}", "Cancelled.".yellow());
            return Ok(());
        }
    }

    let config = Config::load()?;
    dispatch::run_in_terminal(&command, config.terminal());

    Ok(())
}
