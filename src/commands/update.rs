use anyhow::Result;
use colored::Colorize;
use dialoguer::Confirm;

use crate::core::config::Config;
use crate::core::dispatch;
use crate::core::pkgmgr::{self, PmOperation};

pub fn execute(matches: &clap::ArgMatches) -> Result<()> {
    println!();
    println!("{}", "━".repeat(50).cyan());
    println!("  {}", "Sysdeck System Update".bold().cyan());
    println!("{}", "━".repeat(50).cyan());
    println!();

    match pkgmgr::resolve() {
        Some(profile) => {
            println!(
                "{} {}",
                "✓ Package manager:".green(),
                profile.name.yellow().bold()
            );
        }
        None => {
            println!("{}", "✗ No supported package manager found".red());
            println!(
                "{}",
                "The launched window will only print a notice.".dimmed()
            );
        }
    }

    let command = pkgmgr::command_or_fallback(PmOperation::Update, &[]);
    println!("{} {}", "Command:".dimmed(), command.green());

    if !matches.get_flag("yes") {
        println!();
        let proceed = Confirm::new()
            .with_prompt("Proceed with system update?")
            .default(true)
            .interact()?;

        if !proceed {
            println!();
            println!("{}", "Update cancelled.".yellow());
            return Ok(());
        }
    }

    let config = Config::load()?;

    println!();
    println!("{}", "Launching update in a terminal window...".cyan());
    dispatch::run_in_terminal(&command, config.terminal());

    Ok(())
}
