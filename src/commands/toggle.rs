use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;

use crate::core::config::Config;
use crate::core::variants::{self, VariantState, VariantSwitcher};

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let name = matches.get_one::<String>("name").unwrap();

    let Some(variant) = variants::find_variant(name) else {
        println!("{}", format!("Unknown variant: {}", name).red());
        println!();
        println!("{}", "Available variants:".white());
        for known in &variants::BUILTIN_VARIANTS {
            println!("  {}", known.logical_name.cyan());
        }
        return Ok(());
    };

    let config = Config::load()?;
    let switcher = VariantSwitcher::new(variant.clone(), config.assets_dir()?);

    let current = switcher.status();
    // The bare form flips whatever is on disk; Unknown counts as off
    let target_on = if matches.get_flag("on") {
        true
    } else if matches.get_flag("off") {
        false
    } else {
        !current.is_enabled()
    };

    println!(
        "{} {} ({} \u{2192} {})",
        "Switching".bold(),
        variant.logical_name.cyan(),
        current.as_str(),
        if target_on { "enabled" } else { "disabled" }
    );

    match switcher.toggle(target_on) {
        VariantState::Enabled => {
            println!(
                "{}",
                format!("✓ {} is now enabled", variant.logical_name)
                    .green()
                    .bold()
            );
        }
        VariantState::Disabled => {
            println!(
                "{}",
                format!("✓ {} is now disabled", variant.logical_name).yellow()
            );
        }
        VariantState::Unknown => {
            println!(
                "{}",
                format!("⚠ {} state could not be verified", variant.logical_name).red()
            );
            println!(
                "{}",
                "Check the log output above and the assets directory.".dimmed()
            );
        }
    }

    Ok(())
}
