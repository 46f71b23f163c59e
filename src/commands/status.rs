use anyhow::Result;
use colored::Colorize;

use crate::core::config::Config;
use crate::core::variants::{VariantState, VariantSwitcher, BUILTIN_VARIANTS};

pub fn execute() -> Result<()> {
    let config = Config::load()?;
    let assets_dir = config.assets_dir()?;

    println!("\n{}", "CONFIG VARIANTS".bold().bright_cyan());
    println!("{}", "=".repeat(40));
    println!("{} {}", "Assets:".dimmed(), assets_dir.display());
    println!();

    for variant in &BUILTIN_VARIANTS {
        let switcher = VariantSwitcher::new(variant.clone(), assets_dir.clone());
        let state = switcher.status();

        let rendered = match state {
            VariantState::Enabled => state.as_str().green().bold(),
            VariantState::Disabled => state.as_str().yellow(),
            VariantState::Unknown => state.as_str().dimmed(),
        };

        println!("  {:<16} {}", variant.logical_name, rendered);
        println!("    {}", variant.target_path.dimmed());
    }

    println!();

    Ok(())
}
