use anyhow::Result;
use clap::ArgMatches;
use colored::Colorize;
use std::path::PathBuf;

use crate::core::dispatch;

pub fn execute(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .map(PathBuf::from)
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    if !path.exists() {
        println!(
            "{}",
            format!("Path does not exist: {}", path.display()).red()
        );
        return Ok(());
    }

    println!(
        "{} {}",
        "Opening".bold(),
        path.display().to_string().cyan()
    );
    dispatch::open_file_manager(&path);

    Ok(())
}
