use anyhow::Result;
use clap::{Arg, Command};

use sysdeck::commands;

fn main() -> Result<()> {
    sysdeck::init_logging();

    let mut cli = build_cli();
    let matches = cli.clone().get_matches();

    if matches.get_flag("version") {
        println!("sysdeck version {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match matches.subcommand() {
        Some(("info", sub_matches)) => {
            commands::info(sub_matches)?;
        }
        Some(("watch", sub_matches)) => {
            commands::watch(sub_matches)?;
        }
        Some(("update", sub_matches)) => {
            commands::update::execute(sub_matches)?;
        }
        Some(("pkg", sub_matches)) => {
            commands::pkg::execute(sub_matches)?;
        }
        Some(("toggle", sub_matches)) => {
            commands::toggle::execute(sub_matches)?;
        }
        Some(("status", _)) => {
            commands::status()?;
        }
        Some(("open", sub_matches)) => {
            commands::open::execute(sub_matches)?;
        }
        Some(("config", sub_matches)) => {
            commands::config::execute(sub_matches)?;
        }
        Some(("completions", sub_matches)) => {
            commands::completions::execute(sub_matches, &mut cli)?;
        }
        Some(("version", _)) => {
            commands::version()?;
        }
        _ => {
            println!("Welcome to sysdeck!");
            println!("Use 'sysdeck --help' for more information.");
        }
    }

    Ok(())
}

fn build_cli() -> Command {
    Command::new("sysdeck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Host-local operations utility: live metrics, package operations, config variant switching")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .short_alias('V')
                .long("version")
                .help("Print version information")
                .action(clap::ArgAction::SetTrue),
        )
        .subcommand(
            Command::new("info")
                .about("Show a grouped system report")
                .arg(
                    Arg::new("software")
                        .long("software")
                        .help("Show distro, kernel and session details")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("cpu")
                        .long("cpu")
                        .help("Show CPU model, cores, temperature and fan")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("memory")
                        .long("memory")
                        .help("Show memory and root disk usage")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("graphics")
                        .long("graphics")
                        .help("Show GPU model and graphics API versions")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("network")
                        .long("network")
                        .help("Show network addresses")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("watch")
                .about("Watch live system metrics until Ctrl-C")
                .arg(
                    Arg::new("interval")
                        .short('i')
                        .long("interval")
                        .value_name("MS")
                        .help("Milliseconds between samples")
                        .value_parser(clap::value_parser!(u64))
                        .default_value("2000"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Emit one JSON object per sample instead of text")
                        .action(clap::ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Stop after N samples")
                        .value_parser(clap::value_parser!(u64)),
                ),
        )
        .subcommand(
            Command::new("update")
                .about("Run a full system update through the package manager")
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Skip the confirmation prompt")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("pkg")
                .about("Package operations (use 'sysdeck pkg --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(
                    Command::new("install")
                        .about("Install packages in a terminal window")
                        .arg(
                            Arg::new("packages")
                                .help("Packages to install")
                                .required(true)
                                .num_args(1..),
                        ),
                )
                .subcommand(
                    Command::new("check")
                        .about("Check whether packages are installed")
                        .arg(
                            Arg::new("packages")
                                .help("Packages to check")
                                .required(true)
                                .num_args(1..),
                        ),
                )
                .subcommand(Command::new("cleanup").about("Clean the package manager caches"))
                .subcommand(
                    Command::new("orphans")
                        .about("Remove orphaned packages")
                        .arg(
                            Arg::new("yes")
                                .short('y')
                                .long("yes")
                                .help("Skip the confirmation prompt")
                                .action(clap::ArgAction::SetTrue),
                        ),
                ),
        )
        .subcommand(
            Command::new("toggle")
                .about("Switch a config file between its variants")
                .arg(
                    Arg::new("name")
                        .help("Variant name (see 'sysdeck status')")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("on")
                        .long("on")
                        .help("Force the enabled variant")
                        .action(clap::ArgAction::SetTrue)
                        .conflicts_with("off"),
                )
                .arg(
                    Arg::new("off")
                        .long("off")
                        .help("Force the disabled variant")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("status").about("List config variants and their current state"))
        .subcommand(
            Command::new("open")
                .about("Open a directory in the file manager")
                .arg(
                    Arg::new("path")
                        .help("Directory to open (defaults to home)")
                        .index(1),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Manage sysdeck configuration (use 'sysdeck config --help' for subcommands)")
                .subcommand_required(true)
                .arg_required_else_help(true)
                .subcommand(Command::new("show").about("Show the current configuration"))
                .subcommand(
                    Command::new("set-assets")
                        .about("Set the variant assets directory")
                        .arg(
                            Arg::new("dir")
                                .help("Path to the assets directory")
                                .required(true)
                                .index(1),
                        ),
                )
                .subcommand(
                    Command::new("set-terminal")
                        .about("Set the preferred terminal emulator")
                        .arg(
                            Arg::new("terminal")
                                .help("Terminal executable name")
                                .required(true)
                                .index(1),
                        ),
                ),
        )
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .help("Shell to generate completions for")
                        .required(true)
                        .index(1),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}
