//! Visible command dispatch through a detached terminal emulator.
//!
//! Terminals re-execute their argument through a secondary shell that
//! mishandles multi-statement or quoted strings; anything containing a
//! newline or shell metacharacter is therefore routed through a temporary
//! script file instead of being passed inline. Launched processes are
//! never awaited.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

use once_cell::sync::OnceCell;

use crate::error::{Result, SysdeckError};

/// Probe order is the preference order
const TERMINALS: [&str; 7] = [
    "kitty",
    "alacritty",
    "foot",
    "wezterm",
    "konsole",
    "gnome-terminal",
    "xterm",
];

/// Used when nothing on the list resolves; the most broadly packaged
/// terminal rather than a hard failure
const FALLBACK_TERMINAL: &str = "xterm";

const FILE_MANAGERS: [&str; 5] = ["nautilus", "dolphin", "thunar", "pcmanfm", "nemo"];

/// Any of these forces script-file execution
const SHELL_METACHARS: [char; 14] = [
    ';', '|', '&', '$', '`', '(', ')', '<', '>', '"', '\'', '\\', '\n', '\r',
];

/// Grace period before a launch script is deleted; long enough for the
/// terminal to have started it
const SCRIPT_TTL: Duration = Duration::from_secs(30);

/// How a command reaches the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStrategy {
    /// Safe to embed directly in a bash -c payload
    Inline,
    /// Needs a script file
    ScriptFile,
}

impl ExecStrategy {
    pub fn choose(command: &str) -> Self {
        if command.contains(&SHELL_METACHARS[..]) {
            ExecStrategy::ScriptFile
        } else {
            ExecStrategy::Inline
        }
    }
}

static TERMINAL: OnceCell<String> = OnceCell::new();
static FILE_MANAGER: OnceCell<Option<String>> = OnceCell::new();

/// Detected terminal emulator, probed once per process
pub fn terminal() -> &'static str {
    TERMINAL.get_or_init(|| {
        detect_first(&TERMINALS).unwrap_or_else(|| {
            log::warn!(
                "no terminal emulator found, falling back to {}",
                FALLBACK_TERMINAL
            );
            FALLBACK_TERMINAL.to_string()
        })
    })
}

/// Detected file manager, probed once per process
pub fn file_manager() -> Option<&'static str> {
    FILE_MANAGER
        .get_or_init(|| detect_first(&FILE_MANAGERS))
        .as_deref()
}

fn detect_first(candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|name| which::which(name).is_ok())
        .map(|s| s.to_string())
}

/// Terminal to use, honoring a configured override when it is installed
fn resolve_terminal(preferred: Option<&str>) -> String {
    if let Some(name) = preferred {
        if which::which(name).is_ok() {
            return name.to_string();
        }
        log::warn!("configured terminal {} not found, using detection", name);
    }
    terminal().to_string()
}

/// Run a command visibly in a detached terminal window. Never blocks and
/// never fails the caller; dispatch errors are logged.
pub fn run_in_terminal(command: &str, preferred: Option<&str>) {
    if let Err(e) = try_run(command, preferred) {
        log::error!("dispatch failed: {}", e);
    }
}

fn try_run(command: &str, preferred: Option<&str>) -> Result<()> {
    let terminal = resolve_terminal(preferred);
    let (argv, script) = build_launch(&terminal, command)?;
    spawn_detached(&argv)?;
    if let Some(path) = script {
        schedule_cleanup(path);
    }
    log::info!("dispatched to {}: {}", terminal, command);
    Ok(())
}

/// Open a directory in the detected file manager; absence is a no-op
pub fn open_file_manager(path: &Path) {
    let Some(fm) = file_manager() else {
        log::warn!("no file manager found");
        return;
    };

    let spawned = Command::new(fm)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();
    if let Err(e) = spawned {
        log::error!("failed to launch {}: {}", fm, e);
    }
}

/// argv prefix that makes a terminal run a trailing command
fn terminal_args(terminal: &str) -> &'static [&'static str] {
    match terminal {
        "gnome-terminal" => &["--"],
        "wezterm" => &["start", "--"],
        "alacritty" | "konsole" | "xterm" => &["-e"],
        // kitty and foot take the command argv directly
        _ => &[],
    }
}

/// Full argv for running `command` in `terminal`, plus the script path
/// when one was written
fn build_launch(terminal: &str, command: &str) -> Result<(Vec<String>, Option<PathBuf>)> {
    let mut argv: Vec<String> = std::iter::once(terminal.to_string())
        .chain(terminal_args(terminal).iter().map(|s| s.to_string()))
        .collect();

    match ExecStrategy::choose(command) {
        ExecStrategy::Inline => {
            argv.push("bash".to_string());
            argv.push("-c".to_string());
            argv.push(inline_payload(command));
            Ok((argv, None))
        }
        ExecStrategy::ScriptFile => {
            let path = write_script(command)?;
            argv.push(path.to_string_lossy().into_owned());
            Ok((argv, Some(path)))
        }
    }
}

/// bash -c payload: quoted token-wise, with a trailing read so the window
/// survives command completion
fn inline_payload(command: &str) -> String {
    let quoted: Vec<String> = command.split_whitespace().map(shell_quote).collect();
    format!("{}; read -r -p 'Press Enter to close...'", quoted.join(" "))
}

/// Single-token POSIX quoting; safe tokens pass through untouched
fn shell_quote(token: &str) -> String {
    let is_safe = |c: char| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c);
    if !token.is_empty() && token.chars().all(is_safe) {
        return token.to_string();
    }
    format!("'{}'", token.replace('\'', r"'\''"))
}

/// Write the command to an executable script with a trailing read that
/// keeps the terminal window open
fn write_script(command: &str) -> Result<PathBuf> {
    let mut file = tempfile::Builder::new()
        .prefix("sysdeck-run-")
        .suffix(".sh")
        .tempfile()?;

    writeln!(file, "#!/usr/bin/env bash")?;
    writeln!(file, "{}", command)?;
    writeln!(file, "read -r -p 'Press Enter to close...'")?;

    let (handle, path) = file
        .keep()
        .map_err(|e| SysdeckError::dispatch(e.to_string()))?;
    drop(handle);

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&path, perms)?;
    }

    Ok(path)
}

/// Detached spawn; the child handle is dropped, never awaited
fn spawn_detached(argv: &[String]) -> Result<()> {
    let (program, args) = argv
        .split_first()
        .ok_or_else(|| SysdeckError::dispatch("empty invocation"))?;

    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| SysdeckError::dispatch(format!("{}: {}", program, e)))?;

    Ok(())
}

fn schedule_cleanup(path: PathBuf) {
    thread::spawn(move || {
        thread::sleep(SCRIPT_TTL);
        if let Err(e) = fs::remove_file(&path) {
            log::debug!("launch script cleanup failed: {}", e);
        }
    });
}
