//! Package manager resolution.
//!
//! The host's package manager is probed once per process in a fixed
//! priority order and the winning profile is cached. No manager at all is
//! a valid outcome: command builders then fall back to an inert echo so
//! downstream dispatch still receives something runnable.

use once_cell::sync::OnceCell;

/// Inert fallback command when no supported manager is installed
pub const NO_MANAGER_CMD: &str = "echo 'No supported package manager found'";

/// Operation templates for one package manager. `{}` in the install and
/// check templates receives the space-joined package list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PmProfile {
    pub name: &'static str,
    pub update_cmd: &'static str,
    pub install_cmd: &'static str,
    pub check_cmd: &'static str,
    pub cleanup_cmd: &'static str,
    pub orphans_cmd: &'static str,
}

/// Probe order is the priority order: the first present manager wins
pub const PROFILES: [PmProfile; 3] = [
    PmProfile {
        name: "pacman",
        update_cmd: "sudo pacman -Syu",
        install_cmd: "sudo pacman -S --needed {}",
        check_cmd: "pacman -Qi {}",
        cleanup_cmd: "sudo pacman -Sc --noconfirm",
        orphans_cmd: "sudo pacman -Rns $(pacman -Qtdq)",
    },
    PmProfile {
        name: "apt",
        update_cmd: "sudo apt update && sudo apt upgrade -y",
        install_cmd: "sudo apt install -y {}",
        check_cmd: "dpkg -s {}",
        cleanup_cmd: "sudo apt clean",
        orphans_cmd: "sudo apt autoremove -y",
    },
    PmProfile {
        name: "dnf",
        update_cmd: "sudo dnf upgrade",
        install_cmd: "sudo dnf install -y {}",
        check_cmd: "rpm -q {}",
        cleanup_cmd: "sudo dnf clean all",
        orphans_cmd: "sudo dnf autoremove -y",
    },
];

/// Manager operations exposed on the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PmOperation {
    Update,
    Install,
    Check,
    Cleanup,
    Orphans,
}

impl PmProfile {
    /// Concrete command line for an operation. Only install and check
    /// consume the package list.
    pub fn command_for(&self, op: PmOperation, packages: &[String]) -> String {
        match op {
            PmOperation::Update => self.update_cmd.to_string(),
            PmOperation::Install => substitute(self.install_cmd, packages),
            PmOperation::Check => substitute(self.check_cmd, packages),
            PmOperation::Cleanup => self.cleanup_cmd.to_string(),
            PmOperation::Orphans => self.orphans_cmd.to_string(),
        }
    }
}

fn substitute(template: &str, packages: &[String]) -> String {
    template.replacen("{}", &packages.join(" "), 1)
}

static RESOLVED: OnceCell<Option<&'static PmProfile>> = OnceCell::new();

/// Detected manager profile. Executable probing runs at most once per
/// process; every later call returns the cached outcome, including the
/// none-found outcome.
pub fn resolve() -> Option<&'static PmProfile> {
    *RESOLVED.get_or_init(|| detect_with(|name| which::which(name).is_ok()))
}

/// Priority-ordered detection through an injectable presence probe
fn detect_with<F: FnMut(&str) -> bool>(mut probe: F) -> Option<&'static PmProfile> {
    PROFILES.iter().find(|profile| probe(profile.name))
}

/// Command for an operation against the resolved manager, or the inert
/// fallback when none resolved
pub fn command_or_fallback(op: PmOperation, packages: &[String]) -> String {
    match resolve() {
        Some(profile) => profile.command_for(op, packages),
        None => NO_MANAGER_CMD.to_string(),
    }
}
