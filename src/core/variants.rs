//! Config variant switching.
//!
//! A variant is a config file that can be flipped between an "on" and an
//! "off" asset by backup-and-swap. State is always derived from what is on
//! disk: symlink targets (legacy installs) carry the marker in their path,
//! copies carry it in their content. Nothing is stored elsewhere.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use chrono::Local;

use crate::core::probes;
use crate::error::{Result, SysdeckError};

/// Marker substrings kept verbatim; downstream tooling greps for these
pub const MARKER_PIVOT: &str = "pivot";
pub const MARKER_ORIGINAL: &str = "original";
pub const MARKER_ENABLED: &str = "enabled";
pub const MARKER_DISABLED: &str = "disabled";

const SUFFIX_MARKERS: [&str; 4] = [
    MARKER_PIVOT,
    MARKER_ORIGINAL,
    MARKER_ENABLED,
    MARKER_DISABLED,
];

const BACKUP_DIR: &str = "backup";
const TIMESTAMP_FMT: &str = "%Y%m%d%H%M%S";
/// How much of a target file is scanned for a variant marker
const MARKER_SCAN_BYTES: u64 = 4096;

/// Derived state of a variant target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantState {
    Enabled,
    Disabled,
    Unknown,
}

impl VariantState {
    /// Unknown counts as off
    pub fn is_enabled(&self) -> bool {
        matches!(self, VariantState::Enabled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VariantState::Enabled => "enabled",
            VariantState::Disabled => "disabled",
            VariantState::Unknown => "unknown",
        }
    }
}

/// A switchable config target
#[derive(Debug, Clone)]
pub struct ConfigVariant {
    pub logical_name: &'static str,
    pub target_path: &'static str,
    pub on_suffix: &'static str,
    pub off_suffix: &'static str,
    pub uses_backup: bool,
    /// false for the GPU overlay config: its consumer rereads it on its
    /// own, no compositor reload involved
    pub reloads_session: bool,
}

pub const BUILTIN_VARIANTS: [ConfigVariant; 2] = [
    ConfigVariant {
        logical_name: "general.conf",
        target_path: "~/.config/hypr/hyprland/general.conf",
        on_suffix: MARKER_PIVOT,
        off_suffix: MARKER_ORIGINAL,
        uses_backup: true,
        reloads_session: true,
    },
    ConfigVariant {
        logical_name: "MangoHud.conf",
        target_path: "~/.config/MangoHud/MangoHud.conf",
        on_suffix: MARKER_ENABLED,
        off_suffix: MARKER_DISABLED,
        uses_backup: true,
        reloads_session: false,
    },
];

/// Look up a built-in variant; the `.conf` extension may be omitted
pub fn find_variant(name: &str) -> Option<&'static ConfigVariant> {
    BUILTIN_VARIANTS.iter().find(|v| {
        v.logical_name.eq_ignore_ascii_case(name)
            || v.logical_name
                .trim_end_matches(".conf")
                .eq_ignore_ascii_case(name)
    })
}

/// Executes switches for one variant against a concrete assets directory.
///
/// The target override exists for tests; production call sites use the
/// variant's own path.
pub struct VariantSwitcher {
    variant: ConfigVariant,
    assets_dir: PathBuf,
    target_override: Option<PathBuf>,
}

impl VariantSwitcher {
    pub fn new(variant: ConfigVariant, assets_dir: PathBuf) -> Self {
        Self {
            variant,
            assets_dir,
            target_override: None,
        }
    }

    pub fn with_target(mut self, target: PathBuf) -> Self {
        self.target_override = Some(target);
        self
    }

    pub fn variant(&self) -> &ConfigVariant {
        &self.variant
    }

    fn target_path(&self) -> Result<PathBuf> {
        match &self.target_override {
            Some(path) => Ok(path.clone()),
            None => expand_tilde(self.variant.target_path),
        }
    }

    /// Current state, derived from disk
    pub fn status(&self) -> VariantState {
        match self.target_path() {
            Ok(target) => read_state(&target, &self.variant),
            Err(_) => VariantState::Unknown,
        }
    }

    /// Switch toward on/off. Best-effort: a failing step aborts the rest
    /// of this call and is logged, the target is never left missing, and
    /// the returned state is re-derived from disk.
    pub fn toggle(&self, on: bool) -> VariantState {
        if let Err(e) = self.apply(on) {
            log::error!(
                "variant {}: switch failed: {}",
                self.variant.logical_name,
                e
            );
        }
        self.status()
    }

    fn apply(&self, on: bool) -> Result<()> {
        let suffix = if on {
            self.variant.on_suffix
        } else {
            self.variant.off_suffix
        };
        let source = self
            .assets_dir
            .join(format!("{}.{}", self.variant.logical_name, suffix));
        if !source.exists() {
            return Err(SysdeckError::switch(format!(
                "source asset missing: {}",
                source.display()
            )));
        }

        let target = self.target_path()?;
        let parent = target
            .parent()
            .ok_or_else(|| SysdeckError::invalid_path("variant target has no parent"))?;
        fs::create_dir_all(parent)?;
        if self.variant.uses_backup {
            fs::create_dir_all(parent.join(BACKUP_DIR))?;
        }

        // Placeholder so the backup move below always has a file to take
        if fs::symlink_metadata(&target).is_err() {
            fs::File::create(&target)?;
        }

        // Only unrecognized content is worth preserving; replacing one of
        // our own asset copies loses nothing
        if self.variant.uses_backup && read_state(&target, &self.variant) == VariantState::Unknown
        {
            self.backup_target(&target, parent)?;
        }

        // Clear the old target first: copying through a leftover symlink
        // would write into the asset it points at
        if fs::symlink_metadata(&target).is_ok() {
            fs::remove_file(&target)?;
        }
        fs::copy(&source, &target)?;

        if self.variant.reloads_session {
            probes::reload_session();
        }

        Ok(())
    }

    /// Move the current target into backup/. A clashing backup is renamed
    /// with a timestamp first; an existing backup file is never
    /// overwritten.
    fn backup_target(&self, target: &Path, parent: &Path) -> Result<()> {
        let backup_dir = parent.join(BACKUP_DIR);
        let canonical = canonical_backup_name(target);
        let backup_path = backup_dir.join(&canonical);

        if backup_path.exists() {
            let stamped = backup_dir.join(format!(
                "{}.{}",
                canonical,
                Local::now().format(TIMESTAMP_FMT)
            ));
            fs::rename(&backup_path, &stamped)?;
            log::info!(
                "variant {}: previous backup kept as {}",
                self.variant.logical_name,
                stamped.display()
            );
        }

        fs::rename(target, &backup_path)?;
        Ok(())
    }
}

/// Backup filename with the known variant-suffix markers stripped, so all
/// variants of one target share a single canonical slot. Only the known
/// marker set is handled; a novel suffix keeps its name and relies on the
/// timestamp rename for collisions.
fn canonical_backup_name(target: &Path) -> String {
    let base = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| BACKUP_DIR.to_string());
    strip_markers(&base)
}

fn strip_markers(name: &str) -> String {
    let mut out = name.to_string();
    loop {
        let mut stripped = false;
        for marker in SUFFIX_MARKERS {
            let dotted = format!(".{}", marker);
            if out.ends_with(&dotted) {
                out.truncate(out.len() - dotted.len());
                stripped = true;
            }
        }
        if !stripped {
            break;
        }
    }
    out
}

fn read_state(target: &Path, variant: &ConfigVariant) -> VariantState {
    let Ok(meta) = fs::symlink_metadata(target) else {
        return VariantState::Unknown;
    };

    let haystack = if meta.file_type().is_symlink() {
        match fs::read_link(target) {
            Ok(link) => link.to_string_lossy().into_owned(),
            Err(_) => return VariantState::Unknown,
        }
    } else {
        match read_prefix(target, MARKER_SCAN_BYTES) {
            Some(content) => content,
            None => return VariantState::Unknown,
        }
    };

    state_from_marker(&haystack, variant)
}

fn state_from_marker(haystack: &str, variant: &ConfigVariant) -> VariantState {
    if haystack.contains(&format!(".{}", variant.on_suffix)) {
        VariantState::Enabled
    } else if haystack.contains(&format!(".{}", variant.off_suffix)) {
        VariantState::Disabled
    } else {
        VariantState::Unknown
    }
}

fn read_prefix(path: &Path, limit: u64) -> Option<String> {
    let file = fs::File::open(path).ok()?;
    let mut buf = Vec::new();
    file.take(limit).read_to_end(&mut buf).ok()?;
    Some(String::from_utf8_lossy(&buf).into_owned())
}

/// Expand a leading ~ against the home directory
pub(crate) fn expand_tilde(path: &str) -> Result<PathBuf> {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = dirs::home_dir()
            .ok_or_else(|| SysdeckError::invalid_path("home directory unavailable"))?;
        return Ok(home.join(rest));
    }
    Ok(PathBuf::from(path))
}
