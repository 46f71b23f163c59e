use std::fs;
use std::path::{Path, PathBuf};

use sysdeck::core::variants::{find_variant, ConfigVariant, VariantState, VariantSwitcher};
use tempfile::TempDir;

/// Same markers and flow as the window-manager variant, but without the
/// session reload so no compositor is touched from a test run.
fn test_variant() -> ConfigVariant {
    ConfigVariant {
        logical_name: "general.conf",
        target_path: "~/.config/hypr/hyprland/general.conf",
        on_suffix: "pivot",
        off_suffix: "original",
        uses_backup: true,
        reloads_session: false,
    }
}

/// Lay out an assets directory whose variant files carry their own marker
/// comment, the way shipped assets do.
fn write_assets(assets: &Path, variant: &ConfigVariant) {
    fs::create_dir_all(assets).unwrap();
    for suffix in [variant.on_suffix, variant.off_suffix] {
        let name = format!("{}.{}", variant.logical_name, suffix);
        let content = format!("# profile: {}\nsetting=value-{}\n", name, suffix);
        fs::write(assets.join(name), content).unwrap();
    }
}

fn switcher_in(temp: &TempDir) -> (VariantSwitcher, PathBuf) {
    let variant = test_variant();
    let assets = temp.path().join("assets");
    write_assets(&assets, &variant);

    let target = temp.path().join("config").join("general.conf");
    let switcher = VariantSwitcher::new(variant, assets).with_target(target.clone());
    (switcher, target)
}

#[test]
fn test_missing_target_reads_unknown() {
    let temp = TempDir::new().unwrap();
    let (switcher, _target) = switcher_in(&temp);

    assert_eq!(switcher.status(), VariantState::Unknown);
    assert!(!switcher.status().is_enabled());
}

#[test]
fn test_toggle_round_trip_restores_off_asset() {
    let temp = TempDir::new().unwrap();
    let (switcher, target) = switcher_in(&temp);

    assert_eq!(switcher.toggle(true), VariantState::Enabled);
    assert!(fs::read_to_string(&target).unwrap().contains("value-pivot"));

    assert_eq!(switcher.toggle(false), VariantState::Disabled);
    let off_asset = temp.path().join("assets").join("general.conf.original");
    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        fs::read_to_string(off_asset).unwrap()
    );
}

#[test]
fn test_user_file_is_moved_into_backup() {
    let temp = TempDir::new().unwrap();
    let (switcher, target) = switcher_in(&temp);

    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "monitor=DP-1 # hand-tuned\n").unwrap();

    assert_eq!(switcher.toggle(true), VariantState::Enabled);

    let backup = target.parent().unwrap().join("backup").join("general.conf");
    assert_eq!(
        fs::read_to_string(backup).unwrap(),
        "monitor=DP-1 # hand-tuned\n"
    );
}

#[test]
fn test_repeat_toggles_leave_exactly_one_timestamped_backup() {
    let temp = TempDir::new().unwrap();
    let (switcher, target) = switcher_in(&temp);

    // A backup from an earlier run already occupies the canonical slot
    let backup_dir = target.parent().unwrap().join("backup");
    fs::create_dir_all(&backup_dir).unwrap();
    fs::write(backup_dir.join("general.conf"), "older backup\n").unwrap();

    // An unrecognized user file sits at the target
    fs::write(&target, "user content\n").unwrap();

    switcher.toggle(true);
    switcher.toggle(false);
    switcher.toggle(true);

    let names: Vec<String> = fs::read_dir(&backup_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    let timestamped: Vec<&String> = names
        .iter()
        .filter(|name| {
            name.strip_prefix("general.conf.")
                .map(|rest| !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit()))
                .unwrap_or(false)
        })
        .collect();

    assert_eq!(
        timestamped.len(),
        1,
        "expected one timestamped backup, found {:?}",
        names
    );

    // The canonical slot holds the user file; the older backup kept its
    // content under the timestamped name
    assert_eq!(
        fs::read_to_string(backup_dir.join("general.conf")).unwrap(),
        "user content\n"
    );
    assert_eq!(
        fs::read_to_string(backup_dir.join(timestamped[0])).unwrap(),
        "older backup\n"
    );
}

#[test]
fn test_recognized_copies_do_not_accumulate_backups() {
    let temp = TempDir::new().unwrap();
    let (switcher, target) = switcher_in(&temp);

    switcher.toggle(true);
    switcher.toggle(false);
    switcher.toggle(true);

    // The first toggle backs up the fresh-target placeholder; the later
    // toggles see recognized copies and add nothing
    let backup_dir = target.parent().unwrap().join("backup");
    let names: Vec<String> = fs::read_dir(&backup_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();

    assert_eq!(names, vec!["general.conf".to_string()]);
    assert_eq!(
        fs::read_to_string(backup_dir.join("general.conf")).unwrap(),
        ""
    );
}

#[cfg(unix)]
#[test]
fn test_symlink_target_state_comes_from_link_path() {
    let temp = TempDir::new().unwrap();
    let (switcher, target) = switcher_in(&temp);

    fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink(
        temp.path().join("assets").join("general.conf.pivot"),
        &target,
    )
    .unwrap();

    assert_eq!(switcher.status(), VariantState::Enabled);
}

#[cfg(unix)]
#[test]
fn test_toggle_over_symlink_does_not_clobber_asset() {
    let temp = TempDir::new().unwrap();
    let (switcher, target) = switcher_in(&temp);

    let on_asset = temp.path().join("assets").join("general.conf.pivot");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    std::os::unix::fs::symlink(&on_asset, &target).unwrap();

    assert_eq!(switcher.toggle(false), VariantState::Disabled);

    // The target is now a plain file and the pointed-at asset survived
    assert!(fs::symlink_metadata(&target).unwrap().file_type().is_file());
    assert!(fs::read_to_string(on_asset).unwrap().contains("value-pivot"));
}

#[test]
fn test_missing_asset_aborts_and_keeps_target() {
    let temp = TempDir::new().unwrap();
    let variant = test_variant();
    let assets = temp.path().join("assets");
    fs::create_dir_all(&assets).unwrap();

    let target = temp.path().join("config").join("general.conf");
    fs::create_dir_all(target.parent().unwrap()).unwrap();
    fs::write(&target, "keep me\n").unwrap();

    let switcher = VariantSwitcher::new(variant, assets).with_target(target.clone());

    assert_eq!(switcher.toggle(true), VariantState::Unknown);
    assert_eq!(fs::read_to_string(&target).unwrap(), "keep me\n");
}

#[test]
fn test_builtin_variant_definitions() {
    let general = find_variant("general.conf").unwrap();
    assert_eq!(general.on_suffix, "pivot");
    assert_eq!(general.off_suffix, "original");
    assert!(general.reloads_session);

    let mango = find_variant("mangohud").unwrap();
    assert_eq!(mango.on_suffix, "enabled");
    assert_eq!(mango.off_suffix, "disabled");
    assert!(!mango.reloads_session);
}
