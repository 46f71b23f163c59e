use sysdeck::core::pkgmgr::{self, PmOperation, NO_MANAGER_CMD, PROFILES};

#[test]
fn test_profiles_are_ordered_by_priority() {
    let names: Vec<&str> = PROFILES.iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["pacman", "apt", "dnf"]);
}

#[test]
fn test_install_template_substitution() {
    let pacman = &PROFILES[0];
    let packages = vec!["firefox".to_string(), "htop".to_string()];

    assert_eq!(
        pacman.command_for(PmOperation::Install, &packages),
        "sudo pacman -S --needed firefox htop"
    );
}

#[test]
fn test_check_template_substitution() {
    let apt = &PROFILES[1];
    let packages = vec!["curl".to_string()];

    assert_eq!(
        apt.command_for(PmOperation::Check, &packages),
        "dpkg -s curl"
    );
}

#[test]
fn test_parameterless_operations_ignore_packages() {
    let dnf = &PROFILES[2];
    let packages = vec!["ignored".to_string()];

    assert_eq!(
        dnf.command_for(PmOperation::Update, &packages),
        "sudo dnf upgrade"
    );
    assert_eq!(
        dnf.command_for(PmOperation::Cleanup, &packages),
        "sudo dnf clean all"
    );
}

#[test]
fn test_resolve_is_idempotent() {
    // Whatever the host has, asking twice must hand back the same answer
    let first = pkgmgr::resolve();
    let second = pkgmgr::resolve();

    match (first, second) {
        (Some(a), Some(b)) => assert!(std::ptr::eq(a, b)),
        (None, None) => {}
        _ => panic!("resolve() changed its answer between calls"),
    }
}

#[test]
fn test_command_or_fallback_always_yields_a_command() {
    let command = pkgmgr::command_or_fallback(PmOperation::Update, &[]);
    assert!(!command.is_empty());

    // Either a real manager command or the inert echo
    if pkgmgr::resolve().is_none() {
        assert_eq!(command, NO_MANAGER_CMD);
    }
}

#[test]
fn test_every_profile_has_five_operations() {
    for profile in &PROFILES {
        let packages = vec!["pkg".to_string()];
        for op in [
            PmOperation::Update,
            PmOperation::Install,
            PmOperation::Check,
            PmOperation::Cleanup,
            PmOperation::Orphans,
        ] {
            assert!(!profile.command_for(op, &packages).is_empty());
        }
    }
}
