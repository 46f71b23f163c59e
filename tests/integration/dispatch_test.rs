use sysdeck::core::dispatch::{self, ExecStrategy};

#[test]
fn test_plain_commands_stay_inline() {
    assert_eq!(ExecStrategy::choose("htop"), ExecStrategy::Inline);
    assert_eq!(
        ExecStrategy::choose("sudo pacman -Syu"),
        ExecStrategy::Inline
    );
    assert_eq!(
        ExecStrategy::choose("rpm -q curl wget"),
        ExecStrategy::Inline
    );
}

#[test]
fn test_newlines_route_to_script_file() {
    assert_eq!(
        ExecStrategy::choose("echo one\necho two"),
        ExecStrategy::ScriptFile
    );
}

#[test]
fn test_metacharacters_route_to_script_file() {
    for command in [
        "sudo apt update && sudo apt upgrade -y",
        "sudo pacman -Rns $(pacman -Qtdq)",
        "echo 'quoted'",
        "cat a | grep b",
        "echo hi; echo bye",
        "echo \"double\"",
        "ls > out.txt",
    ] {
        assert_eq!(
            ExecStrategy::choose(command),
            ExecStrategy::ScriptFile,
            "expected script strategy for {:?}",
            command
        );
    }
}

#[test]
fn test_terminal_detection_is_stable() {
    // First hit is cached; the answer never changes within a process
    let first = dispatch::terminal();
    let second = dispatch::terminal();
    assert!(!first.is_empty());
    assert_eq!(first, second);
}

#[test]
fn test_file_manager_detection_is_stable() {
    assert_eq!(dispatch::file_manager(), dispatch::file_manager());
}
