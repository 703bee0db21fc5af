use assert_cmd::Command;

#[allow(deprecated)]
fn run_help(args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("cardtrack").unwrap();
    let output = cmd.args(args).arg("--help").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_main_help_lists_commands() {
    let help = run_help(&[]);
    for command in [
        "badges", "show", "lists", "cards", "export", "settings", "resize", "user", "config",
    ] {
        assert!(help.contains(command), "missing {command} in:\n{help}");
    }
}

#[test]
fn test_settings_help_lists_subcommands() {
    let help = run_help(&["settings"]);
    for command in ["show", "set", "get", "unset", "lists", "form"] {
        assert!(help.contains(command), "missing {command} in:\n{help}");
    }
}

#[test]
fn test_export_help_names_file_types() {
    let help = run_help(&["export"]);
    assert!(help.contains("--type"));
    assert!(help.contains("xlsx"));
}
