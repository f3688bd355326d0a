use assert_cmd::cargo::cargo_bin_cmd;

#[test]
fn top_level_help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("clientdeskctl");
    let output = cmd
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&output);
    for subcommand in ["show", "fields", "session", "reset"] {
        assert!(
            text.contains(subcommand),
            "help missing '{subcommand}' subcommand"
        );
    }
    assert!(text.contains("--storage"), "help missing --storage flag");
}

#[test]
fn show_help_mentions_tab() {
    let mut cmd = cargo_bin_cmd!("clientdeskctl");
    let out = cmd
        .arg("show")
        .arg("--help")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8_lossy(&out);
    assert!(text.contains("--tab"), "show help missing tab flag");
}

#[test]
fn unknown_tab_is_rejected() {
    let mut cmd = cargo_bin_cmd!("clientdeskctl");
    cmd.args(["show", "--tab", "vendors"]).assert().failure();
}
