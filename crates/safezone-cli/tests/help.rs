use assert_cmd::Command;

/// Helper to get a Command for the safezone binary.
#[allow(deprecated)]
fn safezone_cmd() -> Command {
    Command::cargo_bin("safezone").unwrap()
}

#[test]
fn help_works() {
    safezone_cmd().arg("--help").assert().success();
}

#[test]
fn every_subcommand_has_help() {
    for sub in ["check", "md", "geojson", "distance", "watch", "explain"] {
        safezone_cmd().args([sub, "--help"]).assert().success();
    }
}
