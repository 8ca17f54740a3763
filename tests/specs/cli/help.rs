//! CLI help/version output specs (§6.2).

use crate::prelude::*;

#[test]
fn help_shows_usage() {
    cli().args(["--help"]).passes().stdout_has("Usage:").stdout_has("Credential auditing scanner");
}

#[test]
fn help_lists_core_flags() {
    cli()
        .args(["--help"])
        .passes()
        .stdout_has("--target")
        .stdout_has("--service")
        .stdout_has("--fs")
        .stdout_has("--retries");
}

#[test]
fn version_shows_version() {
    cli().args(["--version"]).passes().stdout_has("0.2");
}
