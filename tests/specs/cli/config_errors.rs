//! `ConfigError` specs (§7): these must abort before any probe runs and
//! exit with code 1, per §6.2.

use crate::prelude::*;

#[test]
fn missing_service_is_a_config_error() {
    // clap rejects a missing required flag before the engine ever sees it;
    // main() maps that parse failure onto the same exit code as every other
    // configuration error (§6.2 reserves 2 for global-deadline abort only).
    cli().args(["-t", "127.0.0.1:6379"]).fails_with(1).stderr_has("service");
}

#[test]
fn neither_target_flag_is_a_config_error() {
    cli()
        .args(["-s", "redis", "-p", "hunter2"])
        .fails_with(1)
        .stderr_has("one of -t or -T is required");
}

#[test]
fn both_target_flags_is_a_config_error() {
    cli()
        .args(["-t", "127.0.0.1:6379", "-T", "/nonexistent", "-s", "redis", "-p", "x"])
        .fails_with(1)
        .stderr_has("mutually exclusive");
}

#[test]
fn unknown_service_is_a_config_error() {
    // Port is given explicitly, so target parsing itself succeeds; the
    // engine rejects the service name once it tries to resolve a probe.
    cli()
        .args(["-t", "127.0.0.1:65000", "-s", "not-a-real-service", "-p", "x"])
        .fails_with(1)
        .stderr_has("unknown service");
}

#[test]
fn empty_credential_lists_is_a_config_error() {
    cli().args(["-t", "127.0.0.1:6379", "-s", "redis"]).fails_with(1).stderr_has("no credentials");
}

#[test]
fn malformed_target_is_a_config_error() {
    // Port out of u16 range fails to parse.
    cli()
        .args(["-t", "127.0.0.1:99999", "-s", "redis", "-p", "x"])
        .fails_with(1)
        .stderr_has("invalid -t target");
}
