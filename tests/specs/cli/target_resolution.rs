//! End-to-end specs that drive the real `credscan` binary against loopback
//! ports nothing is listening on. No probe is mocked — these exercise the
//! genuine `RedisProbe` connect path and assert on the engine's clean-completion
//! contract (§6.1): a scan that finds nothing still exits 0.

use std::io::Write;

use tempfile::NamedTempFile;

use crate::prelude::*;

#[test]
fn unreachable_target_completes_cleanly_with_zero_matches() {
    cli()
        .args([
            "-t",
            "127.0.0.1:1",
            "-s",
            "redis",
            "-p",
            "hunter2",
            "--retries",
            "0",
            "--timeout",
            "500ms",
            "--global-timeout",
            "10s",
        ])
        .passes()
        .stdout_has("0 valid credential pair(s) found");
}

#[test]
fn target_file_with_comments_and_blank_lines_is_honored() {
    let mut file = NamedTempFile::new().expect("create temp target file");
    writeln!(file, "# unreachable loopback probes").unwrap();
    writeln!(file, "127.0.0.1:1").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "127.0.0.1:2").unwrap();

    cli()
        .args([
            "-T",
            file.path().to_str().unwrap(),
            "-s",
            "redis",
            "-p",
            "hunter2",
            "--retries",
            "0",
            "--timeout",
            "500ms",
            "--global-timeout",
            "10s",
        ])
        .passes()
        .stdout_has("0 valid credential pair(s) found");
}

#[test]
fn exhaustive_flag_is_accepted_and_still_completes_cleanly() {
    cli()
        .args([
            "-t",
            "127.0.0.1:1",
            "-s",
            "redis",
            "-u",
            "a,b",
            "-p",
            "x,y",
            "--fs",
            "--retries",
            "0",
            "--timeout",
            "500ms",
            "--global-timeout",
            "10s",
        ])
        .passes()
        .stdout_has("0 valid credential pair(s) found");
}
