//! `-o FILE` output-writer spec (§6.1): the file is created up front and
//! stays empty when the scan finds no valid credentials.

use tempfile::NamedTempFile;

use crate::prelude::*;

#[test]
fn output_file_is_created_even_with_no_successes() {
    let file = NamedTempFile::new().expect("reserve output path");
    let path = file.path().to_path_buf();
    // Drop the handle so credscan creates the file itself via its own
    // append-create-open, not inheriting an already-open fd.
    drop(file);

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
            "-o",
            path.to_str().unwrap(),
        ])
        .passes();

    let contents = std::fs::read_to_string(&path).expect("output file should exist");
    assert_eq!(contents, "", "no credentials were found, so the output file should stay empty");
}
