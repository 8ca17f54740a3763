// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use tempfile::NamedTempFile;

use super::*;

fn args_with_target(target: Option<&str>, target_file: Option<std::path::PathBuf>) -> Args {
    Args {
        target: target.map(str::to_string),
        target_file,
        service: "redis".to_string(),
        users: None,
        user_file: None,
        passwords: None,
        password_file: None,
        concurrency: 25,
        rate_per_second: 150,
        timeout: std::time::Duration::from_secs(10),
        retries: 2,
        exhaustive: false,
        target_timeout: std::time::Duration::ZERO,
        global_timeout: std::time::Duration::ZERO,
        output: None,
        verbose: false,
    }
}

#[tokio::test]
async fn resolves_a_single_inline_target() {
    let args = args_with_target(Some("10.0.0.1"), None);
    let targets = resolve_targets(&args).await.unwrap();
    assert_eq!(targets, vec![Target::new("10.0.0.1", 6379, "redis")]);
}

#[tokio::test]
async fn rejects_both_t_and_capital_t() {
    let file = NamedTempFile::new().unwrap();
    let args = args_with_target(Some("10.0.0.1"), Some(file.path().to_path_buf()));
    assert!(resolve_targets(&args).await.is_err());
}

#[tokio::test]
async fn rejects_neither_t_nor_capital_t() {
    let args = args_with_target(None, None);
    assert!(resolve_targets(&args).await.is_err());
}

#[tokio::test]
async fn resolve_list_prefers_inline_csv() {
    let list = resolve_list(&Some("a, b ,c".to_string()), &None).await.unwrap();
    assert_eq!(list, vec!["a".to_string(), "b".to_string(), "c".to_string()]);
}

#[tokio::test]
async fn resolve_list_defaults_to_empty() {
    let list = resolve_list(&None, &None).await.unwrap();
    assert!(list.is_empty());
}
