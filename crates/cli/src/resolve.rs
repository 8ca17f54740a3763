// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolves the CLI's `-t`/`-T` and `-u`/`-ul`/`-p`/`-pl` flag pairs into the
//! plain `Target`/`String` lists the engine expects. No ordering or password
//! templating happens here — that is the engine's job.

use anyhow::{bail, Context, Result};
use scan_core::Target;

use crate::args::Args;

pub async fn resolve_targets(args: &Args) -> Result<Vec<Target>> {
    match (&args.target, &args.target_file) {
        (Some(_), Some(_)) => bail!("-t and -T are mutually exclusive"),
        (Some(raw), None) => {
            let target = Target::parse(raw, &args.service).context("invalid -t target")?;
            Ok(vec![target])
        }
        (None, Some(path)) => scan_io::load_targets(path, &args.service)
            .await
            .with_context(|| format!("loading targets from {}", path.display())),
        (None, None) => bail!("one of -t or -T is required"),
    }
}

pub async fn resolve_list(inline: &Option<String>, file: &Option<std::path::PathBuf>) -> Result<Vec<String>> {
    match (inline, file) {
        (Some(_), Some(_)) => bail!("the inline and file forms of this flag are mutually exclusive"),
        (Some(csv), None) => Ok(scan_io::split_csv(csv)),
        (None, Some(path)) => {
            scan_io::load_lines(path).await.with_context(|| format!("loading {}", path.display()))
        }
        (None, None) => Ok(Vec::new()),
    }
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
