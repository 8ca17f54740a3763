// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod args;
mod color;
mod exit_error;
mod resolve;
mod sink;

use std::sync::Arc;

use clap::Parser;
use scan_core::CompletionError;
use scan_engine::{Config, Engine, PluginRegistry};
use scan_probes::{HostProbe, RedisProbe, SshProbe};

use crate::args::Args;
use crate::exit_error::ExitError;
use crate::sink::PrintingSink;

fn build_registry() -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    let probes: [(&str, Arc<dyn HostProbe>); 2] =
        [("redis", Arc::new(RedisProbe)), ("ssh", Arc::new(SshProbe))];
    for (name, probe) in probes {
        if let Err(err) = registry.register(name, probe) {
            unreachable!("built-in probe names are hardcoded and unique: {err}");
        }
    }
    registry
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("info")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

async fn run(args: Args) -> Result<(), ExitError> {
    let targets = resolve::resolve_targets(&args).await.map_err(|err| ExitError::new(1, err.to_string()))?;
    let users = resolve::resolve_list(&args.users, &args.user_file)
        .await
        .map_err(|err| ExitError::new(1, err.to_string()))?;
    let passwords = resolve::resolve_list(&args.passwords, &args.password_file)
        .await
        .map_err(|err| ExitError::new(1, err.to_string()))?;

    let output = match &args.output {
        Some(path) => Some(
            scan_io::OutputWriter::create(path)
                .await
                .map_err(|err| ExitError::new(1, format!("opening output file: {err}")))?,
        ),
        None => None,
    };
    let sink = Arc::new(PrintingSink::new(args.verbose, output));

    let config = Config {
        concurrency: args.concurrency,
        rate_per_second: args.rate_per_second,
        per_attempt_timeout: args.timeout,
        retries: args.retries,
        per_target_deadline: args.target_timeout,
        global_deadline: args.global_timeout,
        exhaustive: args.exhaustive,
        verbose: args.verbose,
    };

    let registry = Arc::new(build_registry());
    let engine = Engine::new(config, registry);

    match engine.run(&args.service, targets, users, passwords, sink.clone()).await {
        Ok(()) => {
            println!("{} valid credential pair(s) found", sink.success_count());
            Ok(())
        }
        Err(err @ CompletionError::GlobalDeadlineExceeded) => Err(ExitError::new(2, err.to_string())),
        Err(err) if err.is_config_error() => Err(ExitError::new(1, err.to_string())),
        Err(err) => Err(ExitError::new(1, err.to_string())),
    }
}

#[tokio::main]
async fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            // `--help`/`--version` still exit 0; an actual usage error (a
            // missing/invalid flag) is a configuration error (§7) and must
            // exit 1, not clap's own usage-error code, which would collide
            // with §6.2's reservation of exit code 2 for global-deadline
            // abort.
            let code = match err.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };
    init_tracing(args.verbose);

    if let Err(err) = run(args).await {
        eprintln!("error: {err}");
        std::process::exit(err.code);
    }
}
