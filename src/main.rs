// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! nabu - CMake Build Orchestrator
//!
//! Builds native addon modules through a single consistent entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nabu::builder::CMakeBuildSystem;
use nabu::cli::{self, Cli};
use nabu::ops::Operation;
use nabu::pipeline::PipelineExecutor;
use nabu::{config, exit};

#[tokio::main]
async fn main() -> ExitCode {
    // Custom defines carry open-ended flag names; pull them out before clap
    // sees the argv.
    let mut argv = std::env::args();
    let program = argv.next().unwrap_or_else(|| "nabu".to_string());
    let (rest, extra) = cli::split_defines(argv);

    let cli = Cli::parse_from(std::iter::once(program).chain(rest));
    let config = config::resolve(&cli.raw_flags(extra));

    // Initialize tracing from the resolved level; NABU_LOG overrides.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("NABU_LOG")
                .unwrap_or_else(|_| config.log_level.filter_directive().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // An unknown command must terminate before any build-tool lookup.
    let operation = match Operation::dispatch(cli.command.as_deref()) {
        Ok(operation) => operation,
        Err(err) => return ExitCode::from(exit::code(Err(err))),
    };

    let build = match CMakeBuildSystem::new(config) {
        Ok(build) => build,
        Err(err) => return ExitCode::from(exit::code(Err(err))),
    };

    let outcome = PipelineExecutor::new(build).run(operation).await;
    ExitCode::from(exit::code(outcome))
}
