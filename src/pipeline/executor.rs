// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! Pipeline executor
//!
//! Runs exactly one operation per invocation. Primitive stages are single
//! delegated calls; composite operations sequence their stages strictly, with
//! the second stage never starting before the first settles. Failures
//! propagate unchanged, except for the one compile→rebuild escalation.

use colored::Colorize;

use crate::builder::BuildSystem;
use crate::errors::NabuResult;
use crate::ops::Operation;

/// What a successfully executed operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All stages ran to completion.
    Done,
    /// A `print-*` operation: the command line the stage would run.
    CommandLine(String),
}

/// Executes one [`Operation`] against the build system.
pub struct PipelineExecutor<B> {
    build: B,
}

impl<B: BuildSystem> PipelineExecutor<B> {
    pub fn new(build: B) -> Self {
        Self { build }
    }

    /// Run the operation to completion or first unrecovered failure.
    pub async fn run(&self, operation: Operation) -> NabuResult<Outcome> {
        tracing::debug!(operation = operation.name(), "executing");

        match operation {
            Operation::Install => {
                self.build.install().await?;
                Ok(Outcome::Done)
            }
            Operation::Configure => {
                self.build.configure().await?;
                Ok(Outcome::Done)
            }
            Operation::Build => {
                self.build.build().await?;
                Ok(Outcome::Done)
            }
            Operation::Clean => {
                self.build.clean().await?;
                Ok(Outcome::Done)
            }
            Operation::Reconfigure => {
                // Fail-fast: a clean failure stops the sequence before
                // configure starts.
                self.build.clean().await?;
                self.build.configure().await?;
                Ok(Outcome::Done)
            }
            Operation::Rebuild => {
                self.build.clean().await?;
                self.build.build().await?;
                Ok(Outcome::Done)
            }
            Operation::Compile => {
                // One escalated retry: incremental build first, full rebuild
                // on failure, nothing after that.
                match self.build.build().await {
                    Ok(()) => Ok(Outcome::Done),
                    Err(err) => {
                        tracing::warn!("incremental build failed: {err}");
                        eprintln!(
                            "  {} incremental build failed, retrying from a clean tree",
                            "⚠".yellow()
                        );

                        self.build.clean().await?;
                        self.build.build().await?;
                        Ok(Outcome::Done)
                    }
                }
            }
            Operation::PrintConfigure => {
                Ok(Outcome::CommandLine(self.build.configure_command().await?))
            }
            Operation::PrintBuild => Ok(Outcome::CommandLine(self.build.build_command().await?)),
            Operation::PrintClean => Ok(Outcome::CommandLine(self.build.clean_command().await?)),
        }
    }
}
