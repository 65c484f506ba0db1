// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! Operation execution
//!
//! Sequencing of build stages against the [`BuildSystem`](crate::builder::BuildSystem)
//! collaborator, including the compile fallback retry.

mod executor;

pub use executor::{Outcome, PipelineExecutor};
