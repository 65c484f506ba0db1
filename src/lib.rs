// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! # nabu - CMake Build Orchestrator
//!
//! `nabu` turns a command token plus a flat flag set into a deterministic
//! sequence of CMake invocations for building native addon modules.
//!
//! ## Pipeline
//!
//! raw flags → [`config::resolve`] → [`BuildConfig`](config::BuildConfig) →
//! [`Operation::dispatch`](ops::Operation::dispatch) →
//! [`PipelineExecutor`](pipeline::PipelineExecutor) (drives the
//! [`BuildSystem`](builder::BuildSystem) collaborator) → [`exit::code`].
//!
//! ## Quick Start
//!
//! ```bash
//! # Configure and build incrementally, with a clean-rebuild fallback
//! nabu compile
//!
//! # Rebuild from scratch
//! nabu rebuild
//!
//! # Show the configure command line without running it
//! nabu print-configure
//! ```

pub mod builder;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exit;
pub mod ops;
pub mod pipeline;

// Re-export commonly used types
pub use builder::{BuildSystem, CMakeBuildSystem};
pub use config::BuildConfig;
pub use errors::{NabuError, NabuResult};
pub use ops::Operation;
pub use pipeline::{Outcome, PipelineExecutor};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
