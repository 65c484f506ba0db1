// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! Build-system collaborator
//!
//! The [`BuildSystem`] trait is the boundary between orchestration and the
//! tool that actually runs build stages. The orchestrator only decides which
//! stages to call and in what order; everything about how a stage runs lives
//! behind this trait.

mod cmake;

pub use cmake::CMakeBuildSystem;

use async_trait::async_trait;

use crate::errors::NabuResult;

/// Asynchronous interface to the tool driving the build.
///
/// Each primitive stage either succeeds or fails; no payload beyond that is
/// required. The `*_command` operations return the literal command line the
/// corresponding stage would run, without running anything.
#[async_trait]
pub trait BuildSystem: Send + Sync {
    async fn install(&self) -> NabuResult<()>;
    async fn configure(&self) -> NabuResult<()>;
    async fn build(&self) -> NabuResult<()>;
    async fn clean(&self) -> NabuResult<()>;

    async fn configure_command(&self) -> NabuResult<String>;
    async fn build_command(&self) -> NabuResult<String>;
    async fn clean_command(&self) -> NabuResult<String>;
}
