// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! Error types
//!
//! Every failure the orchestrator can surface lives in one taxonomy. Stage
//! failures coming out of the build tool are opaque: nabu propagates them
//! without interpreting their cause.

use miette::Diagnostic;
use thiserror::Error;

/// Result type for nabu operations
pub type NabuResult<T> = Result<T, NabuError>;

/// Main error type for nabu
#[derive(Error, Debug, Diagnostic)]
pub enum NabuError {
    // ─────────────────────────────────────────────────────────────────────────
    // Dispatch Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Unknown command '{name}'")]
    #[diagnostic(
        code(nabu::unknown_command),
        help(
            "Available commands: install, configure, print-configure, build, \
             print-build, clean, print-clean, reconfigure, rebuild, compile"
        )
    )]
    UnknownCommand { name: String },

    // ─────────────────────────────────────────────────────────────────────────
    // Tool Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Tool '{tool}' not found")]
    #[diagnostic(code(nabu::tool_not_found), help("{suggestion}"))]
    ToolNotFound { tool: String, suggestion: String },

    #[error("Failed to start '{tool}' for stage '{stage}': {error}")]
    #[diagnostic(code(nabu::spawn_failed))]
    SpawnFailed {
        stage: &'static str,
        tool: String,
        error: String,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Execution Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("Stage '{stage}' failed with exit code {code}")]
    #[diagnostic(code(nabu::stage_failed))]
    StageFailed {
        stage: &'static str,
        code: i32,
        #[help]
        help: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // IO/System Errors
    // ─────────────────────────────────────────────────────────────────────────
    #[error("IO error: {message}")]
    #[diagnostic(code(nabu::io_error))]
    Io { message: String },
}

impl From<std::io::Error> for NabuError {
    fn from(e: std::io::Error) -> Self {
        Self::Io { message: e.to_string() }
    }
}

impl NabuError {
    /// Create a tool not found error with installation suggestion
    pub fn tool_not_found(tool: &str) -> Self {
        let suggestion = match tool {
            "cmake" => "Install CMake: https://cmake.org/download/".to_string(),
            _ => format!("Install {} and ensure it's in your PATH", tool),
        };

        Self::ToolNotFound {
            tool: tool.to_string(),
            suggestion,
        }
    }
}
