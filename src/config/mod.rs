// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! Configuration resolution
//!
//! Turns the raw flag set into one canonical [`BuildConfig`]. Resolution is a
//! pure function: no filesystem or process I/O, safe to run repeatedly against
//! the same input. Downstream stages only ever see the resolved value, never
//! partially-resolved flags.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Flag-name prefix marking a custom CMake define (`--CD<key>=<value>`).
pub const DEFINE_PREFIX: &str = "CD";

/// Standard implied by the deprecated `--cpp11` flag.
const LEGACY_STANDARD: &str = "c++11";

/// Log verbosity accepted by `--log-level`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Verbose,
    Silly,
}

impl LogLevel {
    /// Parse a level name. Unrecognized names yield `None`; the caller keeps
    /// the default level in effect rather than failing.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "error" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "verbose" | "debug" => Some(Self::Verbose),
            "silly" | "trace" => Some(Self::Silly),
            _ => None,
        }
    }

    /// Equivalent tracing filter directive for this level.
    pub fn filter_directive(self) -> &'static str {
        match self {
            Self::Error => "nabu=error",
            Self::Warn => "nabu=warn",
            Self::Info => "nabu=info",
            Self::Verbose => "nabu=debug",
            Self::Silly => "nabu=trace",
        }
    }
}

/// Raw flag set as it came off the command line, before resolution.
///
/// `extra` carries the name/value entries clap cannot enumerate statically;
/// the resolver picks the [`DEFINE_PREFIX`] ones out of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFlags {
    pub directory: Option<PathBuf>,
    pub debug: bool,
    pub cmake_path: Option<PathBuf>,
    pub generator: Option<String>,
    pub target: Option<String>,
    pub prefer_make: bool,
    pub prefer_xcode: bool,
    pub prefer_gnu: bool,
    pub prefer_clang: bool,
    pub std: Option<String>,
    pub cpp11: bool,
    pub runtime: Option<String>,
    pub runtime_version: Option<String>,
    pub arch: Option<String>,
    pub silent: bool,
    pub out: Option<PathBuf>,
    pub log_level: Option<String>,
    pub extra: Vec<(String, String)>,
}

/// Canonical build configuration, one immutable instance per invocation.
///
/// Absent flags stay absent (`None`), never an empty string, so later stages
/// can tell "not specified" from "specified as empty".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    /// Project root; the collaborator falls back to the current directory.
    pub project_dir: Option<PathBuf>,
    pub debug: bool,
    pub cmake_path: Option<PathBuf>,
    pub generator: Option<String>,
    pub target: Option<String>,
    pub prefer_make: bool,
    pub prefer_xcode: bool,
    pub prefer_gnu: bool,
    pub prefer_clang: bool,
    /// Language standard; explicit `--std` beats the deprecated `--cpp11`.
    pub standard: Option<String>,
    pub runtime: Option<String>,
    pub runtime_version: Option<String>,
    pub arch: Option<String>,
    /// Custom `-D` defines, prefix stripped. Ordered so rendered command
    /// lines are deterministic.
    pub defines: BTreeMap<String, String>,
    pub silent: bool,
    pub out_dir: Option<PathBuf>,
    pub log_level: LogLevel,
}

/// Resolve a raw flag set into the canonical configuration.
pub fn resolve(flags: &RawFlags) -> BuildConfig {
    // Explicit --std wins; the legacy flag only fills the gap.
    let standard = match (&flags.std, flags.cpp11) {
        (Some(std), _) => Some(std.clone()),
        (None, true) => Some(LEGACY_STANDARD.to_string()),
        (None, false) => None,
    };

    // An unrecognized level is ignored, leaving the default in effect.
    let log_level = flags
        .log_level
        .as_deref()
        .and_then(LogLevel::parse)
        .unwrap_or_default();

    let mut defines = BTreeMap::new();
    for (name, value) in &flags.extra {
        let Some(key) = name.strip_prefix(DEFINE_PREFIX) else {
            continue;
        };
        // Entries without a value are skipped; a repeated key keeps its last
        // occurrence.
        if key.is_empty() || value.is_empty() {
            continue;
        }
        defines.insert(key.to_string(), value.clone());
    }

    BuildConfig {
        project_dir: flags.directory.clone(),
        debug: flags.debug,
        cmake_path: flags.cmake_path.clone(),
        generator: flags.generator.clone(),
        target: flags.target.clone(),
        prefer_make: flags.prefer_make,
        prefer_xcode: flags.prefer_xcode,
        prefer_gnu: flags.prefer_gnu,
        prefer_clang: flags.prefer_clang,
        standard,
        runtime: flags.runtime.clone(),
        runtime_version: flags.runtime_version.clone(),
        arch: flags.arch.clone(),
        defines,
        silent: flags.silent,
        out_dir: flags.out.clone(),
        log_level,
    }
}
