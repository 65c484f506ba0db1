// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! CLI command definitions
//!
//! One optional positional command token plus the flat flag set. Custom
//! CMake defines use an open-ended flag name (`--CD<key>=<value>`), which
//! clap cannot enumerate, so [`split_defines`] separates them from the argv
//! before parsing and hands them to the resolver as plain name/value pairs.

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFINE_PREFIX, RawFlags};

/// CMake build orchestrator for native addon modules
#[derive(Parser, Debug)]
#[clap(
    name = "nabu",
    version,
    about = "CMake build orchestrator for native addon modules",
    long_about = None,
    after_help = "Commands:\n\
        install, configure, print-configure, build (default), print-build,\n\
        clean, print-clean, reconfigure, rebuild, compile\n\n\
        Custom CMake defines are passed as --CD<key>=<value>, for example\n\
        --CDBUILD_TESTS=ON."
)]
pub struct Cli {
    /// Command to run (defaults to 'build')
    pub command: Option<String>,

    /// Project directory (defaults to the current directory)
    #[clap(short = 'd', long, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Build the debug configuration
    #[clap(short = 'D', long)]
    pub debug: bool,

    /// Path of the cmake executable
    #[clap(short = 'c', long, value_name = "PATH")]
    pub cmake_path: Option<PathBuf>,

    /// CMake generator to use (overrides the preference flags)
    #[clap(short = 'G', long, value_name = "NAME")]
    pub generator: Option<String>,

    /// Build only the named target
    #[clap(short = 'T', long, value_name = "TARGET")]
    pub target: Option<String>,

    /// Prefer a Makefiles generator
    #[clap(short = 'm', long)]
    pub prefer_make: bool,

    /// Prefer the Xcode generator (macOS)
    #[clap(short = 'x', long)]
    pub prefer_xcode: bool,

    /// Prefer the GNU compiler family (gcc/g++)
    #[clap(short = 'g', long)]
    pub prefer_gnu: bool,

    /// Prefer the Clang compiler family (clang/clang++)
    #[clap(short = 'l', long)]
    pub prefer_clang: bool,

    /// C++ standard (c++11, c++14, c++17, c++20, ...)
    #[clap(short = 's', long = "std", value_name = "STD")]
    pub std: Option<String>,

    /// Deprecated alias for '--std c++11'
    #[clap(long, hide = true)]
    pub cpp11: bool,

    /// Target runtime name
    #[clap(short = 'r', long, value_name = "RUNTIME")]
    pub runtime: Option<String>,

    /// Target runtime version
    #[clap(short = 'v', long, value_name = "VERSION")]
    pub runtime_version: Option<String>,

    /// Target architecture
    #[clap(short = 'a', long, value_name = "ARCH")]
    pub arch: Option<String>,

    /// Suppress build tool output
    #[clap(short = 'i', long)]
    pub silent: bool,

    /// Build output directory (defaults to <project>/build)
    #[clap(short = 'O', long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    /// Log level (error, warn, info, verbose, silly)
    #[clap(short = 'L', long, value_name = "LEVEL", env = "NABU_LOG_LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Combine the parsed flags with the pre-split define entries into the
    /// resolver's input.
    pub fn raw_flags(&self, extra: Vec<(String, String)>) -> RawFlags {
        RawFlags {
            directory: self.directory.clone(),
            debug: self.debug,
            cmake_path: self.cmake_path.clone(),
            generator: self.generator.clone(),
            target: self.target.clone(),
            prefer_make: self.prefer_make,
            prefer_xcode: self.prefer_xcode,
            prefer_gnu: self.prefer_gnu,
            prefer_clang: self.prefer_clang,
            std: self.std.clone(),
            cpp11: self.cpp11,
            runtime: self.runtime.clone(),
            runtime_version: self.runtime_version.clone(),
            arch: self.arch.clone(),
            silent: self.silent,
            out: self.out.clone(),
            log_level: self.log_level.clone(),
            extra,
        }
    }
}

/// Split `--CD<key>=<value>` entries out of the raw argv.
///
/// Returns the remaining arguments (for clap) and the extracted name/value
/// pairs, names still carrying the `CD` prefix. An entry without `=` gets an
/// empty value; the resolver skips those.
pub fn split_defines<I>(args: I) -> (Vec<String>, Vec<(String, String)>)
where
    I: IntoIterator<Item = String>,
{
    let mut rest = Vec::new();
    let mut defines = Vec::new();

    for arg in args {
        match arg.strip_prefix("--") {
            Some(body) if body.starts_with(DEFINE_PREFIX) => match body.split_once('=') {
                Some((name, value)) => defines.push((name.to_string(), value.to_string())),
                None => defines.push((body.to_string(), String::new())),
            },
            _ => rest.push(arg),
        }
    }

    (rest, defines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn splits_define_entries_from_argv() {
        let (rest, defines) = split_defines(args(&[
            "build",
            "--CDBUILD_TESTS=ON",
            "--debug",
            "--CDFOO=bar baz",
        ]));

        assert_eq!(rest, args(&["build", "--debug"]));
        assert_eq!(
            defines,
            vec![
                ("CDBUILD_TESTS".to_string(), "ON".to_string()),
                ("CDFOO".to_string(), "bar baz".to_string()),
            ]
        );
    }

    #[test]
    fn valueless_define_gets_empty_value() {
        let (rest, defines) = split_defines(args(&["--CDFOO"]));

        assert!(rest.is_empty());
        assert_eq!(defines, vec![("CDFOO".to_string(), String::new())]);
    }

    #[test]
    fn lowercase_and_single_dash_args_pass_through() {
        let (rest, defines) =
            split_defines(args(&["--cmake-path", "/usr/bin/cmake", "-D", "--cdfoo=bar"]));

        assert_eq!(
            rest,
            args(&["--cmake-path", "/usr/bin/cmake", "-D", "--cdfoo=bar"])
        );
        assert!(defines.is_empty());
    }

    #[test]
    fn parses_full_flag_set() {
        let cli = Cli::parse_from([
            "nabu",
            "compile",
            "--directory",
            "/proj",
            "--debug",
            "--generator",
            "Ninja",
            "--target",
            "addon",
            "--std",
            "c++17",
            "--runtime",
            "node",
            "--runtime-version",
            "22.0.0",
            "--arch",
            "x64",
            "--silent",
            "--out",
            "/proj/out",
            "--log-level",
            "verbose",
        ]);

        assert_eq!(cli.command.as_deref(), Some("compile"));
        let flags = cli.raw_flags(vec![]);
        assert_eq!(flags.directory, Some(PathBuf::from("/proj")));
        assert!(flags.debug);
        assert_eq!(flags.generator.as_deref(), Some("Ninja"));
        assert_eq!(flags.std.as_deref(), Some("c++17"));
        assert_eq!(flags.runtime_version.as_deref(), Some("22.0.0"));
        assert!(flags.silent);
        assert_eq!(flags.log_level.as_deref(), Some("verbose"));
    }

    #[test]
    fn no_command_token_parses_to_none() {
        let cli = Cli::parse_from(["nabu", "--debug"]);
        assert_eq!(cli.command, None);
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
