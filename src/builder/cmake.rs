// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! CMake build system
//!
//! Drives `cmake` for every stage: configure (`-S`/`-B`), build
//! (`cmake --build`), clean (`cmake -E rm -rf`), and install
//! (`cmake --install`). Argument construction is kept separate from
//! execution so the `print-*` operations and the tests can inspect exact
//! command lines without spawning anything.

use std::env;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;

use super::BuildSystem;
use crate::config::BuildConfig;
use crate::errors::{NabuError, NabuResult};

/// CMake-backed implementation of [`BuildSystem`].
pub struct CMakeBuildSystem {
    cmake_bin: PathBuf,
    project_dir: PathBuf,
    build_dir: PathBuf,
    config: BuildConfig,
}

impl CMakeBuildSystem {
    /// Create a build system from the resolved configuration.
    ///
    /// Locates `cmake` through the configured override or `PATH`, and
    /// defaults the project directory to the current working directory.
    pub fn new(config: BuildConfig) -> NabuResult<Self> {
        let cmake_bin = match &config.cmake_path {
            Some(path) => path.clone(),
            None => which::which("cmake").map_err(|_| NabuError::tool_not_found("cmake"))?,
        };

        let project_dir = match &config.project_dir {
            Some(dir) => dir.clone(),
            None => env::current_dir()?,
        };

        Ok(Self::with_binary(cmake_bin, project_dir, config))
    }

    /// Create a build system around an already-located `cmake` binary.
    pub fn with_binary(cmake_bin: PathBuf, project_dir: PathBuf, config: BuildConfig) -> Self {
        let build_dir = config
            .out_dir
            .clone()
            .unwrap_or_else(|| project_dir.join("build"));

        Self {
            cmake_bin,
            project_dir,
            build_dir,
            config,
        }
    }

    fn build_type(&self) -> &'static str {
        if self.config.debug {
            "Debug"
        } else {
            "Release"
        }
    }

    /// Generator to request, if any. An explicit `--generator` beats the
    /// preference flags; with neither, CMake picks its platform default.
    fn generator(&self) -> Option<&str> {
        if let Some(generator) = &self.config.generator {
            return Some(generator);
        }
        if self.config.prefer_make {
            return Some("Unix Makefiles");
        }
        if self.config.prefer_xcode {
            return Some("Xcode");
        }
        None
    }

    /// Compiler-family overrides for the configure subprocess environment.
    fn compiler_env(&self) -> Vec<(&'static str, &'static str)> {
        if self.config.prefer_clang {
            vec![("CC", "clang"), ("CXX", "clang++")]
        } else if self.config.prefer_gnu {
            vec![("CC", "gcc"), ("CXX", "g++")]
        } else {
            vec![]
        }
    }

    fn configure_args(&self) -> Vec<String> {
        let mut args = vec![
            "-S".to_string(),
            self.project_dir.display().to_string(),
            "-B".to_string(),
            self.build_dir.display().to_string(),
        ];

        if let Some(generator) = self.generator() {
            args.push("-G".to_string());
            args.push(generator.to_string());
        }

        args.push(format!("-DCMAKE_BUILD_TYPE={}", self.build_type()));

        if let Some(standard) = &self.config.standard {
            args.push(format!("-DCMAKE_CXX_STANDARD={}", cxx_standard(standard)));
        }

        // Target runtime identity, surfaced to the project's CMakeLists.
        if let Some(runtime) = &self.config.runtime {
            args.push(format!("-DNABU_RUNTIME={}", runtime));
        }
        if let Some(version) = &self.config.runtime_version {
            args.push(format!("-DNABU_RUNTIME_VERSION={}", version));
        }
        if let Some(arch) = &self.config.arch {
            args.push(format!("-DNABU_ARCH={}", arch));
        }
        args.push(format!("-DNABU_VERSION={}", env!("CARGO_PKG_VERSION")));

        for (key, value) in &self.config.defines {
            args.push(format!("-D{}={}", key, value));
        }

        args
    }

    fn build_args(&self) -> Vec<String> {
        let mut args = vec![
            "--build".to_string(),
            self.build_dir.display().to_string(),
            "--config".to_string(),
            self.build_type().to_string(),
        ];

        if let Some(target) = &self.config.target {
            args.push("--target".to_string());
            args.push(target.clone());
        }

        args
    }

    // `-E rm -f` succeeds when the directory is already gone.
    fn clean_args(&self) -> Vec<String> {
        vec![
            "-E".to_string(),
            "rm".to_string(),
            "-rf".to_string(),
            self.build_dir.display().to_string(),
        ]
    }

    fn install_args(&self) -> Vec<String> {
        vec![
            "--install".to_string(),
            self.build_dir.display().to_string(),
            "--config".to_string(),
            self.build_type().to_string(),
        ]
    }

    /// Shell-quoted command line for a stage's argv.
    fn render(&self, args: &[String]) -> String {
        let mut line = vec![self.cmake_bin.display().to_string()];
        line.extend(args.iter().cloned());
        shell_words::join(&line)
    }

    /// Run one stage to completion. With `silent` set, subprocess output is
    /// captured instead of inherited, and captured stderr rides along on the
    /// failure.
    async fn run_stage(
        &self,
        stage: &'static str,
        args: &[String],
        stage_env: &[(&'static str, &'static str)],
    ) -> NabuResult<()> {
        tracing::debug!(stage, command = %self.render(args), "running stage");

        let mut cmd = Command::new(&self.cmake_bin);
        cmd.args(args);
        for (key, value) in stage_env {
            cmd.env(key, value);
        }

        let spawn_err = |e: std::io::Error| NabuError::SpawnFailed {
            stage,
            tool: self.cmake_bin.display().to_string(),
            error: e.to_string(),
        };

        if self.config.silent {
            let output = cmd.output().await.map_err(spawn_err)?;
            if output.status.success() {
                return Ok(());
            }

            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            Err(NabuError::StageFailed {
                stage,
                code: output.status.code().unwrap_or(-1),
                help: (!stderr.is_empty()).then_some(stderr),
            })
        } else {
            let status = cmd.status().await.map_err(spawn_err)?;
            if status.success() {
                return Ok(());
            }

            Err(NabuError::StageFailed {
                stage,
                code: status.code().unwrap_or(-1),
                help: None,
            })
        }
    }
}

/// Numeric value CMake expects in `CMAKE_CXX_STANDARD`.
fn cxx_standard(standard: &str) -> &str {
    standard
        .trim_start_matches("gnu++")
        .trim_start_matches("c++")
}

#[async_trait]
impl BuildSystem for CMakeBuildSystem {
    async fn install(&self) -> NabuResult<()> {
        self.run_stage("install", &self.install_args(), &[]).await
    }

    async fn configure(&self) -> NabuResult<()> {
        self.run_stage("configure", &self.configure_args(), &self.compiler_env())
            .await
    }

    async fn build(&self) -> NabuResult<()> {
        self.run_stage("build", &self.build_args(), &[]).await
    }

    async fn clean(&self) -> NabuResult<()> {
        self.run_stage("clean", &self.clean_args(), &[]).await
    }

    async fn configure_command(&self) -> NabuResult<String> {
        Ok(self.render(&self.configure_args()))
    }

    async fn build_command(&self) -> NabuResult<String> {
        Ok(self.render(&self.build_args()))
    }

    async fn clean_command(&self) -> NabuResult<String> {
        Ok(self.render(&self.clean_args()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{resolve, RawFlags};

    fn build_system(flags: RawFlags) -> CMakeBuildSystem {
        CMakeBuildSystem::with_binary(
            PathBuf::from("cmake"),
            PathBuf::from("/proj"),
            resolve(&flags),
        )
    }

    #[test]
    fn configure_args_default_release() {
        let args = build_system(RawFlags::default()).configure_args();

        assert_eq!(args[..4].to_vec(), vec!["-S", "/proj", "-B", "/proj/build"]);
        assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Release".to_string()));
        assert!(!args.iter().any(|a| a == "-G"));
    }

    #[test]
    fn debug_flag_selects_debug_build_type() {
        let args = build_system(RawFlags {
            debug: true,
            ..Default::default()
        })
        .configure_args();

        assert!(args.contains(&"-DCMAKE_BUILD_TYPE=Debug".to_string()));
    }

    #[test]
    fn explicit_generator_beats_preferences() {
        let system = build_system(RawFlags {
            generator: Some("Ninja".into()),
            prefer_make: true,
            prefer_xcode: true,
            ..Default::default()
        });

        assert_eq!(system.generator(), Some("Ninja"));
    }

    #[test]
    fn prefer_make_selects_makefiles_generator() {
        let system = build_system(RawFlags {
            prefer_make: true,
            ..Default::default()
        });

        assert_eq!(system.generator(), Some("Unix Makefiles"));
    }

    #[test]
    fn compiler_preferences_map_to_cc_cxx() {
        let gnu = build_system(RawFlags {
            prefer_gnu: true,
            ..Default::default()
        });
        assert_eq!(gnu.compiler_env(), vec![("CC", "gcc"), ("CXX", "g++")]);

        let clang = build_system(RawFlags {
            prefer_clang: true,
            ..Default::default()
        });
        assert_eq!(clang.compiler_env(), vec![("CC", "clang"), ("CXX", "clang++")]);

        assert!(build_system(RawFlags::default()).compiler_env().is_empty());
    }

    #[test]
    fn standard_is_mapped_to_cmake_cxx_standard() {
        let args = build_system(RawFlags {
            std: Some("c++17".into()),
            ..Default::default()
        })
        .configure_args();

        assert!(args.contains(&"-DCMAKE_CXX_STANDARD=17".to_string()));
    }

    #[test]
    fn cxx_standard_strips_known_prefixes() {
        assert_eq!(cxx_standard("c++11"), "11");
        assert_eq!(cxx_standard("gnu++20"), "20");
        assert_eq!(cxx_standard("17"), "17");
    }

    #[test]
    fn custom_defines_are_rendered() {
        let args = build_system(RawFlags {
            extra: vec![("CDBUILD_TESTS".into(), "ON".into())],
            ..Default::default()
        })
        .configure_args();

        assert!(args.contains(&"-DBUILD_TESTS=ON".to_string()));
    }

    #[test]
    fn runtime_identity_is_rendered() {
        let args = build_system(RawFlags {
            runtime: Some("node".into()),
            runtime_version: Some("22.0.0".into()),
            arch: Some("arm64".into()),
            ..Default::default()
        })
        .configure_args();

        assert!(args.contains(&"-DNABU_RUNTIME=node".to_string()));
        assert!(args.contains(&"-DNABU_RUNTIME_VERSION=22.0.0".to_string()));
        assert!(args.contains(&"-DNABU_ARCH=arm64".to_string()));
    }

    #[test]
    fn build_args_carry_config_and_target() {
        let args = build_system(RawFlags {
            debug: true,
            target: Some("addon".into()),
            ..Default::default()
        })
        .build_args();

        assert_eq!(
            args,
            vec!["--build", "/proj/build", "--config", "Debug", "--target", "addon"]
        );
    }

    #[test]
    fn out_dir_overrides_build_dir() {
        let args = build_system(RawFlags {
            out: Some(PathBuf::from("/elsewhere/out")),
            ..Default::default()
        })
        .clean_args();

        assert_eq!(args, vec!["-E", "rm", "-rf", "/elsewhere/out"]);
    }

    #[test]
    fn install_args_target_build_dir() {
        let args = build_system(RawFlags::default()).install_args();
        assert_eq!(args, vec!["--install", "/proj/build", "--config", "Release"]);
    }

    #[tokio::test]
    async fn rendered_commands_are_shell_quoted() {
        let system = CMakeBuildSystem::with_binary(
            PathBuf::from("cmake"),
            PathBuf::from("/my proj"),
            resolve(&RawFlags::default()),
        );

        let line = system.configure_command().await.unwrap();
        assert!(line.starts_with("cmake -S '/my proj'"));
    }
}
