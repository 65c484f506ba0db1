// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! Command dispatch
//!
//! Maps the positional command token to exactly one [`Operation`]. The
//! operation set is a closed enum so execution can match on it exhaustively.

use crate::errors::{NabuError, NabuResult};

/// The operations a single invocation can run.
///
/// Operations are stateless descriptors; they live only for the duration of
/// dispatch and execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Install,
    Configure,
    PrintConfigure,
    Build,
    PrintBuild,
    Clean,
    PrintClean,
    Reconfigure,
    Rebuild,
    Compile,
}

impl Operation {
    /// Resolve the command token. No token means `build`; an unrecognized
    /// token is terminal and must never reach the build system.
    pub fn dispatch(token: Option<&str>) -> NabuResult<Self> {
        let Some(token) = token else {
            return Ok(Self::Build);
        };

        match token {
            "install" => Ok(Self::Install),
            "configure" => Ok(Self::Configure),
            "print-configure" => Ok(Self::PrintConfigure),
            "build" => Ok(Self::Build),
            "print-build" => Ok(Self::PrintBuild),
            "clean" => Ok(Self::Clean),
            "print-clean" => Ok(Self::PrintClean),
            "reconfigure" => Ok(Self::Reconfigure),
            "rebuild" => Ok(Self::Rebuild),
            "compile" => Ok(Self::Compile),
            other => Err(NabuError::UnknownCommand {
                name: other.to_string(),
            }),
        }
    }

    /// Token form of the operation, for logging.
    pub fn name(self) -> &'static str {
        match self {
            Self::Install => "install",
            Self::Configure => "configure",
            Self::PrintConfigure => "print-configure",
            Self::Build => "build",
            Self::PrintBuild => "print-build",
            Self::Clean => "clean",
            Self::PrintClean => "print-clean",
            Self::Reconfigure => "reconfigure",
            Self::Rebuild => "rebuild",
            Self::Compile => "compile",
        }
    }
}
