// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 nabu contributors

//! Exit policy
//!
//! The single place where an operation's outcome becomes the process exit
//! code. Success is 0, any failure anywhere in the pipeline is 1; partial
//! success of a composite operation is never reported as success.

use crate::errors::NabuResult;
use crate::pipeline::Outcome;

/// Map the outcome of the dispatched operation to the process exit code.
///
/// A `print-*` success writes the rendered command line to stdout — the
/// operation's only side effect. A failure is reported on the error channel
/// before yielding 1.
pub fn code(outcome: NabuResult<Outcome>) -> u8 {
    match outcome {
        Ok(Outcome::Done) => 0,
        Ok(Outcome::CommandLine(line)) => {
            println!("{line}");
            0
        }
        Err(err) => {
            tracing::error!("{err}");
            eprintln!("{:?}", miette::Report::new(err));
            1
        }
    }
}
