//! What the reporting boundary emits for a failure: one message line for the
//! user, a machine-readable record for host tooling, and the exit status.

use std::io::{self, Write};
use std::process::ExitCode;

use serde::{Deserialize, Serialize};

use crate::error::PolyshaperError;
use crate::translate::Translate;

/// Serializable form of a reported failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: i32,
    pub kind: String,
    pub message: String,
}

impl PolyshaperError {
    pub fn diagnostic<T: Translate + ?Sized>(&self, translator: &T) -> Diagnostic {
        let code = self.code();
        Diagnostic {
            code: code.exit_code(),
            kind: code.name().to_string(),
            message: self.render_message(translator),
        }
    }
}

impl From<&PolyshaperError> for ExitCode {
    fn from(err: &PolyshaperError) -> Self {
        ExitCode::from(err.code().value())
    }
}

impl From<PolyshaperError> for ExitCode {
    fn from(err: PolyshaperError) -> Self {
        ExitCode::from(&err)
    }
}

/// Writes the single diagnostic line for `err` and hands back the status to exit with.
///
/// Terminating the process is left to the caller.
pub fn report<T, W>(err: &PolyshaperError, translator: &T, out: &mut W) -> io::Result<ExitCode>
where
    T: Translate + ?Sized,
    W: Write + ?Sized,
{
    tracing::debug!(code = err.exit_code(), kind = err.code().name(), "reporting failure");
    writeln!(out, "{}", err.render_message(translator))?;
    out.flush()?;
    Ok(ExitCode::from(err))
}
