//! Failure taxonomy for the Polyshaper toolpath pipeline.
//!
//! Every stage (SVG interpretation, path validation, workpiece fit) reports
//! problems as a [`PolyshaperError`]. The top-level driver renders it with
//! [`PolyshaperError::render_message`] and exits with
//! [`PolyshaperError::exit_code`].

pub mod code;
pub mod diagnostic;
pub mod envelope;
pub mod error;
pub mod traits;
pub mod translate;

pub use code::{ErrorCode, UnknownErrorCode};
pub use diagnostic::{report, Diagnostic};
pub use envelope::{Bounds2, MachineEnvelope};
pub use error::{PolyshaperError, Result};
pub use translate::{Identity, Translate};
