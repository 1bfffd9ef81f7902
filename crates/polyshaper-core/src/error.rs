use std::path::Path;

use thiserror::Error;

use crate::code::ErrorCode;
use crate::translate::Translate;

/// Every failure the toolpath pipeline can surface.
///
/// Each variant maps to exactly one [`ErrorCode`], which becomes the process
/// exit status at the reporting boundary. `Display` renders the untranslated
/// message; use [`PolyshaperError::render_message`] to localize it.
#[derive(Debug, Clone, PartialEq, Error, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolyshaperError {
    #[error("Error while operating on file {filename}, {message}")]
    Io { filename: String, message: String },

    #[error("Unknown SVG element: {element}")]
    UnrecognizedElement { element: String },

    #[error("Invalid cutting path, reason: {reason}")]
    InvalidCuttingPath { reason: String },

    /// Dimensions are the machine's working area in mm, not the piece's.
    #[error("Piece too big: maximum allowed dimensions for the selected machine is {machine_width:.1}X{machine_height:.1}")]
    InvalidWorkpieceDimensions { machine_width: f64, machine_height: f64 },
}

pub type Result<T> = std::result::Result<T, PolyshaperError>;

impl PolyshaperError {
    pub fn io(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Io {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Wraps a failed operation on `path`, keeping the OS error text as the message.
    pub fn from_io(path: impl AsRef<Path>, err: &std::io::Error) -> Self {
        Self::io(path.as_ref().display().to_string(), err.to_string())
    }

    pub fn unrecognized_element(element: impl Into<String>) -> Self {
        Self::UnrecognizedElement {
            element: element.into(),
        }
    }

    pub fn invalid_cutting_path(reason: impl Into<String>) -> Self {
        Self::InvalidCuttingPath {
            reason: reason.into(),
        }
    }

    pub fn invalid_workpiece_dimensions(machine_width: f64, machine_height: f64) -> Self {
        Self::InvalidWorkpieceDimensions {
            machine_width,
            machine_height,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Io { .. } => ErrorCode::Io,
            Self::UnrecognizedElement { .. } => ErrorCode::UnrecognizedElement,
            Self::InvalidCuttingPath { .. } => ErrorCode::InvalidCuttingPath,
            Self::InvalidWorkpieceDimensions { .. } => ErrorCode::InvalidWorkpieceDimensions,
        }
    }

    /// Status the process should terminate with.
    pub fn exit_code(&self) -> i32 {
        self.code().exit_code()
    }

    /// The translatable part of the message, in its English msgid form.
    pub fn lead_phrase(&self) -> &'static str {
        match self {
            Self::Io { .. } => "Error while operating on file ",
            Self::UnrecognizedElement { .. } => "Unknown SVG element: ",
            Self::InvalidCuttingPath { .. } => "Invalid cutting path, reason: ",
            Self::InvalidWorkpieceDimensions { .. } => {
                "Piece too big: maximum allowed dimensions for the selected machine is "
            }
        }
    }

    /// Builds the user-facing message with the lead phrase run through `translator`.
    ///
    /// Structured fields are appended verbatim; dimensions always carry one
    /// fractional digit (`300.04` renders as `300.0`).
    pub fn render_message<T: Translate + ?Sized>(&self, translator: &T) -> String {
        let lead = translator.translate(self.lead_phrase());
        match self {
            Self::Io { filename, message } => format!("{lead}{filename}, {message}"),
            Self::UnrecognizedElement { element } => format!("{lead}{element}"),
            Self::InvalidCuttingPath { reason } => format!("{lead}{reason}"),
            Self::InvalidWorkpieceDimensions {
                machine_width,
                machine_height,
            } => format!("{lead}{machine_width:.1}X{machine_height:.1}"),
        }
    }
}
