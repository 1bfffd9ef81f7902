use std::borrow::Cow;

use thiserror::Error;

use crate::translate::Translate;

/// Numeric identifier of a failure kind, doubling as the process exit status.
///
/// Codes are assigned once and never renumbered: host tooling branches on them.
/// `0` is success and is never a valid `ErrorCode`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum ErrorCode {
    Io = 1,
    UnrecognizedElement = 2,
    InvalidCuttingPath = 3,
    InvalidWorkpieceDimensions = 4,
}

impl ErrorCode {
    /// Every assigned code, ascending.
    pub const ALL: [ErrorCode; 4] = [
        ErrorCode::Io,
        ErrorCode::UnrecognizedElement,
        ErrorCode::InvalidCuttingPath,
        ErrorCode::InvalidWorkpieceDimensions,
    ];

    pub fn value(self) -> u8 {
        self as u8
    }

    pub fn exit_code(self) -> i32 {
        i32::from(self.value())
    }

    /// Stable snake_case name, used as the `kind` of a serialized diagnostic.
    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::Io => "io",
            ErrorCode::UnrecognizedElement => "unrecognized_element",
            ErrorCode::InvalidCuttingPath => "invalid_cutting_path",
            ErrorCode::InvalidWorkpieceDimensions => "invalid_workpiece_dimensions",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

impl TryFrom<i32> for ErrorCode {
    type Error = UnknownErrorCode;

    fn try_from(code: i32) -> std::result::Result<Self, Self::Error> {
        ErrorCode::ALL
            .into_iter()
            .find(|c| c.exit_code() == code)
            .ok_or(UnknownErrorCode(code))
    }
}

/// A status outside the assigned range, e.g. read back from a child process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown error, error code: {0}")]
pub struct UnknownErrorCode(pub i32);

impl UnknownErrorCode {
    pub const LEAD_PHRASE: &'static str = "Unknown error, error code: ";

    pub fn code(self) -> i32 {
        self.0
    }

    pub fn render_message<T: Translate + ?Sized>(&self, translator: &T) -> String {
        let lead: Cow<'_, str> = translator.translate(Self::LEAD_PHRASE);
        format!("{lead}{}", self.0)
    }
}
