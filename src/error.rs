use std::fmt;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a parse or build call.
///
/// Callers should branch on [`Error::code`] rather than the message text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A `:` introducer is not followed by at least one name character.
    /// `position` is the byte offset of the introducer in the template.
    #[error(
        "invalid param declaration at position {position}: param names must match [A-Za-z0-9_]+"
    )]
    InvalidParamDeclaration { position: usize },

    /// A placeholder has no value, or its value is [`ParamValue::Absent`](crate::ParamValue::Absent).
    #[error("missing param \"{name}\"")]
    MissingParam { name: String },

    /// A supplied key is not referenced by any placeholder.
    #[error("unknown param \"{name}\": only params declared in the template are allowed")]
    UnknownParam { name: String },
}

impl Error {
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::InvalidParamDeclaration { .. } => ErrorCode::InvalidParamDeclaration,
            Error::MissingParam { .. } => ErrorCode::MissingParam,
            Error::UnknownParam { .. } => ErrorCode::UnknownParam,
        }
    }
}

/// Stable machine-readable error kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    InvalidParamDeclaration,
    MissingParam,
    UnknownParam,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidParamDeclaration => "INVALID_PARAM_DECLARATION",
            ErrorCode::MissingParam => "MISSING_PARAM",
            ErrorCode::UnknownParam => "UNKNOWN_PARAM",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
