use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedCloseParen => "ExpectedCloseParen",
            ErrorImpl::ExpectedArgumentSeparator { .. } => "ExpectedArgumentSeparator",
            ErrorImpl::ExpectedFunctionName => "ExpectedFunctionName",
            ErrorImpl::ExpectedPrototypeOpenParen => "ExpectedPrototypeOpenParen",
            ErrorImpl::ExpectedPrototypeCloseParen => "ExpectedPrototypeCloseParen",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedToken { token } => {
                ErrorTip::Suggestion(format!("found `{}`", token))
            }
            ErrorImpl::ExpectedArgumentSeparator { token } => {
                ErrorTip::Suggestion(format!("found `{}`", token))
            }
            ErrorImpl::ExpectedPrototypeCloseParen => {
                ErrorTip::Suggestion(String::from("parameter names are separated by spaces"))
            }
            _ => ErrorTip::None,
        }
    }
}

/// Diagnostic line in the form `error <message> at <offset>`.
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "error {} at {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("unexpected token in expression position")]
    UnexpectedToken { token: String },
    #[error("expected ')'")]
    ExpectedCloseParen,
    #[error("expected ')' or ',' in argument list")]
    ExpectedArgumentSeparator { token: String },
    #[error("expected function name in prototype")]
    ExpectedFunctionName,
    #[error("expected '(' in prototype")]
    ExpectedPrototypeOpenParen,
    #[error("expected ')' in prototype")]
    ExpectedPrototypeCloseParen,
}
