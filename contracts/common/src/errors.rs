use core::fmt;

/// Symbolic failure codes known to the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    InvalidLtv,
    InvalidLiquidationThreshold,
    InvalidDecimals,
    InvalidReserveFactor,
    UnrecognizedTokenType,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidLtv => "INVALID_LTV",
            ErrorCode::InvalidLiquidationThreshold => "INVALID_LIQ_THRESHOLD",
            ErrorCode::InvalidDecimals => "INVALID_DECIMALS",
            ErrorCode::InvalidReserveFactor => "INVALID_RESERVE_FACTOR",
            ErrorCode::UnrecognizedTokenType => "UNRECOGNIZED_TOKEN_TYPE",
        }
    }
}

/// Diagnostic attached to a failure. Rendered as `<component>_<code>`,
/// e.g. `RC_INVALID_LTV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorMessage {
    component: &'static str,
    code: ErrorCode,
}

impl ErrorMessage {
    pub const fn component(&self) -> &'static str {
        self.component
    }

    pub const fn code(&self) -> ErrorCode {
        self.code
    }
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.component, self.code.as_str())
    }
}

/// Maps a component tag and an error code to a caller-displayed message.
pub trait ErrorCatalog {
    fn message(&self, component: &'static str, code: ErrorCode) -> ErrorMessage;
}

/// Default catalog
#[derive(Debug, Clone, Copy, Default)]
pub struct Errors;

impl ErrorCatalog for Errors {
    fn message(&self, component: &'static str, code: ErrorCode) -> ErrorMessage {
        ErrorMessage { component, code }
    }
}
