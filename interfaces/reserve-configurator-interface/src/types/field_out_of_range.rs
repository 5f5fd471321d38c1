use core::fmt;

use common::{ErrorCatalog, ErrorCode, ErrorMessage, Errors};

use super::reserve_configuration::COMPONENT_TAG;
use super::reserve_field::ReserveField;

/// Value rejected by a range-checked setter. The word it was meant for is left as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldOutOfRange {
    pub field: ReserveField,
    pub value: u32,
    pub max: u32,
    pub message: ErrorMessage,
}

impl FieldOutOfRange {
    pub(crate) fn new(field: ReserveField, value: u32) -> Self {
        Self {
            field,
            value,
            max: field.max(),
            message: Errors.message(COMPONENT_TAG, field.error_code()),
        }
    }
}

impl fmt::Display for FieldOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} value {} exceeds max {}",
            self.message,
            self.field.name(),
            self.value,
            self.max
        )
    }
}

/// Token type bits hold the value with no `TokenType` variant (3).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnrecognizedTokenType {
    pub value: u32,
    pub message: ErrorMessage,
}

impl UnrecognizedTokenType {
    pub(crate) fn new(value: u32) -> Self {
        Self {
            value,
            message: Errors.message(COMPONENT_TAG, ErrorCode::UnrecognizedTokenType),
        }
    }
}

impl fmt::Display for UnrecognizedTokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: token type {}", self.message, self.value)
    }
}
