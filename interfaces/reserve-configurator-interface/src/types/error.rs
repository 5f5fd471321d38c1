use soroban_sdk::contracterror;

use super::field_out_of_range::{FieldOutOfRange, UnrecognizedTokenType};
use super::reserve_field::ReserveField;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    InvalidLtv = 100,
    InvalidLiquidationThreshold = 101,
    InvalidDecimals = 102,
    InvalidReserveFactor = 103,
    UnrecognizedTokenType = 104,
}

impl From<FieldOutOfRange> for Error {
    fn from(err: FieldOutOfRange) -> Self {
        match err.field {
            ReserveField::Ltv => Error::InvalidLtv,
            ReserveField::LiquidationThreshold => Error::InvalidLiquidationThreshold,
            ReserveField::Decimals => Error::InvalidDecimals,
            ReserveField::ReserveFactor => Error::InvalidReserveFactor,
        }
    }
}

impl From<UnrecognizedTokenType> for Error {
    fn from(_: UnrecognizedTokenType) -> Self {
        Error::UnrecognizedTokenType
    }
}
