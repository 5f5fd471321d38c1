use common::ErrorCode;

use super::reserve_configuration::{
    DECIMALS_MASK, DECIMALS_START_BIT, LIQUIDATION_THRESHOLD_MASK,
    LIQUIDATION_THRESHOLD_START_BIT, LTV_MASK, RESERVE_FACTOR_MASK, RESERVE_FACTOR_START_BIT,
};

/// Range-checked numeric fields of a reserve configuration word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReserveField {
    Ltv,
    LiquidationThreshold,
    Decimals,
    ReserveFactor,
}

impl ReserveField {
    /// Ones at the field's bit positions
    pub const fn mask(self) -> u64 {
        match self {
            ReserveField::Ltv => LTV_MASK,
            ReserveField::LiquidationThreshold => LIQUIDATION_THRESHOLD_MASK,
            ReserveField::Decimals => DECIMALS_MASK,
            ReserveField::ReserveFactor => RESERVE_FACTOR_MASK,
        }
    }

    pub const fn start_bit(self) -> u32 {
        match self {
            ReserveField::Ltv => 0,
            ReserveField::LiquidationThreshold => LIQUIDATION_THRESHOLD_START_BIT,
            ReserveField::Decimals => DECIMALS_START_BIT,
            ReserveField::ReserveFactor => RESERVE_FACTOR_START_BIT,
        }
    }

    /// Largest value the field accepts
    pub const fn max(self) -> u32 {
        (self.mask() >> self.start_bit()) as u32
    }

    pub const fn error_code(self) -> ErrorCode {
        match self {
            ReserveField::Ltv => ErrorCode::InvalidLtv,
            ReserveField::LiquidationThreshold => ErrorCode::InvalidLiquidationThreshold,
            ReserveField::Decimals => ErrorCode::InvalidDecimals,
            ReserveField::ReserveFactor => ErrorCode::InvalidReserveFactor,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ReserveField::Ltv => "ltv",
            ReserveField::LiquidationThreshold => "liquidation_threshold",
            ReserveField::Decimals => "decimals",
            ReserveField::ReserveFactor => "reserve_factor",
        }
    }
}
