use soroban_sdk::contracttype;

use super::field_out_of_range::{FieldOutOfRange, UnrecognizedTokenType};
use super::reserve_field::ReserveField;
use super::reserve_params::ReserveParams;
use super::token_type::TokenType;

/// Tag the error catalog prefixes reserve configuration failures with
pub const COMPONENT_TAG: &str = "RC";

pub const LTV_MASK: u64 = 0x0000_0000_0000_FFFF;
pub const LIQUIDATION_THRESHOLD_MASK: u64 = 0x0000_0000_FFFF_0000;
pub const DECIMALS_MASK: u64 = 0x0000_00FF_0000_0000;
pub const ACTIVE_MASK: u64 = 0x0000_0100_0000_0000;
pub const FROZEN_MASK: u64 = 0x0000_0200_0000_0000;
pub const BORROWING_ENABLED_MASK: u64 = 0x0000_0400_0000_0000;
pub const RESERVED_LOW_MASK: u64 = 0x0000_0800_0000_0000;
pub const RESERVE_FACTOR_MASK: u64 = 0x0FFF_F000_0000_0000;
pub const TOKEN_TYPE_MASK: u64 = 0x3000_0000_0000_0000;
pub const RESERVED_HIGH_MASK: u64 = 0xC000_0000_0000_0000;

/// Bits no field owns. Every write carries them over untouched.
pub const RESERVED_MASK: u64 = RESERVED_LOW_MASK | RESERVED_HIGH_MASK;

pub const LIQUIDATION_THRESHOLD_START_BIT: u32 = 16;
pub const DECIMALS_START_BIT: u32 = 32;
pub const ACTIVE_BIT: u32 = 40;
pub const FROZEN_BIT: u32 = 41;
pub const BORROWING_ENABLED_BIT: u32 = 42;
pub const RESERVE_FACTOR_START_BIT: u32 = 44;
pub const TOKEN_TYPE_START_BIT: u32 = 60;

/// Bit-packed reserve parameters.
///
/// | bits   | field                    |
/// |--------|--------------------------|
/// | 0-15   | LTV                      |
/// | 16-31  | liquidation threshold    |
/// | 32-39  | decimals                 |
/// | 40     | active                   |
/// | 41     | frozen                   |
/// | 42     | borrowing enabled        |
/// | 43     | reserved                 |
/// | 44-59  | reserve factor           |
/// | 60-61  | token type               |
/// | 62-63  | reserved                 |
///
/// A plain value: every setter returns a new word and a rejected setter
/// leaves the original as it was.
#[contracttype]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReserveConfiguration(u64);

impl ReserveConfiguration {
    pub const fn from_raw(word: u64) -> Self {
        Self(word)
    }

    pub const fn into_raw(self) -> u64 {
        self.0
    }

    pub fn set_field(self, field: ReserveField, value: u32) -> Result<Self, FieldOutOfRange> {
        if value > field.max() {
            return Err(FieldOutOfRange::new(field, value));
        }

        Ok(Self(
            (self.0 & !field.mask()) | (u64::from(value) << field.start_bit()),
        ))
    }

    pub const fn field(self, field: ReserveField) -> u32 {
        // widest field is 16 bits
        ((self.0 & field.mask()) >> field.start_bit()) as u32
    }

    pub fn set_ltv(self, ltv: u32) -> Result<Self, FieldOutOfRange> {
        self.set_field(ReserveField::Ltv, ltv)
    }

    pub const fn ltv(self) -> u32 {
        self.field(ReserveField::Ltv)
    }

    pub fn set_liquidation_threshold(self, threshold: u32) -> Result<Self, FieldOutOfRange> {
        self.set_field(ReserveField::LiquidationThreshold, threshold)
    }

    pub const fn liquidation_threshold(self) -> u32 {
        self.field(ReserveField::LiquidationThreshold)
    }

    pub fn set_decimals(self, decimals: u32) -> Result<Self, FieldOutOfRange> {
        self.set_field(ReserveField::Decimals, decimals)
    }

    pub const fn decimals(self) -> u32 {
        self.field(ReserveField::Decimals)
    }

    pub fn set_reserve_factor(self, reserve_factor: u32) -> Result<Self, FieldOutOfRange> {
        self.set_field(ReserveField::ReserveFactor, reserve_factor)
    }

    pub const fn reserve_factor(self) -> u32 {
        self.field(ReserveField::ReserveFactor)
    }

    pub const fn set_active(self, active: bool) -> Self {
        Self((self.0 & !ACTIVE_MASK) | ((active as u64) << ACTIVE_BIT))
    }

    pub const fn is_active(self) -> bool {
        self.0 & ACTIVE_MASK != 0
    }

    pub const fn set_frozen(self, frozen: bool) -> Self {
        Self((self.0 & !FROZEN_MASK) | ((frozen as u64) << FROZEN_BIT))
    }

    pub const fn is_frozen(self) -> bool {
        self.0 & FROZEN_MASK != 0
    }

    pub const fn set_borrowing_enabled(self, enabled: bool) -> Self {
        Self((self.0 & !BORROWING_ENABLED_MASK) | ((enabled as u64) << BORROWING_ENABLED_BIT))
    }

    pub const fn is_borrowing_enabled(self) -> bool {
        self.0 & BORROWING_ENABLED_MASK != 0
    }

    /// (active, frozen, borrowing enabled)
    pub const fn flags(self) -> (bool, bool, bool) {
        (
            self.is_active(),
            self.is_frozen(),
            self.is_borrowing_enabled(),
        )
    }

    pub const fn set_token_type(self, token_type: TokenType) -> Self {
        // every variant fits into two bits
        Self((self.0 & !TOKEN_TYPE_MASK) | ((token_type as u64) << TOKEN_TYPE_START_BIT))
    }

    /// Raw token type bits, including the value without a variant
    pub const fn raw_token_type(self) -> u32 {
        ((self.0 & TOKEN_TYPE_MASK) >> TOKEN_TYPE_START_BIT) as u32
    }

    pub fn token_type(self) -> Result<TokenType, UnrecognizedTokenType> {
        TokenType::from_raw(self.raw_token_type())
    }

    /// (ltv, liquidation threshold, decimals, reserve factor)
    pub const fn params(self) -> (u32, u32, u32, u32) {
        (
            self.ltv(),
            self.liquidation_threshold(),
            self.decimals(),
            self.reserve_factor(),
        )
    }

    pub const fn reserved_bits(self) -> u64 {
        self.0 & RESERVED_MASK
    }

    pub fn unpack(self) -> Result<ReserveParams, UnrecognizedTokenType> {
        Ok(ReserveParams {
            ltv: self.ltv(),
            liquidation_threshold: self.liquidation_threshold(),
            decimals: self.decimals(),
            is_active: self.is_active(),
            is_frozen: self.is_frozen(),
            borrowing_enabled: self.is_borrowing_enabled(),
            reserve_factor: self.reserve_factor(),
            token_type: self.token_type()?,
        })
    }

    /// Writes every field of `params`. Reserved bits are preserved.
    pub fn apply(self, params: &ReserveParams) -> Result<Self, FieldOutOfRange> {
        Ok(self
            .set_ltv(params.ltv)?
            .set_liquidation_threshold(params.liquidation_threshold)?
            .set_decimals(params.decimals)?
            .set_reserve_factor(params.reserve_factor)?
            .set_active(params.is_active)
            .set_frozen(params.is_frozen)
            .set_borrowing_enabled(params.borrowing_enabled)
            .set_token_type(params.token_type))
    }
}
