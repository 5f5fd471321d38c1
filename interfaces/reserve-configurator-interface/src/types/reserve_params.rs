use soroban_sdk::contracttype;

use super::field_out_of_range::FieldOutOfRange;
use super::reserve_configuration::ReserveConfiguration;
use super::token_type::TokenType;

/// Unpacked form of a reserve configuration word
#[contracttype]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReserveParams {
    /// Loan to value [0, 65535]
    pub ltv: u32,
    /// [0, 65535]
    pub liquidation_threshold: u32,
    /// Decimals of the underlying asset [0, 255]
    pub decimals: u32,
    pub is_active: bool,
    pub is_frozen: bool,
    pub borrowing_enabled: bool,
    /// Protocol fee share [0, 65535]
    pub reserve_factor: u32,
    pub token_type: TokenType,
}

impl ReserveParams {
    /// Packs into a fresh word with zeroed reserved bits
    pub fn pack(&self) -> Result<ReserveConfiguration, FieldOutOfRange> {
        ReserveConfiguration::default().apply(self)
    }
}
