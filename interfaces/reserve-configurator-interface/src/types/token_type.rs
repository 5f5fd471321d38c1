use soroban_sdk::contracttype;

use super::field_out_of_range::UnrecognizedTokenType;

/// Standard of the reserve's underlying asset
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum TokenType {
    /// Fungible token
    Erc20 = 0,
    /// Non-fungible token
    Erc721 = 1,
    /// Multi-token
    Erc1155 = 2,
}

impl TokenType {
    /// Decodes the two token type bits
    pub fn from_raw(value: u32) -> Result<Self, UnrecognizedTokenType> {
        match value {
            0 => Ok(TokenType::Erc20),
            1 => Ok(TokenType::Erc721),
            2 => Ok(TokenType::Erc1155),
            _ => Err(UnrecognizedTokenType::new(value)),
        }
    }
}
