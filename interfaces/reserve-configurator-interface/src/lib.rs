#![deny(warnings)]
#![no_std]

use soroban_sdk::{contractclient, contractspecfn, Env};
use types::error::Error;
use types::reserve_configuration::ReserveConfiguration;
use types::reserve_params::ReserveParams;
use types::token_type::TokenType;

#[cfg(any(test, feature = "testutils"))]
pub mod testutils;
pub mod types;

pub struct Spec;

/// Interface for the reserve configurator.
/// Every function is a pure transformation of the configuration word it receives.
#[contractspecfn(name = "Spec", export = false)]
#[contractclient(name = "ReserveConfiguratorClient")]
pub trait ReserveConfiguratorTrait {
    fn version() -> u32;

    fn set_ltv(
        env: Env,
        config: ReserveConfiguration,
        ltv: u32,
    ) -> Result<ReserveConfiguration, Error>;

    fn get_ltv(config: ReserveConfiguration) -> u32;

    fn set_liquidation_threshold(
        env: Env,
        config: ReserveConfiguration,
        threshold: u32,
    ) -> Result<ReserveConfiguration, Error>;

    fn get_liquidation_threshold(config: ReserveConfiguration) -> u32;

    fn set_decimals(
        env: Env,
        config: ReserveConfiguration,
        decimals: u32,
    ) -> Result<ReserveConfiguration, Error>;

    fn get_decimals(config: ReserveConfiguration) -> u32;

    fn set_active(config: ReserveConfiguration, active: bool) -> ReserveConfiguration;

    fn get_active(config: ReserveConfiguration) -> bool;

    fn set_frozen(config: ReserveConfiguration, frozen: bool) -> ReserveConfiguration;

    fn get_frozen(config: ReserveConfiguration) -> bool;

    fn set_borrowing_enabled(config: ReserveConfiguration, enabled: bool) -> ReserveConfiguration;

    fn get_borrowing_enabled(config: ReserveConfiguration) -> bool;

    fn set_reserve_factor(
        env: Env,
        config: ReserveConfiguration,
        reserve_factor: u32,
    ) -> Result<ReserveConfiguration, Error>;

    fn get_reserve_factor(config: ReserveConfiguration) -> u32;

    fn set_token_type(config: ReserveConfiguration, token_type: TokenType)
        -> ReserveConfiguration;

    fn get_token_type(env: Env, config: ReserveConfiguration) -> Result<TokenType, Error>;

    /// (active, frozen, borrowing enabled)
    fn get_flags(config: ReserveConfiguration) -> (bool, bool, bool);

    /// (ltv, liquidation threshold, decimals, reserve factor)
    fn get_params(config: ReserveConfiguration) -> (u32, u32, u32, u32);

    fn pack(env: Env, params: ReserveParams) -> Result<ReserveConfiguration, Error>;

    fn unpack(env: Env, config: ReserveConfiguration) -> Result<ReserveParams, Error>;

    fn apply(
        env: Env,
        config: ReserveConfiguration,
        params: ReserveParams,
    ) -> Result<ReserveConfiguration, Error>;
}
