#![deny(warnings)]
#![no_std]

use methods::{
    apply::apply, pack::pack, set_field::set_field, token_type::token_type, unpack::unpack,
};
use reserve_configurator_interface::types::{
    error::Error, reserve_configuration::ReserveConfiguration, reserve_field::ReserveField,
    reserve_params::ReserveParams, token_type::TokenType,
};
use reserve_configurator_interface::ReserveConfiguratorTrait;
use soroban_sdk::{contract, contractimpl, Env};

mod methods;
#[cfg(test)]
mod tests;

#[contract]
pub struct ReserveConfigurator;

#[contractimpl]
impl ReserveConfiguratorTrait for ReserveConfigurator {
    fn version() -> u32 {
        1
    }

    fn set_ltv(
        env: Env,
        config: ReserveConfiguration,
        ltv: u32,
    ) -> Result<ReserveConfiguration, Error> {
        set_field(&env, config, ReserveField::Ltv, ltv)
    }

    fn get_ltv(config: ReserveConfiguration) -> u32 {
        config.ltv()
    }

    fn set_liquidation_threshold(
        env: Env,
        config: ReserveConfiguration,
        threshold: u32,
    ) -> Result<ReserveConfiguration, Error> {
        set_field(&env, config, ReserveField::LiquidationThreshold, threshold)
    }

    fn get_liquidation_threshold(config: ReserveConfiguration) -> u32 {
        config.liquidation_threshold()
    }

    fn set_decimals(
        env: Env,
        config: ReserveConfiguration,
        decimals: u32,
    ) -> Result<ReserveConfiguration, Error> {
        set_field(&env, config, ReserveField::Decimals, decimals)
    }

    fn get_decimals(config: ReserveConfiguration) -> u32 {
        config.decimals()
    }

    fn set_active(config: ReserveConfiguration, active: bool) -> ReserveConfiguration {
        config.set_active(active)
    }

    fn get_active(config: ReserveConfiguration) -> bool {
        config.is_active()
    }

    fn set_frozen(config: ReserveConfiguration, frozen: bool) -> ReserveConfiguration {
        config.set_frozen(frozen)
    }

    fn get_frozen(config: ReserveConfiguration) -> bool {
        config.is_frozen()
    }

    fn set_borrowing_enabled(config: ReserveConfiguration, enabled: bool) -> ReserveConfiguration {
        config.set_borrowing_enabled(enabled)
    }

    fn get_borrowing_enabled(config: ReserveConfiguration) -> bool {
        config.is_borrowing_enabled()
    }

    fn set_reserve_factor(
        env: Env,
        config: ReserveConfiguration,
        reserve_factor: u32,
    ) -> Result<ReserveConfiguration, Error> {
        set_field(&env, config, ReserveField::ReserveFactor, reserve_factor)
    }

    fn get_reserve_factor(config: ReserveConfiguration) -> u32 {
        config.reserve_factor()
    }

    fn set_token_type(
        config: ReserveConfiguration,
        token_type: TokenType,
    ) -> ReserveConfiguration {
        config.set_token_type(token_type)
    }

    fn get_token_type(env: Env, config: ReserveConfiguration) -> Result<TokenType, Error> {
        token_type(&env, config)
    }

    fn get_flags(config: ReserveConfiguration) -> (bool, bool, bool) {
        config.flags()
    }

    fn get_params(config: ReserveConfiguration) -> (u32, u32, u32, u32) {
        config.params()
    }

    fn pack(env: Env, params: ReserveParams) -> Result<ReserveConfiguration, Error> {
        pack(&env, &params)
    }

    fn unpack(env: Env, config: ReserveConfiguration) -> Result<ReserveParams, Error> {
        unpack(&env, config)
    }

    fn apply(
        env: Env,
        config: ReserveConfiguration,
        params: ReserveParams,
    ) -> Result<ReserveConfiguration, Error> {
        apply(&env, config, &params)
    }
}
