use reserve_configurator_interface::types::error::Error;
use reserve_configurator_interface::types::reserve_configuration::ReserveConfiguration;
use reserve_configurator_interface::types::token_type::TokenType;
use soroban_sdk::Env;

use super::utils::log;

pub fn token_type(env: &Env, config: ReserveConfiguration) -> Result<TokenType, Error> {
    config.token_type().map_err(|err| {
        log::unrecognized_token_type(env, &err);
        err.into()
    })
}
