use reserve_configurator_interface::types::error::Error;
use reserve_configurator_interface::types::reserve_configuration::ReserveConfiguration;
use reserve_configurator_interface::types::reserve_params::ReserveParams;
use soroban_sdk::Env;

use super::utils::log;

pub fn unpack(env: &Env, config: ReserveConfiguration) -> Result<ReserveParams, Error> {
    config.unpack().map_err(|err| {
        log::unrecognized_token_type(env, &err);
        err.into()
    })
}
