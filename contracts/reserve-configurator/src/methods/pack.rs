use reserve_configurator_interface::types::error::Error;
use reserve_configurator_interface::types::reserve_configuration::ReserveConfiguration;
use reserve_configurator_interface::types::reserve_params::ReserveParams;
use soroban_sdk::Env;

use super::apply::apply;

pub fn pack(env: &Env, params: &ReserveParams) -> Result<ReserveConfiguration, Error> {
    apply(env, ReserveConfiguration::default(), params)
}
