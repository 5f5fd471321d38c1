use reserve_configurator_interface::types::error::Error;
use reserve_configurator_interface::types::reserve_configuration::ReserveConfiguration;
use reserve_configurator_interface::types::reserve_params::ReserveParams;
use soroban_sdk::Env;

use super::utils::log;

pub fn apply(
    env: &Env,
    config: ReserveConfiguration,
    params: &ReserveParams,
) -> Result<ReserveConfiguration, Error> {
    config.apply(params).map_err(|err| {
        log::field_out_of_range(env, &err);
        err.into()
    })
}
