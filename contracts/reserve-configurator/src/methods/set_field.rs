use reserve_configurator_interface::types::error::Error;
use reserve_configurator_interface::types::reserve_configuration::ReserveConfiguration;
use reserve_configurator_interface::types::reserve_field::ReserveField;
use soroban_sdk::Env;

use super::utils::log;

pub fn set_field(
    env: &Env,
    config: ReserveConfiguration,
    field: ReserveField,
    value: u32,
) -> Result<ReserveConfiguration, Error> {
    config.set_field(field, value).map_err(|err| {
        log::field_out_of_range(env, &err);
        err.into()
    })
}
