use reserve_configurator_interface::types::field_out_of_range::{
    FieldOutOfRange, UnrecognizedTokenType,
};
use soroban_sdk::{log, Env, Symbol};

pub fn field_out_of_range(env: &Env, err: &FieldOutOfRange) {
    log!(
        env,
        "reserve configuration field out of range",
        Symbol::new(env, err.field.name()),
        err.value,
        err.max
    );
}

pub fn unrecognized_token_type(env: &Env, err: &UnrecognizedTokenType) {
    log!(env, "unrecognized token type", err.value);
}
