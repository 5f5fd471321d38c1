pub mod error;
pub mod field_out_of_range;
pub mod reserve_configuration;
pub mod reserve_field;
pub mod reserve_params;
pub mod token_type;
