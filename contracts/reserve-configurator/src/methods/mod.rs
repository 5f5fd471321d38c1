pub mod apply;
pub mod pack;
pub mod set_field;
pub mod token_type;
pub mod unpack;

mod utils;
