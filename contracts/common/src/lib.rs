#![deny(warnings)]
#![no_std]

mod errors;

pub use errors::*;
