mod flags;
mod token_type;
