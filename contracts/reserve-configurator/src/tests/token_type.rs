#![cfg(test)]
extern crate std;

use crate::tests::sut::{create_configurator_contract, words};
use crate::*;

#[test]
fn should_set_token_type() {
    let env = Env::default();
    let sut = create_configurator_contract(&env);

    for config in words() {
        for token_type in [TokenType::Erc20, TokenType::Erc721, TokenType::Erc1155] {
            let updated = sut.set_token_type(&config, &token_type);

            assert_eq!(sut.get_token_type(&updated), token_type);
            assert_eq!(sut.get_params(&updated), sut.get_params(&config));
            assert_eq!(sut.get_flags(&updated), sut.get_flags(&config));
            assert_eq!(updated.reserved_bits(), config.reserved_bits());
        }
    }
}

#[test]
fn should_fail_on_unrecognized_token_type() {
    let env = Env::default();
    let sut = create_configurator_contract(&env);

    let config = ReserveConfiguration::from_raw(3 << 60);

    assert_eq!(
        sut.try_get_token_type(&config).unwrap_err().unwrap(),
        Error::UnrecognizedTokenType
    );

    let config = sut.set_token_type(&config, &TokenType::Erc20);
    assert_eq!(sut.get_token_type(&config), TokenType::Erc20);
}

#[test]
#[should_panic(expected = "HostError: Error(Contract, #104)")]
fn should_panic_on_unrecognized_token_type() {
    let env = Env::default();
    let sut = create_configurator_contract(&env);

    sut.get_token_type(&ReserveConfiguration::from_raw(u64::MAX));
}
