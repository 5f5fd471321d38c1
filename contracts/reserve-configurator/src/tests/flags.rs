#![cfg(test)]
extern crate std;

use crate::tests::sut::{create_configurator_contract, words};
use crate::*;

#[test]
fn should_set_flags() {
    let env = Env::default();
    let sut = create_configurator_contract(&env);

    for config in words() {
        for value in [true, false] {
            assert_eq!(sut.get_active(&sut.set_active(&config, &value)), value);
            assert_eq!(sut.get_frozen(&sut.set_frozen(&config, &value)), value);
            assert_eq!(
                sut.get_borrowing_enabled(&sut.set_borrowing_enabled(&config, &value)),
                value
            );
        }
    }
}

#[test]
fn should_return_flags_consistent_with_getters() {
    let env = Env::default();
    let sut = create_configurator_contract(&env);

    let mut config = ReserveConfiguration::default();

    config = sut.set_active(&config, &true);
    assert_eq!(sut.get_flags(&config), (true, false, false));

    config = sut.set_borrowing_enabled(&config, &true);
    assert_eq!(sut.get_flags(&config), (true, false, true));

    config = sut.set_frozen(&config, &true);
    assert_eq!(sut.get_flags(&config), (true, true, true));

    config = sut.set_active(&config, &false);
    assert_eq!(sut.get_flags(&config), (false, true, true));

    config = sut.set_borrowing_enabled(&config, &false);
    assert_eq!(
        sut.get_flags(&config),
        (
            sut.get_active(&config),
            sut.get_frozen(&config),
            sut.get_borrowing_enabled(&config)
        )
    );
    assert_eq!(sut.get_flags(&config), (false, true, false));
}

#[test]
fn should_keep_other_fields() {
    let env = Env::default();
    let sut = create_configurator_contract(&env);

    for config in words() {
        let updated = sut.set_frozen(&sut.set_active(&config, &true), &false);

        assert_eq!(sut.get_params(&updated), sut.get_params(&config));
        assert_eq!(
            sut.get_borrowing_enabled(&updated),
            sut.get_borrowing_enabled(&config)
        );
        assert_eq!(updated.raw_token_type(), config.raw_token_type());
        assert_eq!(updated.reserved_bits(), config.reserved_bits());
    }
}
