use crate::types::reserve_configuration::ReserveConfiguration;

/// Starting words for property checks: empty, full and two alternating patterns
pub const WORDS: [u64; 4] = [
    0,
    u64::MAX,
    0x5555_5555_5555_5555,
    0xAAAA_AAAA_AAAA_AAAA,
];

pub fn words() -> impl Iterator<Item = ReserveConfiguration> {
    WORDS.into_iter().map(ReserveConfiguration::from_raw)
}
