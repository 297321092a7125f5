//! Block counts as approximate wall-clock phrases

use crate::constants::MINUTES_PER_BLOCK;
use crate::format::pluralize_if_not_one;

const MINUTES_PER_YEAR: u128 = 525_600;
const MINUTES_PER_DAY: u128 = 1_440;
const MINUTES_PER_HOUR: u128 = 60;

/// Most units shown in a phrase
const MAX_UNITS: usize = 3;

/// Estimates how long `block_count` blocks take at ten minutes each.
///
/// Starts from the largest nonzero unit and shows up to three units, keeping
/// zeros once a larger unit is in: 144 blocks is `1 day, 0 hours and 0 minutes`.
pub fn duration_phrase_from_block_count(block_count: u64) -> String {
    let mut minutes = u128::from(block_count) * u128::from(MINUTES_PER_BLOCK);

    let years = minutes / MINUTES_PER_YEAR;
    minutes %= MINUTES_PER_YEAR;
    let days = minutes / MINUTES_PER_DAY;
    minutes %= MINUTES_PER_DAY;
    let hours = minutes / MINUTES_PER_HOUR;
    minutes %= MINUTES_PER_HOUR;

    let units = [
        (years, "year"),
        (days, "day"),
        (hours, "hour"),
        (minutes, "minute"),
    ];

    let parts: Vec<String> = units
        .iter()
        .skip_while(|(value, _)| *value == 0)
        .take(MAX_UNITS)
        // Every unit fits in u64: years are at most u64::MAX / 52,560.
        .map(|(value, label)| pluralize_if_not_one(*value as u64, label))
        .collect();

    join_phrase(&parts)
}

fn join_phrase(parts: &[String]) -> String {
    match parts {
        [] => pluralize_if_not_one(0, "minute"),
        [only] => only.clone(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}
