// Host-side tests for the offer countdown.

use apex_core::*;
use chrono::NaiveDate;

fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, min, s)
        .unwrap()
}

#[test]
fn target_is_three_days_out_at_end_of_day() {
    assert_eq!(
        countdown_target(at(2024, 3, 10, 14, 30, 0)),
        Some(at(2024, 3, 13, 23, 59, 59))
    );
    // just after midnight still counts whole calendar days
    assert_eq!(
        countdown_target(at(2024, 3, 10, 0, 0, 1)),
        Some(at(2024, 3, 13, 23, 59, 59))
    );
}

#[test]
fn target_rolls_over_months_and_years() {
    assert_eq!(
        countdown_target(at(2024, 2, 28, 9, 0, 0)),
        Some(at(2024, 3, 2, 23, 59, 59))
    );
    assert_eq!(
        countdown_target(at(2023, 12, 30, 9, 0, 0)),
        Some(at(2024, 1, 2, 23, 59, 59))
    );
}

#[test]
fn remaining_decomposes_units() {
    let diff = MS_PER_DAY + 2 * MS_PER_HOUR + 3 * MS_PER_MINUTE + 4 * MS_PER_SECOND + 500;
    let r = Remaining::between(1_000_000 + diff, 1_000_000);
    assert_eq!(
        r,
        Remaining {
            days: 1,
            hours: 2,
            minutes: 3,
            seconds: 4
        }
    );
    let text: Vec<String> = r.slots().into_iter().map(|(_, t)| t).collect();
    assert_eq!(text, ["01", "02", "03", "04"]);
}

#[test]
fn remaining_never_goes_negative() {
    let target = 1_700_000_000_000;
    for late_by in [0, 1, 999, 60_000, MS_PER_DAY * 10] {
        let r = Remaining::between(target, target + late_by);
        assert!(r.is_zero());
        for (_, text) in r.slots() {
            assert_eq!(text, "00");
        }
    }
}

#[test]
fn slots_are_at_least_two_digits() {
    for diff in [0, 5_000, 59 * MS_PER_MINUTE, 3 * MS_PER_DAY, 120 * MS_PER_DAY] {
        for (_, text) in Remaining::between(diff, 0).slots() {
            assert!(text.len() >= 2, "{text}");
            assert!(text.chars().all(|c| c.is_ascii_digit()), "{text}");
        }
    }
    assert_eq!(pad2(120), "120");
}

#[test]
fn slot_keys_match_markup() {
    let keys: Vec<&str> = CountdownUnit::ALL.iter().map(|u| u.data_key()).collect();
    assert_eq!(keys, ["days", "hrs", "min", "sec"]);
}
