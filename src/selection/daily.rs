//! Date-deterministic daily word
//!
//! Every calendar day (in a fixed reference timezone) maps to one catalog
//! index. Days are counted from an epoch and split into cycles of `N` days for
//! a catalog of `N` words. Inside a cycle the catalog is walked with a step
//! coprime to `N`, so no word repeats within the cycle; each cycle starts from
//! an offset derived from the cycle number, so the order of successive cycles
//! differs.

use chrono::{DateTime, Days, FixedOffset, NaiveDate, Offset, Utc};

/// Default first day of the schedule (2025-01-01)
#[must_use]
pub fn default_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 1).unwrap_or_default()
}

/// Default salt mixed into cycle offsets
pub const DEFAULT_SALT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Daily word schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    epoch: NaiveDate,
    offset: FixedOffset,
    salt: u64,
}

impl Default for DailySchedule {
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            offset: Utc.fix(),
            salt: DEFAULT_SALT,
        }
    }
}

impl DailySchedule {
    #[must_use]
    pub const fn new(epoch: NaiveDate, offset: FixedOffset, salt: u64) -> Self {
        Self {
            epoch,
            offset,
            salt,
        }
    }

    #[must_use]
    pub const fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Calendar date of `now` in the reference timezone
    #[must_use]
    pub fn today(&self, now: DateTime<Utc>) -> NaiveDate {
        now.with_timezone(&self.offset).date_naive()
    }

    /// Whole days between the epoch and `date` (negative before the epoch)
    #[must_use]
    pub fn day_number(&self, date: NaiveDate) -> i64 {
        date.signed_duration_since(self.epoch).num_days()
    }

    /// Catalog index of the word for `date`
    ///
    /// # Panics
    /// Panics if `catalog_len` is zero; an empty catalog cannot be played.
    #[must_use]
    pub fn index_for_date(&self, catalog_len: usize, date: NaiveDate) -> usize {
        assert!(catalog_len > 0, "daily index requires a non-empty catalog");

        let n = catalog_len as i64;
        let day = self.day_number(date);
        let cycle = day.div_euclid(n);
        let position = day.rem_euclid(n) as u128;

        let n = n as u128;
        let step = u128::from(coprime_step(catalog_len as u64));
        let start = u128::from(mix64((cycle as u64) ^ self.salt)) % n;

        ((position * step + start) % n) as usize
    }

    /// Dates and indices for `days` consecutive days starting at `from`
    #[must_use]
    pub fn upcoming(&self, catalog_len: usize, from: NaiveDate, days: u64) -> Vec<(NaiveDate, usize)> {
        (0..days)
            .filter_map(|d| from.checked_add_days(Days::new(d)))
            .map(|date| (date, self.index_for_date(catalog_len, date)))
            .collect()
    }
}

/// Daily index with the default schedule
///
/// # Panics
/// Panics if `catalog_len` is zero.
#[must_use]
pub fn daily_index(catalog_len: usize, date: NaiveDate) -> usize {
    DailySchedule::default().index_for_date(catalog_len, date)
}

/// Step near the golden-ratio point of `n` that is coprime to `n`
///
/// A coprime step visits every residue exactly once per `n` steps.
fn coprime_step(n: u64) -> u64 {
    let mut step = n * 618 / 1000 + 1;
    while gcd(step, n) != 1 {
        step += 1;
    }
    step
}

const fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// `SplitMix64` finaliser
const fn mix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_date_same_index() {
        let d = date(2026, 10, 19);
        assert_eq!(daily_index(500, d), daily_index(500, d));
        assert_eq!(
            DailySchedule::default().index_for_date(500, d),
            daily_index(500, d)
        );
    }

    #[test]
    fn index_in_range_for_dates_before_and_after_epoch() {
        for n in [1, 2, 3, 7, 60, 2315] {
            for offset in -400i64..400 {
                let d = default_epoch() + chrono::Duration::days(offset);
                assert!(daily_index(n, d) < n);
            }
        }
    }

    #[test]
    fn adjacent_days_differ() {
        let start = date(2026, 1, 1);
        let schedule = DailySchedule::default();
        let days = schedule.upcoming(60, start, 365);
        let changes = days.windows(2).filter(|w| w[0].1 != w[1].1).count();
        assert!(changes >= 360, "only {changes} day-to-day changes");
    }

    #[test]
    fn no_repeats_within_a_cycle() {
        let schedule = DailySchedule::default();
        let n = 61;
        // Day numbers 0..n form exactly one cycle
        let indices: HashSet<usize> = schedule
            .upcoming(n, default_epoch(), n as u64)
            .into_iter()
            .map(|(_, i)| i)
            .collect();
        assert_eq!(indices.len(), n);
    }

    #[test]
    fn schedule_is_not_catalog_order() {
        let schedule = DailySchedule::default();
        let indices: Vec<usize> = schedule
            .upcoming(100, default_epoch(), 5)
            .into_iter()
            .map(|(_, i)| i)
            .collect();
        let sequential = indices.windows(2).all(|w| w[1] == (w[0] + 1) % 100);
        assert!(!sequential, "schedule walks the catalog in order: {indices:?}");
    }

    #[test]
    fn today_uses_reference_offset() {
        let now = Utc.with_ymd_and_hms(2026, 3, 1, 23, 30, 0).unwrap();
        let utc = DailySchedule::default();
        let tokyo = DailySchedule::new(
            default_epoch(),
            FixedOffset::east_opt(9 * 3600).unwrap(),
            DEFAULT_SALT,
        );
        assert_eq!(utc.today(now), date(2026, 3, 1));
        assert_eq!(tokyo.today(now), date(2026, 3, 2));
    }

    #[test]
    fn different_salts_change_the_schedule() {
        let a = DailySchedule::new(default_epoch(), Utc.fix(), 1);
        let b = DailySchedule::new(default_epoch(), Utc.fix(), 2);
        let days_a = a.upcoming(1000, default_epoch(), 10);
        let days_b = b.upcoming(1000, default_epoch(), 10);
        assert_ne!(days_a, days_b);
    }

    #[test]
    #[should_panic(expected = "non-empty catalog")]
    fn empty_catalog_panics() {
        let _ = daily_index(0, default_epoch());
    }

    #[test]
    fn coprime_step_is_coprime() {
        for n in 1..500u64 {
            assert_eq!(gcd(coprime_step(n), n), 1);
        }
    }
}
