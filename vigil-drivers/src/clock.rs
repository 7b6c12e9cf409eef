//! Software calendar clock
//!
//! Keeps the wall-clock date and time, advanced by the host tick.
//! Rollover handles month lengths and leap years; out-of-range fields
//! written through `set_date_time` stay as given until the next
//! rollover touches them.

use vigil_core::traits::{Calendar, DateTime};

/// Days in `month` of `year`
fn days_in_month(year: u16, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        // Out-of-range months roll over like 31-day months.
        _ => 31,
    }
}

fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Software wall clock
#[derive(Debug, Clone, Default)]
pub struct WallClock {
    now: DateTime,
}

impl WallClock {
    /// Create a clock at the epoch default
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one second
    pub fn tick(&mut self) {
        let now = &mut self.now;

        if now.second < 59 {
            now.second += 1;
            return;
        }
        now.second = 0;

        if now.minute < 59 {
            now.minute += 1;
            return;
        }
        now.minute = 0;

        if now.hour < 23 {
            now.hour += 1;
            return;
        }
        now.hour = 0;

        if now.day < days_in_month(now.year, now.month) {
            now.day += 1;
            return;
        }
        now.day = 1;

        if now.month < 12 {
            now.month += 1;
            return;
        }
        now.month = 1;
        now.year += 1;
    }

    /// Advance the clock by `seconds`
    pub fn tick_many(&mut self, seconds: u32) {
        for _ in 0..seconds {
            self.tick();
        }
    }
}

impl Calendar for WallClock {
    fn set_date_time(&mut self, dt: DateTime) {
        self.now = dt;
    }

    fn date_time(&self) -> DateTime {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> WallClock {
        let mut clock = WallClock::new();
        clock.set_date_time(DateTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
        });
        clock
    }

    #[test]
    fn seconds_carry_into_minutes() {
        let mut clock = at(2024, 1, 15, 13, 30, 59);
        clock.tick();
        assert_eq!(clock.date_time_text().as_str(), "2024-01-15 13:31:00");
    }

    #[test]
    fn midnight_rolls_the_day() {
        let mut clock = at(2024, 1, 15, 23, 59, 59);
        clock.tick();
        assert_eq!(clock.date_time_text().as_str(), "2024-01-16 00:00:00");
    }

    #[test]
    fn month_end_rolls_the_month() {
        let mut clock = at(2024, 1, 31, 23, 59, 59);
        clock.tick();
        assert_eq!(clock.date_time_text().as_str(), "2024-02-01 00:00:00");
    }

    #[test]
    fn february_knows_leap_years() {
        let mut clock = at(2024, 2, 28, 23, 59, 59);
        clock.tick();
        assert_eq!(clock.date_time().day, 29);

        let mut clock = at(2023, 2, 28, 23, 59, 59);
        clock.tick();
        assert_eq!(clock.date_time().month, 3);
        assert_eq!(clock.date_time().day, 1);

        // Century years are leap only when divisible by 400.
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
    }

    #[test]
    fn new_years_eve_rolls_the_year() {
        let mut clock = at(2024, 12, 31, 23, 59, 59);
        clock.tick();
        assert_eq!(clock.date_time_text().as_str(), "2025-01-01 00:00:00");
    }

    #[test]
    fn tick_many_accumulates() {
        let mut clock = at(2024, 1, 15, 13, 30, 0);
        clock.tick_many(90);
        assert_eq!(clock.date_time_text().as_str(), "2024-01-15 13:31:30");
    }

    #[test]
    fn out_of_range_fields_normalize_on_rollover() {
        let mut clock = at(2024, 1, 15, 13, 30, 99);
        clock.tick();
        assert_eq!(clock.date_time().second, 0);
        assert_eq!(clock.date_time().minute, 31);
    }
}
