use chrono::{Datelike, NaiveDate};

pub struct DateUtils;

impl DateUtils {
    /// Whole years between `birth_date` and `now`.
    pub fn age(birth_date: NaiveDate, now: NaiveDate) -> u8 {
        let mut age = now.year() - birth_date.year();

        if (now.month(), now.day()) < (birth_date.month(), birth_date.day()) {
            age -= 1;
        }

        age.max(0) as u8
    }

    pub fn days_in_month(month: u32) -> u32 {
        match month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => 28,
        }
    }
}
