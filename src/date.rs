use std::cmp::Ordering;
use time::{util::is_leap_year, Date, Duration, Month};

const MONTHS_IN_YEAR: i32 = 12;

/// Month-level calendar arithmetic on [`Date`]
pub trait DateExt {
    /// Returns the first day of the month containing this date
    fn first_of_month(self) -> Date;

    /// Returns the number of days in the month containing this date
    fn days_in_month(self) -> u8;

    /// Moves this date by `months` whole months, clamping the day of the
    /// month to the length of the target month (so January 31 plus one month
    /// is the last day of February).  Returns `None` if the result would fall
    /// outside the range supported by [`Date`].
    fn checked_add_months(self, months: i32) -> Option<Date>;

    /// Compares two dates at month granularity
    fn cmp_month(self, other: Date) -> Ordering;

    /// Returns the month and year as a label like "March 2021"
    fn month_label(self) -> String;
}

impl DateExt for Date {
    fn first_of_month(self) -> Date {
        self - Duration::days(i64::from(self.day()) - 1)
    }

    fn days_in_month(self) -> u8 {
        match self.month() {
            Month::February if is_leap_year(self.year()) => 29,
            Month::February => 28,
            Month::April | Month::June | Month::September | Month::November => 30,
            _ => 31,
        }
    }

    fn checked_add_months(self, months: i32) -> Option<Date> {
        let index = self
            .year()
            .checked_mul(MONTHS_IN_YEAR)?
            .checked_add(month_index0(self.month()))?
            .checked_add(months)?;
        let year = index.div_euclid(MONTHS_IN_YEAR);
        let month = u8::try_from(index.rem_euclid(MONTHS_IN_YEAR) + 1).ok()?;
        let month = Month::try_from(month).ok()?;
        let first = Date::from_calendar_date(year, month, 1).ok()?;
        first.replace_day(self.day().min(first.days_in_month())).ok()
    }

    fn cmp_month(self, other: Date) -> Ordering {
        (self.year(), u8::from(self.month())).cmp(&(other.year(), u8::from(other.month())))
    }

    fn month_label(self) -> String {
        format!("{} {}", self.month(), self.year())
    }
}

fn month_index0(month: Month) -> i32 {
    i32::from(u8::from(month)) - 1
}
