use crate::date::DateExt;
use std::iter::successors;
use std::ops::Range;
use thiserror::Error;
use time::{Date, Duration, Weekday};

/// Number of cells on a standard six-week calendar page
pub const DAYS_ON_PAGE: usize = 42;

/// Number of columns on a page
pub const DAYS_IN_WEEK: usize = 7;

const LONGEST_MONTH: usize = 31;

/// Smallest page that can show any month regardless of the weekday it starts
/// on
const MIN_DAYS_ON_PAGE: usize = LONGEST_MONTH + DAYS_IN_WEEK - 1;

/// Largest page accepted by [`PageConfig::new`]: twelve rows
const MAX_DAYS_ON_PAGE: usize = 12 * DAYS_IN_WEEK;

/// The weekday shown in the leftmost column of a page
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl WeekStart {
    /// Returns the column (0-6) in which `wd` is displayed
    pub fn column_of(self, wd: Weekday) -> usize {
        let n = match self {
            WeekStart::Sunday => wd.number_days_from_sunday(),
            WeekStart::Monday => wd.number_days_from_monday(),
        };
        usize::from(n)
    }

    /// Iterates over the weekdays of one page row, left to right
    pub fn weekdays(self) -> impl Iterator<Item = Weekday> {
        let first = match self {
            WeekStart::Sunday => Weekday::Sunday,
            WeekStart::Monday => Weekday::Monday,
        };
        successors(Some(first), |wd| Some(wd.next())).take(DAYS_IN_WEEK)
    }
}

/// Shape of the pages produced by [`Page::build`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct PageConfig {
    days_on_page: usize,
    week_start: WeekStart,
}

impl PageConfig {
    /// Creates a configuration for pages of `days_on_page` cells starting on
    /// Sunday.
    ///
    /// # Errors
    ///
    /// Returns [`PageSizeError`] if a page of that size could not fit a
    /// 31-day month that starts in the last column, or if it is longer than
    /// twelve weeks.
    pub fn new(days_on_page: usize) -> Result<PageConfig, PageSizeError> {
        if !(MIN_DAYS_ON_PAGE..=MAX_DAYS_ON_PAGE).contains(&days_on_page) {
            return Err(PageSizeError {
                days_on_page,
                minimum: MIN_DAYS_ON_PAGE,
                maximum: MAX_DAYS_ON_PAGE,
            });
        }
        Ok(PageConfig {
            days_on_page,
            week_start: WeekStart::default(),
        })
    }

    pub fn with_week_start(mut self, week_start: WeekStart) -> PageConfig {
        self.week_start = week_start;
        self
    }

    pub fn days_on_page(&self) -> usize {
        self.days_on_page
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }
}

impl Default for PageConfig {
    fn default() -> PageConfig {
        PageConfig {
            days_on_page: DAYS_ON_PAGE,
            week_start: WeekStart::default(),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("page size must be between {minimum} and {maximum} days, not {days_on_page}")]
pub struct PageSizeError {
    pub days_on_page: usize,
    pub minimum: usize,
    pub maximum: usize,
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("reached the end of time")]
pub struct OutOfTimeError;

/// One page of a month calendar: the day-of-month labels of every cell, in
/// order, starting with the trailing days of the previous month and ending
/// with the leading days of the next month.
///
/// The same label can occur twice on a page (e.g., the 1st of this month and
/// the 1st of next month); cells are told apart by their position.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Page {
    reference: Date,
    first_date: Date,
    last_date: Date,
    days: Vec<u8>,
    // Invariant: `current.end <= days.len()`
    current: Range<usize>,
}

impl Page {
    /// Builds the page showing the month that contains `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfTimeError`] if the page would need a day before
    /// [`Date::MIN`] or after [`Date::MAX`].
    pub fn build(reference: Date, config: &PageConfig) -> Result<Page, OutOfTimeError> {
        let first_of_month = reference.first_of_month();
        let lead = config.week_start().column_of(first_of_month.weekday());
        let first_date = iter_days_backwards(first_of_month)
            .nth(lead)
            .ok_or(OutOfTimeError)?;
        let mut days = Vec::with_capacity(config.days_on_page());
        let mut last_date = first_date;
        for d in iter_days_forwards(first_date).take(config.days_on_page()) {
            days.push(d.day());
            last_date = d;
        }
        if days.len() < config.days_on_page() {
            return Err(OutOfTimeError);
        }
        let current = lead..(lead + usize::from(reference.days_in_month()));
        Ok(Page {
            reference,
            first_date,
            last_date,
            days,
            current,
        })
    }

    /// Day-of-month labels of every cell
    pub fn days(&self) -> &[u8] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The date the page was built for
    pub fn reference(&self) -> Date {
        self.reference
    }

    /// Date shown in the first cell
    pub fn first_date(&self) -> Date {
        self.first_date
    }

    /// Date shown in the last cell
    pub fn last_date(&self) -> Date {
        self.last_date
    }

    /// Positions holding days of the month before the reference month
    pub fn prev_month_positions(&self) -> Range<usize> {
        0..self.current.start
    }

    /// Positions holding days of the reference month
    pub fn current_month_positions(&self) -> Range<usize> {
        self.current.clone()
    }

    /// Positions holding days of the month after the reference month
    pub fn next_month_positions(&self) -> Range<usize> {
        self.current.end..self.days.len()
    }

    /// Returns the date shown at `position`, or `None` if the position is not
    /// on the page
    pub fn date_at(&self, position: usize) -> Option<Date> {
        if position >= self.days.len() {
            return None;
        }
        let offset = i64::try_from(position).ok()?;
        self.first_date.checked_add(Duration::days(offset))
    }

    /// Returns the position at which `date` is shown, or `None` if the date is
    /// not on the page
    pub fn position_of(&self, date: Date) -> Option<usize> {
        if date < self.first_date || date > self.last_date {
            return None;
        }
        usize::try_from((date - self.first_date).whole_days()).ok()
    }

    /// Iterates over every cell as a `(position, date)` pair
    pub fn dates(&self) -> impl Iterator<Item = (usize, Date)> + '_ {
        iter_days_forwards(self.first_date)
            .take(self.days.len())
            .enumerate()
    }
}

// Both iterators yield `date` itself first
fn iter_days_forwards(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.next_day())
}

fn iter_days_backwards(date: Date) -> impl Iterator<Item = Date> {
    successors(Some(date), |&d| d.previous_day())
}
