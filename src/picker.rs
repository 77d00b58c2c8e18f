use crate::bounds::{self, DateBounds};
use crate::date::DateExt;
use crate::page::{OutOfTimeError, Page, PageConfig};
use crate::positions::{map_range_to_positions, PositionInterval};
use crate::range::DateRange;
use std::collections::BTreeSet;
use thiserror::Error;
use time::Date;

/// Values the owner of a [`RangePicker`] supplies with every interaction
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PickerInput {
    pub range: DateRange,
    pub bounds: DateBounds,
}

/// Receives the range proposed by each click
pub trait RangeListener {
    fn range_changed(&mut self, range: DateRange);
}

impl<F: FnMut(DateRange)> RangeListener for F {
    fn range_changed(&mut self, range: DateRange) {
        self(range);
    }
}

/// Everything a view needs in order to draw the current page
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PickerView {
    pub page: Page,
    pub active: PositionInterval,
    pub disabled: BTreeSet<usize>,
    pub has_prev_page: bool,
    pub has_next_page: bool,
    /// Header label, e.g., "March 2021"
    pub current_date: String,
}

/// The month currently on display plus the rules for turning clicks on its
/// cells into ranges.
///
/// The picker does not remember the range being selected; the owner passes the
/// current range in with every call and stores whatever range a click
/// produces.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RangePicker {
    date: Date,
    config: PageConfig,
}

impl RangePicker {
    pub fn new(initialize_with: Date) -> RangePicker {
        RangePicker {
            date: initialize_with,
            config: PageConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PageConfig) -> RangePicker {
        self.config = config;
        self
    }

    /// The date whose month is on display
    pub fn date(&self) -> Date {
        self.date
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// # Errors
    ///
    /// Returns [`OutOfTimeError`] if the displayed month is at the very edge of
    /// the calendar.
    pub fn page(&self) -> Result<Page, OutOfTimeError> {
        Page::build(self.date, &self.config)
    }

    /// # Errors
    ///
    /// See [`RangePicker::page`].
    pub fn active_positions(
        &self,
        input: &PickerInput,
    ) -> Result<PositionInterval, OutOfTimeError> {
        Ok(map_range_to_positions(&self.page()?, &input.range))
    }

    /// # Errors
    ///
    /// See [`RangePicker::page`].
    pub fn disabled_positions(
        &self,
        input: &PickerInput,
    ) -> Result<BTreeSet<usize>, OutOfTimeError> {
        Ok(bounds::disabled_positions(&self.page()?, &input.bounds))
    }

    pub fn has_next_page(&self, input: &PickerInput) -> bool {
        bounds::is_next_page_available(self.date, input.bounds.max())
    }

    pub fn has_prev_page(&self, input: &PickerInput) -> bool {
        bounds::is_prev_page_available(self.date, input.bounds.min())
    }

    /// Returns the header label for the displayed month, e.g., "March 2021"
    pub fn current_date(&self) -> String {
        self.date.month_label()
    }

    /// # Errors
    ///
    /// See [`RangePicker::page`].
    pub fn view(&self, input: &PickerInput) -> Result<PickerView, OutOfTimeError> {
        let page = self.page()?;
        let active = map_range_to_positions(&page, &input.range);
        let disabled = bounds::disabled_positions(&page, &input.bounds);
        Ok(PickerView {
            page,
            active,
            disabled,
            has_prev_page: self.has_prev_page(input),
            has_next_page: self.has_next_page(input),
            current_date: self.current_date(),
        })
    }

    /// Returns the date shown at `position` on the current page.
    ///
    /// # Errors
    ///
    /// Returns an error if `position` is not on the page or the page cannot
    /// be built.
    pub fn resolve_position(&self, position: usize) -> Result<Date, PickerError> {
        let page = self.page()?;
        page.date_at(position).ok_or(PickerError::PositionOutOfPage {
            position,
            len: page.len(),
        })
    }

    /// Computes the range that results from clicking the cell at `position`
    /// while `input.range` is the current range.
    ///
    /// # Errors
    ///
    /// See [`RangePicker::resolve_position`].
    pub fn handle_day_click(
        &self,
        input: &PickerInput,
        position: usize,
    ) -> Result<DateRange, PickerError> {
        let clicked = self.resolve_position(position)?;
        let range = next_range(&input.range, clicked);
        tracing::debug!(position, %clicked, from = %input.range, to = %range, "Day clicked");
        Ok(range)
    }

    /// Like [`RangePicker::handle_day_click`], but reports the new range to
    /// `listener`
    ///
    /// # Errors
    ///
    /// See [`RangePicker::resolve_position`].  The listener is not called on
    /// error.
    pub fn click<L: RangeListener>(
        &self,
        input: &PickerInput,
        position: usize,
        listener: &mut L,
    ) -> Result<(), PickerError> {
        let range = self.handle_day_click(input, position)?;
        listener.range_changed(range);
        Ok(())
    }

    /// Shows the following month.  Bounds are not checked; consult
    /// [`RangePicker::has_next_page`] first.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfTimeError`] if there is no following month, in which
    /// case the picker is unchanged.
    pub fn switch_to_next_page(&mut self) -> Result<(), OutOfTimeError> {
        self.date = self.date.checked_add_months(1).ok_or(OutOfTimeError)?;
        tracing::debug!(date = %self.date, "Switched to next page");
        Ok(())
    }

    /// Shows the preceding month.  Bounds are not checked; consult
    /// [`RangePicker::has_prev_page`] first.
    ///
    /// # Errors
    ///
    /// Returns [`OutOfTimeError`] if there is no preceding month, in which
    /// case the picker is unchanged.
    pub fn switch_to_prev_page(&mut self) -> Result<(), OutOfTimeError> {
        self.date = self.date.checked_add_months(-1).ok_or(OutOfTimeError)?;
        tracing::debug!(date = %self.date, "Switched to previous page");
        Ok(())
    }
}

/// Advances the two-click selection protocol.
///
/// An empty range becomes a pending range starting at `clicked`.  A pending
/// range is completed if `clicked` is after its start and abandoned
/// otherwise.  A complete range is cleared so that the next click starts a
/// new selection.
pub fn next_range(current: &DateRange, clicked: Date) -> DateRange {
    match (current.start(), current.end()) {
        (None, _) => DateRange::pending(clicked),
        (Some(start), None) => DateRange::complete(start, clicked).unwrap_or_default(),
        (Some(_), Some(_)) => DateRange::empty(),
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum PickerError {
    #[error("position {position} is not on the page ({len} days)")]
    PositionOutOfPage { position: usize, len: usize },
    #[error(transparent)]
    OutOfTime(#[from] OutOfTimeError),
}
