//! Date-range selection for month calendar pages.
//!
//! A [`RangePicker`] shows one month at a time as a fixed-size [`Page`] of day
//! cells, including the spill-over days of the neighbouring months.  Given
//! the range the caller currently holds, it reports which cells are active
//! and which are out of bounds, and turns a click on a cell into the next
//! range: the first click picks the start, the second the end.
mod bounds;
mod date;
mod page;
mod picker;
mod positions;
mod range;
pub use crate::bounds::{
    disabled_positions, is_next_page_available, is_prev_page_available, BoundsError, DateBounds,
};
pub use crate::date::DateExt;
pub use crate::page::{
    OutOfTimeError, Page, PageConfig, PageSizeError, WeekStart, DAYS_IN_WEEK, DAYS_ON_PAGE,
};
pub use crate::picker::{
    next_range, PickerError, PickerInput, PickerView, RangeListener, RangePicker,
};
pub use crate::positions::{map_range_to_positions, PositionInterval};
pub use crate::range::{DateRange, RangeError};
