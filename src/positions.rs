use crate::date::DateExt;
use crate::page::Page;
use crate::range::DateRange;
use std::cmp::Ordering;
use std::ops::Range;
use time::Date;

/// Inclusive span of page positions to display as active.
///
/// An endpoint is `None` when the corresponding end of the range does not
/// project onto the page.  A pending range has only `start` set.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PositionInterval {
    pub start: Option<usize>,
    pub end: Option<usize>,
}

impl PositionInterval {
    pub const EMPTY: PositionInterval = PositionInterval {
        start: None,
        end: None,
    };

    /// Returns whether the cell at `position` should be shown as active.  When
    /// only one endpoint is set, only that cell is active.
    pub fn contains(&self, position: usize) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => (start..=end).contains(&position),
            (Some(p), None) | (None, Some(p)) => p == position,
            (None, None) => false,
        }
    }
}

/// Projects `range` onto `page`.
///
/// A start earlier than every cell on the page is clamped to the first
/// position, and an end later than every cell is clamped to the last one.
/// Clamping only applies to a range that overlaps the page: if the start is
/// after the last cell or the end is before the first cell, nothing is
/// active, rather than a single clamped cell at the page edge.
pub fn map_range_to_positions(page: &Page, range: &DateRange) -> PositionInterval {
    if range.start().is_some_and(|start| start > page.last_date())
        || range.end().is_some_and(|end| end < page.first_date())
    {
        return PositionInterval::EMPTY;
    }
    let reference = page.reference();
    let start = range
        .start()
        .and_then(|start| match start.cmp_month(reference) {
            Ordering::Less => {
                Some(find_within(page, page.prev_month_positions(), start).unwrap_or(0))
            }
            Ordering::Equal => Some(in_current_month(page, start)),
            Ordering::Greater => find_within(page, page.next_month_positions(), start),
        });
    let end = range.end().and_then(|end| match end.cmp_month(reference) {
        Ordering::Less => find_within(page, page.prev_month_positions(), end),
        Ordering::Equal => Some(in_current_month(page, end)),
        Ordering::Greater => Some(
            find_within(page, page.next_month_positions(), end)
                .unwrap_or_else(|| page.len().saturating_sub(1)),
        ),
    });
    PositionInterval { start, end }
}

fn in_current_month(page: &Page, date: Date) -> usize {
    page.current_month_positions().start + usize::from(date.day()) - 1
}

fn find_within(page: &Page, positions: Range<usize>, date: Date) -> Option<usize> {
    page.position_of(date).filter(|p| positions.contains(p))
}
