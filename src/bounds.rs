use crate::date::DateExt;
use crate::page::Page;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use thiserror::Error;
use time::Date;

/// Inclusive limits on the dates that can be picked.  A missing limit leaves
/// that side unbounded.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateBounds {
    min: Option<Date>,
    max: Option<Date>,
}

impl DateBounds {
    pub const UNBOUNDED: DateBounds = DateBounds {
        min: None,
        max: None,
    };

    /// # Errors
    ///
    /// Returns [`BoundsError`] if both limits are given and `min` is after
    /// `max`.
    pub fn new(min: Option<Date>, max: Option<Date>) -> Result<DateBounds, BoundsError> {
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(BoundsError { min, max });
            }
        }
        Ok(DateBounds { min, max })
    }

    pub const fn min(&self) -> Option<Date> {
        self.min
    }

    pub const fn max(&self) -> Option<Date> {
        self.max
    }

    pub fn contains(&self, date: Date) -> bool {
        self.min.map_or(true, |min| date >= min) && self.max.map_or(true, |max| date <= max)
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
#[error("minimum date ({min}) is after maximum date ({max})")]
pub struct BoundsError {
    pub min: Date,
    pub max: Date,
}

/// Returns the positions on `page` whose dates fall outside `bounds`
pub fn disabled_positions(page: &Page, bounds: &DateBounds) -> BTreeSet<usize> {
    page.dates()
        .filter(|&(_, date)| !bounds.contains(date))
        .map(|(pos, _)| pos)
        .collect()
}

/// Returns whether the month after `reference` may be shown, i.e., whether it
/// does not lie after the month of `max`
pub fn is_next_page_available(reference: Date, max: Option<Date>) -> bool {
    let Some(max) = max else {
        return true;
    };
    reference
        .checked_add_months(1)
        .is_some_and(|next| next.cmp_month(max) != Ordering::Greater)
}

/// Returns whether the month before `reference` may be shown, i.e., whether it
/// does not lie before the month of `min`
pub fn is_prev_page_available(reference: Date, min: Option<Date>) -> bool {
    let Some(min) = min else {
        return true;
    };
    reference
        .checked_add_months(-1)
        .is_some_and(|prev| prev.cmp_month(min) != Ordering::Less)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageConfig;
    use time::macros::date;

    fn march_2021() -> Page {
        Page::build(date!(2021 - 03 - 10), &PageConfig::default()).unwrap()
    }

    #[test]
    fn test_unbounded_disables_nothing() {
        assert!(disabled_positions(&march_2021(), &DateBounds::UNBOUNDED).is_empty());
    }

    #[test]
    fn test_min_date() {
        let bounds = DateBounds::new(Some(date!(2021 - 03 - 05)), None).unwrap();
        let disabled = disabled_positions(&march_2021(), &bounds);
        // Feb 28 and March 1-4
        assert_eq!(disabled, (0..5).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_max_date() {
        let bounds = DateBounds::new(None, Some(date!(2021 - 03 - 29))).unwrap();
        let disabled = disabled_positions(&march_2021(), &bounds);
        // March 30, 31, and April 1-10
        assert_eq!(disabled, (30..42).collect::<BTreeSet<_>>());
    }

    #[test]
    fn test_min_and_max_date() {
        let bounds =
            DateBounds::new(Some(date!(2021 - 03 - 02)), Some(date!(2021 - 04 - 02))).unwrap();
        let disabled = disabled_positions(&march_2021(), &bounds);
        let expected = [0, 1].into_iter().chain(34..42).collect::<BTreeSet<_>>();
        assert_eq!(disabled, expected);
    }

    #[test]
    fn test_bounds_out_of_order() {
        assert_eq!(
            DateBounds::new(Some(date!(2021 - 03 - 02)), Some(date!(2021 - 03 - 01))),
            Err(BoundsError {
                min: date!(2021 - 03 - 02),
                max: date!(2021 - 03 - 01)
            })
        );
        assert!(
            DateBounds::new(Some(date!(2021 - 03 - 02)), Some(date!(2021 - 03 - 02))).is_ok()
        );
    }

    #[test]
    fn test_contains() {
        let bounds =
            DateBounds::new(Some(date!(2021 - 03 - 02)), Some(date!(2021 - 03 - 04))).unwrap();
        assert!(!bounds.contains(date!(2021 - 03 - 01)));
        assert!(bounds.contains(date!(2021 - 03 - 02)));
        assert!(bounds.contains(date!(2021 - 03 - 04)));
        assert!(!bounds.contains(date!(2021 - 03 - 05)));
    }

    #[test]
    fn test_next_page_available() {
        let reference = date!(2021 - 03 - 10);
        assert!(is_next_page_available(reference, None));
        assert!(is_next_page_available(reference, Some(date!(2021 - 04 - 01))));
        assert!(is_next_page_available(reference, Some(date!(2022 - 01 - 01))));
        assert!(!is_next_page_available(reference, Some(date!(2021 - 03 - 31))));
        assert!(!is_next_page_available(reference, Some(date!(2021 - 03 - 01))));
        assert!(!is_next_page_available(reference, Some(date!(2020 - 06 - 01))));
    }

    #[test]
    fn test_next_page_across_year() {
        assert!(is_next_page_available(
            date!(2020 - 12 - 31),
            Some(date!(2021 - 01 - 01))
        ));
        assert!(!is_next_page_available(
            date!(2020 - 12 - 31),
            Some(date!(2020 - 12 - 31))
        ));
    }

    #[test]
    fn test_prev_page_available() {
        let reference = date!(2021 - 03 - 10);
        assert!(is_prev_page_available(reference, None));
        assert!(is_prev_page_available(reference, Some(date!(2021 - 02 - 28))));
        assert!(is_prev_page_available(reference, Some(date!(2020 - 02 - 28))));
        assert!(!is_prev_page_available(reference, Some(date!(2021 - 03 - 01))));
        assert!(!is_prev_page_available(reference, Some(date!(2021 - 05 - 01))));
    }

    #[test]
    fn test_paging_at_end_of_time() {
        assert!(!is_next_page_available(Date::MAX, Some(Date::MAX)));
        assert!(!is_prev_page_available(Date::MIN, Some(Date::MIN)));
    }
}
