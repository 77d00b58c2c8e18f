use std::fmt;
use thiserror::Error;
use time::Date;

/// A date range as supplied by, and handed back to, the owner of a picker.
///
/// A range with neither endpoint is *empty*; one with only a start is
/// *pending*, i.e., waiting for its end to be picked; one with both is
/// *complete*.  The end of a complete range is always strictly after its
/// start.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct DateRange {
    start: Option<Date>,
    end: Option<Date>,
}

impl DateRange {
    pub const fn empty() -> DateRange {
        DateRange {
            start: None,
            end: None,
        }
    }

    pub const fn pending(start: Date) -> DateRange {
        DateRange {
            start: Some(start),
            end: None,
        }
    }

    /// # Errors
    ///
    /// Returns [`RangeError::EndNotAfterStart`] if `end` is not strictly after
    /// `start`.
    pub fn complete(start: Date, end: Date) -> Result<DateRange, RangeError> {
        if end <= start {
            return Err(RangeError::EndNotAfterStart { start, end });
        }
        Ok(DateRange {
            start: Some(start),
            end: Some(end),
        })
    }

    /// Creates a range from optional endpoints.
    ///
    /// # Errors
    ///
    /// Returns an error if `end` is given without `start` or is not strictly
    /// after `start`.
    pub fn new(start: Option<Date>, end: Option<Date>) -> Result<DateRange, RangeError> {
        match (start, end) {
            (None, None) => Ok(DateRange::empty()),
            (Some(start), None) => Ok(DateRange::pending(start)),
            (Some(start), Some(end)) => DateRange::complete(start, end),
            (None, Some(end)) => Err(RangeError::EndWithoutStart { end }),
        }
    }

    pub const fn start(&self) -> Option<Date> {
        self.start
    }

    pub const fn end(&self) -> Option<Date> {
        self.end
    }

    pub const fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    pub const fn is_pending(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

// Formatted as an ISO 8601 interval, with ".." for an open end
impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.start {
            Some(start) => write!(f, "{start}")?,
            None => write!(f, "..")?,
        }
        match self.end {
            Some(end) => write!(f, "/{end}"),
            None => write!(f, "/.."),
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, Error, PartialEq)]
pub enum RangeError {
    #[error("range has an end ({end}) but no start")]
    EndWithoutStart { end: Date },
    #[error("range end ({end}) is not after its start ({start})")]
    EndNotAfterStart { start: Date, end: Date },
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn test_new() {
        assert_eq!(DateRange::new(None, None), Ok(DateRange::empty()));
        assert_eq!(
            DateRange::new(Some(date!(2021 - 03 - 10)), None),
            Ok(DateRange::pending(date!(2021 - 03 - 10)))
        );
        let r = DateRange::new(Some(date!(2021 - 03 - 10)), Some(date!(2021 - 03 - 15))).unwrap();
        assert_eq!(r.start(), Some(date!(2021 - 03 - 10)));
        assert_eq!(r.end(), Some(date!(2021 - 03 - 15)));
        assert!(r.is_complete());
    }

    #[test]
    fn test_new_rejects_end_without_start() {
        assert_eq!(
            DateRange::new(None, Some(date!(2021 - 03 - 15))),
            Err(RangeError::EndWithoutStart {
                end: date!(2021 - 03 - 15)
            })
        );
    }

    #[test]
    fn test_complete_rejects_same_or_earlier_end() {
        assert!(DateRange::complete(date!(2021 - 03 - 10), date!(2021 - 03 - 10)).is_err());
        let e = DateRange::complete(date!(2021 - 03 - 10), date!(2021 - 03 - 05)).unwrap_err();
        assert_eq!(
            e.to_string(),
            "range end (2021-03-05) is not after its start (2021-03-10)"
        );
    }

    #[test]
    fn test_states() {
        let empty = DateRange::empty();
        assert!(empty.is_empty() && !empty.is_pending() && !empty.is_complete());
        let pending = DateRange::pending(date!(2021 - 03 - 10));
        assert!(!pending.is_empty() && pending.is_pending() && !pending.is_complete());
        assert_eq!(DateRange::default(), empty);
    }

    #[test]
    fn test_display() {
        assert_eq!(DateRange::empty().to_string(), "../..");
        assert_eq!(
            DateRange::pending(date!(2021 - 03 - 10)).to_string(),
            "2021-03-10/.."
        );
        assert_eq!(
            DateRange::complete(date!(2021 - 03 - 10), date!(2021 - 03 - 15))
                .unwrap()
                .to_string(),
            "2021-03-10/2021-03-15"
        );
    }
}
