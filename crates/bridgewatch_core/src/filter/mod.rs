//! Predicates behind the list views.
//!
//! Each view owns a criteria struct whose fields are all optional. A record is
//! kept when it satisfies every criterion that is set; an unset or empty
//! criterion never excludes anything, so default criteria keep every record.

mod history;
mod plan;
mod task;

pub use history::HistoryFilter;
pub use plan::PlanFilter;
pub use task::TaskFilter;

use crate::error::AppError;
use crate::model::parse_day;
use serde::Serialize;
use time::{Date, OffsetDateTime, UtcOffset};

pub trait Criteria<R> {
    fn matches(&self, record: &R) -> bool;
}

/// Borrows the records of `source` that satisfy `criteria`, in source order.
pub fn filter<'a, R, C>(source: &'a [R], criteria: &C) -> Vec<&'a R>
where
    C: Criteria<R> + ?Sized,
{
    source
        .iter()
        .filter(|record| criteria.matches(record))
        .collect()
}

/// Inclusive range of calendar days.
///
/// Timestamps are reduced to their day at `offset` before comparison.
/// `start > end` is accepted. No single day falls inside such a range, but an
/// interval that spans both ends still overlaps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: Date,
    pub end: Date,
    #[serde(skip)]
    pub offset: UtcOffset,
}

impl DateRange {
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            start,
            end,
            offset: UtcOffset::UTC,
        }
    }

    pub fn parse(start: &str, end: &str) -> Result<Self, AppError> {
        let start = parse_day(start).map_err(|err| AppError::invalid_input(err.message()))?;
        let end = parse_day(end).map_err(|err| AppError::invalid_input(err.message()))?;
        Ok(Self::new(start, end))
    }

    pub fn with_offset(mut self, offset: UtcOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn contains(&self, at: OffsetDateTime) -> bool {
        let day = at.to_offset(self.offset).date();
        day >= self.start && day <= self.end
    }

    /// True when `[start, end]` shares at least one day with this range.
    pub fn overlaps(&self, start: Date, end: Date) -> bool {
        start <= self.end && end >= self.start
    }
}

/// Exact match, with `None` and `""` treated as "any".
pub(crate) fn text_matches(wanted: Option<&str>, actual: &str) -> bool {
    match wanted {
        None => true,
        Some(value) if value.is_empty() => true,
        Some(value) => value == actual,
    }
}

pub(crate) fn optional_text_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(value) if value.is_empty() => true,
        Some(value) => actual == Some(value),
    }
}

/// Distinct values of one field in first-seen order, for filter option lists.
pub fn distinct<'a, R, F>(records: &'a [R], field: F) -> Vec<&'a str>
where
    F: Fn(&'a R) -> &'a str,
{
    let mut values: Vec<&'a str> = Vec::new();
    for record in records {
        let value = field(record);
        if !values.contains(&value) {
            values.push(value);
        }
    }
    values
}
