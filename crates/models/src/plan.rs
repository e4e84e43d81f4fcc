use crate::term::{Slot, TermCalendar, TermError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One course placed into one (year, term) slot of a student's plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedEntry {
    pub course_code: String,
    /// Relative plan year, numbered from 1.
    pub year: i32,
    pub term: String,
}

impl PlannedEntry {
    pub fn new(course_code: impl Into<String>, year: i32, term: impl Into<String>) -> Self {
        Self {
            course_code: course_code.into(),
            year,
            term: term.into(),
        }
    }
}

/// A student's full multi-year plan.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Plan {
    pub entries: Vec<PlannedEntry>,
    /// First calendar year of the plan. Informational only: ordering is
    /// relative and never consults it.
    pub start_year: i32,
}

/// Entries of one plan grouped by slot, in chronological slot order; within
/// a slot, entries keep their input order.
pub type SlotMap<'a> = BTreeMap<Slot, Vec<&'a PlannedEntry>>;

impl Plan {
    pub fn new(entries: Vec<PlannedEntry>, start_year: i32) -> Self {
        Self { entries, start_year }
    }

    /// Absolute calendar year for a relative plan year.
    pub fn calendar_year(&self, plan_year: i32) -> i32 {
        self.start_year + plan_year - 1
    }

    /// Group the plan's entries by their (year, term) slot.
    pub fn by_slot<'a>(&'a self, calendar: &TermCalendar) -> Result<SlotMap<'a>, TermError> {
        let mut slots = SlotMap::new();

        for entry in &self.entries {
            let slot = calendar.slot(entry.year, &entry.term)?;
            slots.entry(slot).or_default().push(entry);
        }

        Ok(slots)
    }
}

/// Input errors that reject a plan before any checking runs.
///
/// These are malformed-input conditions, distinct from semantic findings:
/// a plan that is well-formed but inconsistent still validates successfully
/// and reports its problems as issues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    #[error("course code must not be empty (year {year}, term {term:?})")]
    EmptyCourseCode { year: i32, term: String },

    #[error("invalid year {0}: plan years are numbered from 1")]
    InvalidYear(i32),

    #[error(transparent)]
    Term(#[from] TermError),
}
