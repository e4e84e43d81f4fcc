use std::{
    cmp::Ordering,
    fmt::{Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
};
use thiserror::Error;

/// Errors produced when building a [`TermCalendar`] or resolving a term name
/// against one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermError {
    #[error("unknown term name {0:?}")]
    InvalidTermName(String),

    #[error("term calendar must contain at least one term name")]
    EmptyCalendar,

    #[error("duplicate term name {0:?} in calendar")]
    DuplicateTermName(String),
}

/// The sequence of term names that make up one academic year, in
/// chronological order.
///
/// The sequence is caller-configured: `["Fall", "Spring", "Summer"]` by
/// default, but any ordering works as long as names are unique. Every term
/// name appearing in a plan must resolve against the calendar; chronology is
/// never guessed for names the calendar does not know.
#[derive(Debug, Clone, PartialEq)]
pub struct TermCalendar {
    names: Vec<String>,
}

impl TermCalendar {
    pub fn new(names: Vec<String>) -> Result<Self, TermError> {
        if names.is_empty() {
            return Err(TermError::EmptyCalendar);
        }

        for (idx, name) in names.iter().enumerate() {
            if names[..idx].contains(name) {
                return Err(TermError::DuplicateTermName(name.clone()));
            }
        }

        Ok(Self { names })
    }

    /// Position of a term name within the academic year.
    pub fn index_of(&self, name: &str) -> Result<usize, TermError> {
        self.names
            .iter()
            .position(|n| n == name)
            .ok_or_else(|| TermError::InvalidTermName(name.to_string()))
    }

    /// Resolve a (year, term-name) pair into an orderable [`Slot`].
    pub fn slot(&self, year: i32, term: &str) -> Result<Slot, TermError> {
        let index = self.index_of(term)?;

        Ok(Slot {
            year,
            index,
            term: self.names[index].clone(),
        })
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Default for TermCalendar {
    fn default() -> Self {
        Self {
            names: vec!["Fall".to_string(), "Spring".to_string(), "Summer".to_string()],
        }
    }
}

/// One scheduling period in a plan: a (year, term) pair.
///
/// Slots order chronologically: by plan year first, then by the term's
/// position within the academic year. The term name itself never
/// participates in comparisons; a calendar guarantees a bijection between
/// the name and its position.
#[derive(Debug, Clone)]
pub struct Slot {
    year: i32,
    index: usize,
    term: String,
}

impl Slot {
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn term(&self) -> &str {
        &self.term
    }
}

impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        self.year == other.year && self.index == other.index
    }
}

impl Eq for Slot {}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.index).cmp(&(other.year, other.index))
    }
}

impl Hash for Slot {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.year.hash(state);
        self.index.hash(state);
    }
}

impl Display for Slot {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Year {} {}", self.year, self.term)
    }
}
