use crate::term::TermCalendar;

/// Caller-tunable knobs for one validation run.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationConfig {
    /// Term names per academic year, in chronological order.
    pub calendar: TermCalendar,
    /// Inclusive lower bound on per-term credits.
    pub min_credits: u32,
    /// Inclusive upper bound on per-term credits.
    pub max_credits: u32,
    /// Credit weight assumed for courses missing from the catalog.
    pub default_credits: u32,
}

impl ValidationConfig {
    pub const DEFAULT_MIN_CREDITS: u32 = 12;
    pub const DEFAULT_MAX_CREDITS: u32 = 18;
    pub const DEFAULT_COURSE_CREDITS: u32 = 3;
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            calendar: TermCalendar::default(),
            min_credits: Self::DEFAULT_MIN_CREDITS,
            max_credits: Self::DEFAULT_MAX_CREDITS,
            default_credits: Self::DEFAULT_COURSE_CREDITS,
        }
    }
}
