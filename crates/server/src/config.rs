use log::warn;
use models::config::ValidationConfig;
use models::term::TermCalendar;

/// Build the engine configuration from environment overrides, falling back
/// to the defaults (Fall/Spring/Summer ordering, 12-18 credits, 3-credit
/// default weight).
///
/// Recognized variables: `TERM_ORDER` (comma-separated term names in
/// chronological order), `MIN_TERM_CREDITS`, `MAX_TERM_CREDITS`,
/// `DEFAULT_COURSE_CREDITS`.
pub fn validation_config() -> ValidationConfig {
    let mut config = ValidationConfig::default();

    if let Ok(order) = std::env::var("TERM_ORDER") {
        let names: Vec<String> = order
            .split(',')
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();

        match TermCalendar::new(names) {
            Ok(calendar) => config.calendar = calendar,
            Err(e) => warn!("Ignoring TERM_ORDER: {e}"),
        }
    }

    if let Some(min) = parse_env("MIN_TERM_CREDITS") {
        config.min_credits = min;
    }

    if let Some(max) = parse_env("MAX_TERM_CREDITS") {
        config.max_credits = max;
    }

    if let Some(default) = parse_env("DEFAULT_COURSE_CREDITS") {
        config.default_credits = default;
    }

    config
}

fn parse_env(name: &str) -> Option<u32> {
    let value = std::env::var(name).ok()?;

    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            warn!("Ignoring {name}: {value:?} is not a number");
            None
        }
    }
}
