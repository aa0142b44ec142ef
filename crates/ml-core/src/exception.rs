//! Start-of-key correction for a known spelling variation.
//!
//! ഉത്സവം and ഉൽസവം are the same word; the chillu spelling yields `UL…`
//! where the conjunct spelling yields `U0…`. The rule rewrites the pivot so
//! both agree. It fires at most once, and only at the start of the key.

use tracing::debug;

use crate::settings::{settings, ExceptionSettings};

/// Apply the configured correction to a narrow key.
pub fn correct(key2: &str) -> String {
    correct_with(&settings().exception, key2)
}

pub fn correct_with(rule: &ExceptionSettings, key2: &str) -> String {
    if !rule.enabled {
        return key2.to_string();
    }
    for lead in &rule.leads {
        let Some(rest) = key2.strip_prefix(lead.as_str()) else {
            continue;
        };
        let Some(tail) = rest.strip_prefix(rule.pivot.as_str()) else {
            continue;
        };
        if rule.trails.iter().any(|t| tail.starts_with(t.as_str())) {
            debug!(key2, lead = lead.as_str(), "exception corrected");
            return format!("{lead}{}{tail}", rule.replacement);
        }
    }
    key2.to_string()
}
