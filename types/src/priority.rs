//! Task priority levels and the priority filter.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Priority assigned to a task at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown priority {0:?} (expected high, medium or low)")]
pub struct PriorityParseError(pub String);

impl Priority {
    /// All priorities in display order.
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// The next priority in display order, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Priority {
    type Err = PriorityParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(PriorityParseError(s.to_string())),
        }
    }
}

/// The active list filter. `None` shows every task.
pub type PriorityFilter = Option<Priority>;

/// Advance a filter through All -> High -> Medium -> Low -> All.
#[must_use]
pub fn cycle_filter(filter: PriorityFilter) -> PriorityFilter {
    match filter {
        None => Some(Priority::High),
        Some(Priority::Low) => None,
        Some(p) => Some(p.next()),
    }
}

#[must_use]
pub fn filter_matches(filter: PriorityFilter, priority: Priority) -> bool {
    filter.is_none_or(|wanted| wanted == priority)
}

#[cfg(test)]
mod tests {
    use super::{Priority, PriorityParseError, cycle_filter, filter_matches};

    #[test]
    fn default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("High".parse::<Priority>(), Ok(Priority::High));
        assert_eq!(" medium ".parse::<Priority>(), Ok(Priority::Medium));
        assert_eq!("LOW".parse::<Priority>(), Ok(Priority::Low));
    }

    #[test]
    fn rejects_unknown_values() {
        assert_eq!(
            "urgent".parse::<Priority>(),
            Err(PriorityParseError("urgent".to_string()))
        );
        assert!("".parse::<Priority>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Priority::High).expect("serialize");
        assert_eq!(json, "\"high\"");
        let back: Priority = serde_json::from_str("\"low\"").expect("deserialize");
        assert_eq!(back, Priority::Low);
    }

    #[test]
    fn filter_cycle_visits_every_state() {
        let mut filter = None;
        let mut seen = Vec::new();
        for _ in 0..4 {
            filter = cycle_filter(filter);
            seen.push(filter);
        }
        assert_eq!(
            seen,
            vec![
                Some(Priority::High),
                Some(Priority::Medium),
                Some(Priority::Low),
                None
            ]
        );
    }

    #[test]
    fn empty_filter_matches_everything() {
        for p in Priority::ALL {
            assert!(filter_matches(None, p));
        }
        assert!(filter_matches(Some(Priority::Low), Priority::Low));
        assert!(!filter_matches(Some(Priority::Low), Priority::High));
    }
}
