//! Content error types
//!
//! Errors for page state transitions. Lookups that can miss (case studies,
//! labels) return `Option` or fall back instead.

use std::fmt;

/// Error type for page state and navigation operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    /// Category is not one of the filter's known categories
    UnknownCategory(String),
    /// No venture with this slug
    UnknownVenture(String),
    /// Back navigation with nothing behind the current page
    NoHistory,
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::UnknownCategory(cat) => write!(f, "Unknown category: {}", cat),
            ContentError::UnknownVenture(slug) => write!(f, "Unknown venture: {}", slug),
            ContentError::NoHistory => write!(f, "No previous page in history"),
        }
    }
}

impl std::error::Error for ContentError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_display() {
        let err = ContentError::UnknownCategory("podcasts".to_string());
        let msg = format!("{}", err);
        assert!(msg.contains("Unknown category"));
        assert!(msg.contains("podcasts"));
    }

    #[test]
    fn test_unknown_venture_display() {
        let msg = ContentError::UnknownVenture("acme".to_string()).to_string();
        assert_eq!(msg, "Unknown venture: acme");
    }

    #[test]
    fn test_no_history_display() {
        assert_eq!(ContentError::NoHistory.to_string(), "No previous page in history");
    }
}
