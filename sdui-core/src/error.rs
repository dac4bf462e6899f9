//! Error types for descriptor parsing

use thiserror::Error;

/// Closed error taxonomy for descriptor parsing
///
/// Parsing is fail-fast: the first failure aborts the whole parse and no
/// partial tree is produced. Validation, by contrast, accumulates string
/// messages (see [`crate::validation::ValidationResult`]).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Malformed JSON input
    #[error("Failed to parse document: {message}")]
    Syntax {
        /// Error message
        message: String,
        /// Location in the input if available
        location: Option<String>,
    },

    /// A structurally required property is absent
    #[error("Missing required property '{property}'")]
    MissingProperty {
        /// Name of the missing property
        property: String,
        /// Kind being parsed when the property was found missing
        context: Option<String>,
    },

    /// Type tag outside the closed component set
    #[error("Unknown component kind '{tag}'")]
    UnknownKind {
        /// The unrecognized type tag
        tag: String,
    },

    /// Nesting deeper than the configured limit
    #[error("Maximum nesting depth of {limit} exceeded")]
    DepthExceeded {
        /// The configured depth limit
        limit: usize,
    },
}

/// Result type alias for descriptor parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

impl ParseError {
    /// Create a new syntax error
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
            location: None,
        }
    }

    /// Create a new syntax error with location
    #[must_use]
    pub fn syntax_at(message: impl Into<String>, location: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
            location: Some(location.into()),
        }
    }

    /// Create a new missing-property error
    #[must_use]
    pub fn missing_property(property: impl Into<String>) -> Self {
        Self::MissingProperty {
            property: property.into(),
            context: None,
        }
    }

    /// Create a new missing-property error with the kind being parsed
    #[must_use]
    pub fn missing_property_in(property: impl Into<String>, context: impl Into<String>) -> Self {
        Self::MissingProperty {
            property: property.into(),
            context: Some(context.into()),
        }
    }

    /// Create a new unknown-kind error
    #[must_use]
    pub fn unknown_kind(tag: impl Into<String>) -> Self {
        Self::UnknownKind { tag: tag.into() }
    }

    /// Create a new depth-exceeded error
    #[must_use]
    pub fn depth_exceeded(limit: usize) -> Self {
        Self::DepthExceeded { limit }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::Syntax {
            message: err.to_string(),
            location: Some(format!("line {}, column {}", err.line(), err.column())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = ParseError::syntax("unexpected token");
        assert!(matches!(err, ParseError::Syntax { .. }));

        let err = ParseError::missing_property_in("id", "button");
        match err {
            ParseError::MissingProperty { context, .. } => {
                assert_eq!(context.as_deref(), Some("button"));
            }
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_display() {
        let err = ParseError::unknown_kind("megabutton");
        assert!(err.to_string().contains("megabutton"));

        let err = ParseError::depth_exceeded(64);
        assert!(err.to_string().contains("64"));
    }

    #[test]
    fn test_syntax_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid").unwrap_err();
        let err: ParseError = json_err.into();
        match err {
            ParseError::Syntax { location, .. } => {
                assert!(location.is_some());
            }
            _ => panic!("Wrong error type"),
        }
    }
}
