//! Error types for Ice.
//!
//! Dispatch itself never fails: an unresolvable handler, a disabled element or
//! a malformed attribute all degrade to "no invocation". The errors below are
//! raised while the delegation layer is being *built*:
//!
//! - [`IceError`] - Top-level error type returned by initialization
//! - [`SelectorError`] - A selector string could not be parsed
//! - [`NamespaceError`] - A handler could not be registered under a path
//! - [`ConfigError`] - The configuration is inconsistent

use thiserror::Error;

/// Top-level error type for all Ice operations.
#[derive(Error, Debug)]
pub enum IceError {
    /// A selector could not be parsed.
    #[error("selector error: {0}")]
    Selector(#[from] SelectorError),

    /// A handler could not be registered.
    #[error("namespace error: {0}")]
    Namespace(#[from] NamespaceError),

    /// The configuration was rejected.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised while parsing a selector list.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// The selector (or one entry of a selector list) is empty.
    #[error("empty selector")]
    Empty,

    /// An attribute selector was opened but never closed.
    #[error("unterminated attribute selector in `{0}`")]
    Unterminated(String),

    /// An attribute selector used an operator other than `=` or `^=`.
    #[error("unsupported attribute operator in `{0}`")]
    UnsupportedOperator(String),

    /// A quoted value was malformed.
    #[error("invalid attribute value in `{0}`")]
    InvalidValue(String),

    /// Text was left over after the last attribute selector.
    #[error("unexpected trailing input `{0}`")]
    Trailing(String),
}

/// Errors raised while registering handlers in a namespace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// The path had no segments.
    #[error("handler path is empty")]
    EmptyPath,

    /// One of the dot-separated segments was empty.
    #[error("handler path `{0}` contains an empty segment")]
    EmptySegment(String),

    /// The path is already registered in a table that rejects duplicates.
    #[error("handler `{0}` is already registered")]
    Duplicate(String),

    /// A segment is already bound to something incompatible.
    #[error("`{path}` conflicts with an existing {existing}")]
    Conflict {
        /// The path being registered.
        path: String,
        /// What the conflicting entry is.
        existing: &'static str,
    },
}

/// Errors raised while validating the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The attribute prefix is empty or not a valid attribute name fragment.
    #[error("invalid attribute prefix `{0}`")]
    InvalidPrefix(String),

    /// A default binding names no event.
    #[error("default binding has an empty event name")]
    EmptyEventName,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IceError::from(SelectorError::Unterminated("[data-ice".into()));
        assert_eq!(
            err.to_string(),
            "selector error: unterminated attribute selector in `[data-ice`"
        );

        let err = IceError::from(NamespaceError::Conflict {
            path: "app.run".into(),
            existing: "handler",
        });
        assert_eq!(
            err.to_string(),
            "namespace error: `app.run` conflicts with an existing handler"
        );
    }

    #[test]
    fn test_every_variant_converts_from_source() {
        let errors = [
            IceError::from(SelectorError::Empty),
            IceError::from(NamespaceError::EmptySegment("app..run".into())),
            IceError::from(ConfigError::EmptyEventName),
        ];
        assert!(matches!(errors[0], IceError::Selector(_)));
        assert!(matches!(errors[1], IceError::Namespace(_)));
        assert!(matches!(errors[2], IceError::Config(_)));
        assert_eq!(
            errors[2].to_string(),
            "config error: default binding has an empty event name"
        );
    }
}
