//! Extraction errors

use evgen_ast::Span;
use thiserror::Error;

/// Why an event could not be extracted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventErrorKind {
    /// Payload property whose type has no event type equivalent
    #[error("unable to determine event type for \"{property}\": {found}")]
    UnsupportedPropertyType { property: String, found: String },

    /// Union that is left with nothing once `null` and `undefined` are removed
    #[error("unable to determine event type for \"{property}\": union has no non-null member")]
    EmptyUnion { property: String },

    /// Union without nullish arms that is not a union of string literals
    #[error("unable to determine event type for \"{property}\": union member {found} is not a string literal")]
    InvalidEnumMember { property: String, found: String },

    /// Payload member that is not a property signature
    #[error("unable to determine event type for \"{member}\": {found} is not supported in event payloads")]
    UnsupportedMember { member: String, found: &'static str },

    #[error("{wrapper} requires a type argument")]
    MissingTypeArgument { wrapper: String },

    #[error("event argument of kind {found} doesn't have a name")]
    UnnamedArgument { found: String },

    #[error("legacy event name must be a string literal, found {found}")]
    InvalidLegacyName { found: String },

    /// Handler whose payload or dispatch kind could not be resolved
    #[error("unable to determine event arguments")]
    UnresolvedArguments,

    #[error("type \"{alias}\" refers to itself")]
    CyclicAlias { alias: String },

    #[error("alias chain exceeds the maximum depth of {max_depth}")]
    AliasDepthExceeded { max_depth: usize },

    /// Interface base or intersection part that does not contribute object members
    #[error("cannot flatten \"{name}\" into event arguments: {reason}")]
    UnsupportedHeritage { name: String, reason: &'static str },

    /// Member declared both in a base (or intersection part) and again later
    #[error("a prop was already defined with the name \"{name}\"")]
    DuplicateProperty { name: String },

    #[error("props type is not declared")]
    UnknownPropsType,
}

impl EventErrorKind {
    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            EventErrorKind::UnsupportedPropertyType { .. } => "EV001",
            EventErrorKind::EmptyUnion { .. } => "EV002",
            EventErrorKind::InvalidEnumMember { .. } => "EV003",
            EventErrorKind::UnsupportedMember { .. } => "EV004",
            EventErrorKind::MissingTypeArgument { .. } => "EV005",
            EventErrorKind::UnnamedArgument { .. } => "EV006",
            EventErrorKind::InvalidLegacyName { .. } => "EV007",
            EventErrorKind::UnresolvedArguments => "EV008",
            EventErrorKind::CyclicAlias { .. } => "EV009",
            EventErrorKind::AliasDepthExceeded { .. } => "EV010",
            EventErrorKind::UnsupportedHeritage { .. } => "EV011",
            EventErrorKind::UnknownPropsType => "EV012",
            EventErrorKind::DuplicateProperty { .. } => "EV013",
        }
    }
}

/// Extraction error with the declaration it belongs to and the node at fault
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{declaration}\": {kind}")]
pub struct EventError {
    /// Event (or props type) being extracted
    pub declaration: String,
    pub kind: EventErrorKind,
    pub span: Span,
}

impl EventError {
    pub fn new(declaration: impl Into<String>, kind: EventErrorKind, span: Span) -> Self {
        Self {
            declaration: declaration.into(),
            kind,
            span,
        }
    }
}

pub type EventResult<T> = Result<T, EventError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_declaration_and_property() {
        let err = EventError::new(
            "onPress",
            EventErrorKind::UnsupportedPropertyType {
                property: "target".to_string(),
                found: "number".to_string(),
            },
            Span::new(3, 9, 0),
        );
        assert_eq!(
            err.to_string(),
            "\"onPress\": unable to determine event type for \"target\": number"
        );
    }

    #[test]
    fn test_unresolved_arguments_message() {
        let err = EventError::new("onChange", EventErrorKind::UnresolvedArguments, Span::default());
        assert_eq!(err.to_string(), "\"onChange\": unable to determine event arguments");
        assert_eq!(err.kind.code(), "EV008");
    }
}
