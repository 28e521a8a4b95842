//! # evgen events
//!
//! Extracts the event schema of a native component from its prop declarations.
//!
//! Every prop typed as `BubblingEventHandler<T>` or `DirectEventHandler<T>`
//! (optionally wrapped in parentheses or `| null | undefined`) becomes an
//! [`EventTypeShape`]: its dispatch kind, optional legacy name and the payload
//! object described by `T`. `T` is resolved through `Readonly<..>`, local type
//! aliases and interfaces. Props of any other type are skipped.
//!
//! Extraction is all-or-nothing: one event whose payload cannot be described
//! fails the whole batch with an [`EventError`].

mod arguments;
mod context;
mod detect;
mod diagnostics;
mod error;
mod flatten;
mod property;
mod schema;
mod type_map;

#[cfg(test)]
mod test_support;

pub use arguments::{find_event_arguments, EventArguments};
pub use context::{EventContext, EventParserOptions};
pub use detect::{find_event, is_event_handler, FoundEvent};
pub use error::{EventError, EventErrorKind, EventResult};
pub use property::{build_property, get_property_type};
pub use schema::build_event_schema;
pub use type_map::TypeMap;

pub use evgen_schema::{
    BubblingType, EventHandlerAnnotation, EventTypeAnnotation, EventTypeShape, NamedShape,
    ObjectTypeAnnotation,
};

use evgen_ast::{Node, ObjectTypeMember, Span};
use tracing::debug;

use crate::context::AliasChain;

pub const BUBBLING_EVENT_HANDLER: &str = "BubblingEventHandler";
pub const DIRECT_EVENT_HANDLER: &str = "DirectEventHandler";
pub const READONLY: &str = "Readonly";
pub const INT32: &str = "Int32";
pub const DOUBLE: &str = "Double";
pub const FLOAT: &str = "Float";

// =============================================================================
// Public API
// =============================================================================

/// Extracts the events declared among `members`, in declaration order
pub fn get_events<'a>(
    members: impl IntoIterator<Item = &'a Node<ObjectTypeMember>>,
    types: &TypeMap,
) -> EventResult<Vec<EventTypeShape>> {
    get_events_with_options(members, types, &EventParserOptions::default())
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn get_events_with_options<'a>(
    members: impl IntoIterator<Item = &'a Node<ObjectTypeMember>>,
    types: &TypeMap,
    options: &EventParserOptions,
) -> EventResult<Vec<EventTypeShape>> {
    let mut events = Vec::new();
    for member in members
        .into_iter()
        .filter(|member| matches!(member.value, ObjectTypeMember::Property { .. }))
    {
        if let Some(shape) = build_event_schema(types, options, member)? {
            events.push(shape);
        }
    }
    debug!(count = events.len(), "collected events");
    Ok(events)
}

/// Extracts the events of the props type named `props`.
///
/// The props type may be an interface (its `extends` bases are included) or an
/// alias of an object literal or intersection.
pub fn get_component_events(props: &str, types: &TypeMap) -> EventResult<Vec<EventTypeShape>> {
    get_component_events_with_options(props, types, &EventParserOptions::default())
}

pub fn get_component_events_with_options(
    props: &str,
    types: &TypeMap,
    options: &EventParserOptions,
) -> EventResult<Vec<EventTypeShape>> {
    let decl = types
        .get(props)
        .ok_or_else(|| EventError::new(props, EventErrorKind::UnknownPropsType, Span::default()))?;

    let cx = EventContext::new(types, options, props);
    let chain = AliasChain::default().enter(&cx, props, decl.span())?;
    let members = flatten::decl_members(&cx, decl, &chain)?;
    get_events_with_options(members, types, options)
}

// =============================================================================
// Tests
// =============================================================================
