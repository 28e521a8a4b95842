//! Recognizes props whose type is an event handler

use evgen_ast::{Node, Type};

use crate::{BUBBLING_EVENT_HANDLER, DIRECT_EVENT_HANDLER};

/// Handler wrapper reference found in a prop type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoundEvent<'a> {
    /// The `BubblingEventHandler<..>` / `DirectEventHandler<..>` reference
    pub handler: &'a Node<Type>,
    pub optional: bool,
}

/// Looks through parentheses and `T | null | undefined` for a handler wrapper.
///
/// Only the first non-nullish union member is inspected; the others are ignored.
/// Returns `None` for anything that is not an event handler.
pub fn find_event(ty: &Node<Type>, optional: bool) -> Option<FoundEvent<'_>> {
    match &ty.value {
        Type::Union(members) => {
            let nullable = members.iter().any(|member| member.value.is_nullish());
            let first = members.iter().find(|member| !member.value.is_nullish())?;
            find_event(first, optional || nullable)
        }
        Type::Paren(inner) => find_event(inner, optional),
        Type::TypeRef { name, .. } if is_event_handler(&name.value.name) => Some(FoundEvent {
            handler: ty,
            optional,
        }),
        _ => None,
    }
}

pub fn is_event_handler(name: &str) -> bool {
    name == BUBBLING_EVENT_HANDLER || name == DIRECT_EVENT_HANDLER
}
