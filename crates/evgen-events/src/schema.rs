//! Assembly of one event schema from a prop declaration

use evgen_ast::{Node, ObjectTypeMember, Span};
use evgen_schema::{EventHandlerAnnotation, EventTypeShape, ObjectTypeAnnotation};
use tracing::debug;

use crate::arguments::{find_event_arguments, EventArguments};
use crate::context::{EventContext, EventParserOptions};
use crate::detect::find_event;
use crate::error::{EventErrorKind, EventResult};
use crate::property::build_property;
use crate::type_map::TypeMap;

/// Builds the schema of one prop.
///
/// `Ok(None)` means the prop is not an event handler. Members other than
/// property signatures are never events.
pub fn build_event_schema(
    types: &TypeMap,
    options: &EventParserOptions,
    member: &Node<ObjectTypeMember>,
) -> EventResult<Option<EventTypeShape>> {
    let ObjectTypeMember::Property {
        name, ty, optional, ..
    } = &member.value
    else {
        return Ok(None);
    };
    let event = name.text();

    let Some(found) = find_event(ty, *optional) else {
        debug!(prop = %event, "not an event handler");
        return Ok(None);
    };

    let cx = EventContext::new(types, options, &event);
    let arguments = find_event_arguments(&cx, found.handler)?;
    let shape = finish_event(&cx, arguments, found.optional, found.handler.span)?;
    debug!(
        event = %shape.name,
        bubbling_type = %shape.bubbling_type,
        properties = shape.argument_properties().len(),
        "extracted event"
    );
    Ok(Some(shape))
}

/// Turns resolved arguments into a shape; both the dispatch kind and the
/// member list must have been resolved.
fn finish_event(
    cx: &EventContext<'_>,
    arguments: EventArguments<'_>,
    optional: bool,
    span: Span,
) -> EventResult<EventTypeShape> {
    let EventArguments {
        props: Some(props),
        bubbling_type: Some(bubbling_type),
        paper_top_level_name_deprecated,
    } = arguments
    else {
        return Err(cx.error(EventErrorKind::UnresolvedArguments, span));
    };

    let properties = props
        .into_iter()
        .map(|member| build_property(cx, member))
        .collect::<EventResult<Vec<_>>>()?;

    Ok(EventTypeShape {
        name: cx.declaration.to_string(),
        optional,
        bubbling_type,
        paper_top_level_name_deprecated,
        type_annotation: EventHandlerAnnotation {
            argument: Some(ObjectTypeAnnotation::new(properties)),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::*;
    use evgen_ast::PrimitiveType;
    use evgen_schema::{BubblingType, EventTypeAnnotation};

    fn build(types: &TypeMap, member: &Node<ObjectTypeMember>) -> EventResult<Option<EventTypeShape>> {
        build_event_schema(types, &EventParserOptions::default(), member)
    }

    #[test]
    fn test_direct_event() {
        let member = property(
            "onFoo",
            direct(readonly(object(vec![property("x", prim(PrimitiveType::Boolean), false)]))),
            false,
        );
        let shape = build(&TypeMap::new(), &member).unwrap().unwrap();
        assert_eq!(shape.name, "onFoo");
        assert!(!shape.optional);
        assert_eq!(shape.bubbling_type, BubblingType::Direct);
        assert_eq!(shape.paper_top_level_name_deprecated, None);
        assert_eq!(shape.argument_properties().len(), 1);
        assert_eq!(shape.argument_properties()[0].type_annotation, EventTypeAnnotation::Boolean);
    }

    #[test]
    fn test_non_event_is_excluded() {
        let member = property("disabled", prim(PrimitiveType::Boolean), true);
        assert_eq!(build(&TypeMap::new(), &member).unwrap(), None);
        assert_eq!(build(&TypeMap::new(), &method("onPress")).unwrap(), None);
    }

    #[test]
    fn test_unresolved_argument_fails() {
        let member = property("onLoad", direct(type_ref("NativeSyntheticEvent", vec![])), false);
        let err = build(&TypeMap::new(), &member).unwrap_err();
        assert_eq!(err.declaration, "onLoad");
        assert_eq!(err.kind, EventErrorKind::UnresolvedArguments);
    }

    #[test]
    fn test_missing_dispatch_kind_alone_fails() {
        let types = TypeMap::new();
        let options = EventParserOptions::default();
        let cx = EventContext::new(&types, &options, "onChange");
        let arguments = EventArguments {
            props: Some(vec![]),
            bubbling_type: None,
            paper_top_level_name_deprecated: None,
        };
        let err = finish_event(&cx, arguments, false, Span::new(1, 2, 0)).unwrap_err();
        assert_eq!(err.kind, EventErrorKind::UnresolvedArguments);
        assert_eq!(err.span, Span::new(1, 2, 0));
    }

    #[test]
    fn test_missing_props_alone_fails() {
        let types = TypeMap::new();
        let options = EventParserOptions::default();
        let cx = EventContext::new(&types, &options, "onChange");
        let arguments = EventArguments {
            props: None,
            bubbling_type: Some(BubblingType::Bubble),
            paper_top_level_name_deprecated: Some("topChange".to_string()),
        };
        let err = finish_event(&cx, arguments, false, Span::default()).unwrap_err();
        assert_eq!(err.declaration, "onChange");
        assert_eq!(err.kind, EventErrorKind::UnresolvedArguments);
    }

    #[test]
    fn test_payload_failure_names_event() {
        let member = property(
            "onPress",
            direct(readonly(object(vec![property("target", prim(PrimitiveType::Number), false)]))),
            true,
        );
        let err = build(&TypeMap::new(), &member).unwrap_err();
        assert_eq!(err.declaration, "onPress");
        assert_eq!(
            err.to_string(),
            "\"onPress\": unable to determine event type for \"target\": number"
        );
    }
}
