//! Mapping of payload property types to event type annotations

use evgen_ast::{Node, ObjectTypeMember, PrimitiveType, Type};
use evgen_schema::{EventTypeAnnotation, NamedShape};

use crate::context::EventContext;
use crate::error::{EventErrorKind, EventResult};
use crate::{DOUBLE, FLOAT, INT32, READONLY};

/// Maps one payload member; only property signatures are accepted.
pub fn build_property(
    cx: &EventContext<'_>,
    member: &Node<ObjectTypeMember>,
) -> EventResult<NamedShape<EventTypeAnnotation>> {
    match &member.value {
        ObjectTypeMember::Property {
            name, ty, optional, ..
        } => get_property_type(cx, &name.text(), *optional, ty),
        other => Err(cx.error(
            EventErrorKind::UnsupportedMember {
                member: other
                    .name()
                    .map(|name| name.text())
                    .unwrap_or_else(|| other.kind_name().to_string()),
                found: other.kind_name(),
            },
            member.span,
        )),
    }
}

pub fn get_property_type(
    cx: &EventContext<'_>,
    name: &str,
    optional: bool,
    ty: &Node<Type>,
) -> EventResult<NamedShape<EventTypeAnnotation>> {
    let unsupported = || {
        cx.error(
            EventErrorKind::UnsupportedPropertyType {
                property: name.to_string(),
                found: ty.value.kind_name(),
            },
            ty.span,
        )
    };

    let type_annotation = match &ty.value {
        Type::Paren(inner) => return get_property_type(cx, name, optional, inner),
        Type::Primitive(PrimitiveType::Boolean) => EventTypeAnnotation::Boolean,
        Type::Primitive(PrimitiveType::String) => EventTypeAnnotation::String,
        Type::Primitive(_) => return Err(unsupported()),
        Type::TypeRef { name: reference, .. } => match reference.value.name.as_str() {
            INT32 => EventTypeAnnotation::Int32,
            DOUBLE => EventTypeAnnotation::Double,
            FLOAT => EventTypeAnnotation::Float,
            READONLY => return get_property_type(cx, name, optional, cx.first_type_arg(ty)?),
            _ => return Err(unsupported()),
        },
        Type::Object(object) => EventTypeAnnotation::Object {
            properties: object
                .members
                .iter()
                .map(|member| build_property(cx, member))
                .collect::<EventResult<Vec<_>>>()?,
        },
        Type::Union(members) => {
            if members.iter().any(|member| member.value.is_nullish()) {
                // T | null | undefined
                let inner = members
                    .iter()
                    .find(|member| !member.value.is_nullish())
                    .ok_or_else(|| {
                        cx.error(
                            EventErrorKind::EmptyUnion {
                                property: name.to_string(),
                            },
                            ty.span,
                        )
                    })?;
                return get_property_type(cx, name, true, inner);
            }
            EventTypeAnnotation::StringEnum {
                options: string_enum_options(cx, name, ty, members)?,
            }
        }
        Type::Array(_)
        | Type::Tuple(_)
        | Type::Intersection(_)
        | Type::Function(_)
        | Type::Literal(_)
        | Type::IndexedAccess { .. }
        | Type::Keyof(_)
        | Type::Typeof(_) => return Err(unsupported()),
    };

    Ok(NamedShape {
        name: name.to_string(),
        optional,
        type_annotation,
    })
}

/// `"a" | "b" | "c"` in declaration order
fn string_enum_options(
    cx: &EventContext<'_>,
    name: &str,
    union: &Node<Type>,
    members: &[Node<Type>],
) -> EventResult<Vec<String>> {
    if members.is_empty() {
        return Err(cx.error(
            EventErrorKind::EmptyUnion {
                property: name.to_string(),
            },
            union.span,
        ));
    }

    members
        .iter()
        .map(|member| {
            member
                .value
                .as_string_literal()
                .map(str::to_string)
                .ok_or_else(|| {
                    cx.error(
                        EventErrorKind::InvalidEnumMember {
                            property: name.to_string(),
                            found: member.value.kind_name(),
                        },
                        member.span,
                    )
                })
        })
        .collect()
}
