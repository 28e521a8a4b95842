//! Resolution of a handler's type parameter to its payload members

use evgen_ast::{Decl, Node, ObjectTypeMember, Type};
use evgen_schema::BubblingType;
use tracing::trace;

use crate::context::{AliasChain, EventContext};
use crate::error::{EventErrorKind, EventResult};
use crate::flatten::{self, Members};
use crate::{BUBBLING_EVENT_HANDLER, DIRECT_EVENT_HANDLER, READONLY};

/// Outcome of argument resolution.
///
/// All three fields are `None` when the argument refers to a type that is not
/// declared locally; the caller decides whether that is fatal.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EventArguments<'a> {
    pub props: Option<Vec<&'a Node<ObjectTypeMember>>>,
    pub bubbling_type: Option<BubblingType>,
    pub paper_top_level_name_deprecated: Option<String>,
}

impl EventArguments<'_> {
    pub fn unresolved() -> Self {
        Self::default()
    }
}

/// State carried down the recursion
#[derive(Debug, Clone, Default)]
struct Accumulator<'a> {
    bubbling_type: Option<BubblingType>,
    paper_name: Option<String>,
    aliases: AliasChain<'a>,
}

impl<'a> Accumulator<'a> {
    fn finish(self, props: Members<'a>) -> EventArguments<'a> {
        EventArguments {
            props: Some(props),
            bubbling_type: self.bubbling_type,
            paper_top_level_name_deprecated: self.paper_name,
        }
    }
}

/// Resolves the type parameter of `handler` (a handler wrapper reference)
pub fn find_event_arguments<'a>(
    cx: &EventContext<'a>,
    handler: &'a Node<Type>,
) -> EventResult<EventArguments<'a>> {
    resolve(cx, handler, Accumulator::default())
}

fn resolve<'a>(
    cx: &EventContext<'a>,
    ty: &'a Node<Type>,
    acc: Accumulator<'a>,
) -> EventResult<EventArguments<'a>> {
    match &ty.value {
        Type::Object(object) => Ok(acc.finish(object.members.iter().collect())),
        Type::Intersection(parts) => {
            let members = flatten::intersection_members(cx, parts, &acc.aliases)?;
            Ok(acc.finish(members))
        }
        Type::Paren(inner) => resolve(cx, inner, acc),
        Type::TypeRef { name, .. } => resolve_reference(cx, ty, &name.value.name, acc),
        other => Err(cx.error(
            EventErrorKind::UnnamedArgument {
                found: other.kind_name(),
            },
            ty.span,
        )),
    }
}

fn resolve_reference<'a>(
    cx: &EventContext<'a>,
    ty: &'a Node<Type>,
    name: &'a str,
    acc: Accumulator<'a>,
) -> EventResult<EventArguments<'a>> {
    match name {
        READONLY => {
            trace!(event = cx.declaration, "unwrapping Readonly");
            resolve(cx, cx.first_type_arg(ty)?, acc)
        }
        BUBBLING_EVENT_HANDLER | DIRECT_EVENT_HANDLER => {
            let bubbling_type = if name == BUBBLING_EVENT_HANDLER {
                BubblingType::Bubble
            } else {
                BubblingType::Direct
            };
            let payload = cx.first_type_arg(ty)?;
            let paper_name = match ty.value.type_args().get(1) {
                Some(arg) => Some(legacy_name(cx, arg)?),
                None => None,
            };
            trace!(event = cx.declaration, %bubbling_type, ?paper_name, "found handler wrapper");

            let acc = Accumulator {
                bubbling_type: Some(bubbling_type),
                paper_name,
                ..acc
            };
            if payload.value.is_nullish() {
                return Ok(acc.finish(Members::new()));
            }
            resolve(cx, payload, acc)
        }
        _ => match cx.lookup(name) {
            Some(decl) => {
                trace!(event = cx.declaration, name, kind = decl.kind_name(), "dereferencing");
                let aliases = acc.aliases.enter(cx, name, ty.span)?;
                match decl {
                    Decl::TypeAlias(alias) => resolve(cx, &alias.ty, Accumulator { aliases, ..acc }),
                    Decl::Interface(iface) => {
                        let members = flatten::interface_members(cx, iface, &aliases)?;
                        Ok(acc.finish(members))
                    }
                }
            }
            None => {
                trace!(event = cx.declaration, name, "argument type is not declared locally");
                Ok(EventArguments::unresolved())
            }
        },
    }
}

/// Second handler type parameter: `BubblingEventHandler<T, "topChange">`
fn legacy_name(cx: &EventContext<'_>, arg: &Node<Type>) -> EventResult<String> {
    match &arg.value {
        Type::Paren(inner) => legacy_name(cx, inner),
        value => value.as_string_literal().map(str::to_string).ok_or_else(|| {
            cx.error(
                EventErrorKind::InvalidLegacyName {
                    found: value.kind_name(),
                },
                arg.span,
            )
        }),
    }
}
