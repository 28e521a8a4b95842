//! Flattening of interfaces and intersections into one member list

use evgen_ast::{Decl, InterfaceDecl, Node, ObjectTypeMember, Type};
use tracing::trace;

use crate::context::{AliasChain, EventContext};
use crate::error::{EventErrorKind, EventResult};
use crate::READONLY;

pub type Members<'a> = Vec<&'a Node<ObjectTypeMember>>;

/// Members of an interface: everything inherited through `extends` first,
/// then the interface's own members.
pub fn interface_members<'a>(
    cx: &EventContext<'a>,
    iface: &'a InterfaceDecl,
    chain: &AliasChain<'a>,
) -> EventResult<Members<'a>> {
    let mut members = Members::new();
    for base in &iface.extends {
        let inherited = type_members(cx, base, chain)?;
        merge(cx, &mut members, inherited)?;
    }
    merge(cx, &mut members, &iface.members)?;
    Ok(members)
}

/// Members of `A & B & ...`, in part order
pub fn intersection_members<'a>(
    cx: &EventContext<'a>,
    parts: &'a [Node<Type>],
    chain: &AliasChain<'a>,
) -> EventResult<Members<'a>> {
    let mut members = Members::new();
    for part in parts {
        let contributed = type_members(cx, part, chain)?;
        merge(cx, &mut members, contributed)?;
    }
    Ok(members)
}

/// Members of a named interface or object alias
pub fn decl_members<'a>(
    cx: &EventContext<'a>,
    decl: &'a Decl,
    chain: &AliasChain<'a>,
) -> EventResult<Members<'a>> {
    match decl {
        Decl::Interface(iface) => interface_members(cx, iface, chain),
        Decl::TypeAlias(alias) => type_members(cx, &alias.ty, chain),
    }
}

fn type_members<'a>(
    cx: &EventContext<'a>,
    ty: &'a Node<Type>,
    chain: &AliasChain<'a>,
) -> EventResult<Members<'a>> {
    match &ty.value {
        Type::Object(object) => Ok(object.members.iter().collect()),
        Type::Paren(inner) => type_members(cx, inner, chain),
        Type::Intersection(parts) => intersection_members(cx, parts, chain),
        Type::TypeRef { name, .. } if name.value.name == READONLY => {
            type_members(cx, cx.first_type_arg(ty)?, chain)
        }
        Type::TypeRef { name, .. } => {
            let name = name.value.name.as_str();
            let decl = cx.lookup(name).ok_or_else(|| {
                cx.error(
                    EventErrorKind::UnsupportedHeritage {
                        name: name.to_string(),
                        reason: "type is not declared in this file",
                    },
                    ty.span,
                )
            })?;
            trace!(name, kind = decl.kind_name(), "flattening members");
            let chain = chain.enter(cx, name, ty.span)?;
            decl_members(cx, decl, &chain)
        }
        other => Err(cx.error(
            EventErrorKind::UnsupportedHeritage {
                name: other.kind_name(),
                reason: "not an object type",
            },
            ty.span,
        )),
    }
}

/// Appends `incoming`; a member name may only be declared once across all
/// bases, parts and own members.
fn merge<'a>(
    cx: &EventContext<'a>,
    members: &mut Members<'a>,
    incoming: impl IntoIterator<Item = &'a Node<ObjectTypeMember>>,
) -> EventResult<()> {
    for member in incoming {
        if let Some(name) = member.value.name() {
            let name = name.text();
            let redeclared = members
                .iter()
                .any(|seen| seen.value.name().map(|n| n.text()).as_deref() == Some(name.as_str()));
            if redeclared {
                return Err(cx.error(EventErrorKind::DuplicateProperty { name }, member.span));
            }
        }
        members.push(member);
    }
    Ok(())
}
