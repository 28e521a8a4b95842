//! AST builders shared by the unit tests

use evgen_ast::*;

pub fn dummy_span() -> Span {
    Span::new(0, 0, 0)
}

pub fn make_node<T>(value: T) -> Node<T> {
    Node::new(value, dummy_span())
}

pub fn prim(kind: PrimitiveType) -> Node<Type> {
    make_node(Type::Primitive(kind))
}

pub fn str_lit(value: &str) -> Node<Type> {
    make_node(Type::Literal(LiteralType::String(value.to_string())))
}

pub fn type_ref(name: &str, args: Vec<Node<Type>>) -> Node<Type> {
    make_node(Type::TypeRef {
        name: make_node(Ident::new(name)),
        type_args: if args.is_empty() { None } else { Some(args) },
    })
}

pub fn union(members: Vec<Node<Type>>) -> Node<Type> {
    make_node(Type::Union(members))
}

pub fn paren(inner: Node<Type>) -> Node<Type> {
    make_node(Type::Paren(Box::new(inner)))
}

pub fn object(members: Vec<Node<ObjectTypeMember>>) -> Node<Type> {
    make_node(Type::Object(ObjectType { members }))
}

pub fn property(name: &str, ty: Node<Type>, optional: bool) -> Node<ObjectTypeMember> {
    make_node(ObjectTypeMember::Property {
        name: PropertyName::Ident(make_node(Ident::new(name))),
        ty,
        optional,
        readonly: false,
    })
}

pub fn method(name: &str) -> Node<ObjectTypeMember> {
    make_node(ObjectTypeMember::Method {
        name: PropertyName::Ident(make_node(Ident::new(name))),
        type_params: None,
        params: vec![],
        return_type: prim(PrimitiveType::Void),
        optional: false,
    })
}

pub fn alias(name: &str, ty: Node<Type>) -> Decl {
    Decl::TypeAlias(TypeAliasDecl {
        name: make_node(Ident::new(name)),
        type_params: None,
        ty,
    })
}

pub fn interface(name: &str, extends: Vec<&str>, members: Vec<Node<ObjectTypeMember>>) -> Decl {
    Decl::Interface(InterfaceDecl {
        name: make_node(Ident::new(name)),
        type_params: None,
        extends: extends.into_iter().map(|base| type_ref(base, vec![])).collect(),
        members,
    })
}

/// `DirectEventHandler<payload>`
pub fn direct(payload: Node<Type>) -> Node<Type> {
    type_ref("DirectEventHandler", vec![payload])
}

/// `BubblingEventHandler<payload>`
pub fn bubbling(payload: Node<Type>) -> Node<Type> {
    type_ref("BubblingEventHandler", vec![payload])
}

/// `Readonly<inner>`
pub fn readonly(inner: Node<Type>) -> Node<Type> {
    type_ref("Readonly", vec![inner])
}
