//! Declaration definitions for the AST

use super::*;

/// Named type declaration that can be referenced from other types
#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    /// Interface declaration
    Interface(InterfaceDecl),

    /// Type alias declaration
    TypeAlias(TypeAliasDecl),
}

/// Interface declaration
#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: Node<Ident>,
    pub type_params: Option<Vec<TypeParam>>,
    /// Heritage clause entries, each a type reference
    pub extends: Vec<Node<Type>>,
    pub members: Vec<Node<ObjectTypeMember>>,
}

/// Type alias declaration
#[derive(Debug, Clone, PartialEq)]
pub struct TypeAliasDecl {
    pub name: Node<Ident>,
    pub type_params: Option<Vec<TypeParam>>,
    pub ty: Node<Type>,
}

impl Decl {
    pub fn name(&self) -> &str {
        match self {
            Decl::Interface(iface) => &iface.name.value.name,
            Decl::TypeAlias(alias) => &alias.name.value.name,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Decl::Interface(iface) => iface.name.span,
            Decl::TypeAlias(alias) => alias.name.span,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Decl::Interface(_) => "interface",
            Decl::TypeAlias(_) => "type alias",
        }
    }
}
