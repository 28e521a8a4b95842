//! Type definitions for the AST

use super::*;
use std::fmt;

/// Type expression
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// Keyword types: number, string, boolean, void, null, undefined, ...
    Primitive(PrimitiveType),

    /// Array type: T[]
    Array(Box<Node<Type>>),

    /// Tuple type: [T1, T2, ...]
    Tuple(Vec<Node<Type>>),

    /// Union type: T1 | T2 | ...
    Union(Vec<Node<Type>>),

    /// Intersection type: T1 & T2 & ...
    Intersection(Vec<Node<Type>>),

    /// Function type: (args) => ReturnType
    Function(FunctionType),

    /// Type reference: SomeType, SomeType<A, B>
    TypeRef {
        name: Node<Ident>,
        type_args: Option<Vec<Node<Type>>>,
    },

    /// Object literal type: { prop1: Type1, prop2: Type2 }
    Object(ObjectType),

    /// Literal type: "hello" | 42 | true
    Literal(LiteralType),

    /// Parenthesized type
    Paren(Box<Node<Type>>),

    /// Indexed access type: T[K]
    IndexedAccess {
        object_type: Box<Node<Type>>,
        index_type: Box<Node<Type>>,
    },

    /// keyof type: keyof T
    Keyof(Box<Node<Type>>),

    /// typeof type: typeof expr
    Typeof(Node<Ident>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Number,
    String,
    Boolean,
    Void,
    Null,
    Undefined,
    Any,
    Never,
    Unknown,
    Object,
    BigInt,
    Symbol,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionType {
    pub type_params: Option<Vec<TypeParam>>,
    pub params: Vec<FunctionTypeParam>,
    pub return_type: Box<Node<Type>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionTypeParam {
    pub name: Option<Node<Ident>>,
    pub ty: Node<Type>,
    pub optional: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectType {
    pub members: Vec<Node<ObjectTypeMember>>,
}

/// Member of an object literal type or interface body
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectTypeMember {
    /// Property signature: `name?: Type`
    Property {
        name: PropertyName,
        ty: Node<Type>,
        optional: bool,
        readonly: bool,
    },
    Method {
        name: PropertyName,
        type_params: Option<Vec<TypeParam>>,
        params: Vec<FunctionTypeParam>,
        return_type: Node<Type>,
        optional: bool,
    },
    IndexSignature {
        key_name: Node<Ident>,
        key_type: Node<Type>,
        value_type: Node<Type>,
    },
    CallSignature {
        type_params: Option<Vec<TypeParam>>,
        params: Vec<FunctionTypeParam>,
        return_type: Node<Type>,
    },
    ConstructSignature {
        type_params: Option<Vec<TypeParam>>,
        params: Vec<FunctionTypeParam>,
        return_type: Node<Type>,
    },
}

/// Property name
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyName {
    Ident(Node<Ident>),
    String(String),
    Number(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralType {
    String(String),
    Number(f64),
    Boolean(bool),
}

/// Type parameter (generic)
#[derive(Debug, Clone, PartialEq)]
pub struct TypeParam {
    pub name: Node<Ident>,
    pub constraint: Option<Box<Node<Type>>>,
    pub default: Option<Box<Node<Type>>>,
}

impl Type {
    /// Name of a type reference, `None` for every other kind
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            Type::TypeRef { name, .. } => Some(name.value.name.as_str()),
            _ => None,
        }
    }

    /// Type arguments of a type reference; empty for other kinds
    pub fn type_args(&self) -> &[Node<Type>] {
        match self {
            Type::TypeRef {
                type_args: Some(args),
                ..
            } => args,
            _ => &[],
        }
    }

    /// `null` or `undefined` keyword
    pub fn is_nullish(&self) -> bool {
        matches!(
            self,
            Type::Primitive(PrimitiveType::Null) | Type::Primitive(PrimitiveType::Undefined)
        )
    }

    pub fn as_string_literal(&self) -> Option<&str> {
        match self {
            Type::Literal(LiteralType::String(value)) => Some(value),
            _ => None,
        }
    }

    /// Short human-readable description used in diagnostics.
    /// References report their own name.
    pub fn kind_name(&self) -> String {
        match self {
            Type::Primitive(prim) => prim.to_string(),
            Type::Array(_) => "array type".to_string(),
            Type::Tuple(_) => "tuple type".to_string(),
            Type::Union(_) => "union type".to_string(),
            Type::Intersection(_) => "intersection type".to_string(),
            Type::Function(_) => "function type".to_string(),
            Type::TypeRef { name, .. } => name.value.name.clone(),
            Type::Object(_) => "object literal type".to_string(),
            Type::Literal(lit) => format!("literal type {}", lit),
            Type::Paren(_) => "parenthesized type".to_string(),
            Type::IndexedAccess { .. } => "indexed access type".to_string(),
            Type::Keyof(_) => "keyof type".to_string(),
            Type::Typeof(_) => "typeof type".to_string(),
        }
    }
}

impl ObjectTypeMember {
    /// Declared name, if the member has one
    pub fn name(&self) -> Option<&PropertyName> {
        match self {
            ObjectTypeMember::Property { name, .. } | ObjectTypeMember::Method { name, .. } => {
                Some(name)
            }
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            ObjectTypeMember::Property { .. } => "property signature",
            ObjectTypeMember::Method { .. } => "method signature",
            ObjectTypeMember::IndexSignature { .. } => "index signature",
            ObjectTypeMember::CallSignature { .. } => "call signature",
            ObjectTypeMember::ConstructSignature { .. } => "construct signature",
        }
    }
}

impl PropertyName {
    pub fn text(&self) -> String {
        match self {
            PropertyName::Ident(ident) => ident.value.name.clone(),
            PropertyName::String(s) => s.clone(),
            PropertyName::Number(n) => n.to_string(),
        }
    }
}

// Display implementations

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveType::Number => write!(f, "number"),
            PrimitiveType::String => write!(f, "string"),
            PrimitiveType::Boolean => write!(f, "boolean"),
            PrimitiveType::Void => write!(f, "void"),
            PrimitiveType::Null => write!(f, "null"),
            PrimitiveType::Undefined => write!(f, "undefined"),
            PrimitiveType::Any => write!(f, "any"),
            PrimitiveType::Never => write!(f, "never"),
            PrimitiveType::Unknown => write!(f, "unknown"),
            PrimitiveType::Object => write!(f, "object"),
            PrimitiveType::BigInt => write!(f, "bigint"),
            PrimitiveType::Symbol => write!(f, "symbol"),
        }
    }
}

impl fmt::Display for LiteralType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralType::String(s) => write!(f, "{:?}", s),
            LiteralType::Number(n) => write!(f, "{}", n),
            LiteralType::Boolean(b) => write!(f, "{}", b),
        }
    }
}
