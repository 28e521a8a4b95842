//! Shared state for one extraction pass

use evgen_ast::{Decl, Node, Span, Type};

use crate::error::{EventError, EventErrorKind, EventResult};
use crate::type_map::TypeMap;

/// Tunables for extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventParserOptions {
    /// Longest chain of user type aliases followed while resolving an argument
    pub max_alias_depth: usize,
}

impl Default for EventParserOptions {
    fn default() -> Self {
        Self { max_alias_depth: 32 }
    }
}

/// Read-only inputs of the declaration currently being extracted
#[derive(Debug, Clone, Copy)]
pub struct EventContext<'a> {
    pub types: &'a TypeMap,
    pub options: &'a EventParserOptions,
    /// Name of the declaration, reported in every error
    pub declaration: &'a str,
}

impl<'a> EventContext<'a> {
    pub fn new(types: &'a TypeMap, options: &'a EventParserOptions, declaration: &'a str) -> Self {
        Self {
            types,
            options,
            declaration,
        }
    }

    pub fn lookup(&self, name: &str) -> Option<&'a Decl> {
        self.types.get(name)
    }

    pub fn error(&self, kind: EventErrorKind, span: Span) -> EventError {
        EventError::new(self.declaration, kind, span)
    }

    /// First type argument of a wrapper reference such as `Readonly<T>`
    pub fn first_type_arg<'t>(&self, wrapper: &'t Node<Type>) -> EventResult<&'t Node<Type>> {
        wrapper.value.type_args().first().ok_or_else(|| {
            self.error(
                EventErrorKind::MissingTypeArgument {
                    wrapper: wrapper.value.kind_name(),
                },
                wrapper.span,
            )
        })
    }
}

/// Names of the aliases dereferenced on the way to the current node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasChain<'a> {
    names: Vec<&'a str>,
}

impl<'a> AliasChain<'a> {
    /// Extends the chain with `name`, rejecting cycles and overlong chains.
    pub fn enter(&self, cx: &EventContext<'_>, name: &'a str, span: Span) -> EventResult<AliasChain<'a>> {
        if self.names.contains(&name) {
            return Err(cx.error(
                EventErrorKind::CyclicAlias {
                    alias: name.to_string(),
                },
                span,
            ));
        }
        if self.names.len() >= cx.options.max_alias_depth {
            return Err(cx.error(
                EventErrorKind::AliasDepthExceeded {
                    max_depth: cx.options.max_alias_depth,
                },
                span,
            ));
        }

        let mut names = self.names.clone();
        names.push(name);
        Ok(AliasChain { names })
    }

    #[cfg(test)]
    pub fn depth(&self) -> usize {
        self.names.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alias_chain_rejects_cycles() {
        let types = TypeMap::new();
        let options = EventParserOptions::default();
        let cx = EventContext::new(&types, &options, "onScroll");

        let chain = AliasChain::default();
        let chain = chain.enter(&cx, "A", Span::default()).unwrap();
        let chain = chain.enter(&cx, "B", Span::default()).unwrap();
        assert_eq!(chain.depth(), 2);

        let err = chain.enter(&cx, "A", Span::new(7, 8, 0)).unwrap_err();
        assert_eq!(err.declaration, "onScroll");
        assert_eq!(
            err.kind,
            EventErrorKind::CyclicAlias {
                alias: "A".to_string()
            }
        );
        assert_eq!(err.span, Span::new(7, 8, 0));
    }

    #[test]
    fn test_alias_chain_depth_limit() {
        let types = TypeMap::new();
        let options = EventParserOptions { max_alias_depth: 1 };
        let cx = EventContext::new(&types, &options, "onScroll");

        let chain = AliasChain::default().enter(&cx, "A", Span::default()).unwrap();
        let err = chain.enter(&cx, "B", Span::default()).unwrap_err();
        assert_eq!(err.kind, EventErrorKind::AliasDepthExceeded { max_depth: 1 });
    }
}
