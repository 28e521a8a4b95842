//! Symbol table of user-declared types

use std::collections::HashMap;

use evgen_ast::Decl;

/// Named interfaces and type aliases visible to the component file.
///
/// Built once before extraction and only read afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeMap {
    decls: HashMap<String, Decl>,
}

impl TypeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_decls(decls: impl IntoIterator<Item = Decl>) -> Self {
        decls.into_iter().collect()
    }

    /// Registers a declaration, replacing (and returning) any earlier one with the same name
    pub fn insert(&mut self, decl: Decl) -> Option<Decl> {
        self.decls.insert(decl.name().to_string(), decl)
    }

    pub fn get(&self, name: &str) -> Option<&Decl> {
        self.decls.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.decls.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

impl FromIterator<Decl> for TypeMap {
    fn from_iter<I: IntoIterator<Item = Decl>>(iter: I) -> Self {
        let mut map = TypeMap::new();
        map.extend(iter);
        map
    }
}

impl Extend<Decl> for TypeMap {
    fn extend<I: IntoIterator<Item = Decl>>(&mut self, iter: I) {
        for decl in iter {
            self.insert(decl);
        }
    }
}
