//! Lexically scoped symbol table.
//!
//! Scopes are records in an arena, each holding the index of its enclosing
//! scope. Insertion always targets the innermost scope, lookups walk outwards
//! until a binding is found. Variables, types and functions are independent
//! namespaces, so one name may be bound once in each.

use std::{collections::HashMap, iter::successors};

use crate::ast::{
    symbols::{FunctionId, Symbols, TypeId, VariableId},
    types::{PrimitiveType, TypeDef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(pub usize);

#[derive(Debug, Default)]
pub struct Scope {
    outer: Option<ScopeId>,
    variables: HashMap<String, VariableId>,
    types: HashMap<String, TypeId>,
    functions: HashMap<String, FunctionId>,
}

#[derive(Debug)]
pub struct ScopeTable {
    scopes: Vec<Scope>,
    current: ScopeId,
}

impl ScopeTable {
    /// Creates the global scope and seeds it with the primitive types.
    pub fn new(symbols: &mut Symbols) -> Self {
        let mut global = Scope::default();
        for primitive in PrimitiveType::ALL {
            let id = symbols.add_type(TypeDef::Primitive(primitive));
            global.types.insert(primitive.name().to_string(), id);
        }

        ScopeTable {
            scopes: vec![global],
            current: ScopeId(0),
        }
    }

    /// Number of scopes between the current one and the global scope, inclusive.
    pub fn depth(&self) -> usize {
        self.chain().count()
    }

    pub fn is_global(&self) -> bool {
        self.scopes[self.current.0].outer.is_none()
    }

    pub fn push(&mut self) {
        self.scopes.push(Scope {
            outer: Some(self.current),
            ..Scope::default()
        });
        self.current = ScopeId(self.scopes.len() - 1);
    }

    /// Discards the current scope and returns the enclosing one, which becomes current.
    ///
    /// Returns `None`, leaving the table untouched, when the current scope is the global scope.
    pub fn pop(&mut self) -> Option<ScopeId> {
        let outer = self.scopes[self.current.0].outer?;
        if self.current.0 == self.scopes.len() - 1 {
            self.scopes.pop();
        }
        self.current = outer;
        Some(outer)
    }

    /// Binds `name` in the current scope.
    ///
    /// If the current scope already binds `name`, the existing binding is kept and returned.
    pub fn insert_variable(&mut self, name: &str, id: VariableId) -> Option<VariableId> {
        insert(&mut self.scopes[self.current.0].variables, name, id)
    }

    pub fn insert_type(&mut self, name: &str, id: TypeId) -> Option<TypeId> {
        insert(&mut self.scopes[self.current.0].types, name, id)
    }

    pub fn insert_function(&mut self, name: &str, id: FunctionId) -> Option<FunctionId> {
        insert(&mut self.scopes[self.current.0].functions, name, id)
    }

    pub fn get_variable(&self, name: &str) -> Option<VariableId> {
        self.chain().find_map(|scope| scope.variables.get(name).copied())
    }

    pub fn get_type(&self, name: &str) -> Option<TypeId> {
        self.chain().find_map(|scope| scope.types.get(name).copied())
    }

    pub fn get_function(&self, name: &str) -> Option<FunctionId> {
        self.chain().find_map(|scope| scope.functions.get(name).copied())
    }

    /// Scopes from the current one outwards.
    fn chain(&self) -> impl Iterator<Item = &Scope> {
        successors(Some(self.current), |id| self.scopes[id.0].outer).map(|id| &self.scopes[id.0])
    }
}

fn insert<T: Copy>(table: &mut HashMap<String, T>, name: &str, id: T) -> Option<T> {
    if let Some(existing) = table.get(name) {
        return Some(*existing);
    }
    table.insert(name.to_string(), id);
    None
}
