//! Tables of the entities declarations introduce.
//!
//! Scopes map names to ids in these tables, and reference nodes in the tree
//! (calls, casts, accesses, declared types) hold the same ids. Entries are
//! never removed, so an id stays valid for as long as the [`Symbols`] it came
//! from, which the parsed [`File`](super::ast::File) owns.

use super::{
    statements::{Block, VariableDecl},
    types::{StructType, Type, TypeDef},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VariableId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FunctionId(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    /// Absent when the declaration leaves it to be inferred from the initializer
    pub ty: Option<Type>,
    pub mutable: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<VariableDecl>,
    pub return_type: Option<Type>,
    pub mutable: bool,
    /// Filled in once the body has been parsed. Calls made from inside the body see `None`.
    pub body: Option<Block>,
}

impl Function {
    pub fn new(name: String) -> Self {
        Function {
            name,
            parameters: Vec::new(),
            return_type: None,
            mutable: false,
            body: None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Symbols {
    variables: Vec<Variable>,
    types: Vec<TypeDef>,
    functions: Vec<Function>,
}

impl Symbols {
    pub fn new() -> Self {
        Symbols::default()
    }

    pub fn add_variable(&mut self, variable: Variable) -> VariableId {
        self.variables.push(variable);
        VariableId(self.variables.len() - 1)
    }

    pub fn add_type(&mut self, type_def: TypeDef) -> TypeId {
        self.types.push(type_def);
        TypeId(self.types.len() - 1)
    }

    pub fn add_function(&mut self, function: Function) -> FunctionId {
        self.functions.push(function);
        FunctionId(self.functions.len() - 1)
    }

    pub fn variable(&self, id: VariableId) -> &Variable {
        &self.variables[id.0]
    }

    pub fn type_def(&self, id: TypeId) -> &TypeDef {
        &self.types[id.0]
    }

    pub fn type_def_mut(&mut self, id: TypeId) -> &mut TypeDef {
        &mut self.types[id.0]
    }

    pub fn function(&self, id: FunctionId) -> &Function {
        &self.functions[id.0]
    }

    pub fn function_mut(&mut self, id: FunctionId) -> &mut Function {
        &mut self.functions[id.0]
    }

    /// The struct a type id names, if it names one.
    pub fn struct_type(&self, id: TypeId) -> Option<&StructType> {
        self.type_def(id).as_struct()
    }

    pub fn struct_type_mut(&mut self, id: TypeId) -> Option<&mut StructType> {
        match self.type_def_mut(id) {
            TypeDef::Struct(struct_type) => Some(struct_type),
            TypeDef::Primitive(_) => None,
        }
    }

    /// Looks a member up by name in the struct `id` names.
    pub fn struct_member(&self, id: TypeId, name: &str) -> Option<VariableId> {
        self.struct_type(id)?
            .members
            .iter()
            .map(|member| member.variable)
            .find(|variable| self.variable(*variable).name == name)
    }

    /// Source spelling of a type, e.g. `int` or `^Point`.
    pub fn type_name(&self, ty: &Type) -> String {
        match ty {
            Type::Named(id) => self.type_def(*id).name().to_string(),
            Type::Pointer(pointer) => format!("^{}", self.type_name(&pointer.addressee)),
        }
    }

    pub fn variable_count(&self) -> usize {
        self.variables.len()
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }
}
