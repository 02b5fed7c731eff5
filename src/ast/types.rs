//! Type system definitions for the AST.
//!
//! Named types (primitives and structs) live in the [`Symbols`] type table and
//! are referred to by [`TypeId`]. A [`Type`] written in a declaration is
//! either such a reference or a pointer, and a pointer owns the type it
//! points to.
//!
//! [`Symbols`]: super::symbols::Symbols

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::{statements::VariableDecl, symbols::TypeId};

/// Built-in scalar types, seeded into the global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    I8,
    I16,
    I32,
    I64,
    I128,
    U8,
    U16,
    U32,
    U64,
    U128,
    F32,
    F64,
    F128,
    Int,
    Uint,
    Uintptr,
    Bool,
    Rune,
    Str,
}

impl PrimitiveType {
    pub const ALL: [PrimitiveType; 19] = [
        PrimitiveType::I8,
        PrimitiveType::I16,
        PrimitiveType::I32,
        PrimitiveType::I64,
        PrimitiveType::I128,
        PrimitiveType::U8,
        PrimitiveType::U16,
        PrimitiveType::U32,
        PrimitiveType::U64,
        PrimitiveType::U128,
        PrimitiveType::F32,
        PrimitiveType::F64,
        PrimitiveType::F128,
        PrimitiveType::Int,
        PrimitiveType::Uint,
        PrimitiveType::Uintptr,
        PrimitiveType::Bool,
        PrimitiveType::Rune,
        PrimitiveType::Str,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveType::I8 => "i8",
            PrimitiveType::I16 => "i16",
            PrimitiveType::I32 => "i32",
            PrimitiveType::I64 => "i64",
            PrimitiveType::I128 => "i128",
            PrimitiveType::U8 => "u8",
            PrimitiveType::U16 => "u16",
            PrimitiveType::U32 => "u32",
            PrimitiveType::U64 => "u64",
            PrimitiveType::U128 => "u128",
            PrimitiveType::F32 => "f32",
            PrimitiveType::F64 => "f64",
            PrimitiveType::F128 => "f128",
            PrimitiveType::Int => "int",
            PrimitiveType::Uint => "uint",
            PrimitiveType::Uintptr => "uintptr",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Rune => "rune",
            PrimitiveType::Str => "str",
        }
    }

    pub fn from_name(name: &str) -> Option<PrimitiveType> {
        PRIMITIVE_LOOKUP.get(name).copied()
    }
}

lazy_static! {
    static ref PRIMITIVE_LOOKUP: HashMap<&'static str, PrimitiveType> = PrimitiveType::ALL
        .iter()
        .map(|primitive| (primitive.name(), *primitive))
        .collect();
}

/// A struct attribute, `key` or `key = "value"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub key: String,
    pub value: Option<String>,
}

/// A user-declared struct. Members keep their declaration order.
#[derive(Debug, Clone)]
pub struct StructType {
    pub name: String,
    pub members: Vec<VariableDecl>,
    pub attrs: Vec<Attr>,
    /// False for `struct Name;`, which declares an empty type
    pub has_body: bool,
}

impl StructType {
    pub fn new(name: String) -> Self {
        StructType {
            name,
            members: Vec::new(),
            attrs: Vec::new(),
            has_body: false,
        }
    }
}

/// A type that can be registered under a name in a scope.
#[derive(Debug, Clone)]
pub enum TypeDef {
    Primitive(PrimitiveType),
    Struct(StructType),
}

impl TypeDef {
    pub fn name(&self) -> &str {
        match self {
            TypeDef::Primitive(primitive) => primitive.name(),
            TypeDef::Struct(struct_type) => &struct_type.name,
        }
    }

    pub fn as_struct(&self) -> Option<&StructType> {
        match self {
            TypeDef::Struct(struct_type) => Some(struct_type),
            TypeDef::Primitive(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointerType {
    pub addressee: Box<Type>,
}

/// A type as written in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A primitive or struct, resolved through the scope chain
    Named(TypeId),
    Pointer(PointerType),
}

impl Type {
    pub fn pointer_to(addressee: Type) -> Type {
        Type::Pointer(PointerType {
            addressee: Box::new(addressee),
        })
    }

    /// The named type, if this is not a pointer.
    pub fn named(&self) -> Option<TypeId> {
        match self {
            Type::Named(id) => Some(*id),
            Type::Pointer(_) => None,
        }
    }
}
