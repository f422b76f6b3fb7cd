use crate::ast::Block;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstDeclaration {
    pub name: String,
    pub value: i64,
}

impl ConstDeclaration {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDeclaration {
    pub name: String,
}

impl VarDeclaration {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A procedure is a named block; it takes no parameters and returns nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcedureDeclaration {
    pub name: String,
    pub body: Block,
}

impl ProcedureDeclaration {
    pub fn new(name: impl Into<String>, body: Block) -> Self {
        Self {
            name: name.into(),
            body,
        }
    }
}
