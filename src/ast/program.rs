use crate::ast::{ConstDeclaration, ProcedureDeclaration, Statement, VarDeclaration};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub block: Block,
}

impl Program {
    pub fn new(block: Block) -> Self {
        Self { block }
    }
}

/// Declarations in source order, then the body statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub consts: Vec<ConstDeclaration>,
    pub vars: Vec<VarDeclaration>,
    pub procedures: Vec<ProcedureDeclaration>,
    pub body: Statement,
}

impl Block {
    pub fn new(
        consts: Vec<ConstDeclaration>,
        vars: Vec<VarDeclaration>,
        procedures: Vec<ProcedureDeclaration>,
        body: Statement,
    ) -> Self {
        Self {
            consts,
            vars,
            procedures,
            body,
        }
    }

    /// A block with no declarations and an empty body.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new(), Vec::new(), Statement::Empty)
    }
}

impl Default for Block {
    fn default() -> Self {
        Self::empty()
    }
}
