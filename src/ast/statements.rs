use crate::ast::{Condition, Expression};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assign {
        name: String,
        expr: Expression,
    },
    Call {
        name: String,
    },
    Compound(Vec<Statement>),
    If {
        condition: Condition,
        then_branch: Box<Statement>,
        else_branch: Option<Box<Statement>>,
    },
    While {
        condition: Condition,
        body: Box<Statement>,
    },
    Read {
        name: String,
    },
    Write {
        name: String,
    },
    /// A statement position with nothing in it, or a placeholder left by
    /// error recovery.
    Empty,
}

impl Statement {
    pub fn assign(name: impl Into<String>, expr: Expression) -> Self {
        Statement::Assign {
            name: name.into(),
            expr,
        }
    }

    pub fn call(name: impl Into<String>) -> Self {
        Statement::Call { name: name.into() }
    }

    pub fn if_then(
        condition: Condition,
        then_branch: Statement,
        else_branch: Option<Statement>,
    ) -> Self {
        Statement::If {
            condition,
            then_branch: Box::new(then_branch),
            else_branch: else_branch.map(Box::new),
        }
    }

    pub fn while_do(condition: Condition, body: Statement) -> Self {
        Statement::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn read(name: impl Into<String>) -> Self {
        Statement::Read { name: name.into() }
    }

    pub fn write(name: impl Into<String>) -> Self {
        Statement::Write { name: name.into() }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Statement::Empty)
    }
}
