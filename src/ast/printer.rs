//! S-expression rendering of the syntax tree.
//!
//! The shape mirrors the grammar: `(program (block (consts ...) (vars ...)
//! (procedures ...) <statement>))`. Parentheses written in the source are kept
//! as `(paren ...)`, so the rendering never loses grouping.

use crate::ast::{
    Block, Condition, ConstDeclaration, Expression, ProcedureDeclaration, Program, Statement,
    VarDeclaration,
};
use std::fmt::{self, Write};

pub fn to_sexpr(program: &Program) -> String {
    program.to_string()
}

fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, head: &str, items: &[T]) -> fmt::Result {
    f.write_char('(')?;
    f.write_str(head)?;
    for item in items {
        write!(f, " {}", item)?;
    }
    f.write_char(')')
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(program {})", self.block)
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(block ")?;
        write_list(f, "consts", &self.consts)?;
        f.write_char(' ')?;
        write_list(f, "vars", &self.vars)?;
        f.write_char(' ')?;
        write_list(f, "procedures", &self.procedures)?;
        write!(f, " {})", self.body)
    }
}

impl fmt::Display for ConstDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(const {} {})", self.name, self.value)
    }
}

impl fmt::Display for VarDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(var {})", self.name)
    }
}

impl fmt::Display for ProcedureDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(procedure {} {})", self.name, self.body)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Assign { name, expr } => write!(f, "(assign {} {})", name, expr),
            Statement::Call { name } => write!(f, "(call {})", name),
            Statement::Compound(stmts) => write_list(f, "begin", stmts),
            Statement::If {
                condition,
                then_branch,
                else_branch,
            } => {
                write!(f, "(if {} {}", condition, then_branch)?;
                if let Some(else_branch) = else_branch {
                    write!(f, " {}", else_branch)?;
                }
                f.write_char(')')
            }
            Statement::While { condition, body } => write!(f, "(while {} {})", condition, body),
            Statement::Read { name } => write!(f, "(read {})", name),
            Statement::Write { name } => write!(f, "(write {})", name),
            Statement::Empty => f.write_str("(empty)"),
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Odd(expr) => write!(f, "(odd {})", expr),
            Condition::Binary { left, op, right } => {
                write!(f, "({} {} {})", op.as_str(), left, right)
            }
            Condition::Incomplete(expr) => write!(f, "(incomplete {})", expr),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Number(value) => write!(f, "{}", value),
            Expression::Identifier(name) => f.write_str(name),
            Expression::Unary { op, operand } => write!(f, "({} {})", op.as_str(), operand),
            Expression::Binary { left, op, right } => {
                write!(f, "({} {} {})", op.as_str(), left, right)
            }
            Expression::Parenthesized(inner) => write!(f, "(paren {})", inner),
            Expression::Empty => f.write_str("(missing)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{BinaryOp, RelationalOp, UnaryOp};

    #[test]
    fn prints_empty_program() {
        let program = Program::new(Block::empty());
        assert_eq!(
            to_sexpr(&program),
            "(program (block (consts) (vars) (procedures) (empty)))"
        );
    }

    #[test]
    fn keeps_grouping_and_signs() {
        let expr = Expression::binary(
            Expression::unary(UnaryOp::Minus, Expression::ident("a")),
            BinaryOp::Multiply,
            Expression::parenthesized(Expression::binary(
                Expression::number(1),
                BinaryOp::Add,
                Expression::number(2),
            )),
        );
        assert_eq!(expr.to_string(), "(* (- a) (paren (+ 1 2)))");
    }

    #[test]
    fn prints_if_with_else() {
        let stmt = Statement::if_then(
            Condition::Binary {
                left: Expression::ident("x"),
                op: RelationalOp::LessThanEqual,
                right: Expression::number(3),
            },
            Statement::call("p"),
            Some(Statement::write("x")),
        );
        assert_eq!(stmt.to_string(), "(if (<= x 3) (call p) (write x))");
    }
}
