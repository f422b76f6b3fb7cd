use crate::ast::{
    Block, Condition, ConstDeclaration, Expression, ProcedureDeclaration, Program, Statement,
    VarDeclaration,
};

/// Read-only traversal over the syntax tree.
///
/// Every method defaults to walking the node's children, so an implementor
/// only overrides the nodes it cares about and calls the matching `walk_*`
/// function to keep descending.
pub trait Visitor {
    fn visit_program(&mut self, program: &Program) {
        walk_program(self, program);
    }

    fn visit_block(&mut self, block: &Block) {
        walk_block(self, block);
    }

    fn visit_const(&mut self, _decl: &ConstDeclaration) {}

    fn visit_var(&mut self, _decl: &VarDeclaration) {}

    fn visit_procedure(&mut self, decl: &ProcedureDeclaration) {
        walk_procedure(self, decl);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        walk_statement(self, stmt);
    }

    fn visit_condition(&mut self, condition: &Condition) {
        walk_condition(self, condition);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        walk_expression(self, expr);
    }
}

pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    visitor.visit_block(&program.block);
}

pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) {
    for decl in &block.consts {
        visitor.visit_const(decl);
    }
    for decl in &block.vars {
        visitor.visit_var(decl);
    }
    for decl in &block.procedures {
        visitor.visit_procedure(decl);
    }
    visitor.visit_statement(&block.body);
}

pub fn walk_procedure<V: Visitor + ?Sized>(visitor: &mut V, decl: &ProcedureDeclaration) {
    visitor.visit_block(&decl.body);
}

pub fn walk_statement<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Statement) {
    match stmt {
        Statement::Assign { expr, .. } => visitor.visit_expression(expr),
        Statement::Compound(stmts) => {
            for stmt in stmts {
                visitor.visit_statement(stmt);
            }
        }
        Statement::If {
            condition,
            then_branch,
            else_branch,
        } => {
            visitor.visit_condition(condition);
            visitor.visit_statement(then_branch);
            if let Some(else_branch) = else_branch {
                visitor.visit_statement(else_branch);
            }
        }
        Statement::While { condition, body } => {
            visitor.visit_condition(condition);
            visitor.visit_statement(body);
        }
        Statement::Call { .. }
        | Statement::Read { .. }
        | Statement::Write { .. }
        | Statement::Empty => {}
    }
}

pub fn walk_condition<V: Visitor + ?Sized>(visitor: &mut V, condition: &Condition) {
    match condition {
        Condition::Odd(expr) | Condition::Incomplete(expr) => visitor.visit_expression(expr),
        Condition::Binary { left, right, .. } => {
            visitor.visit_expression(left);
            visitor.visit_expression(right);
        }
    }
}

pub fn walk_expression<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expression) {
    match expr {
        Expression::Unary { operand, .. } => visitor.visit_expression(operand),
        Expression::Binary { left, right, .. } => {
            visitor.visit_expression(left);
            visitor.visit_expression(right);
        }
        Expression::Parenthesized(inner) => visitor.visit_expression(inner),
        Expression::Number(_) | Expression::Identifier(_) | Expression::Empty => {}
    }
}

/// Counts every node of the tree, the program node included.
#[derive(Debug, Default)]
pub struct NodeCounter {
    pub count: usize,
}

impl NodeCounter {
    pub fn count_nodes(program: &Program) -> usize {
        let mut counter = NodeCounter::default();
        counter.visit_program(program);
        counter.count
    }
}

impl Visitor for NodeCounter {
    fn visit_program(&mut self, program: &Program) {
        self.count += 1;
        walk_program(self, program);
    }

    fn visit_block(&mut self, block: &Block) {
        self.count += 1;
        walk_block(self, block);
    }

    fn visit_const(&mut self, _decl: &ConstDeclaration) {
        self.count += 1;
    }

    fn visit_var(&mut self, _decl: &VarDeclaration) {
        self.count += 1;
    }

    fn visit_procedure(&mut self, decl: &ProcedureDeclaration) {
        self.count += 1;
        walk_procedure(self, decl);
    }

    fn visit_statement(&mut self, stmt: &Statement) {
        self.count += 1;
        walk_statement(self, stmt);
    }

    fn visit_condition(&mut self, condition: &Condition) {
        self.count += 1;
        walk_condition(self, condition);
    }

    fn visit_expression(&mut self, expr: &Expression) {
        self.count += 1;
        walk_expression(self, expr);
    }
}
