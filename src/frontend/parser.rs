use crate::ast::{
    BinaryOp, Block, Condition, ConstDeclaration, Expression, ProcedureDeclaration, Program,
    RelationalOp, Statement, UnaryOp, VarDeclaration,
};
use crate::frontend::diagnostic::{Diagnostic, Found, Recovery};
use crate::frontend::token::{Delimiter, Keyword, Operator, Span, Token, TokenKind};
use crate::utils::config::lexer::SATURATED_LITERAL;
use crate::utils::config::parser::{ELSE_WORD, MAX_NESTING_DEPTH};

// Declaration sections of a block, in the order they must appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Section {
    Const,
    Var,
    Procedure,
}

/// Recursive-descent parser with one token of lookahead.
///
/// The parser never aborts. Every deviation from the grammar is recorded as a
/// `Diagnostic` and replaced by a placeholder or an assumed token, so `parse`
/// always returns a tree.
pub struct Parser<'a> {
    tokens: &'a [Token],
    position: usize,
    depth: usize,
    depth_reported: bool,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Self {
            tokens,
            position: 0,
            depth: 0,
            depth_reported: false,
            diagnostics: Vec::new(),
        }
    }

    pub fn parse(mut self) -> (Program, Vec<Diagnostic>) {
        let program = self.program();
        (program, self.diagnostics)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.position)
    }

    fn peek_kind(&self) -> Option<&'a TokenKind> {
        self.peek().map(|token| &token.kind)
    }

    fn peek_nth_kind(&self, n: usize) -> Option<&'a TokenKind> {
        self.tokens.get(self.position + n).map(|token| &token.kind)
    }

    fn peek_operator(&self) -> Option<Operator> {
        match self.peek_kind() {
            Some(TokenKind::Operator(op)) => Some(*op),
            _ => None,
        }
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    fn check_keyword(&self, keyword: Keyword) -> bool {
        self.peek_kind().is_some_and(|kind| kind.is_keyword(keyword))
    }

    fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        if self.check_keyword(keyword) {
            self.next();
            true
        } else {
            false
        }
    }

    fn eat_operator(&mut self, operator: Operator) -> bool {
        if self.peek_kind().is_some_and(|kind| kind.is_operator(operator)) {
            self.next();
            true
        } else {
            false
        }
    }

    fn eat_delimiter(&mut self, delimiter: Delimiter) -> bool {
        if self.peek_kind().is_some_and(|kind| kind.is_delimiter(delimiter)) {
            self.next();
            true
        } else {
            false
        }
    }

    // Missing delimiters are reported and treated as present.
    fn expect_delimiter(&mut self, delimiter: Delimiter) {
        if !self.eat_delimiter(delimiter) {
            self.report(format!("'{}'", delimiter.as_str()), Recovery::AssumedPresent);
        }
    }

    fn expect_keyword(&mut self, keyword: Keyword) {
        if !self.eat_keyword(keyword) {
            self.report(format!("'{}'", keyword.as_str()), Recovery::AssumedPresent);
        }
    }

    fn expect_identifier(&mut self, expected: &str, recovery: Recovery) -> Option<String> {
        match self.peek_kind() {
            Some(TokenKind::Identifier(name)) => {
                self.next();
                Some(name.clone())
            }
            _ => {
                self.report(expected, recovery);
                None
            }
        }
    }

    fn expect_number(&mut self, expected: &str) -> Option<i64> {
        match self.peek() {
            Some(token) => match token.kind {
                TokenKind::IntegerLiteral(value) => {
                    self.next();
                    Some(self.literal_value(token, value))
                }
                _ => {
                    self.report(expected, Recovery::OmittedDeclaration);
                    None
                }
            },
            None => {
                self.report(expected, Recovery::OmittedDeclaration);
                None
            }
        }
    }

    // The lexer saturates literals that overflow; flag them here.
    fn literal_value(&mut self, token: &Token, value: i64) -> i64 {
        if value == SATURATED_LITERAL && token.lexeme.parse::<i64>().is_err() {
            self.diagnostics.push(Diagnostic::new(
                format!("integer literal at most {}", i64::MAX),
                Found::Token(token.clone()),
                Recovery::SaturatedLiteral,
                Some(token.span),
            ));
        }
        value
    }

    fn end_span(&self) -> Option<Span> {
        self.tokens.last().map(|last| {
            Span::new(
                last.span.end(),
                0,
                last.span.line,
                last.span.column + last.lexeme.chars().count(),
            )
        })
    }

    fn report(&mut self, expected: impl Into<String>, recovery: Recovery) {
        let (found, span) = match self.peek() {
            Some(token) => (Found::Token(token.clone()), Some(token.span)),
            None => (Found::EndOfInput, self.end_span()),
        };
        self.diagnostics.push(Diagnostic::new(expected, found, recovery, span));
    }

    fn enter(&mut self) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            if !self.depth_reported {
                self.depth_reported = true;
                self.report(
                    format!("nesting at most {} levels deep", MAX_NESTING_DEPTH),
                    Recovery::InsertedPlaceholder,
                );
            }
            return false;
        }
        self.depth += 1;
        true
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    // `else` is not reserved; it only counts when it cannot be an assignment target.
    fn is_else(&self) -> bool {
        matches!(self.peek_kind(), Some(TokenKind::Identifier(name)) if name == ELSE_WORD)
            && !self
                .peek_nth_kind(1)
                .is_some_and(|kind| kind.is_operator(Operator::Assign))
    }

    fn starts_statement(&self) -> bool {
        match self.peek_kind() {
            Some(TokenKind::Identifier(_)) => !self.is_else(),
            Some(TokenKind::Keyword(keyword)) => matches!(
                keyword,
                Keyword::Call
                    | Keyword::Begin
                    | Keyword::If
                    | Keyword::While
                    | Keyword::Read
                    | Keyword::Write
            ),
            _ => false,
        }
    }

    /**
     * Parse a program according to the grammar:
     * program = block "." .
     */
    fn program(&mut self) -> Program {
        let block = self.block();
        if self.eat_delimiter(Delimiter::Dot) {
            if self.peek().is_some() {
                self.report("end of input after '.'", Recovery::IgnoredTrailingInput);
            }
        } else if self.peek().is_some() {
            // Whatever the block could not use is reported once, from its first token.
            self.report("'.'", Recovery::IgnoredTrailingInput);
        } else {
            self.report("'.'", Recovery::AssumedPresent);
        }
        Program::new(block)
    }

    /**
     * Parse a block according to the grammar:
     * block = [ "const" ident "=" number { "," ident "=" number } ";" ]
     *         [ "var" ident { "," ident } ";" ]
     *         { "procedure" ident ";" block ";" } statement .
     */
    fn block(&mut self) -> Block {
        let mut block = Block::empty();
        if !self.enter() {
            return block;
        }

        let mut reached = Section::Const;
        loop {
            let section = match self.peek_kind() {
                Some(TokenKind::Keyword(Keyword::Const)) => Section::Const,
                Some(TokenKind::Keyword(Keyword::Var)) => Section::Var,
                Some(TokenKind::Keyword(Keyword::Procedure)) => Section::Procedure,
                _ => break,
            };
            if section < reached {
                self.report(
                    "declarations in const, var, procedure order",
                    Recovery::KeptOutOfOrder,
                );
            } else {
                reached = section;
            }
            match section {
                Section::Const => self.parse_const_declarations(&mut block.consts),
                Section::Var => self.parse_var_declarations(&mut block.vars),
                Section::Procedure => {
                    if let Some(procedure) = self.parse_procedure_declaration() {
                        block.procedures.push(procedure);
                    }
                }
            }
        }

        block.body = self.statement();
        self.leave();
        block
    }

    fn parse_const_declarations(&mut self, consts: &mut Vec<ConstDeclaration>) {
        self.next(); // Consume 'const'
        loop {
            if let Some(decl) = self.const_declaration() {
                consts.push(decl);
            }
            if !self.eat_delimiter(Delimiter::Comma) {
                break;
            }
        }
        self.expect_delimiter(Delimiter::Semicolon);
    }

    // constDecl = ident "=" number .
    fn const_declaration(&mut self) -> Option<ConstDeclaration> {
        let name = self.expect_identifier(
            "identifier in const declaration",
            Recovery::OmittedDeclaration,
        )?;
        if !self.eat_operator(Operator::Equal) {
            self.report("'=' after constant name", Recovery::OmittedDeclaration);
            return None;
        }
        let value = self.expect_number("number in const declaration")?;
        Some(ConstDeclaration::new(name, value))
    }

    fn parse_var_declarations(&mut self, vars: &mut Vec<VarDeclaration>) {
        self.next(); // Consume 'var'
        loop {
            let name = self.expect_identifier(
                "identifier in var declaration",
                Recovery::OmittedDeclaration,
            );
            if let Some(name) = name {
                vars.push(VarDeclaration::new(name));
            }
            if !self.eat_delimiter(Delimiter::Comma) {
                break;
            }
        }
        self.expect_delimiter(Delimiter::Semicolon);
    }

    // A nameless procedure is still parsed so the cursor stays in step, then dropped.
    fn parse_procedure_declaration(&mut self) -> Option<ProcedureDeclaration> {
        self.next(); // Consume 'procedure'
        let name = self.expect_identifier("procedure name", Recovery::OmittedDeclaration);
        self.expect_delimiter(Delimiter::Semicolon);
        let body = self.block();
        self.expect_delimiter(Delimiter::Semicolon);
        name.map(|name| ProcedureDeclaration::new(name, body))
    }

    /**
     * Parse a statement according to the grammar:
     * statement = [ ident ":=" expression
     *             | "call" ident
     *             | "begin" statement { ";" statement } "end"
     *             | "if" condition "then" statement [ "else" statement ]
     *             | "while" condition "do" statement
     *             | "read" ident
     *             | "write" ident ] .
     */
    fn statement(&mut self) -> Statement {
        if !self.starts_statement() {
            return Statement::Empty;
        }
        if !self.enter() {
            return Statement::Empty;
        }
        let stmt = match self.peek_kind() {
            Some(TokenKind::Keyword(Keyword::Call)) => self.call_statement(),
            Some(TokenKind::Keyword(Keyword::Begin)) => self.compound_statement(),
            Some(TokenKind::Keyword(Keyword::If)) => self.if_statement(),
            Some(TokenKind::Keyword(Keyword::While)) => self.while_statement(),
            Some(TokenKind::Keyword(Keyword::Read)) => {
                self.next();
                self.expect_identifier("identifier after 'read'", Recovery::InsertedPlaceholder)
                    .map_or(Statement::Empty, Statement::read)
            }
            Some(TokenKind::Keyword(Keyword::Write)) => {
                self.next();
                self.expect_identifier("identifier after 'write'", Recovery::InsertedPlaceholder)
                    .map_or(Statement::Empty, Statement::write)
            }
            _ => self.assignment(),
        };
        self.leave();
        stmt
    }

    fn assignment(&mut self) -> Statement {
        let name = match self.next() {
            Some(Token {
                kind: TokenKind::Identifier(name),
                ..
            }) => name.clone(),
            _ => return Statement::Empty,
        };
        if !self.eat_operator(Operator::Assign) {
            self.report("':='", Recovery::AssumedPresent);
            // `x = 1` is read as `x := 1`.
            self.eat_operator(Operator::Equal);
        }
        let expr = self.expression();
        Statement::assign(name, expr)
    }

    fn call_statement(&mut self) -> Statement {
        self.next(); // Consume 'call'
        self.expect_identifier("procedure name after 'call'", Recovery::InsertedPlaceholder)
            .map_or(Statement::Empty, Statement::call)
    }

    fn compound_statement(&mut self) -> Statement {
        self.next(); // Consume 'begin'
        let mut stmts = vec![self.statement()];
        loop {
            let before = self.position;
            if self.eat_delimiter(Delimiter::Semicolon) {
                stmts.push(self.statement());
            } else if self.starts_statement() {
                self.report("';' between statements", Recovery::AssumedPresent);
                stmts.push(self.statement());
            } else if self.skip_to_statement() {
                if self.starts_statement() {
                    stmts.push(self.statement());
                }
            } else {
                break;
            }
            if self.position == before {
                break;
            }
        }
        self.expect_keyword(Keyword::End);
        Statement::Compound(stmts)
    }

    // Skips tokens that can neither continue nor close a statement list,
    // stopping at `;`, `end`, `.`, a statement start or end of input.
    fn skip_to_statement(&mut self) -> bool {
        if self.at_statement_boundary() {
            return false;
        }
        self.report("statement, ';' or 'end'", Recovery::SkippedInput);
        while !self.at_statement_boundary() {
            self.next();
        }
        true
    }

    fn at_statement_boundary(&self) -> bool {
        match self.peek_kind() {
            None => true,
            Some(TokenKind::Delimiter(Delimiter::Semicolon | Delimiter::Dot)) => true,
            Some(TokenKind::Keyword(Keyword::End)) => true,
            Some(_) => self.starts_statement(),
        }
    }

    fn if_statement(&mut self) -> Statement {
        self.next(); // Consume 'if'
        let condition = self.condition();
        self.expect_keyword(Keyword::Then);
        let then_branch = self.statement();
        let else_branch = if self.is_else() {
            self.next(); // Consume 'else'
            Some(self.statement())
        } else {
            None
        };
        Statement::if_then(condition, then_branch, else_branch)
    }

    fn while_statement(&mut self) -> Statement {
        self.next(); // Consume 'while'
        let condition = self.condition();
        self.expect_keyword(Keyword::Do);
        let body = self.statement();
        Statement::while_do(condition, body)
    }

    /**
     * Parse a condition according to the grammar:
     * condition = "odd" expression
     *           | expression ( comparator ) expression .
     */
    fn condition(&mut self) -> Condition {
        if self.eat_keyword(Keyword::Odd) {
            return Condition::Odd(self.expression());
        }
        let left = self.expression();
        match self.peek_operator().and_then(RelationalOp::from_operator) {
            Some(op) => {
                self.next();
                let right = self.expression();
                Condition::Binary { left, op, right }
            }
            None => {
                self.report("relational operator", Recovery::InsertedPlaceholder);
                Condition::Incomplete(left)
            }
        }
    }

    /**
     * Parse an expression according to the grammar:
     * expression = [ "+" | "-" ] term { ( "+" | "-" ) term } .
     * The chain folds to the left: a - b - c is (a - b) - c.
     */
    fn expression(&mut self) -> Expression {
        if !self.enter() {
            return Expression::Empty;
        }
        let mut lhs = match self.peek_operator().and_then(UnaryOp::from_operator) {
            Some(op) => {
                self.next();
                Expression::unary(op, self.term())
            }
            None => self.term(),
        };
        while let Some(op) = self.peek_operator().and_then(BinaryOp::additive) {
            self.next();
            let rhs = self.term();
            lhs = Expression::binary(lhs, op, rhs);
        }
        self.leave();
        lhs
    }

    /**
     * Parse a term according to the grammar:
     * term = factor { ( "*" | "/" ) factor } .
     */
    fn term(&mut self) -> Expression {
        let mut lhs = self.factor();
        while let Some(op) = self.peek_operator().and_then(BinaryOp::multiplicative) {
            self.next();
            let rhs = self.factor();
            lhs = Expression::binary(lhs, op, rhs);
        }
        lhs
    }

    /**
     * Parse a factor according to the grammar:
     * factor = ident | number | "(" expression ")" .
     */
    fn factor(&mut self) -> Expression {
        let token = match self.peek() {
            Some(token) => token,
            None => {
                self.report("identifier, number or '('", Recovery::InsertedPlaceholder);
                return Expression::Empty;
            }
        };
        match &token.kind {
            TokenKind::Identifier(name) => {
                self.next();
                Expression::ident(name.clone())
            }
            TokenKind::IntegerLiteral(value) => {
                self.next();
                Expression::number(self.literal_value(token, *value))
            }
            TokenKind::Delimiter(Delimiter::LParen) => {
                self.next();
                let inner = self.expression();
                if !self.eat_delimiter(Delimiter::RParen) {
                    self.report("')'", Recovery::AssumedPresent);
                }
                Expression::parenthesized(inner)
            }
            _ => {
                self.report("identifier, number or '('", Recovery::InsertedPlaceholder);
                Expression::Empty
            }
        }
    }
}

/// Parse a token sequence into a program and its diagnostics.
pub fn parse(tokens: &[Token]) -> (Program, Vec<Diagnostic>) {
    Parser::new(tokens).parse()
}
