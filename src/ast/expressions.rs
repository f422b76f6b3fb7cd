use crate::frontend::token::Operator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationalOp {
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
}

impl RelationalOp {
    pub fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Equal => Some(RelationalOp::Equal),
            Operator::NotEqual => Some(RelationalOp::NotEqual),
            Operator::LessThan => Some(RelationalOp::LessThan),
            Operator::LessThanEqual => Some(RelationalOp::LessThanEqual),
            Operator::GreaterThan => Some(RelationalOp::GreaterThan),
            Operator::GreaterThanEqual => Some(RelationalOp::GreaterThanEqual),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RelationalOp::Equal => "=",
            RelationalOp::NotEqual => "<>",
            RelationalOp::LessThan => "<",
            RelationalOp::LessThanEqual => "<=",
            RelationalOp::GreaterThan => ">",
            RelationalOp::GreaterThanEqual => ">=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOp {
    /// Operators of the additive chain in `expression`.
    pub fn additive(op: Operator) -> Option<Self> {
        match op {
            Operator::Plus => Some(BinaryOp::Add),
            Operator::Minus => Some(BinaryOp::Subtract),
            _ => None,
        }
    }

    /// Operators of the multiplicative chain in `term`.
    pub fn multiplicative(op: Operator) -> Option<Self> {
        match op {
            Operator::Multiply => Some(BinaryOp::Multiply),
            Operator::Divide => Some(BinaryOp::Divide),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
}

impl UnaryOp {
    pub fn from_operator(op: Operator) -> Option<Self> {
        match op {
            Operator::Plus => Some(UnaryOp::Plus),
            Operator::Minus => Some(UnaryOp::Minus),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Number(i64),
    Identifier(String),
    /// Sign applied to the first term of an expression.
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Binary {
        left: Box<Expression>,
        op: BinaryOp,
        right: Box<Expression>,
    },
    Parenthesized(Box<Expression>),
    /// Placeholder for a factor that could not be parsed.
    Empty,
}

impl Expression {
    pub fn number(value: i64) -> Self {
        Expression::Number(value)
    }

    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn parenthesized(inner: Expression) -> Self {
        Expression::Parenthesized(Box::new(inner))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Condition {
    Odd(Expression),
    Binary {
        left: Expression,
        op: RelationalOp,
        right: Expression,
    },
    /// An expression that was not followed by a relational operator.
    Incomplete(Expression),
}
