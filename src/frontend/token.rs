use std::fmt;

/// Location of a token in the source text.
///
/// `offset` and `len` are byte based so `&source[offset..offset + len]` is the
/// lexeme; `line` and `column` are 1-based, columns counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub offset: usize,
    pub len: usize,
    pub line: usize,
    pub column: usize,
}

impl Span {
    pub fn new(offset: usize, len: usize, line: usize, column: usize) -> Self {
        Self {
            offset,
            len,
            line,
            column,
        }
    }

    pub fn end(&self) -> usize {
        self.offset + self.len
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}", self.line, self.column)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Begin,
    End,
    If,
    Then,
    While,
    Do,
    Call,
    Const,
    Var,
    Procedure,
    Odd,
    Read,
    Write,
}

impl Keyword {
    pub const ALL: [Keyword; 13] = [
        Keyword::Begin,
        Keyword::End,
        Keyword::If,
        Keyword::Then,
        Keyword::While,
        Keyword::Do,
        Keyword::Call,
        Keyword::Const,
        Keyword::Var,
        Keyword::Procedure,
        Keyword::Odd,
        Keyword::Read,
        Keyword::Write,
    ];

    /// Case-sensitive lookup of a reserved word.
    pub fn from_word(word: &str) -> Option<Keyword> {
        let keyword = match word {
            "begin" => Keyword::Begin,
            "end" => Keyword::End,
            "if" => Keyword::If,
            "then" => Keyword::Then,
            "while" => Keyword::While,
            "do" => Keyword::Do,
            "call" => Keyword::Call,
            "const" => Keyword::Const,
            "var" => Keyword::Var,
            "procedure" => Keyword::Procedure,
            "odd" => Keyword::Odd,
            "read" => Keyword::Read,
            "write" => Keyword::Write,
            _ => return None,
        };
        Some(keyword)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Begin => "begin",
            Keyword::End => "end",
            Keyword::If => "if",
            Keyword::Then => "then",
            Keyword::While => "while",
            Keyword::Do => "do",
            Keyword::Call => "call",
            Keyword::Const => "const",
            Keyword::Var => "var",
            Keyword::Procedure => "procedure",
            Keyword::Odd => "odd",
            Keyword::Read => "read",
            Keyword::Write => "write",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equal,
    LessThan,
    GreaterThan,
    LessThanEqual,
    GreaterThanEqual,
    NotEqual,
    Assign,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Plus => "+",
            Operator::Minus => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Equal => "=",
            Operator::LessThan => "<",
            Operator::GreaterThan => ">",
            Operator::LessThanEqual => "<=",
            Operator::GreaterThanEqual => ">=",
            Operator::NotEqual => "<>",
            Operator::Assign => ":=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Comma,
    Dot,
    Semicolon,
    LParen,
    RParen,
}

impl Delimiter {
    pub fn from_char(ch: char) -> Option<Delimiter> {
        match ch {
            ',' => Some(Delimiter::Comma),
            '.' => Some(Delimiter::Dot),
            ';' => Some(Delimiter::Semicolon),
            '(' => Some(Delimiter::LParen),
            ')' => Some(Delimiter::RParen),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Dot => ".",
            Delimiter::Semicolon => ";",
            Delimiter::LParen => "(",
            Delimiter::RParen => ")",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Identifier(String),
    IntegerLiteral(i64),
    Operator(Operator),
    Delimiter(Delimiter),
    Keyword(Keyword),
    Unknown(char),
}

impl TokenKind {
    pub fn kind_name(&self) -> &'static str {
        match self {
            TokenKind::Identifier(_) => "Identifier",
            TokenKind::IntegerLiteral(_) => "IntegerLiteral",
            TokenKind::Operator(_) => "Operator",
            TokenKind::Delimiter(_) => "Delimiter",
            TokenKind::Keyword(_) => "Keyword",
            TokenKind::Unknown(_) => "Unknown",
        }
    }

    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == keyword)
    }

    pub fn is_operator(&self, operator: Operator) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == operator)
    }

    pub fn is_delimiter(&self, delimiter: Delimiter) -> bool {
        matches!(self, TokenKind::Delimiter(d) if *d == delimiter)
    }
}

/// Human readable form used in diagnostics, e.g. `identifier 'x'` or `';'`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "identifier '{}'", name),
            TokenKind::IntegerLiteral(value) => write!(f, "number {}", value),
            TokenKind::Operator(op) => write!(f, "'{}'", op.as_str()),
            TokenKind::Delimiter(delim) => write!(f, "'{}'", delim.as_str()),
            TokenKind::Keyword(keyword) => write!(f, "keyword '{}'", keyword.as_str()),
            TokenKind::Unknown(ch) => write!(f, "unrecognized character '{}'", ch.escape_debug()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    pub fn payload(&self) -> String {
        match &self.kind {
            TokenKind::Identifier(name) => name.clone(),
            TokenKind::IntegerLiteral(value) => value.to_string(),
            TokenKind::Operator(op) => op.as_str().to_string(),
            TokenKind::Delimiter(delim) => delim.as_str().to_string(),
            TokenKind::Keyword(keyword) => keyword.as_str().to_string(),
            TokenKind::Unknown(ch) => ch.to_string(),
        }
    }
}

/// Listing form: `<Kind>: <payload>`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind.kind_name(), self.payload())
    }
}

/// One `<Kind>: <payload>` line per token, in source order.
pub fn render_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        out.push_str(&token.to_string());
        out.push('\n');
    }
    out
}
