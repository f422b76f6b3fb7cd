pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod token;

pub use diagnostic::{Diagnostic, Found, Recovery};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, Parser};
pub use token::{Delimiter, Keyword, Operator, Span, Token, TokenKind};
