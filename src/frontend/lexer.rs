use crate::frontend::token::{Delimiter, Keyword, Operator, Span, Token, TokenKind};
use crate::utils::config::lexer::{SATURATED_LITERAL, WHITESPACE};
use std::{iter::Peekable, str::CharIndices};

/// Scanner over a PL/0 source string.
///
/// The lexer never fails: characters it does not recognise come out as
/// `TokenKind::Unknown`. It is an iterator, so tokens can be pulled lazily;
/// `tokenize` collects them eagerly.
pub struct Lexer<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            line: 1,
            column: 1,
        }
    }

    pub fn scan(self) -> Vec<Token> {
        self.collect()
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|&(_, ch)| ch)
    }

    fn advance(&mut self) -> Option<char> {
        let (_, ch) = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn current_offset(&mut self) -> usize {
        match self.chars.peek() {
            Some(&(offset, _)) => offset,
            None => self.source.len(),
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.peek_char() {
            if WHITESPACE.contains(&ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        let start = self.current_offset();
        let line = self.line;
        let column = self.column;
        let kind = match self.peek_char()? {
            ch if ch.is_alphabetic() => self.scan_identifier(start),
            ch if ch.is_ascii_digit() => self.scan_number(start),
            ':' => self.scan_assignment(),
            '<' => self.scan_less_than(),
            '>' => self.scan_greater_than(),
            ch => self.scan_single_char_token(ch),
        };
        let end = self.current_offset();
        let span = Span::new(start, end - start, line, column);
        Some(Token::new(kind, &self.source[start..end], span))
    }

    fn consume_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(ch) = self.peek_char() {
            if pred(ch) {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn scan_identifier(&mut self, start: usize) -> TokenKind {
        self.advance(); // Consume the leading letter
        self.consume_while(|ch| ch.is_alphabetic() || ch.is_ascii_digit());
        let end = self.current_offset();
        let word = &self.source[start..end];
        match Keyword::from_word(word) {
            Some(keyword) => TokenKind::Keyword(keyword),
            None => TokenKind::Identifier(word.to_string()),
        }
    }

    fn scan_number(&mut self, start: usize) -> TokenKind {
        self.consume_while(|ch| ch.is_ascii_digit());
        let end = self.current_offset();
        let digits = &self.source[start..end];
        // Only overflow can make the parse fail; the parser reports it.
        TokenKind::IntegerLiteral(digits.parse::<i64>().unwrap_or(SATURATED_LITERAL))
    }

    fn scan_assignment(&mut self) -> TokenKind {
        self.advance(); // Consume ':'
        if self.peek_char() == Some('=') {
            self.advance(); // Consume '='
            TokenKind::Operator(Operator::Assign)
        } else {
            TokenKind::Unknown(':')
        }
    }

    fn scan_less_than(&mut self) -> TokenKind {
        self.advance(); // Consume '<'
        match self.peek_char() {
            Some('=') => {
                self.advance();
                TokenKind::Operator(Operator::LessThanEqual)
            }
            Some('>') => {
                self.advance();
                TokenKind::Operator(Operator::NotEqual)
            }
            _ => TokenKind::Operator(Operator::LessThan),
        }
    }

    fn scan_greater_than(&mut self) -> TokenKind {
        self.advance(); // Consume '>'
        if self.peek_char() == Some('=') {
            self.advance();
            TokenKind::Operator(Operator::GreaterThanEqual)
        } else {
            TokenKind::Operator(Operator::GreaterThan)
        }
    }

    fn scan_single_char_token(&mut self, ch: char) -> TokenKind {
        self.advance(); // Consume the character
        if let Some(delimiter) = Delimiter::from_char(ch) {
            return TokenKind::Delimiter(delimiter);
        }
        match ch {
            '+' => TokenKind::Operator(Operator::Plus),
            '-' => TokenKind::Operator(Operator::Minus),
            '*' => TokenKind::Operator(Operator::Multiply),
            '/' => TokenKind::Operator(Operator::Divide),
            '=' => TokenKind::Operator(Operator::Equal),
            _ => TokenKind::Unknown(ch),
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.scan_token()
    }
}

/// Tokenize a whole source string.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).scan()
}
