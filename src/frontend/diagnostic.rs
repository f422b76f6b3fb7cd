//! Syntax diagnostics.
//!
//! A diagnostic records what the parser expected, what it found instead and
//! how it recovered. Parsing never stops on a diagnostic; they are collected
//! in source order and returned next to the tree.

use crate::frontend::token::{Span, Token};
use crate::utils::config::diagnostics::{CARET, GUTTER_SEPARATOR};
use colored::{ColoredString, Colorize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Found {
    Token(Token),
    EndOfInput,
}

impl fmt::Display for Found {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Found::Token(token) => write!(f, "{}", token.kind),
            Found::EndOfInput => f.write_str("end of input"),
        }
    }
}

/// What the parser did to carry on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recovery {
    /// The missing token was treated as present.
    AssumedPresent,
    /// A placeholder node stands in for the malformed construct.
    InsertedPlaceholder,
    /// The malformed declaration was left out of its list.
    OmittedDeclaration,
    /// Input left over after the program was ignored.
    IgnoredTrailingInput,
    /// Tokens that cannot continue a statement list were skipped.
    SkippedInput,
    /// A declaration section out of const/var/procedure order was kept.
    KeptOutOfOrder,
    /// An integer literal too large for the value range was clamped.
    SaturatedLiteral,
}

impl Recovery {
    pub fn describe(&self) -> &'static str {
        match self {
            Recovery::AssumedPresent => "assumed present",
            Recovery::InsertedPlaceholder => "inserted placeholder",
            Recovery::OmittedDeclaration => "declaration omitted",
            Recovery::IgnoredTrailingInput => "rest of input ignored",
            Recovery::SkippedInput => "skipped to next statement",
            Recovery::KeptOutOfOrder => "kept out of order",
            Recovery::SaturatedLiteral => "value saturated",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub expected: String,
    pub found: Found,
    pub recovery: Recovery,
    pub span: Option<Span>,
}

impl Diagnostic {
    pub fn new(
        expected: impl Into<String>,
        found: Found,
        recovery: Recovery,
        span: Option<Span>,
    ) -> Self {
        Self {
            expected: expected.into(),
            found,
            recovery,
            span,
        }
    }

    pub fn is_end_of_input(&self) -> bool {
        self.found == Found::EndOfInput
    }

    /// Format the diagnostic with the offending source line and a caret.
    pub fn render(&self, source: &str, color: bool) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{}: {}\n",
            styled("error", color, |s| s.red().bold()),
            self.message()
        ));

        if let Some(span) = self.span {
            let arrow = styled("-->", color, |s| s.blue().bold());
            output.push_str(&format!("  {} {}\n", arrow, span));
            output.push_str(&self.format_source_context(source, &span, color));
        }
        output
    }

    /// `expected X, found Y (recovery)` without the location prefix.
    pub fn message(&self) -> String {
        format!(
            "expected {}, found {} ({})",
            self.expected,
            self.found,
            self.recovery.describe()
        )
    }

    fn format_source_context(&self, source: &str, span: &Span, color: bool) -> String {
        let mut output = String::new();
        let line_text = match source.lines().nth(span.line.saturating_sub(1)) {
            Some(text) => text,
            None => return output,
        };
        let line_num = span.line.to_string();
        output.push_str(&format!(
            "{}{}{}\n",
            styled(&line_num, color, |s| s.blue().bold()),
            GUTTER_SEPARATOR,
            line_text
        ));

        let indent = span.column.saturating_sub(1);
        let padding = " ".repeat(line_num.len() + GUTTER_SEPARATOR.len() + indent);
        let remaining = line_text.chars().count().saturating_sub(indent);
        let width = span.len.clamp(1, remaining.max(1));
        let marker: String = std::iter::repeat(CARET).take(width).collect();
        let marker = styled(&marker, color, |s| s.red().bold());
        output.push_str(&format!("{}{}\n", padding, marker));
        output
    }
}

fn styled(text: &str, color: bool, paint: impl Fn(&str) -> ColoredString) -> String {
    if color {
        paint(text).to_string()
    } else {
        text.to_string()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some(span) => write!(f, "{}: {}", span, self.message()),
            None => f.write_str(&self.message()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::token::{Delimiter, TokenKind};

    #[test]
    fn display_names_expected_and_found() {
        let span = Span::new(4, 1, 1, 5);
        let token = Token::new(TokenKind::Delimiter(Delimiter::Semicolon), ";", span);
        let diag = Diagnostic::new(
            "identifier",
            Found::Token(token),
            Recovery::OmittedDeclaration,
            Some(span),
        );
        assert_eq!(
            diag.to_string(),
            "line 1, column 5: expected identifier, found ';' (declaration omitted)"
        );
    }

    #[test]
    fn end_of_input_diagnostic() {
        let diag = Diagnostic::new("'.'", Found::EndOfInput, Recovery::AssumedPresent, None);
        assert!(diag.is_end_of_input());
        assert_eq!(diag.to_string(), "expected '.', found end of input (assumed present)");
    }

    #[test]
    fn render_points_at_the_token() {
        let source = "var x;\nx := @";
        let span = Span::new(12, 1, 2, 6);
        let token = Token::new(TokenKind::Unknown('@'), "@", span);
        let diag = Diagnostic::new(
            "factor",
            Found::Token(token),
            Recovery::InsertedPlaceholder,
            Some(span),
        );

        let rendered = diag.render(source, false);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines[0],
            "error: expected factor, found unrecognized character '@' (inserted placeholder)"
        );
        assert_eq!(lines[1], "  --> line 2, column 6");
        assert_eq!(lines[2], "2 | x := @");
        assert_eq!(lines[3], "         ^");
    }
}
