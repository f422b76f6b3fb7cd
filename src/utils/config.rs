// Lexer constants
pub mod lexer {
    // Characters skipped between tokens
    pub const WHITESPACE: &[char] = &[' ', '\t', '\n', '\r'];

    // Value stored for a digit run that does not fit in an i64
    pub const SATURATED_LITERAL: i64 = i64::MAX;
}

// Parser constants
pub mod parser {
    // Maximum recursion depth across blocks, statements and expressions
    pub const MAX_NESTING_DEPTH: usize = 256;

    // Contextual word that introduces the alternative branch of an if statement
    pub const ELSE_WORD: &str = "else";
}

// Source file handling
pub mod io {
    pub const SOURCE_EXTENSION: &str = "pl0";
}

// Diagnostic rendering
pub mod diagnostics {
    pub const GUTTER_SEPARATOR: &str = " | ";
    pub const CARET: char = '^';
}
