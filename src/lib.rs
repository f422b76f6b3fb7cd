use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod utils;

pub use frontend::{parse, tokenize};

pub const VERSION: &str = "0.1.0";

use crate::ast::Program;
use crate::frontend::Diagnostic;
use crate::utils::config::io::SOURCE_EXTENSION;
use crate::utils::errors::{Pl0Error, Pl0Result};

/// Tokenize and parse in one call.
pub fn parse_source(source: &str) -> (Program, Vec<Diagnostic>) {
    let tokens = tokenize(source);
    parse(&tokens)
}

/// Load a `.pl0` source file.
pub fn read(path: &Path) -> Pl0Result<String> {
    if path.extension().map_or(true, |ext| ext != SOURCE_EXTENSION) {
        return Err(Pl0Error::bad_extension(path));
    }
    let mut contents = String::new();
    File::open(path)?.read_to_string(&mut contents)?;
    Ok(contents)
}
