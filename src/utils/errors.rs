use crate::utils::config::io::SOURCE_EXTENSION;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Failures at the process boundary. Syntax problems inside a program are
/// `Diagnostic`s; `Syntax` only carries their count out of the driver.
#[derive(Debug)]
pub enum Pl0Error {
    // Input selection
    BadExtension { path: PathBuf },
    MissingInput { path: PathBuf },

    // Reading the source
    Io(io::Error),

    // Parsing finished with diagnostics
    Syntax { count: usize },
}

impl Pl0Error {
    pub fn bad_extension(path: &Path) -> Self {
        Pl0Error::BadExtension {
            path: path.to_path_buf(),
        }
    }

    pub fn missing_input(path: &Path) -> Self {
        Pl0Error::MissingInput {
            path: path.to_path_buf(),
        }
    }
}

impl fmt::Display for Pl0Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pl0Error::BadExtension { path } => {
                write!(f, "{}: not a .{} source file", path.display(), SOURCE_EXTENSION)
            }
            Pl0Error::MissingInput { path } => {
                write!(f, "{}: input file does not exist", path.display())
            }
            Pl0Error::Io(err) => write!(f, "I/O error: {}", err),
            Pl0Error::Syntax { count: 1 } => f.write_str("1 syntax error"),
            Pl0Error::Syntax { count } => write!(f, "{} syntax errors", count),
        }
    }
}

impl std::error::Error for Pl0Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Pl0Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Pl0Error {
    fn from(err: io::Error) -> Self {
        Pl0Error::Io(err)
    }
}

pub type Pl0Result<T> = Result<T, Pl0Error>;
