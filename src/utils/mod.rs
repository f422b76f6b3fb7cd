pub mod config;
pub mod errors;

pub use errors::{Pl0Error, Pl0Result};
