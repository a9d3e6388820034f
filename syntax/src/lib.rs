//! Parser for job lists written as `job => dependency` entries.

#[macro_use]
mod macros;
mod parse;
pub use parse::{parse, Error};
pub mod ast;
