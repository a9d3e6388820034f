//! Interning for job codes.
//!
//! Codes parsed from a job list are stored once in a packed string buffer
//! and handed out as small integer keys, so the job collection can work on
//! `Copy` ids and only go back to strings for output.

/// Traits shared by the interners.
mod traits;
pub use traits::{GetStr, InternStr};

/// Internals for mapping keys to interned strings.
mod key_to_str;
use key_to_str::KeyToStr;

/// Internals for mapping interned strings to keys.
mod str_to_key;
use str_to_key::StrToKey;

/// Interner that checks for duplicates and only stores each unique string once.
mod packed;
pub use packed::PackedInterner;

/// Wrapper around interners that uses typed keys.
mod typed;
pub use typed::TypedInterner;

type Hasher = std::hash::BuildHasherDefault<rustc_hash::FxHasher>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Interner is full: no key left for string number {0}")]
    OutOfKeys(usize),
    #[error("No interned string for key {0}")]
    KeyNotFound(usize),
}
