use std::hash::BuildHasher;

use anyhow::Result;

use super::{GetStr, InternStr, KeyToStr, StrToKey};

/// Interner that checks for duplicates and will only intern a given string once.
/// `Key` is the id type and must be big enough to count every distinct string.
#[derive(Debug)]
pub struct PackedInterner<Key = u32, H = crate::Hasher> {
    str_to_key: StrToKey<Key, H>,
    key_to_str: KeyToStr<Key>,
}

impl<Key> PackedInterner<Key, crate::Hasher> {
    pub fn with_capacity_and_avg_len(cap: usize, avg_len: usize) -> Self {
        Self {
            str_to_key: StrToKey::with_capacity(cap),
            key_to_str: KeyToStr::with_capacity_and_avg_len(cap, avg_len),
        }
    }
}

// GetStr /////////////////////
impl<Key, H> GetStr for PackedInterner<Key, H>
where
    KeyToStr<Key>: GetStr<Key = Key>,
{
    type Key = Key;

    fn get(&self, k: Key) -> Result<&str> {
        self.key_to_str.get(k)
    }

    fn len(&self) -> usize {
        self.key_to_str.len()
    }
}

// InternStr ///////////////////
impl<Key, H: BuildHasher> InternStr for PackedInterner<Key, H>
where
    Key: Copy,
    KeyToStr<Key>: GetStr<Key = Key> + InternStr<Key = Key>,
{
    type Key = Key;

    fn intern<T: AsRef<str>>(&mut self, s: T) -> Result<Key> {
        self.str_to_key.intern(s.as_ref(), &mut self.key_to_str)
    }
}
