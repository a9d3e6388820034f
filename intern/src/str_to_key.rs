use anyhow::Result;
use hashbrown::hash_map::{HashMap, RawEntryMut};
use std::hash::BuildHasher;

use super::{GetStr, InternStr};

/// Maps string hashes to keys without storing the strings a second time.
/// The map's keys are our interner keys and its values are `()`;
/// collisions are resolved by comparing against the string in `key_to_str`.
#[derive(Debug)]
pub struct StrToKey<Key = u32, H = crate::Hasher> {
    map: HashMap<Key, (), ()>,
    hasher: H,
}

impl<Key, H: Default> StrToKey<Key, H> {
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(cap, ()),
            hasher: H::default(),
        }
    }
}

impl<Key: Copy, H: BuildHasher> StrToKey<Key, H> {
    /// Return the key for `s`, interning it in `key_to_str` if we haven't seen it.
    pub fn intern<T>(&mut self, s: &str, key_to_str: &mut T) -> Result<Key>
    where
        T: GetStr<Key = Key> + InternStr<Key = Key>,
    {
        let hash = self.hasher.hash_one(s);
        let entry = self.map.raw_entry_mut().from_hash(hash, |colliding_key| {
            key_to_str
                .get(*colliding_key)
                .is_ok_and(|already_interned| s == already_interned)
        });

        match entry {
            RawEntryMut::Occupied(entry) => Ok(*entry.into_key()),
            RawEntryMut::Vacant(entry) => {
                let new_k = key_to_str.intern(s)?;
                let hasher = &self.hasher;
                entry.insert_with_hasher(hash, new_k, (), |colliding_key| {
                    // every key in the map was handed out by key_to_str:
                    key_to_str
                        .get(*colliding_key)
                        .map(|already_interned| hasher.hash_one(already_interned))
                        .unwrap_or_default()
                });
                Ok(new_k)
            }
        }
    }
}
