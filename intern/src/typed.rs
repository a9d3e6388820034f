use std::marker::PhantomData;

use anyhow::Result;

use super::{GetStr, InternStr};

/// Wraps an interner so callers see `OuterKey` instead of its raw int keys.
#[derive(Debug)]
pub struct TypedInterner<OuterKey, T> {
    interner: T,
    _phantom: PhantomData<OuterKey>,
}

impl<K, T> TypedInterner<K, T> {
    pub fn new(interner: T) -> Self {
        Self {
            interner,
            _phantom: PhantomData,
        }
    }
}

// GetStr ///////////////////
impl<OuterKey, T> GetStr for TypedInterner<OuterKey, T>
where
    T: GetStr,
    OuterKey: Into<T::Key>,
{
    type Key = OuterKey;

    fn get(&self, k: OuterKey) -> Result<&str> {
        self.interner.get(k.into())
    }

    fn len(&self) -> usize {
        self.interner.len()
    }
}

// InternStr ///////////////
impl<OuterKey, T> InternStr for TypedInterner<OuterKey, T>
where
    T: InternStr,
    T::Key: Into<OuterKey>,
{
    type Key = OuterKey;

    fn intern<U: AsRef<str>>(&mut self, s: U) -> Result<OuterKey> {
        Ok(self.interner.intern(s)?.into())
    }
}
