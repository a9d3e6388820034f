use std::marker::PhantomData;

use anyhow::Result;

use super::{Error, GetStr, InternStr};

/// Append-only string buffer plus the start offset of each string.
/// A string ends where the next one starts (or at the end of the buffer).
#[derive(Debug)]
pub struct KeyToStr<Key = u32> {
    starts: Vec<usize>,
    strings: String,
    _phantom: PhantomData<Key>,
}

impl<Key> KeyToStr<Key> {
    pub fn with_capacity_and_avg_len(cap: usize, avg_len: usize) -> Self {
        Self {
            starts: Vec::with_capacity(cap),
            strings: String::with_capacity(cap * avg_len),
            _phantom: PhantomData,
        }
    }

    fn bounds(&self, k: usize) -> Option<(usize, usize)> {
        let start = *self.starts.get(k)?;
        let end = self.starts.get(k + 1).copied().unwrap_or(self.strings.len());
        Some((start, end))
    }
}

// GetStr ////////////////////
impl<Key> GetStr for KeyToStr<Key>
where
    Key: Copy + TryInto<usize>,
{
    type Key = Key;

    fn get(&self, k: Key) -> Result<&str> {
        // a key too wide for usize can't have been handed out:
        let k = k.try_into().unwrap_or(usize::MAX);
        let (start, end) = self.bounds(k).ok_or(Error::KeyNotFound(k))?;
        Ok(&self.strings[start..end])
    }

    fn len(&self) -> usize {
        self.starts.len()
    }
}

// InternStr ///////////////////
impl<Key> InternStr for KeyToStr<Key>
where
    Key: TryFrom<usize>,
{
    type Key = Key;

    fn intern<T: AsRef<str>>(&mut self, s: T) -> Result<Key> {
        let n = self.starts.len();
        let k = Key::try_from(n).map_err(|_| Error::OutOfKeys(n))?;
        self.starts.push(self.strings.len());
        self.strings.push_str(s.as_ref());
        Ok(k)
    }
}
