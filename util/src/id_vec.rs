use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// Arena of values addressed by a typed id `K` rather than a bare `usize`.
///
/// Ids are handed out by [`IdVec::push`] and stay valid for the life of the
/// arena, since values are never removed.
#[derive(Debug, Hash, PartialEq, Eq, Clone)]
pub struct IdVec<K, V> {
    values: Vec<V>,
    _key: PhantomData<K>,
}

impl<K, V> Default for IdVec<K, V> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<K, V> IdVec<K, V> {
    fn from_vec(values: Vec<V>) -> Self {
        Self {
            values,
            _key: PhantomData,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self::from_vec(Vec::with_capacity(cap))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Values in id order.
    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.values.iter()
    }
}

impl<K, V: Clone> IdVec<K, V> {
    /// An arena of `len` copies of `val`, e.g. one mark per id of another arena.
    pub fn fill(val: V, len: usize) -> Self {
        Self::from_vec(vec![val; len])
    }
}

impl<K: From<usize>, V> IdVec<K, V> {
    /// Store `v` and return the id it can be looked up by.
    #[inline]
    pub fn push(&mut self, v: V) -> K {
        let id = K::from(self.values.len());
        self.values.push(v);
        id
    }
}

impl<K: Into<usize>, V> Index<K> for IdVec<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, k: K) -> &V {
        &self.values[k.into()]
    }
}

impl<K: Into<usize>, V> IndexMut<K> for IdVec<K, V> {
    #[inline]
    fn index_mut(&mut self, k: K) -> &mut V {
        &mut self.values[k.into()]
    }
}
