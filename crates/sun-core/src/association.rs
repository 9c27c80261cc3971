//! A single key/value fact fixed at definition time

use std::fmt;

/// One key/value association.
///
/// Both halves are plain constants. The inverse swaps their roles and is
/// what the inverse runtime table is built from.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Association<K, V> {
    pub key: K,
    pub value: V,
}

impl<K, V> Association<K, V> {
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Association { key, value }
    }
}

impl<K: Copy, V: Copy> Association<K, V> {
    /// Same association with key and value exchanged
    #[inline]
    pub const fn inverse(self) -> Association<V, K> {
        Association {
            key: self.value,
            value: self.key,
        }
    }

    #[inline]
    pub const fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }

    #[inline]
    pub const fn key(&self) -> K {
        self.key
    }

    #[inline]
    pub const fn value(&self) -> V {
        self.value
    }
}

impl<K, V> From<Association<K, V>> for (K, V) {
    fn from(association: Association<K, V>) -> Self {
        (association.key, association.value)
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Association<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} => {:?}", self.key, self.value)
    }
}
