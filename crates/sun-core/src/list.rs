//! Ordered association lists and their compile-time resolver
//!
//! A list is a unit type carrying its associations as an associated constant.
//! Declaration order is significant: the resolver scans front to back and the
//! first association whose key matches wins. Later duplicates are never
//! observed at compile time.
//!
//! The constant functions of the resolver (`get_or`, `try_get`, `contains`,
//! `first_duplicate`, and the strict lookup behind `ct_get!`) are generated
//! per list by [`associations!`](crate::associations), since each needs a
//! concrete key type to compare with. This trait carries what can be written
//! generically.

use std::fmt;

use crate::Association;

/// Ordered, declared set of associations
pub trait AssociationList: 'static {
    type Key: Copy + fmt::Debug + 'static;
    type Value: Copy + fmt::Debug + 'static;

    /// Declared name, used in diagnostics
    const NAME: &'static str;

    /// Associations in declaration order
    const ASSOCIATIONS: &'static [Association<Self::Key, Self::Value>];

    #[inline]
    fn len() -> usize {
        Self::ASSOCIATIONS.len()
    }

    #[inline]
    fn is_empty() -> bool {
        Self::ASSOCIATIONS.is_empty()
    }

    fn iter() -> std::slice::Iter<'static, Association<Self::Key, Self::Value>> {
        Self::ASSOCIATIONS.iter()
    }

    fn keys() -> impl Iterator<Item = Self::Key> {
        Self::ASSOCIATIONS.iter().map(|a| a.key)
    }

    fn values() -> impl Iterator<Item = Self::Value> {
        Self::ASSOCIATIONS.iter().map(|a| a.value)
    }

    /// Associations with key and value exchanged, in declaration order
    fn inverse_iter() -> impl Iterator<Item = Association<Self::Value, Self::Key>> {
        Self::ASSOCIATIONS.iter().map(|a| a.inverse())
    }

    /// Index of the first association declaring `key`
    fn position_of(key: &Self::Key) -> Option<usize>
    where
        Self::Key: PartialEq,
    {
        Self::ASSOCIATIONS.iter().position(|a| a.key == *key)
    }
}
