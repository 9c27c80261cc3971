//! Comparisons usable during constant evaluation
//!
//! Trait methods cannot be called from a `const fn`, so `PartialEq` and `Ord`
//! are out of reach for the resolver. `ConstCmp` carries one inherent
//! implementation per supported type instead:
//! - all primitive integers, `char`: equality and ordering
//! - `bool`, `&str`, `&[u8]`: equality only
//!
//! Key types outside this set (user enums, newtypes) pass their own
//! `const fn(K, K) -> bool` to `associations!` through `compare = path;`.

/// Wrapper selecting a constant comparison for `T`
#[derive(Clone, Copy, Debug)]
pub struct ConstCmp<T>(pub T);

macro_rules! ordered_const_cmp {
    ($($t:ty),* $(,)?) => {
        $(
            impl ConstCmp<$t> {
                #[inline]
                pub const fn same(self, other: $t) -> bool {
                    self.0 == other
                }

                /// Larger of the two; ties return `self`
                #[inline]
                pub const fn max(self, other: $t) -> $t {
                    if self.0 >= other {
                        self.0
                    } else {
                        other
                    }
                }

                /// Maximum of a slice, `None` when empty
                pub const fn max_of(values: &[$t]) -> Option<$t> {
                    if values.is_empty() {
                        return None;
                    }
                    let mut best = values[0];
                    let mut i = 1;
                    while i < values.len() {
                        best = ConstCmp(best).max(values[i]);
                        i += 1;
                    }
                    Some(best)
                }
            }
        )*
    };
}

ordered_const_cmp!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, char);

impl ConstCmp<bool> {
    #[inline]
    pub const fn same(self, other: bool) -> bool {
        self.0 == other
    }
}

impl<'a> ConstCmp<&'a [u8]> {
    #[inline]
    pub const fn same(self, other: &[u8]) -> bool {
        bytes_eq(self.0, other)
    }
}

impl<'a> ConstCmp<&'a str> {
    #[inline]
    pub const fn same(self, other: &str) -> bool {
        bytes_eq(self.0.as_bytes(), other.as_bytes())
    }
}

const fn bytes_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}
