//! Compile-time maximum of constants
//!
//! `ct_max!` folds pairwise from the right: the first element is compared
//! against the maximum of the rest, down to a two-element base case. Every
//! step goes through [`ConstCmp::max`](crate::ConstCmp), so the whole fold is
//! usable in a `const` item. For slices see `ConstCmp::<T>::max_of`.

/// Maximum of one or more constants of type `T`.
///
/// ```rust
/// use sun_core::ct_max;
///
/// const WIDEST: usize = ct_max!(usize; 16, 64, 32);
/// assert_eq!(WIDEST, 64);
/// ```
#[macro_export]
macro_rules! ct_max {
    ($t:ty; $only:expr $(,)?) => {{
        let only: $t = $only;
        only
    }};
    ($t:ty; $a:expr, $b:expr $(,)?) => {
        $crate::ConstCmp::<$t>($a).max($b)
    };
    ($t:ty; $first:expr, $($rest:expr),+ $(,)?) => {
        $crate::ConstCmp::<$t>($first).max($crate::ct_max!($t; $($rest),+))
    };
}
