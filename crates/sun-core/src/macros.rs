//! Declaration macros
//!
//! One `associations!` block is the single source of truth for a table. It
//! generates the list type, its constant resolver, and optionally the runtime
//! tables materialized from the very same associations.
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use sun_core::{associations, ct_get, RuntimeTable};
//!
//! associations! {
//!     pub Letters: i32 => &'static str {
//!         1 => "a",
//!         2 => "b",
//!         3 => "c",
//!     }
//!     runtime = HashMap;
//! }
//!
//! const B: &str = ct_get!(Letters, 2);
//! assert_eq!(B, "b");
//! assert_eq!(ct_get!(Letters, 5, "none"), "none");
//! assert_eq!(Letters::rt_get(2, "none"), "b");
//! assert_eq!(Letters::rt_inverse_get("c", -1), 3);
//! ```
//!
//! Optional clauses follow the body in this order:
//! - `compare = path;` a `const fn(K, K) -> bool` for key types `ConstCmp`
//!   does not cover
//! - `runtime = Map;` a container taking `<K, V>` generics, e.g. `HashMap`
//!   or `BTreeMap`, enabling the runtime accessors
//! - `config = expr;` a constant `TableConfig`, only after `runtime`

/// Declare an association list.
///
/// See the [module documentation](crate::macros) for the clause syntax.
///
/// The strict lookup is only reachable through [`ct_get!`](crate::ct_get),
/// so it cannot be called with a key known only at run time:
///
/// ```compile_fail
/// use sun_core::associations;
///
/// associations! {
///     Letters: i32 => &'static str {
///         1 => "a",
///     }
/// }
///
/// let key = std::env::args().count() as i32;
/// let value = Letters::get(key);
/// ```
#[macro_export]
macro_rules! associations {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident : $key:ty => $value:ty {
            $($k:expr => $v:expr),* $(,)?
        }
        $(compare = $cmp:path;)?
        $(runtime = $($map:ident)::+; $(config = $config:expr;)?)?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::AssociationList for $name {
            type Key = $key;
            type Value = $value;

            const NAME: &'static str = stringify!($name);

            const ASSOCIATIONS: &'static [$crate::Association<$key, $value>] = &[
                $($crate::Association::new($k, $v)),*
            ];
        }

        #[allow(dead_code)]
        impl $name {
            $crate::__same_key_fn!($key $(, $cmp)?);

            /// Value of the first association declaring `key`
            pub const fn try_get(key: $key) -> ::core::option::Option<$value> {
                let entries = <Self as $crate::AssociationList>::ASSOCIATIONS;
                let mut i = 0;
                while i < entries.len() {
                    if Self::__same_key(entries[i].key, key) {
                        return ::core::option::Option::Some(entries[i].value);
                    }
                    i += 1;
                }
                ::core::option::Option::None
            }

            /// Strict lookup behind `ct_get!`, always evaluated in a constant
            #[doc(hidden)]
            pub const fn __get(key: $key) -> $value {
                match Self::try_get(key) {
                    ::core::option::Option::Some(value) => value,
                    ::core::option::Option::None => {
                        panic!(concat!("no association declared for key in ", stringify!($name)))
                    }
                }
            }

            /// Tolerant lookup
            pub const fn get_or(key: $key, default: $value) -> $value {
                match Self::try_get(key) {
                    ::core::option::Option::Some(value) => value,
                    ::core::option::Option::None => default,
                }
            }

            pub const fn contains(key: $key) -> bool {
                Self::try_get(key).is_some()
            }

            /// First key declared more than once. Diagnostic only.
            pub const fn first_duplicate() -> ::core::option::Option<$key> {
                let entries = <Self as $crate::AssociationList>::ASSOCIATIONS;
                let mut i = 0;
                while i < entries.len() {
                    let mut j = i + 1;
                    while j < entries.len() {
                        if Self::__same_key(entries[i].key, entries[j].key) {
                            return ::core::option::Option::Some(entries[i].key);
                        }
                        j += 1;
                    }
                    i += 1;
                }
                ::core::option::Option::None
            }
        }

        $(
            impl $crate::RuntimeTable for $name {
                type Map = $($map)::+<$key, $value>;
                type InverseMap = $($map)::+<$value, $key>;

                $(const CONFIG: $crate::TableConfig = $config;)?

                fn rt_map() -> &'static Self::Map {
                    static TABLE: ::std::sync::OnceLock<$($map)::+<$key, $value>> =
                        ::std::sync::OnceLock::new();
                    TABLE.get_or_init(|| $crate::materialize::<Self, Self::Map>())
                }

                fn rt_inverse_map() -> &'static Self::InverseMap {
                    static TABLE: ::std::sync::OnceLock<$($map)::+<$value, $key>> =
                        ::std::sync::OnceLock::new();
                    TABLE.get_or_init(|| $crate::materialize_inverse::<Self, Self::InverseMap>())
                }
            }
        )?
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __same_key_fn {
    ($key:ty) => {
        #[doc(hidden)]
        #[inline]
        pub const fn __same_key(a: $key, b: $key) -> bool {
            $crate::ConstCmp(a).same(b)
        }
    };
    ($key:ty, $cmp:path) => {
        #[doc(hidden)]
        #[inline]
        pub const fn __same_key(a: $key, b: $key) -> bool {
            $cmp(a, b)
        }
    };
}

/// Resolve a key inside a constant item.
///
/// `ct_get!(List, key)` fails the build when `key` is not declared;
/// `ct_get!(List, key, default)` yields `default` instead.
///
/// ```compile_fail
/// use sun_core::{associations, ct_get};
///
/// associations! {
///     Letters: i32 => &'static str {
///         1 => "a",
///     }
/// }
///
/// let missing = ct_get!(Letters, 5);
/// ```
#[macro_export]
macro_rules! ct_get {
    ($list:ty, $key:expr $(,)?) => {{
        const VALUE: <$list as $crate::AssociationList>::Value = <$list>::__get($key);
        VALUE
    }};
    ($list:ty, $key:expr, $default:expr $(,)?) => {{
        const VALUE: <$list as $crate::AssociationList>::Value = <$list>::get_or($key, $default);
        VALUE
    }};
}
