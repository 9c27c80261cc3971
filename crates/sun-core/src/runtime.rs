//! Runtime tables - materializer and accessor
//!
//! A list declared with a `runtime = Map;` clause gets a forward table and an
//! inverse table, each built once per process on first access and immutable
//! afterwards. Construction runs behind a `OnceLock`, so racing first
//! accesses still build exactly once; later reads take no lock.
//!
//! Duplicates follow the container, not the resolver: the tables are filled
//! in declaration order and both provided containers keep the last write.
//! For a duplicated key the compile-time answer (first declared) and the
//! runtime answer (last declared) differ. [`RuntimeTable::divergent_keys`]
//! reports where that happens.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::{AssociationList, SunError, SunResult, TableConfig};

/// Container a list can be materialized into
pub trait LookupMap<K, V>: FromIterator<(K, V)> + Send + Sync + 'static {
    fn lookup(&self, key: &K) -> Option<&V>;

    /// Number of distinct entries after duplicate resolution
    fn entries(&self) -> usize;
}

impl<K, V, S> LookupMap<K, V> for HashMap<K, V, S>
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Send + Sync + 'static,
    S: BuildHasher + Default + Send + Sync + 'static,
{
    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

impl<K, V> LookupMap<K, V> for BTreeMap<K, V>
where
    K: Ord + Send + Sync + 'static,
    V: Send + Sync + 'static,
{
    #[inline]
    fn lookup(&self, key: &K) -> Option<&V> {
        self.get(key)
    }

    #[inline]
    fn entries(&self) -> usize {
        self.len()
    }
}

/// Build the forward table of `L`, inserting in declaration order
pub fn materialize<L, M>() -> M
where
    L: AssociationList,
    M: FromIterator<(L::Key, L::Value)>,
{
    tracing::debug!(
        "materializing table {} ({} associations)",
        L::NAME,
        L::ASSOCIATIONS.len()
    );
    L::ASSOCIATIONS.iter().map(|a| a.into_pair()).collect()
}

/// Build the inverse table of `L` from the swapped associations
pub fn materialize_inverse<L, M>() -> M
where
    L: AssociationList,
    M: FromIterator<(L::Value, L::Key)>,
{
    tracing::debug!(
        "materializing inverse table {} ({} associations)",
        L::NAME,
        L::ASSOCIATIONS.len()
    );
    L::inverse_iter().map(|a| a.into_pair()).collect()
}

/// Association list with materialized runtime tables.
///
/// Implemented by `associations!` when the declaration carries a
/// `runtime = Map;` clause.
pub trait RuntimeTable: AssociationList {
    type Map: LookupMap<Self::Key, Self::Value>;
    type InverseMap: LookupMap<Self::Value, Self::Key>;

    const CONFIG: TableConfig = TableConfig::named(Self::NAME);

    /// Forward table, built on first call
    fn rt_map() -> &'static Self::Map;

    /// Inverse table, built on first call
    fn rt_inverse_map() -> &'static Self::InverseMap;

    /// Value for `key`, or `default` after logging a warning
    fn rt_get(key: Self::Key, default: Self::Value) -> Self::Value {
        lookup_or_warn(Self::rt_map(), &key, default, &Self::CONFIG)
    }

    fn rt_get_or_default(key: Self::Key) -> Self::Value
    where
        Self::Value: Default,
    {
        Self::rt_get(key, Self::Value::default())
    }

    /// Key for `value`, or `default` after logging a warning
    fn rt_inverse_get(value: Self::Value, default: Self::Key) -> Self::Key {
        lookup_or_warn(Self::rt_inverse_map(), &value, default, &Self::CONFIG)
    }

    fn rt_inverse_get_or_default(value: Self::Value) -> Self::Key
    where
        Self::Key: Default,
    {
        Self::rt_inverse_get(value, Self::Key::default())
    }

    /// Value for `key` as a result. A miss is returned, not logged.
    fn try_rt_get(key: Self::Key) -> SunResult<Self::Value> {
        Self::rt_map()
            .lookup(&key)
            .copied()
            .ok_or_else(|| SunError::MissingKey {
                table: Self::CONFIG.name,
                key: format!("{:?}", key),
            })
    }

    /// Key for `value` as a result. A miss is returned, not logged.
    fn try_rt_inverse_get(value: Self::Value) -> SunResult<Self::Key> {
        Self::rt_inverse_map()
            .lookup(&value)
            .copied()
            .ok_or_else(|| SunError::MissingValue {
                table: Self::CONFIG.name,
                value: format!("{:?}", value),
            })
    }

    /// Keys whose runtime value differs from the first declared value,
    /// in order of first declaration
    fn divergent_keys() -> Vec<Self::Key>
    where
        Self::Key: PartialEq,
        Self::Value: PartialEq,
    {
        let map = Self::rt_map();
        let mut seen: Vec<Self::Key> = Vec::new();
        let mut divergent = Vec::new();
        for association in Self::ASSOCIATIONS {
            if seen.contains(&association.key) {
                continue;
            }
            seen.push(association.key);
            if map.lookup(&association.key) != Some(&association.value) {
                divergent.push(association.key);
            }
        }
        divergent
    }
}

fn lookup_or_warn<K, V, M>(map: &M, key: &K, default: V, config: &TableConfig) -> V
where
    K: fmt::Debug,
    V: Copy,
    M: LookupMap<K, V>,
{
    match map.lookup(key) {
        Some(value) => *value,
        None => {
            if config.warn_on_miss {
                tracing::warn!("cannot find key {:?} in table {}", key, config.name);
            }
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use sun_test::{capture_events, race, warnings, RaceConfig};

    static RACED_BUILDS: AtomicUsize = AtomicUsize::new(0);

    /// HashMap that counts how often it is built
    struct CountingMap<K, V>(HashMap<K, V>);

    impl<K: Eq + Hash, V> FromIterator<(K, V)> for CountingMap<K, V> {
        fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
            RACED_BUILDS.fetch_add(1, Ordering::SeqCst);
            CountingMap(iter.into_iter().collect())
        }
    }

    impl<K, V> LookupMap<K, V> for CountingMap<K, V>
    where
        K: Eq + Hash + Send + Sync + 'static,
        V: Send + Sync + 'static,
    {
        fn lookup(&self, key: &K) -> Option<&V> {
            self.0.get(key)
        }

        fn entries(&self) -> usize {
            self.0.len()
        }
    }

    crate::associations! {
        Letters: i32 => &'static str {
            1 => "a",
            2 => "b",
            3 => "c",
        }
        runtime = HashMap;
    }

    crate::associations! {
        Repeated: i32 => &'static str {
            1 => "x",
            1 => "y",
        }
        runtime = HashMap;
    }

    crate::associations! {
        Ordered: u8 => char {
            3 => 'c',
            1 => 'a',
            2 => 'b',
        }
        runtime = BTreeMap;
        config = TableConfig::quiet("ordered");
    }

    crate::associations! {
        SharedValue: i32 => &'static str {
            10 => "same",
            20 => "same",
        }
        runtime = std::collections::HashMap;
    }

    crate::associations! {
        Raced: u32 => u32 {
            5 => 25,
            6 => 36,
            7 => 49,
        }
        runtime = CountingMap;
    }

    #[test]
    fn test_runtime_hits_match_compile_time() {
        for key in Letters::keys() {
            assert_eq!(Some(Letters::rt_get(key, "none")), Letters::try_get(key));
        }
    }

    #[test]
    fn test_runtime_miss_logs_one_warning() {
        let (value, events) = capture_events(|| Letters::rt_get(5, "none"));
        assert_eq!(value, "none");

        let warned = warnings(&events);
        assert_eq!(warned.len(), 1);
        assert!(warned[0].message.contains('5'));
        assert!(warned[0].message.contains("Letters"));
        assert_eq!(warned[0].target, "sun_core::runtime");
    }

    #[test]
    fn test_runtime_hit_logs_nothing() {
        let (value, events) = capture_events(|| Letters::rt_get(2, "none"));
        assert_eq!(value, "b");
        assert!(warnings(&events).is_empty());
    }

    #[test]
    fn test_default_constructed_fallback() {
        let (value, _) = capture_events(|| Letters::rt_get_or_default(9));
        assert_eq!(value, "");
        let (key, _) = capture_events(|| Letters::rt_inverse_get_or_default("zz"));
        assert_eq!(key, 0);
    }

    #[test]
    fn test_inverse_lookup() {
        assert_eq!(Letters::rt_inverse_get("c", -1), 3);
        for association in Letters::iter() {
            assert_eq!(Letters::rt_inverse_get(association.value, -1), association.key);
        }
        assert_eq!(Letters::rt_inverse_map().entries(), Letters::len());

        let (key, events) = capture_events(|| Letters::rt_inverse_get("q", -1));
        assert_eq!(key, -1);
        let warned = warnings(&events);
        assert_eq!(warned.len(), 1);
        assert!(warned[0].message.contains("\"q\""));
    }

    #[test]
    fn test_duplicate_key_diverges_between_tiers() {
        assert_eq!(crate::ct_get!(Repeated, 1), "x");
        assert_eq!(Repeated::rt_get(1, "none"), "y");
        assert_eq!(Repeated::rt_map().entries(), 1);
        assert_eq!(Repeated::divergent_keys(), vec![1]);
        assert!(Letters::divergent_keys().is_empty());
    }

    #[test]
    fn test_duplicate_value_in_inverse_keeps_last() {
        assert_eq!(SharedValue::rt_map().entries(), 2);
        assert_eq!(SharedValue::rt_inverse_map().entries(), 1);
        assert_eq!(SharedValue::rt_inverse_get("same", 0), 20);
    }

    #[test]
    fn test_raw_table_access() {
        let map = Letters::rt_map();
        assert_eq!(map.len(), 3);
        assert!(map.contains_key(&2));
        let inverse = Letters::rt_inverse_map();
        assert_eq!(inverse.get("a"), Some(&1));

        let ordered: Vec<_> = Ordered::rt_map().iter().map(|(k, v)| (*k, *v)).collect();
        assert_eq!(ordered, vec![(1, 'a'), (2, 'b'), (3, 'c')]);
    }

    #[test]
    fn test_quiet_config_suppresses_warning() {
        assert_eq!(Ordered::CONFIG.name, "ordered");
        let (value, events) = capture_events(|| Ordered::rt_get(9, '?'));
        assert_eq!(value, '?');
        assert!(warnings(&events).is_empty());
    }

    #[test]
    fn test_try_accessors_return_errors() {
        assert_eq!(Letters::try_rt_get(3), Ok("c"));
        assert_eq!(Letters::try_rt_inverse_get("b"), Ok(2));

        let (result, events) = capture_events(|| Letters::try_rt_get(5));
        assert_eq!(
            result,
            Err(SunError::MissingKey {
                table: "Letters",
                key: "5".to_string(),
            })
        );
        assert!(warnings(&events).is_empty());

        let err = Letters::try_rt_inverse_get("z").unwrap_err();
        assert_eq!(err.table(), "Letters");
    }

    #[test]
    fn test_concurrent_first_access_builds_once() {
        let forward = race(&RaceConfig::default(), || Raced::rt_map() as *const _ as usize);
        assert!(forward.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(RACED_BUILDS.load(Ordering::SeqCst), 1);

        let inverse = race(&RaceConfig::heavy(), || {
            Raced::rt_inverse_map() as *const _ as usize
        });
        assert!(inverse.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(RACED_BUILDS.load(Ordering::SeqCst), 2);

        assert_eq!(Raced::rt_get(7, 0), 49);
        assert_eq!(Raced::rt_inverse_get(36, 0), 6);
        assert_eq!(RACED_BUILDS.load(Ordering::SeqCst), 2);
    }
}
