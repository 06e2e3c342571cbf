//! Removal, merging and lookup helpers for [`HashMap`]

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

pub trait MapExt<K, V> {
    /// Remove `key` if present, returning its value
    fn remove_if_contains<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized;

    /// Remove every entry matching `predicate`, returning how many were removed
    fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: FnMut(&K, &V) -> bool;

    /// Insert every pair from `other`, overwriting existing keys
    ///
    /// # Examples
    /// ```
    /// use std::collections::HashMap;
    /// use extkit::ext::map::MapExt;
    ///
    /// let mut map = HashMap::from([("a", 1), ("b", 2)]);
    /// map.merge([("b", 20), ("c", 30)]);
    /// assert_eq!(map[&"b"], 20);
    /// assert_eq!(map.len(), 3);
    /// ```
    fn merge<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>;

    /// Insert only the pairs from `other` whose key is missing
    fn merge_keep_existing<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>;

    /// Sorted copy of the map
    fn to_sorted(&self) -> BTreeMap<K, V>
    where
        K: Ord + Clone,
        V: Clone;

    fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone;

    fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default;
}

impl<K, V, S> MapExt<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher,
{
    fn remove_if_contains<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        // HashMap::remove is already a no-op for missing keys.
        self.remove(key)
    }

    fn remove_where<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&K, &V) -> bool,
    {
        let before = self.len();
        self.retain(|key, value| !predicate(key, value));
        let removed = before - self.len();
        log::debug!("remove_where dropped {} of {} entries", removed, before);
        removed
    }

    fn merge<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.extend(other);
    }

    fn merge_keep_existing<I>(&mut self, other: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in other {
            self.entry(key).or_insert(value);
        }
    }

    fn to_sorted(&self) -> BTreeMap<K, V>
    where
        K: Ord + Clone,
        V: Clone,
    {
        self.iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    fn get_or<Q>(&self, key: &Q, default: V) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(default)
    }

    fn get_or_default<Q>(&self, key: &Q) -> V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        V: Clone + Default,
    {
        self.get(key).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> HashMap<String, i32> {
        HashMap::from([
            ("alpha".to_string(), 1),
            ("beta".to_string(), 2),
            ("gamma".to_string(), 3),
            ("delta".to_string(), 4),
        ])
    }

    #[test]
    fn test_remove_if_contains() {
        let mut map = sample();
        assert_eq!(map.remove_if_contains("beta"), Some(2));
        assert_eq!(map.remove_if_contains("beta"), None);
        assert_eq!(map.remove_if_contains("missing"), None);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_remove_where() {
        let mut map = sample();
        let removed = map.remove_where(|_, value| value % 2 == 0);
        assert_eq!(removed, 2);
        assert_eq!(map.len(), 2);
        assert!(map.contains_key("alpha"));
        assert!(map.contains_key("gamma"));

        assert_eq!(map.remove_where(|_, _| false), 0);
        assert_eq!(map.remove_where(|key, _| key.starts_with('a')), 1);
    }

    #[test]
    fn test_merge_overwrites() {
        let mut map = sample();
        map.merge([("alpha".to_string(), 10), ("epsilon".to_string(), 5)]);
        assert_eq!(map["alpha"], 10);
        assert_eq!(map["epsilon"], 5);
        assert_eq!(map.len(), 5);
    }

    #[test]
    fn test_merge_keep_existing() {
        let mut map = sample();
        map.merge_keep_existing(HashMap::from([
            ("alpha".to_string(), 10),
            ("epsilon".to_string(), 5),
        ]));
        assert_eq!(map["alpha"], 1);
        assert_eq!(map["epsilon"], 5);
    }

    #[test]
    fn test_to_sorted() {
        let map = sample();
        let sorted = map.to_sorted();
        let keys: Vec<&str> = sorted.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["alpha", "beta", "delta", "gamma"]);
        // The source map is untouched
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_get_or() {
        let map = sample();
        assert_eq!(map.get_or("gamma", -1), 3);
        assert_eq!(map.get_or("missing", -1), -1);
        assert_eq!(map.get_or_default("missing"), 0);
        assert_eq!(map.get_or_default("delta"), 4);
    }
}
