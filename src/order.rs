//! Key ordering policy shared by the differ and the renderers.
//!
//! Sibling keys are sorted before classification and again before rendering.
//! The default policy is byte-wise ascending comparison. A custom policy can be
//! any type implementing [`KeyOrder`], including plain closures.
//!
//! # Examples
//!
//! ```
//! use gendiff::order::KeyOrdering;
//!
//! let order = KeyOrdering::default();
//! let mut keys = vec!["timeout", "host", "follow"];
//! order.sort(&mut keys);
//! assert_eq!(keys, ["follow", "host", "timeout"]);
//!
//! let reversed = KeyOrdering::new(|a: &str, b: &str| b.cmp(a));
//! reversed.sort(&mut keys);
//! assert_eq!(keys, ["timeout", "host", "follow"]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

/// Total order over mapping keys.
///
/// Implementations must be consistent: the same two keys always compare the
/// same way, otherwise output is not deterministic.
pub trait KeyOrder: Send + Sync {
    fn compare(&self, a: &str, b: &str) -> Ordering;
}

/// Byte-wise ascending order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lexicographic;

impl KeyOrder for Lexicographic {
    fn compare(&self, a: &str, b: &str) -> Ordering {
        a.as_bytes().cmp(b.as_bytes())
    }
}

impl<F> KeyOrder for F
where
    F: Fn(&str, &str) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &str, b: &str) -> Ordering {
        self(a, b)
    }
}

/// Cheaply cloneable handle to a [`KeyOrder`] policy.
#[derive(Clone)]
pub struct KeyOrdering(Arc<dyn KeyOrder>);

impl KeyOrdering {
    pub fn new(order: impl KeyOrder + 'static) -> Self {
        Self(Arc::new(order))
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.0.compare(a, b)
    }

    /// Sorts anything that dereferences to a key string.
    pub fn sort<K: AsRef<str>>(&self, keys: &mut [K]) {
        keys.sort_by(|a, b| self.compare(a.as_ref(), b.as_ref()));
    }

    /// Sorts items by the key `key_of` extracts from each of them.
    pub fn sort_by_key<T>(&self, items: &mut [T], key_of: impl Fn(&T) -> &str) {
        items.sort_by(|a, b| self.compare(key_of(a), key_of(b)));
    }
}

impl Default for KeyOrdering {
    fn default() -> Self {
        Self::new(Lexicographic)
    }
}

impl fmt::Debug for KeyOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("KeyOrdering(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicographic_is_bytewise() {
        let order = Lexicographic;
        assert_eq!(order.compare("a", "b"), Ordering::Less);
        assert_eq!(order.compare("B", "a"), Ordering::Less);
        assert_eq!(order.compare("key", "key"), Ordering::Equal);
        assert_eq!(order.compare("setting10", "setting2"), Ordering::Less);
    }

    #[test]
    fn test_sort_default() {
        let mut keys = vec!["verbose".to_string(), "follow".to_string(), "host".to_string()];
        KeyOrdering::default().sort(&mut keys);
        assert_eq!(keys, ["follow", "host", "verbose"]);
    }

    #[test]
    fn test_closure_policy() {
        let by_len = KeyOrdering::new(|a: &str, b: &str| a.len().cmp(&b.len()).then(a.cmp(b)));
        let mut keys = vec!["ccc", "a", "bb"];
        by_len.sort(&mut keys);
        assert_eq!(keys, ["a", "bb", "ccc"]);
    }

    #[test]
    fn test_sort_by_key() {
        let mut pairs = vec![("z", 1), ("m", 2), ("a", 3)];
        KeyOrdering::default().sort_by_key(&mut pairs, |p| p.0);
        assert_eq!(pairs, [("a", 3), ("m", 2), ("z", 1)]);
    }
}
