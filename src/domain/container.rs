use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display};

/// Holds exactly one item of type `T`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container<T> {
    item: T,
}

impl<T: Debug> Container<T> {
    pub fn new(item: T) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &T {
        tracing::debug!("Getting item: {:?}", self.item);
        &self.item
    }

    /// Replaces the held item, returning the previous one.
    pub fn set_item(&mut self, item: T) -> T {
        tracing::debug!("Setting item to: {:?}", item);
        std::mem::replace(&mut self.item, item)
    }

    pub fn into_inner(self) -> T {
        self.item
    }
}

/// A key with an associated value. Use `Pair<K, Option<V>>` for an optional value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pair<K, V> {
    key: K,
    value: V,
}

impl<K: Debug, V: Debug> Pair<K, V> {
    pub fn new(key: K, value: V) -> Self {
        tracing::debug!("Pair construction with K: {:?} and V: {:?}", key, value);
        Self { key, value }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn set_key(&mut self, key: K) {
        tracing::debug!("Setting key: {:?}", key);
        self.key = key;
    }

    pub fn set_value(&mut self, value: V) {
        tracing::debug!("Setting value: {:?}", value);
        self.value = value;
    }

    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: Display, V: Display> Display for Pair<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pair[key={}, value={}]", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_container_get_and_set() {
        let mut container = Container::new("Test String".to_string());
        assert_eq!(container.item(), "Test String");

        let old = container.set_item("New String".to_string());
        assert_eq!(old, "Test String");
        assert_eq!(container.item(), "New String");
        assert_eq!(container.into_inner(), "New String");
    }

    #[test]
    fn test_container_of_integer() {
        let mut container = Container::new(123);
        container.set_item(456);
        assert_eq!(*container.item(), 456);
    }

    #[test]
    fn test_pair_accessors() {
        let mut pair = Pair::new("key".to_string(), 123);
        assert_eq!(pair.key(), "key");
        assert_eq!(*pair.value(), 123);

        pair.set_key("New key".to_string());
        pair.set_value(234);
        assert_eq!(pair.into_parts(), ("New key".to_string(), 234));
    }

    #[test]
    fn test_pair_display() {
        let pair = Pair::new("Code", 42);
        let text = pair.to_string();
        assert_eq!(text, "Pair[key=Code, value=42]");
    }

    #[test]
    fn test_pair_equality_and_hash() {
        let p1 = Pair::new("key".to_string(), 123);
        let p2 = Pair::new(String::from("key"), 123);
        assert_eq!(p1, p2);
        assert_eq!(hash_of(&p1), hash_of(&p2));

        assert_ne!(Pair::new("a", 1), Pair::new("b", 1));
        assert_ne!(Pair::new("a", 1), Pair::new("a", 2));
    }

    #[test]
    fn test_pair_with_absent_value() {
        let pair: Pair<&str, Option<String>> = Pair::new("key", None);
        assert!(pair.value().is_none());
    }
}
