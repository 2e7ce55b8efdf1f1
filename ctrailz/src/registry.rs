use std::{fmt, hash::Hash, sync::Arc};

use hashbrown::{Equivalent, HashMap};

/// Lookup table of shared items, keyed by their identifier.
///
/// Items are stored behind [`Arc`], so a single instance can be handed out to any number of
/// users.
pub struct Registry<T: ?Sized, K = String> {
    items: HashMap<K, Arc<T>>,
    default: Option<K>,
}

impl<T: ?Sized, K> Registry<T, K> {
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
            default: None,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.items.keys()
    }
}

impl<T: ?Sized, K> Default for Registry<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized, K> Registry<T, K>
where
    K: Hash + Eq,
{
    pub fn register(&mut self, key: K, item: Arc<T>) {
        self.items.insert(key, item);
    }

    /// Registers the item and marks its key as the default one.
    pub fn register_default(&mut self, key: K, item: Arc<T>)
    where
        K: Clone,
    {
        self.default = Some(key.clone());
        self.register(key, item);
    }

    pub fn get<Q>(&self, k: &Q) -> Option<Arc<T>>
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.items.get(k).cloned()
    }

    pub fn is_registered<Q>(&self, k: &Q) -> bool
    where
        Q: Hash + Equivalent<K> + ?Sized,
    {
        self.items.contains_key(k)
    }

    pub fn default_key(&self) -> Option<&K> {
        self.default.as_ref()
    }

    pub fn get_default(&self) -> Option<Arc<T>> {
        self.default.as_ref().and_then(|k| self.get(k))
    }
}

impl<T: ?Sized, K: fmt::Debug> fmt::Debug for Registry<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.items.keys().collect::<Vec<_>>())
            .field("default", &self.default)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::Registry;

    #[test]
    fn register_and_get() {
        let mut registry: Registry<str> = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.get_default().is_none());

        registry.register("a".to_string(), Arc::from("first"));
        registry.register_default("b".to_string(), Arc::from("second"));

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("a").as_deref(), Some("first"));
        assert!(registry.is_registered("b"));
        assert!(!registry.is_registered("c"));
        assert_eq!(registry.default_key().map(String::as_str), Some("b"));
        assert_eq!(registry.get_default().as_deref(), Some("second"));
    }

    #[test]
    fn items_are_shared() {
        let mut registry: Registry<u32, u8> = Registry::new();
        let item = Arc::new(7);
        registry.register(1, item.clone());

        let got = registry.get(&1u8).unwrap();
        assert!(Arc::ptr_eq(&item, &got));
    }
}
