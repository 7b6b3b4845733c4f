#![forbid(unsafe_code)]

//! Key registry for dispatching field keys to their handlers
//!
//! The KeyRegistry is responsible for:
//! - Binding each field key to exactly one handler
//! - Rejecting duplicate bindings at setup time
//! - Resolving unbound keys through a configurable fallback

use crate::error::RegistryError;
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

/// Handler-producing function invoked with an unbound key
pub type FallbackFactory<T> = Box<dyn Fn(&str) -> T + Send + Sync>;

/// What a registry does with a key that has no binding
pub enum Fallback<T> {
    /// Fail with `RegistryError::UnsupportedKey`
    None,
    /// Resolve every unbound key to the same handler
    Fixed(T),
    /// Build a handler from the unbound key
    Factory(FallbackFactory<T>),
}

impl<T> Fallback<T> {
    /// Wraps a closure as a factory fallback
    pub fn factory<F>(factory: F) -> Self
    where
        F: Fn(&str) -> T + Send + Sync + 'static,
    {
        Fallback::Factory(Box::new(factory))
    }
}

impl<T> Default for Fallback<T> {
    fn default() -> Self {
        Fallback::None
    }
}

impl<T: fmt::Debug> fmt::Debug for Fallback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fallback::None => f.write_str("None"),
            Fallback::Fixed(handler) => f.debug_tuple("Fixed").field(handler).finish(),
            Fallback::Factory(_) => f.write_str("Factory(..)"),
        }
    }
}

/// Registry mapping field keys to handlers
///
/// Keys are unique within one registry. Handlers are returned by reference
/// when bound and by value when produced by a fallback factory.
pub struct KeyRegistry<T> {
    entries: HashMap<String, T>,
    fallback: Fallback<T>,
}

impl<T> KeyRegistry<T> {
    /// Create a new empty registry without a fallback
    pub fn new() -> Self {
        Self::with_fallback(Fallback::None)
    }

    /// Create a new empty registry with the given fallback
    pub fn with_fallback(fallback: Fallback<T>) -> Self {
        Self {
            entries: HashMap::new(),
            fallback,
        }
    }

    /// Build a registry from `(key, handler)` pairs
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` on the first repeated key.
    pub fn from_entries<K, I>(entries: I, fallback: Fallback<T>) -> Result<Self, RegistryError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, T)>,
    {
        let mut registry = Self::with_fallback(fallback);
        for (key, handler) in entries {
            registry.register(key, handler)?;
        }
        Ok(registry)
    }

    /// Bind `key` to `handler`
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateKey` if `key` is already bound. The
    /// existing binding is left untouched.
    pub fn register(&mut self, key: impl Into<String>, handler: T) -> Result<(), RegistryError> {
        let key = key.into();
        if self.entries.contains_key(&key) {
            return Err(RegistryError::DuplicateKey(key));
        }
        self.entries.insert(key, handler);
        Ok(())
    }

    /// Returns true if `key` has an explicit binding
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns the bound keys in sorted order
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Get the number of bound keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry has no bound keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Clone> KeyRegistry<T> {
    /// Resolve the handler for `key`
    ///
    /// Bound keys win. Otherwise the fallback decides: a fixed handler is
    /// returned as-is, a factory is called with `key`.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::UnsupportedKey` if `key` is unbound and there
    /// is no fallback.
    pub fn lookup(&self, key: &str) -> Result<Cow<'_, T>, RegistryError> {
        if let Some(handler) = self.entries.get(key) {
            return Ok(Cow::Borrowed(handler));
        }
        match &self.fallback {
            Fallback::None => Err(RegistryError::UnsupportedKey(key.to_string())),
            Fallback::Fixed(handler) => Ok(Cow::Borrowed(handler)),
            Fallback::Factory(factory) => {
                tracing::trace!(key, "registry fallback factory invoked");
                Ok(Cow::Owned(factory(key)))
            }
        }
    }
}

impl<T> Default for KeyRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for KeyRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyRegistry")
            .field("keys", &self.keys())
            .field("fallback", &self.fallback)
            .finish()
    }
}
