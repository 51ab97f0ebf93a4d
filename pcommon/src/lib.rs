//! Small shared pieces used across the Pront workspace crates.
//!
//! ```rust
//! use pcommon::{Registry, SessionId};
//!
//! let session = SessionId::from("whatsapp:5511999990000");
//! let mut registry = Registry::new();
//! registry.insert("buscar_paciente_pront", 1_u32);
//!
//! assert_eq!(session.as_str(), "whatsapp:5511999990000");
//! assert_eq!(registry.get("buscar_paciente_pront"), Some(&1));
//! ```

pub mod future {
    use std::future::Future;
    use std::pin::Pin;

    /// Boxed `Send` future, the return type of every object-safe async seam.
    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod session {
    use std::fmt::{Display, Formatter};

    /// Conversation a tool call belongs to, as named by the hosting agent.
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct SessionId(String);

    impl SessionId {
        pub fn as_str(&self) -> &str {
            &self.0
        }
    }

    impl Display for SessionId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for SessionId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for SessionId {
        fn from(value: &str) -> Self {
            Self(value.to_owned())
        }
    }
}

pub mod registry {
    //! Keyed collection that iterates in insertion order.
    //!
    //! ```rust
    //! use pcommon::Registry;
    //!
    //! let mut registry = Registry::new();
    //! registry.insert("mes", 2_u32);
    //! registry.insert("dia", 1_u32);
    //! registry.insert("mes", 3_u32);
    //!
    //! assert_eq!(registry.values().copied().collect::<Vec<_>>(), [3, 1]);
    //! ```

    use std::borrow::Borrow;
    use std::collections::HashMap;
    use std::hash::Hash;

    #[derive(Debug, Clone)]
    pub struct Registry<K, V> {
        slots: HashMap<K, usize>,
        entries: Vec<V>,
    }

    impl<K, V> Default for Registry<K, V> {
        fn default() -> Self {
            Self {
                slots: HashMap::new(),
                entries: Vec::new(),
            }
        }
    }

    impl<K, V> Registry<K, V>
    where
        K: Eq + Hash,
    {
        pub fn new() -> Self {
            Self::default()
        }

        /// Replacing a value keeps the slot it was first inserted in.
        pub fn insert(&mut self, key: K, value: V) -> Option<V> {
            match self.slots.get(&key) {
                Some(&slot) => self
                    .entries
                    .get_mut(slot)
                    .map(|existing| std::mem::replace(existing, value)),
                None => {
                    self.slots.insert(key, self.entries.len());
                    self.entries.push(value);
                    None
                }
            }
        }

        pub fn get<Q>(&self, key: &Q) -> Option<&V>
        where
            K: Borrow<Q>,
            Q: Eq + Hash + ?Sized,
        {
            self.slots
                .get(key)
                .and_then(|&slot| self.entries.get(slot))
        }

        pub fn values(&self) -> impl Iterator<Item = &V> {
            self.entries.iter()
        }

        pub fn len(&self) -> usize {
            self.entries.len()
        }

        pub fn is_empty(&self) -> bool {
            self.entries.is_empty()
        }
    }
}

pub use future::BoxFuture;
pub use registry::Registry;
pub use session::SessionId;

#[cfg(test)]
mod tests {
    use super::{Registry, SessionId};

    #[test]
    fn session_ids_display_as_given() {
        let session = SessionId::from(String::from("pront"));
        assert_eq!(session.to_string(), "pront");
        assert_eq!(session, SessionId::from("pront"));
    }

    #[test]
    fn registry_iterates_in_insertion_order() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());

        registry.insert("c".to_string(), 3_u32);
        registry.insert("a".to_string(), 1_u32);
        registry.insert("b".to_string(), 2_u32);

        assert_eq!(registry.len(), 3);
        assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![3, 1, 2]);
        assert_eq!(registry.get("a"), Some(&1));
        assert_eq!(registry.get("z"), None);
    }

    #[test]
    fn replacing_a_value_keeps_its_position() {
        let mut registry = Registry::new();
        registry.insert("a".to_string(), 1_u32);
        registry.insert("b".to_string(), 2_u32);

        let previous = registry.insert("a".to_string(), 10_u32);
        assert_eq!(previous, Some(1));
        assert_eq!(registry.values().copied().collect::<Vec<_>>(), vec![10, 2]);
        assert_eq!(registry.len(), 2);
    }
}
