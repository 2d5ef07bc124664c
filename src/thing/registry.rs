//! The fixed registry of things
//!
//! Keys are known up front and never change; only subscription state does.

use indexmap::IndexMap;

use super::{Observer, Thing, ThingKind};

/// Lowercase key to thing, in insertion order
#[derive(Debug, Clone)]
pub struct Registry {
    things: IndexMap<&'static str, Thing>,
}

impl Default for Registry {
    fn default() -> Self {
        let things = [ThingKind::Salt, ThingKind::Frog]
            .into_iter()
            .map(|kind| (kind.key(), Thing::new(kind)))
            .collect();

        Self { things }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&Thing> {
        self.things.get(key)
    }

    /// Set subscription state for a key. Returns the thing's display name,
    /// or `None` if the key is unknown.
    pub fn set_subscribed(&mut self, key: &str, subscribed: bool) -> Option<&'static str> {
        let thing = self.things.get_mut(key)?;
        thing.set_subscribed(subscribed);
        log::info!(
            "{} {}",
            if subscribed { "Subscribed" } else { "Unsubscribed" },
            thing.name()
        );
        Some(thing.name())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Thing> {
        self.things.values()
    }

    pub fn observers(&self) -> impl Iterator<Item = &dyn Observer> {
        self.things.values().map(|thing| thing as &dyn Observer)
    }

    /// Names of subscribed things, in registry order
    pub fn subscribed_names(&self) -> Vec<&'static str> {
        self.iter().filter(|t| t.is_subscribed()).map(|t| t.name()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_order_and_keys() {
        let registry = Registry::new();
        let names: Vec<_> = registry.iter().map(|t| t.name()).collect();
        assert_eq!(names, vec!["Salt", "Frog"]);
        assert!(registry.get("salt").is_some());
        assert!(registry.get("frog").is_some());
        assert!(registry.get("Salt").is_none());
    }

    #[test]
    fn test_all_things_start_unsubscribed() {
        let registry = Registry::new();
        assert!(registry.iter().all(|t| !t.is_subscribed()));
        assert!(registry.subscribed_names().is_empty());
    }

    #[test]
    fn test_set_subscribed_unknown_key() {
        let mut registry = Registry::new();
        assert_eq!(registry.set_subscribed("newt", true), None);
        assert_eq!(registry.iter().count(), 2);
    }

    #[test]
    fn test_subscribed_names() {
        let mut registry = Registry::new();
        assert_eq!(registry.set_subscribed("frog", true), Some("Frog"));
        assert_eq!(registry.set_subscribed("salt", true), Some("Salt"));
        assert_eq!(registry.subscribed_names(), vec!["Salt", "Frog"]);
    }
}
