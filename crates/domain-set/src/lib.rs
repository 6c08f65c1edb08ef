//! A queryable set of lowercase domains, rebuilt wholesale on each
//! `load()` and published behind a single pointer swap. Backs the
//! disposal-domain and free-webmail-domain lists.

use arc_swap::ArcSwap;
use std::collections::HashSet;
use std::sync::Arc;

pub struct DomainSet {
    name: String,
    current: ArcSwap<HashSet<String>>,
}

impl DomainSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            current: ArcSwap::from_pointee(HashSet::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replaces the live set with `domains`, lowercased. Entries that
    /// are already lowercase incur no allocation-shape surprises; the
    /// lowercasing happens here so callers never need to remember to
    /// normalize before `contains`.
    pub fn publish<I, S>(&self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let set: HashSet<String> = domains
            .into_iter()
            .map(|d| d.as_ref().to_lowercase())
            .collect();
        tracing::debug!(set = %self.name, domains = set.len(), "published new domain-set snapshot");
        self.current.store(Arc::new(set));
    }

    /// Exact match against the lowercased form of `domain`.
    pub fn contains(&self, domain: &str) -> bool {
        self.current.load().contains(&domain.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.current.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn exact_match_is_case_insensitive() {
        let set = DomainSet::new("disposal");
        set.publish(["Mailinator.com", "guerrillamail.com"]);

        assert!(set.contains("mailinator.com"));
        assert!(set.contains("MAILINATOR.COM"));
        assert!(!set.contains("gmail.com"));
    }

    #[test]
    fn republish_replaces_contents() {
        let set = DomainSet::new("disposal");
        set.publish(["a.example"]);
        assert!(set.contains("a.example"));

        set.publish(["b.example"]);
        assert!(!set.contains("a.example"));
        assert!(set.contains("b.example"));
    }
}
