//! In-memory source registry with enable/disable support.

use crate::capabilities::{Source, SourceRegistry};
use crate::error::{Result, SearchError};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

struct RegisteredSource {
    source: Arc<dyn Source>,
    enabled: bool,
}

/// Ordered registry of sources.
///
/// Registration order is the query order of every run, which keeps the
/// ranking tie-break reproducible. Clones share the same underlying list.
#[derive(Clone, Default)]
pub struct InMemorySourceRegistry {
    sources: Arc<RwLock<Vec<RegisteredSource>>>,
}

impl InMemorySourceRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<RegisteredSource>> {
        self.sources.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<RegisteredSource>> {
        self.sources.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Add a source, enabled.
    ///
    /// A source with the same name is replaced in place, keeping its position
    /// and enabled flag.
    pub fn register(&self, source: Arc<dyn Source>) {
        let mut sources = self.write();

        if let Some(existing) = sources.iter_mut().find(|s| s.source.name() == source.name()) {
            debug!(source = %source.name(), "replacing registered source");
            existing.source = source;
            return;
        }

        info!(source = %source.name(), position = sources.len(), "registered source");
        sources.push(RegisteredSource {
            source,
            enabled: true,
        });
    }

    /// Enable or disable a source by name.
    ///
    /// # Errors
    /// Returns [`SearchError::UnknownSource`] if no source has this name.
    pub fn set_enabled(&self, name: &str, enabled: bool) -> Result<()> {
        let mut sources = self.write();
        let entry = sources
            .iter_mut()
            .find(|s| s.source.name() == name)
            .ok_or_else(|| SearchError::UnknownSource {
                name: name.to_string(),
            })?;

        entry.enabled = enabled;
        info!(source = %name, enabled, "updated source state");
        Ok(())
    }

    /// Remove a source. Returns `true` if it was registered.
    pub fn remove(&self, name: &str) -> bool {
        let mut sources = self.write();
        let before = sources.len();
        sources.retain(|s| s.source.name() != name);
        before != sources.len()
    }

    /// Check if a source with this name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.read().iter().any(|s| s.source.name() == name)
    }

    /// Total number of registered sources, enabled or not.
    #[must_use]
    pub fn count(&self) -> usize {
        self.read().len()
    }

    /// Names of all registered sources in query order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.read()
            .iter()
            .map(|s| s.source.name().to_string())
            .collect()
    }
}

impl SourceRegistry for InMemorySourceRegistry {
    fn enabled_sources(&self) -> Vec<Arc<dyn Source>> {
        self.read()
            .iter()
            .filter(|s| s.enabled)
            .map(|s| Arc::clone(&s.source))
            .collect()
    }
}

impl std::fmt::Debug for InMemorySourceRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemorySourceRegistry")
            .field("sources", &self.names())
            .finish()
    }
}
