//! Application state management

use std::sync::Arc;

use crate::{config::Config, store::UserStore};

/// Application state shared across handlers
///
/// Carries the configuration and the user store. The store is injected
/// here at construction rather than reached through any global, so tests
/// and alternative backends swap it freely.
pub struct AppState<S: UserStore> {
    config: Arc<Config>,
    store: Arc<S>,
}

impl<S: UserStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            store: Arc::clone(&self.store),
        }
    }
}

impl<S: UserStore> AppState<S> {
    /// Create a new state with the given configuration and store
    pub fn new(config: Config, store: S) -> Self {
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the user store
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_state_clone_shares_store() {
        let state = AppState::new(Config::default(), MemoryStore::new());
        let cloned = state.clone();

        assert!(std::ptr::eq(state.store(), cloned.store()));
        assert_eq!(cloned.config().service.port, 5003);
    }
}
