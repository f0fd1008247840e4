use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};
use tracing::debug;

#[derive(Debug, Default)]
struct RegistryState {
    next_id: u64,
    live: HashSet<u64>,
}

fn with_state<R>(state: &Mutex<RegistryState>, f: impl FnOnce(&mut RegistryState) -> R) -> R {
    let mut guard = state.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Issues preview handles and tracks which are still alive
#[derive(Debug, Clone, Default)]
pub struct PreviewRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl PreviewRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire a preview for `name`; it is released when the handle drops
    pub fn acquire(&self, name: &str) -> PreviewHandle {
        let id = with_state(&self.state, |state| {
            state.next_id += 1;
            state.live.insert(state.next_id);
            state.next_id
        });
        debug!("Acquired preview {} for {}", id, name);

        PreviewHandle {
            id,
            url: format!("preview://{}/{}", id, name),
            state: Arc::clone(&self.state),
        }
    }

    pub fn live_count(&self) -> usize {
        with_state(&self.state, |state| state.live.len())
    }

    pub fn is_live(&self, handle_id: u64) -> bool {
        with_state(&self.state, |state| state.live.contains(&handle_id))
    }
}

/// A revocable preview for one attached image
#[derive(Debug)]
pub struct PreviewHandle {
    id: u64,
    url: String,
    state: Arc<Mutex<RegistryState>>,
}

impl PreviewHandle {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        if with_state(&self.state, |state| state.live.remove(&self.id)) {
            debug!("Released preview {}", self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_release_on_drop() {
        let registry = PreviewRegistry::new();
        let a = registry.acquire("a.png");
        let b = registry.acquire("b.png");
        assert_eq!(registry.live_count(), 2);
        assert_ne!(a.id(), b.id());
        assert!(a.url().ends_with("/a.png"));

        let a_id = a.id();
        drop(a);
        assert!(!registry.is_live(a_id));
        assert_eq!(registry.live_count(), 1);

        drop(b);
        assert_eq!(registry.live_count(), 0);
    }
}
