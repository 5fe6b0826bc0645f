use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Counts outstanding operations; the console shows a busy marker while
/// any are active.
#[derive(Debug, Clone, Default)]
pub struct LoadingTracker {
    active: Arc<AtomicUsize>,
}

impl LoadingTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks an operation as started until the returned guard is dropped.
    pub fn start(&self, label: &'static str) -> LoadingGuard {
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(label, active, "Loading started");
        LoadingGuard {
            active: Arc::clone(&self.active),
            label,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.active() > 0
    }

    pub fn active(&self) -> usize {
        self.active.load(Ordering::SeqCst)
    }
}

#[must_use = "loading ends when the guard is dropped"]
#[derive(Debug)]
pub struct LoadingGuard {
    active: Arc<AtomicUsize>,
    label: &'static str,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        let active = self.active.fetch_sub(1, Ordering::SeqCst) - 1;
        debug!(label = self.label, active, "Loading finished");
    }
}
