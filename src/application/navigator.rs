//! Navigation seam.
//!
//! The controller never touches the browser location directly; it asks a
//! [`Navigator`] to replace the current page. The web layer turns the captured
//! target into a `303 See Other`, the CLI prints it.

use std::sync::{Mutex, PoisonError};

/// Performs a full-page navigation that replaces the current history entry.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    fn replace(&self, uri: &str);
}

/// Navigator that records the requested target instead of navigating.
#[derive(Debug, Default)]
pub struct CapturedNavigation {
    target: Mutex<Option<String>>,
}

impl CapturedNavigation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes the recorded target, leaving nothing behind.
    pub fn take(&self) -> Option<String> {
        self.target
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }
}

impl Navigator for CapturedNavigation {
    fn replace(&self, uri: &str) {
        *self.target.lock().unwrap_or_else(PoisonError::into_inner) = Some(uri.to_string());
    }
}
