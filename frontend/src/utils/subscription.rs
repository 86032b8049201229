use std::cell::Cell;
use std::rc::Rc;

/// Shared cancellation flag between a subscription handle and the callbacks
/// it registered with the browser.
///
/// Callbacks check `is_cancelled()` before touching component state, so a
/// frame or notification that was already queued when the component
/// unmounted becomes a no-op.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the call that actually cancelled.
    pub fn cancel(&self) -> bool {
        !self.0.replace(true)
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_is_idempotent() {
        let token = CancelToken::new();
        assert!(!token.is_cancelled());
        assert!(token.cancel());
        assert!(!token.cancel());
        assert!(token.is_cancelled());
    }

    #[test]
    fn clones_share_state() {
        let token = CancelToken::new();
        let in_callback = token.clone();
        assert!(in_callback.cancel());
        assert!(token.is_cancelled());
        assert!(!token.cancel());
    }
}
