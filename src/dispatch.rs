//! Action dispatch for decoded payloads.
//!
//! The dispatcher is the downstream consumer of a scan activation: it
//! receives the decoded payload at most once and acts on it. Handlers are
//! registered explicitly as values; a missing handler is a silent no-op.

use tracing::debug;

/// Consumer of decoded payloads.
pub trait ActionDispatcher {
    /// Handles a decoded payload. Fired at most once per activation.
    fn dispatch(&mut self, payload: &str);
}

/// Dispatcher with no registered handler. Drops the payload.
#[derive(Debug, Default)]
pub struct NullDispatcher;

impl ActionDispatcher for NullDispatcher {
    fn dispatch(&mut self, payload: &str) {
        debug!(len = payload.len(), "no action handler registered");
    }
}

/// Dispatcher backed by a registered closure.
pub struct FnDispatcher<F: FnMut(&str)>(pub F);

impl<F: FnMut(&str)> ActionDispatcher for FnDispatcher<F> {
    fn dispatch(&mut self, payload: &str) {
        (self.0)(payload);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_dispatcher_invokes_handler() {
        let mut seen = Vec::new();
        {
            let mut dispatcher = FnDispatcher(|payload: &str| seen.push(payload.to_string()));
            dispatcher.dispatch("HELLO");
        }
        assert_eq!(seen, vec!["HELLO".to_string()]);
    }

    #[test]
    fn test_null_dispatcher_is_a_noop() {
        let mut dispatcher = NullDispatcher;
        dispatcher.dispatch("anything");
    }
}
