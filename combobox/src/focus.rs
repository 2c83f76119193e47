//! Query-input focus capability.
//!
//! The state machine never inspects platform focus itself; the presentation
//! layer answers whether the query input currently holds focus.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Answers "does the query input have focus right now?".
pub trait InputFocus: Send + Sync {
    fn is_input_focused(&self) -> bool;
}

impl InputFocus for bool {
    fn is_input_focused(&self) -> bool {
        *self
    }
}

impl InputFocus for Arc<AtomicBool> {
    fn is_input_focused(&self) -> bool {
        self.load(Ordering::SeqCst)
    }
}

impl<F> InputFocus for F
where
    F: Fn() -> bool + Send + Sync,
{
    fn is_input_focused(&self) -> bool {
        self()
    }
}
