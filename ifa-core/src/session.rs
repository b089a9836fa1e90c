//! Session gate capability.
//!
//! The surrounding shell owns credential storage; the core only needs an
//! opaque "is a session active" signal, injected rather than read from
//! ambient global state.

use std::sync::atomic::{AtomicBool, Ordering};

/// Capability object exposing the shell's session flag.
pub trait SessionGate {
    fn is_active(&self) -> bool;
    fn clear(&self);
}

/// Outcome of the precondition check run before rendering gated views.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SessionCheck {
    Active,
    /// The shell should route to its sign-in flow.
    AuthRequired,
}

/// Check the gate; the shell decides what `AuthRequired` means.
pub fn check_session(gate: &dyn SessionGate) -> SessionCheck {
    if gate.is_active() {
        SessionCheck::Active
    } else {
        SessionCheck::AuthRequired
    }
}

/// In-memory session flag for shells and tests.
#[derive(Debug, Default)]
pub struct MemorySession {
    active: AtomicBool,
}

impl MemorySession {
    pub fn new(active: bool) -> Self {
        MemorySession {
            active: AtomicBool::new(active),
        }
    }

    pub fn activate(&self) {
        self.active.store(true, Ordering::SeqCst);
    }
}

impl SessionGate for MemorySession {
    fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    fn clear(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_session() {
        let session = MemorySession::new(true);
        assert_eq!(check_session(&session), SessionCheck::Active);
        session.clear();
        assert_eq!(check_session(&session), SessionCheck::AuthRequired);
        session.activate();
        assert_eq!(check_session(&session), SessionCheck::Active);
    }
}
