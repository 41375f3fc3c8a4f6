//! # Demo Auth Gate
//!
//! A deliberately trivial session gate for the demo build.
//!
//! ## Scope
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Auth Gate (demo only)                            │
//! │                                                                         │
//! │  login(email, password) ──► exact match against the ONE demo pair      │
//! │                         └─► session = Some(demo profile)               │
//! │                                                                         │
//! │  No hashing, no tokens, no user database. This gate exists so the      │
//! │  presentation layer has a session seam to talk to; a real identity     │
//! │  backend replaces this module wholesale, not incrementally.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use docket_core::User;
use tracing::debug;

/// The only accepted credential pair in the demo build.
pub const DEMO_EMAIL: &str = "demo@invoice.com";
pub const DEMO_PASSWORD: &str = "demo123";

/// Profile returned for the demo login.
pub fn demo_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Smith".to_string(),
        email: "john@company.com".to_string(),
        company: "Smith & Associates".to_string(),
        address: "123 Business St, Suite 100, City, State 12345".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
    }
}

/// Holds the current session, if any.
#[derive(Debug, Default)]
pub struct AuthGate {
    current: Option<User>,
}

impl AuthGate {
    /// Creates a gate with no active session.
    pub fn new() -> Self {
        AuthGate::default()
    }

    /// Attempts a login. Only the exact demo pair is accepted; anything
    /// else returns `None` and leaves any existing session alone.
    pub fn login(&mut self, email: &str, password: &str) -> Option<&User> {
        if email == DEMO_EMAIL && password == DEMO_PASSWORD {
            debug!(email, "Login accepted");
            self.current = Some(demo_user());
            self.current.as_ref()
        } else {
            debug!(email, "Login rejected");
            None
        }
    }

    /// Ends the session. Idempotent.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            debug!("Logged out");
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    /// The signed-in profile, if a session is active.
    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_pair_logs_in() {
        let mut gate = AuthGate::new();
        let user = gate.login(DEMO_EMAIL, DEMO_PASSWORD).cloned().unwrap();

        assert!(gate.is_authenticated());
        assert_eq!(user.name, "John Smith");
        assert_eq!(user.company, "Smith & Associates");
        assert_eq!(gate.current_user(), Some(&user));
    }

    #[test]
    fn test_everything_else_is_rejected() {
        let mut gate = AuthGate::new();

        assert!(gate.login("demo@invoice.com", "wrong").is_none());
        assert!(gate.login("other@invoice.com", "demo123").is_none());
        // Exact match only: no trimming, no case folding.
        assert!(gate.login("Demo@Invoice.com", "demo123").is_none());
        assert!(gate.login("demo@invoice.com", " demo123").is_none());
        assert!(!gate.is_authenticated());
    }

    #[test]
    fn test_failed_login_keeps_existing_session() {
        let mut gate = AuthGate::new();
        assert!(gate.login(DEMO_EMAIL, DEMO_PASSWORD).is_some());

        assert!(gate.login(DEMO_EMAIL, "nope").is_none());
        assert!(gate.is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut gate = AuthGate::new();
        assert!(gate.login(DEMO_EMAIL, DEMO_PASSWORD).is_some());

        gate.logout();
        assert!(!gate.is_authenticated());
        gate.logout();
        assert!(gate.current_user().is_none());
    }
}
