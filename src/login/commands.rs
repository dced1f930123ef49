use std::time::Duration;

use crate::types::Credentials;

/// Deferred callbacks owned by the login view. At most one of each is armed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    AlertExpiry,
    LockoutCooldown,
    FocusEmail,
}

impl TimerId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AlertExpiry => "alert_expiry",
            Self::LockoutCooldown => "lockout_cooldown",
            Self::FocusEmail => "focus_email",
        }
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Side effects requested by [`LoginController`](super::LoginController)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Schedule `timer`, replacing it if already armed. When it elapses,
    /// report back through `LoginController::timer_fired`.
    Arm { timer: TimerId, after: Duration },
    /// Call the authenticator and report back through `LoginController::resolve`.
    Authenticate(Credentials),
    /// Move keyboard focus to the email input now.
    FocusEmail,
}
