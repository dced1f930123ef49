use std::time::Duration;

/// Tunables of the login view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginPolicy {
    /// Consecutive failures that block the form
    pub max_failed_attempts: u32,
    pub lockout_cooldown: Duration,
    /// How long the head of the notification stack stays on screen
    pub alert_lifetime: Duration,
    /// Delay before focusing the email input; it may still be disabled
    pub focus_delay: Duration,
    pub min_password_len: usize,
}

impl LoginPolicy {
    pub const MAX_FAILED_ATTEMPTS: u32 = 5;
    pub const LOCKOUT_COOLDOWN: Duration = Duration::from_millis(300_000);
    pub const ALERT_LIFETIME: Duration = Duration::from_millis(6_000);
    pub const FOCUS_DELAY: Duration = Duration::from_millis(100);
    pub const MIN_PASSWORD_LEN: usize = 3;
}

impl Default for LoginPolicy {
    fn default() -> Self {
        Self {
            max_failed_attempts: Self::MAX_FAILED_ATTEMPTS,
            lockout_cooldown: Self::LOCKOUT_COOLDOWN,
            alert_lifetime: Self::ALERT_LIFETIME,
            focus_delay: Self::FOCUS_DELAY,
            min_password_len: Self::MIN_PASSWORD_LEN,
        }
    }
}
