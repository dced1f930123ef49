use super::LoginPolicy;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureOutcome {
    /// Still below the threshold
    Counted { attempts: u32, max: u32 },
    /// This failure reached the threshold
    Blocked,
    /// Nothing recorded, the tracker was blocked already
    AlreadyBlocked,
}

/// Consecutive failed attempts. `blocked` implies `failed_attempts >= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockoutTracker {
    failed_attempts: u32,
    blocked: bool,
    max_attempts: u32,
}

impl LockoutTracker {
    pub fn new(max_attempts: u32) -> Self {
        Self {
            failed_attempts: 0,
            blocked: false,
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn from_policy(policy: &LoginPolicy) -> Self {
        Self::new(policy.max_failed_attempts)
    }

    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    pub fn record_failure(&mut self) -> FailureOutcome {
        if self.blocked {
            return FailureOutcome::AlreadyBlocked;
        }

        self.failed_attempts += 1;

        if self.failed_attempts >= self.max_attempts {
            self.blocked = true;
            FailureOutcome::Blocked
        } else {
            FailureOutcome::Counted {
                attempts: self.failed_attempts,
                max: self.max_attempts,
            }
        }
    }

    /// Cool-down elapsed. Returns false if there was no lockout to lift.
    pub fn expire(&mut self) -> bool {
        if !self.blocked {
            return false;
        }

        self.failed_attempts = 0;
        self.blocked = false;
        true
    }
}

impl Default for LockoutTracker {
    fn default() -> Self {
        Self::new(LoginPolicy::MAX_FAILED_ATTEMPTS)
    }
}
