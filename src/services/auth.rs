use chrono::Utc;
use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_timers::future::sleep;
use std::time::Duration;
use uuid::Uuid;

use crate::common::AuthError;
use crate::types::{Credentials, Session};

/// Seam towards whatever verifies credentials. The login view only knows
/// this trait; swapping the simulated backend for a real one changes
/// nothing in the submission state machine.
pub trait Authenticator {
    fn authenticate(&self, credentials: Credentials)
    -> LocalBoxFuture<'static, Result<Session, AuthError>>;
}

/// Stand-in backend: waits a fixed latency, then accepts or rejects the
/// credentials at random.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedAuthenticator {
    pub latency: Duration,
    /// Probability that a roll is a success, in `[0, 1]`
    pub success_rate: f64,
}

impl SimulatedAuthenticator {
    pub const LATENCY: Duration = Duration::from_millis(1_500);
    pub const SUCCESS_RATE: f64 = 0.5;

    pub fn new(latency: Duration, success_rate: f64) -> Self {
        Self {
            latency,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }

    /// Outcome for a uniform `roll` in `[0, 1)`
    pub fn decide(&self, roll: f64, credentials: &Credentials) -> Result<Session, AuthError> {
        if roll < self.success_rate {
            Ok(Session {
                email: credentials.email.clone(),
                token: Uuid::new_v4().to_string(),
                issued_at: Utc::now(),
            })
        } else {
            Err(AuthError::InvalidCredentials)
        }
    }
}

impl Default for SimulatedAuthenticator {
    fn default() -> Self {
        Self::new(Self::LATENCY, Self::SUCCESS_RATE)
    }
}

impl Authenticator for SimulatedAuthenticator {
    fn authenticate(
        &self,
        credentials: Credentials,
    ) -> LocalBoxFuture<'static, Result<Session, AuthError>> {
        let this = *self;

        async move {
            sleep(this.latency).await;
            let roll: f64 = rand::random();
            this.decide(roll, &credentials)
        }
        .boxed_local()
    }
}
