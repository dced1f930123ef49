use std::time::Duration;

use crate::common::AuthError;
use crate::types::{Credentials, Field, Session};

use super::{
    AlertQueue, Command, FailureOutcome, LockoutTracker, LoginPolicy, NotificationKind, TimerId,
    ValidationErrors, validate,
};

pub const MSG_LOGIN_SUCCESS: &str = "Inicio de sesión exitoso";
pub const MSG_ACCOUNT_BLOCKED: &str = "Cuenta bloqueada. Espere antes de intentar nuevamente.";
pub const MSG_LOCKOUT_EXPIRED: &str = "Bloqueo expirado. Puede intentar iniciar sesión nuevamente.";
pub const MSG_SERVICE_UNAVAILABLE: &str =
    "No se pudo contactar el servicio de autenticación. Intente más tarde.";

/// Lockout notice naming the cool-down in whole minutes, rounded up
pub fn lockout_started_message(cooldown: Duration) -> String {
    let minutes = cooldown.as_secs().div_ceil(60).max(1);
    let unit = if minutes == 1 { "minuto" } else { "minutos" };
    format!(
        "Cuenta bloqueada por múltiples intentos fallidos. Espere {} {}.",
        minutes, unit
    )
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Waiting for the authenticator
    Submitting,
}

/// What the submit button shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitLabel {
    SignIn,
    Loading,
    Blocked,
}

impl SubmitLabel {
    pub fn text(&self) -> &'static str {
        match self {
            Self::SignIn => "Iniciar Sesión",
            Self::Loading => "Iniciando sesión...",
            Self::Blocked => "Cuenta Bloqueada",
        }
    }
}

/// Whole state of the login view.
///
/// Every mutating operation returns the commands the caller must carry out.
/// Timer callbacks and authentication results come back through
/// [`timer_fired`](Self::timer_fired) and [`resolve`](Self::resolve).
#[derive(Debug, Clone)]
pub struct LoginController {
    policy: LoginPolicy,
    credentials: Credentials,
    errors: ValidationErrors,
    alerts: AlertQueue,
    lockout: LockoutTracker,
    phase: Phase,
    password_visible: bool,
}

impl LoginController {
    pub fn new(policy: LoginPolicy) -> Self {
        Self {
            policy,
            credentials: Credentials::default(),
            errors: ValidationErrors::default(),
            alerts: AlertQueue::new(),
            lockout: LockoutTracker::from_policy(&policy),
            phase: Phase::Idle,
            password_visible: false,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn alerts(&self) -> &AlertQueue {
        &self.alerts
    }

    pub fn lockout(&self) -> &LockoutTracker {
        &self.lockout
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_blocked(&self) -> bool {
        self.lockout.is_blocked()
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    pub fn submit_label(&self) -> SubmitLabel {
        if self.is_blocked() {
            SubmitLabel::Blocked
        } else if self.is_loading() {
            SubmitLabel::Loading
        } else {
            SubmitLabel::SignIn
        }
    }

    /// Inline banner shown between a first failure and the lockout
    pub fn attempts_warning(&self) -> Option<String> {
        let attempts = self.lockout.failed_attempts();
        (attempts > 0 && !self.is_blocked()).then(|| {
            format!(
                "Intentos fallidos: {}/{}",
                attempts,
                self.lockout.max_attempts()
            )
        })
    }

    /// View mounted
    pub fn mount(&self) -> Vec<Command> {
        vec![arm(TimerId::FocusEmail, self.policy.focus_delay)]
    }

    /// Field edited. Email is trimmed, password kept verbatim.
    pub fn set_field(&mut self, field: Field, value: &str) {
        if self.is_blocked() {
            return;
        }

        match field {
            Field::Email => self.credentials.email = value.trim().to_string(),
            Field::Password => self.credentials.password = value.to_string(),
        }

        self.errors.clear(field);
    }

    pub fn toggle_password_visibility(&mut self) {
        if !self.is_blocked() {
            self.password_visible = !self.password_visible;
        }
    }

    /// Key pressed inside one of the inputs
    pub fn field_key_down(&mut self, key: &str) -> Vec<Command> {
        if key == "Enter" && !self.is_blocked() && !self.is_loading() {
            self.submit()
        } else {
            Vec::new()
        }
    }

    /// Key pressed anywhere in the window
    pub fn window_key_down(&mut self, key: &str) -> Vec<Command> {
        if key == "Escape" {
            self.clear_form()
        } else {
            Vec::new()
        }
    }

    pub fn clear_form(&mut self) -> Vec<Command> {
        if self.is_blocked() {
            return Vec::new();
        }

        self.credentials = Credentials::default();
        self.errors = ValidationErrors::default();
        vec![Command::FocusEmail]
    }

    pub fn submit(&mut self) -> Vec<Command> {
        let mut commands = Vec::new();

        if self.is_blocked() {
            self.notify(&mut commands, MSG_ACCOUNT_BLOCKED, NotificationKind::Error);
            return commands;
        }

        if self.is_loading() {
            return commands;
        }

        self.errors = validate(&self.credentials, &self.policy);
        if !self.errors.is_empty() {
            return commands;
        }

        log::info!("Submitting login for {}", self.credentials.email);
        self.phase = Phase::Submitting;
        commands.push(Command::Authenticate(self.credentials.clone()));
        commands
    }

    /// Authenticator finished. Ignored unless a submission is in flight.
    pub fn resolve(&mut self, outcome: Result<Session, AuthError>) -> Vec<Command> {
        let mut commands = Vec::new();

        if self.phase != Phase::Submitting {
            log::warn!("Discarding authentication result with no submission in flight");
            return commands;
        }
        self.phase = Phase::Idle;

        match outcome {
            Ok(session) => {
                log::info!("Login succeeded for {}", session.email);
                self.credentials = Credentials::default();
                self.errors = ValidationErrors::default();
                self.notify(&mut commands, MSG_LOGIN_SUCCESS, NotificationKind::Success);
            }
            Err(AuthError::InvalidCredentials) => match self.lockout.record_failure() {
                FailureOutcome::Counted { attempts, max } => {
                    log::info!("Login failed, attempt {}/{}", attempts, max);
                    let message = format!("Credenciales incorrectas. Intento {}/{}", attempts, max);
                    self.notify(&mut commands, message, NotificationKind::Error);
                }
                FailureOutcome::Blocked => {
                    log::warn!(
                        "Login blocked after {} failed attempts",
                        self.lockout.failed_attempts()
                    );
                    let message = lockout_started_message(self.policy.lockout_cooldown);
                    self.notify(&mut commands, message, NotificationKind::Error);
                    commands.push(arm(TimerId::LockoutCooldown, self.policy.lockout_cooldown));
                }
                FailureOutcome::AlreadyBlocked => {}
            },
            Err(e @ AuthError::Unavailable(_)) => {
                log::error!("Login could not be completed: {}", e);
                self.notify(&mut commands, MSG_SERVICE_UNAVAILABLE, NotificationKind::Error);
            }
        }

        commands
    }

    pub fn timer_fired(&mut self, timer: TimerId) -> Vec<Command> {
        let mut commands = Vec::new();

        match timer {
            TimerId::AlertExpiry => {
                self.alerts.expire_head();
                if !self.alerts.is_empty() {
                    commands.push(arm(TimerId::AlertExpiry, self.policy.alert_lifetime));
                }
            }
            TimerId::LockoutCooldown => {
                if self.lockout.expire() {
                    log::info!("Login lockout expired");
                    self.notify(&mut commands, MSG_LOCKOUT_EXPIRED, NotificationKind::Info);
                    commands.push(arm(TimerId::FocusEmail, self.policy.focus_delay));
                }
            }
            TimerId::FocusEmail => {
                if !self.is_blocked() {
                    commands.push(Command::FocusEmail);
                }
            }
        }

        commands
    }

    fn notify(
        &mut self,
        commands: &mut Vec<Command>,
        message: impl Into<String>,
        kind: NotificationKind,
    ) {
        let was_empty = self.alerts.is_empty();
        self.alerts.push(message, kind);

        if was_empty {
            commands.push(arm(TimerId::AlertExpiry, self.policy.alert_lifetime));
        }
    }
}

fn arm(timer: TimerId, after: Duration) -> Command {
    Command::Arm { timer, after }
}

impl Default for LoginController {
    fn default() -> Self {
        Self::new(LoginPolicy::default())
    }
}
