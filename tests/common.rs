use chrono::Utc;
use std::time::Duration;

use inmobiliaria_mendoza::common::*;
use inmobiliaria_mendoza::login::*;
use inmobiliaria_mendoza::types::*;

pub const VALID_EMAIL: &str = "a@b.com";
pub const VALID_PASSWORD: &str = "abcdef";

pub fn valid_credentials() -> Credentials {
    Credentials::new(VALID_EMAIL, VALID_PASSWORD)
}

pub fn get_session(email: &str) -> Session {
    Session {
        email: email.to_string(),
        token: "test-token".to_string(),
        issued_at: Utc::now(),
    }
}

pub fn controller_with(email: &str, password: &str) -> LoginController {
    let mut controller = LoginController::default();
    controller.set_field(Field::Email, email);
    controller.set_field(Field::Password, password);
    controller
}

/// Submit valid credentials and resolve the call as rejected, `n` times
pub fn fail_attempts(controller: &mut LoginController, n: u32) -> Vec<Command> {
    let mut last = Vec::new();

    for _ in 0..n {
        controller.set_field(Field::Email, VALID_EMAIL);
        controller.set_field(Field::Password, VALID_PASSWORD);
        let submitted = controller.submit();
        assert_eq!(
            submitted,
            vec![Command::Authenticate(valid_credentials())],
            "submission should reach the authenticator"
        );
        last = controller.resolve(Err(AuthError::InvalidCredentials));
    }

    last
}

pub fn armed(commands: &[Command], timer: TimerId) -> Option<Duration> {
    commands.iter().find_map(|command| match command {
        Command::Arm { timer: t, after } if *t == timer => Some(*after),
        _ => None,
    })
}

pub fn messages(controller: &LoginController) -> Vec<String> {
    controller
        .alerts()
        .iter()
        .map(|notification| notification.message.clone())
        .collect()
}
