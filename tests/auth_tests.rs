mod common;

#[cfg(test)]
pub mod auth_tests {
    use std::time::Duration;
    use uuid::Uuid;

    use super::common::*;

    use inmobiliaria_mendoza::common::*;
    use inmobiliaria_mendoza::services::*;

    #[test]
    fn test_simulated_authenticator_defaults() {
        let authenticator = SimulatedAuthenticator::default();

        assert_eq!(authenticator.latency, Duration::from_millis(1_500));
        assert_eq!(authenticator.success_rate, 0.5);
    }

    #[test]
    fn test_simulated_authenticator_decide_success() {
        let authenticator = SimulatedAuthenticator::default();

        let session = authenticator
            .decide(0.1, &valid_credentials())
            .expect("low roll should succeed");

        assert_eq!(session.email, VALID_EMAIL);
        assert!(Uuid::parse_str(&session.token).is_ok());
    }

    #[test]
    fn test_simulated_authenticator_decide_fails_on_high_roll() {
        let authenticator = SimulatedAuthenticator::default();

        for roll in [0.5, 0.75, 0.999] {
            assert_eq!(
                authenticator.decide(roll, &valid_credentials()),
                Err(AuthError::InvalidCredentials)
            );
        }
    }

    #[test]
    fn test_simulated_authenticator_issues_distinct_tokens() {
        let authenticator = SimulatedAuthenticator::new(Duration::ZERO, 1.0);

        let first = authenticator.decide(0.0, &valid_credentials());
        let second = authenticator.decide(0.0, &valid_credentials());

        assert_ne!(
            first.map(|s| s.token).ok(),
            second.map(|s| s.token).ok()
        );
    }

    #[test]
    fn test_simulated_authenticator_clamps_success_rate() {
        assert_eq!(SimulatedAuthenticator::new(Duration::ZERO, 3.0).success_rate, 1.0);
        assert_eq!(SimulatedAuthenticator::new(Duration::ZERO, -1.0).success_rate, 0.0);

        let never = SimulatedAuthenticator::new(Duration::ZERO, 0.0);
        assert!(never.decide(0.0, &valid_credentials()).is_err());
    }
}
