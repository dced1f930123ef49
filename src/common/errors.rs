use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Authentication service unavailable: {0}")]
    Unavailable(String),
}

/// Inline form errors, shown under the offending field
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("El correo electrónico es obligatorio")]
    EmailRequired,

    #[error("Ingrese un correo electrónico válido")]
    EmailInvalid,

    #[error("La contraseña es obligatoria")]
    PasswordRequired,

    #[error("La contraseña es muy corta")]
    PasswordTooShort,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not load Leptos configuration: {0}")]
    Leptos(String),

    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}
