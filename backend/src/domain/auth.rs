//! Authentication primitives: login credentials and signup details.
//!
//! Keep inbound payload parsing outside the domain by exposing constructors
//! that validate string inputs before a handler talks to the auth port.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{DisplayName, EmailAddress, IdentityValidationError, Role};

/// Domain error returned when login or signup payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthValidationError {
    /// The email failed identity validation.
    Email(IdentityValidationError),
    /// Password was blank.
    EmptyPassword,
    /// The display name failed identity validation.
    Name(IdentityValidationError),
}

impl fmt::Display for AuthValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Email(err) => write!(f, "invalid email: {err}"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
            Self::Name(err) => write!(f, "invalid name: {err}"),
        }
    }
}

impl std::error::Error for AuthValidationError {}

/// Validated login credentials plus the role the caller wants to assume.
///
/// ## Invariants
/// - `email` satisfies [`EmailAddress`] validation.
/// - `password` is non-empty but retains caller-provided whitespace to avoid
///   surprising credential comparisons. It is zeroised on drop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    email: EmailAddress,
    password: Zeroizing<String>,
    role: Role,
}

impl LoginCredentials {
    /// Construct credentials from raw email/password inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        role: Role,
    ) -> Result<Self, AuthValidationError> {
        let email = EmailAddress::new(email).map_err(AuthValidationError::Email)?;
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
            role,
        })
    }

    /// Email address used for directory lookups.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }

    /// Role the caller wants the session to carry.
    pub fn role(&self) -> Role {
        self.role
    }
}

/// Validated signup details.
///
/// Signup never fails beyond payload validation: the demo environment
/// fabricates an account for whatever the caller provides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupDetails {
    email: EmailAddress,
    password: Zeroizing<String>,
    role: Role,
    name: DisplayName,
}

impl SignupDetails {
    /// Construct signup details from raw string inputs.
    pub fn try_from_parts(
        email: &str,
        password: &str,
        role: Role,
        name: &str,
    ) -> Result<Self, AuthValidationError> {
        let email = EmailAddress::new(email).map_err(AuthValidationError::Email)?;
        if password.is_empty() {
            return Err(AuthValidationError::EmptyPassword);
        }
        let name = DisplayName::new(name).map_err(AuthValidationError::Name)?;
        Ok(Self {
            email,
            password: Zeroizing::new(password.to_owned()),
            role,
            name,
        })
    }

    /// Email address for the new account.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Role for the new account.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Display name for the new account.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }
}
