//! Identity data model: user id, email, role, and display name.
//!
//! Keep types immutable and validated at construction. An [`Identity`] is
//! only ever replaced wholesale; there is no partial update path.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Validation errors returned by identity value constructors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityValidationError {
    EmptyId,
    InvalidId,
    EmptyEmail,
    InvalidEmail,
    EmptyDisplayName,
    DisplayNameTooLong { max: usize },
    DisplayNameInvalidCharacters,
}

impl fmt::Display for IdentityValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::InvalidEmail => write!(f, "email must contain a local part and a domain"),
            Self::EmptyDisplayName => write!(f, "display name must not be empty"),
            Self::DisplayNameTooLong { max } => {
                write!(f, "display name must be at most {max} characters")
            }
            Self::DisplayNameInvalidCharacters => write!(
                f,
                "display name may only contain letters, numbers, spaces, or . _ ' - +",
            ),
        }
    }
}

impl std::error::Error for IdentityValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, IdentityValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from(Uuid::new_v4())
    }

    fn from_owned(id: String) -> Result<Self, IdentityValidationError> {
        if id.is_empty() {
            return Err(IdentityValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(IdentityValidationError::InvalidId);
        }
        let parsed = Uuid::parse_str(&id).map_err(|_| IdentityValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for UserId {
    fn from(value: Uuid) -> Self {
        Self(value, value.to_string())
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Validated email address.
///
/// ## Invariants
/// - Trimmed, non-empty, and contains exactly one `@` with non-empty local
///   part and domain. This is a plausibility check, not RFC 5322 parsing;
///   no mail is ever sent in this system.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    pub fn new(email: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let raw = email.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityValidationError::EmptyEmail);
        }
        let mut parts = trimmed.split('@');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(local), Some(domain), None) if !local.is_empty() && !domain.is_empty() => {
                Ok(Self(trimmed.to_owned()))
            }
            _ => Err(IdentityValidationError::InvalidEmail),
        }
    }

    /// The part before the `@`, used to derive display names for
    /// auto-provisioned identities.
    pub fn local_part(&self) -> &str {
        self.0.split('@').next().unwrap_or(self.0.as_str())
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Maximum allowed length for a display name.
pub const DISPLAY_NAME_MAX: usize = 64;

/// Human readable display name for the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

/// Punctuation permitted inside display names. Covers email local parts,
/// from which auto-provisioned names are derived.
const DISPLAY_NAME_PUNCTUATION: [char; 5] = ['.', '_', '\'', '-', '+'];

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(name: impl Into<String>) -> Result<Self, IdentityValidationError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(IdentityValidationError::EmptyDisplayName);
        }
        if trimmed.chars().count() > DISPLAY_NAME_MAX {
            return Err(IdentityValidationError::DisplayNameTooLong {
                max: DISPLAY_NAME_MAX,
            });
        }
        let allowed =
            |c: char| c.is_alphanumeric() || c == ' ' || DISPLAY_NAME_PUNCTUATION.contains(&c);
        if !trimmed.chars().all(allowed) {
            return Err(IdentityValidationError::DisplayNameInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = IdentityValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role attached to an authenticated identity.
///
/// Route admission is membership of the identity's role in a route's
/// allowed set; see `SessionContext::require_role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Browses listings and requests estimates.
    Buyer,
    /// Works investigation requests.
    Investigator,
    /// Full access, including both dashboards.
    Admin,
}

impl Role {
    /// Stable lowercase name used on the wire and in logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Buyer => "buyer",
            Self::Investigator => "investigator",
            Self::Admin => "admin",
        }
    }

    /// Parse a role from its wire name.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "buyer" => Some(Self::Buyer),
            "investigator" => Some(Self::Investigator),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated identity for a session.
///
/// Created on successful login or signup, persisted verbatim into the
/// session cookie, and destroyed on logout. There is at most one active
/// identity per session; its absence means the caller is anonymous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    /// Stable identifier for the account.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: UserId,
    /// Login email address.
    #[schema(value_type = String, example = "buyer@demo.com")]
    pub email: EmailAddress,
    /// Role used for route admission.
    pub role: Role,
    /// Human readable display name.
    #[schema(value_type = String, example = "John Doe")]
    pub name: DisplayName,
}

impl Identity {
    /// Assemble an identity from validated parts.
    pub fn new(id: UserId, email: EmailAddress, role: Role, name: DisplayName) -> Self {
        Self {
            id,
            email,
            role,
            name,
        }
    }
}
