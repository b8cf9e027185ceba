//! Demo account directory adapter for the auth port.
//!
//! Implements the marketplace's deliberately loose demo authentication:
//! a fixed directory of known accounts, one shared secret, and
//! auto-provisioning of throwaway identities for unknown emails presented
//! with that secret. This is a demo convenience, not an authentication
//! check; a production deployment would swap this adapter for an external
//! identity provider.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::domain::ports::AuthService;
use crate::domain::{
    DisplayName, EmailAddress, Error, Identity, LoginCredentials, Role, SignupDetails, UserId,
};

/// Auth adapter over the fixed demo directory.
pub struct DemoAuthService {
    secret: String,
    directory: Vec<Identity>,
}

impl DemoAuthService {
    /// Build the adapter from seed accounts and the shared secret.
    ///
    /// Seed records that fail identity validation are skipped with a
    /// warning rather than failing startup; the demo directory is not
    /// worth crashing over.
    pub fn new(accounts: &[demo_data::DemoAccount], secret: impl Into<String>) -> Self {
        let directory = accounts
            .iter()
            .filter_map(|account| match identity_from_account(account) {
                Ok(identity) => Some(identity),
                Err(err) => {
                    warn!(email = %account.email, error = %err, "skipping invalid demo account");
                    None
                }
            })
            .collect();
        Self {
            secret: secret.into(),
            directory,
        }
    }

    /// Build the adapter over the standard demo directory.
    pub fn with_demo_directory() -> Self {
        Self::new(&demo_data::demo_accounts(), demo_data::DEMO_SECRET)
    }

    fn lookup(&self, email: &EmailAddress) -> Option<&Identity> {
        self.directory
            .iter()
            .find(|identity| identity.email == *email)
    }
}

fn identity_from_account(account: &demo_data::DemoAccount) -> Result<Identity, Error> {
    let role = Role::parse(&account.role)
        .ok_or_else(|| Error::internal(format!("unknown demo role: {}", account.role)))?;
    let email = EmailAddress::new(account.email.clone())
        .map_err(|err| Error::internal(format!("invalid demo email: {err}")))?;
    let name = DisplayName::new(account.name.clone())
        .map_err(|err| Error::internal(format!("invalid demo name: {err}")))?;
    Ok(Identity::new(UserId::from(account.id), email, role, name))
}

/// Fabricate an identity for an unknown email presented with the secret.
fn provisioned_identity(credentials: &LoginCredentials) -> Result<Identity, Error> {
    let name = DisplayName::new(credentials.email().local_part())
        .map_err(|err| Error::internal(format!("cannot derive display name: {err}")))?;
    Ok(Identity::new(
        UserId::random(),
        credentials.email().clone(),
        credentials.role(),
        name,
    ))
}

#[async_trait]
impl AuthService for DemoAuthService {
    async fn login(&self, credentials: &LoginCredentials) -> Result<Identity, Error> {
        if credentials.password() != self.secret {
            return Err(Error::unauthorized("invalid credentials"));
        }

        if let Some(known) = self.lookup(credentials.email()) {
            if known.role == credentials.role() {
                info!(user_id = %known.id, role = %known.role, "directory login");
                return Ok(known.clone());
            }
        }

        // Right secret, unknown email or mismatched role: fabricate an
        // account on the spot. Demo behaviour only.
        let identity = provisioned_identity(credentials)?;
        info!(user_id = %identity.id, role = %identity.role, "auto-provisioned login");
        Ok(identity)
    }

    async fn signup(&self, details: &SignupDetails) -> Result<Identity, Error> {
        let identity = Identity::new(
            UserId::random(),
            details.email().clone(),
            details.role(),
            details.name().clone(),
        );
        info!(user_id = %identity.id, role = %identity.role, "signup");
        Ok(identity)
    }
}
