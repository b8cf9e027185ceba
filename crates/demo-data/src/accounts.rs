//! Fixed demo account directory.
//!
//! The marketplace runs against a closed directory of well-known accounts.
//! Every account shares the same demo secret; the backend's auth adapter
//! additionally provisions throwaway identities for unknown emails presented
//! with that secret.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shared secret accepted for every demo account.
pub const DEMO_SECRET: &str = "demo123";

/// A demo account record.
///
/// Roles are carried as plain strings (`buyer`, `investigator`, `admin`) so
/// this crate stays independent of the backend's `Role` enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoAccount {
    /// Stable identifier for the account.
    pub id: Uuid,
    /// Login email address.
    pub email: String,
    /// Role name: `buyer`, `investigator`, or `admin`.
    pub role: String,
    /// Human-readable display name.
    pub name: String,
}

/// Stable identifier of the demo buyer account.
pub const BUYER_ACCOUNT_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0001);
/// Stable identifier of the demo investigator account.
pub const INVESTIGATOR_ACCOUNT_ID: Uuid =
    Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0002);
/// Stable identifier of the demo admin account.
pub const ADMIN_ACCOUNT_ID: Uuid = Uuid::from_u128(0x0000_0000_0000_0000_0000_0000_0000_0003);

/// Returns the fixed demo account directory.
///
/// The directory always contains exactly one account per role, keyed by the
/// `@demo.com` addresses shown on the login screen.
///
/// # Example
///
/// ```
/// use demo_data::demo_accounts;
///
/// let accounts = demo_accounts();
/// assert!(accounts.iter().any(|a| a.email == "buyer@demo.com"));
/// ```
#[must_use]
pub fn demo_accounts() -> Vec<DemoAccount> {
    vec![
        DemoAccount {
            id: BUYER_ACCOUNT_ID,
            email: "buyer@demo.com".to_owned(),
            role: "buyer".to_owned(),
            name: "John Doe".to_owned(),
        },
        DemoAccount {
            id: INVESTIGATOR_ACCOUNT_ID,
            email: "investigator@demo.com".to_owned(),
            role: "investigator".to_owned(),
            name: "Jane Smith".to_owned(),
        },
        DemoAccount {
            id: ADMIN_ACCOUNT_ID,
            email: "admin@demo.com".to_owned(),
            role: "admin".to_owned(),
            name: "Admin User".to_owned(),
        },
    ]
}
