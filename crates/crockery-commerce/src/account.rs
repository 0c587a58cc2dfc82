//! Shopper account contract.

use crate::ids::UserId;
use serde::{Deserialize, Serialize};

/// A registered shopper, as a future account backend will describe one.
///
/// The storefront has no sign-in; nothing constructs this yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    /// Credential as accepted by the backend at sign-up.
    #[serde(skip_serializing)]
    pub password: String,
}
