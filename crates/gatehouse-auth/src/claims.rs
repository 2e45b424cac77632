//! JWT claim structure for access tokens.

use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

/// Reads an optional boolean claim; absent or `null` both mean `false`.
fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<bool> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or(false))
}

/// JWT claims for access tokens.
///
/// # Fields
///
/// - `sub`: User ID (subject)
/// - `is_admin`: Admin capability flag, `false` when the token omits it or sets `null`
/// - `exp`: Token expiration timestamp
/// - `iat`: Token issued-at timestamp
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    /// User ID (subject claim)
    pub sub: String,
    /// Whether the subject holds the admin capability
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub is_admin: bool,
    /// Token expiration timestamp (Unix timestamp)
    pub exp: usize,
    /// Token issued-at timestamp (Unix timestamp)
    pub iat: usize,
}
