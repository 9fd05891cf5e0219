//! Identifier resolution for user routes

use crate::client::{ClientError, ScraperClient};
use crate::ids::Identifier;
use crate::models::User;

/// Resolve a `{identifier}` path parameter to a user handle
///
/// Numeric identifiers always take the by-ID lookup, which needs no I/O.
/// Anything else is looked up by username and awaited. Lookup failures are
/// returned unchanged.
pub async fn resolve_user(client: &dyn ScraperClient, raw: &str) -> Result<User, ClientError> {
    match Identifier::parse(raw) {
        Identifier::Numeric(id) => Ok(client.user_by_id(id)),
        Identifier::Named(username) => client.user_by_name(username).await,
    }
}
