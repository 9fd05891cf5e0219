//! Identifiers: path parameters and request IDs
//!
//! [`Identifier`] classifies the `{identifier}` path parameter as either a
//! numeric ID or a name. The classification looks only at the string's
//! format, so the same string always lands on the same variant, and an
//! all-digit username can never be reached by name.
//!
//! [`RequestId`] tags every inbound request for log correlation, using the
//! TypeID format (`req_<base32 uuidv7>`).

use http::Request;
use mti::prelude::*;
use std::fmt;
use std::str::FromStr;
use tower_http::request_id::{MakeRequestId, RequestId as TowerRequestId};

/// A path parameter selecting a user, video, audio track or tag
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier<'a> {
    /// Non-empty and made only of ASCII digits, of any length
    Numeric(&'a str),
    /// Anything else: a username or slug
    Named(&'a str),
}

impl<'a> Identifier<'a> {
    /// Classify a raw path parameter
    ///
    /// ```rust
    /// use tiktok_gateway::ids::Identifier;
    ///
    /// assert!(Identifier::parse("6745191554350760966").is_numeric());
    /// assert!(!Identifier::parse("someuser").is_numeric());
    /// ```
    pub fn parse(raw: &'a str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            Self::Numeric(raw)
        } else {
            Self::Named(raw)
        }
    }

    /// Whether this identifier is treated as an ID
    pub const fn is_numeric(&self) -> bool {
        matches!(self, Self::Numeric(_))
    }

    /// The original string
    pub const fn as_str(&self) -> &'a str {
        match self {
            Self::Numeric(raw) | Self::Named(raw) => raw,
        }
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A type-safe request identifier for log correlation.
///
/// Example: `req_01h455vb4pex5vsknk084sn02q`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(MagicTypeId);

impl RequestId {
    /// The prefix used for request IDs
    pub const PREFIX: &'static str = "req";

    /// Creates a new request ID with a UUIDv7 (time-sortable).
    #[must_use]
    pub fn new() -> Self {
        Self(Self::PREFIX.create_type_id::<V7>())
    }

    /// Returns the request ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RequestId {
    type Err = RequestIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mti = MagicTypeId::from_str(s).map_err(RequestIdError::Parse)?;

        if mti.prefix().as_str() != Self::PREFIX {
            return Err(RequestIdError::InvalidPrefix {
                actual: mti.prefix().as_str().to_string(),
            });
        }

        Ok(Self(mti))
    }
}

/// Error type for request ID parsing.
#[derive(Debug, thiserror::Error)]
pub enum RequestIdError {
    /// The ID could not be parsed as a valid TypeID.
    #[error("failed to parse request ID: {0}")]
    Parse(#[from] MagicTypeIdError),

    /// The prefix was not `req`.
    #[error("invalid prefix: expected 'req', got '{actual}'")]
    InvalidPrefix {
        /// The actual prefix found.
        actual: String,
    },
}

/// Generates a [`RequestId`] for each request that arrives without one
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeTypedRequestId;

impl MakeRequestId for MakeTypedRequestId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<TowerRequestId> {
        let id = RequestId::new();
        let header_value = http::HeaderValue::from_str(id.as_str()).ok()?;
        Some(TowerRequestId::new(header_value))
    }
}
