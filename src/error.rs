use serde::{Deserialize, Serialize};

/// Unified error type for all PowerDNS API operations.
///
/// Variants are serializable for structured error reporting. Local failures
/// (`Schema`, `InvalidParameter`) are raised before any network traffic;
/// everything else maps a single HTTP round trip. Nothing is ever retried.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum PowerDnsError {
    /// A transport-level failure (connection refused, TLS error, timeout).
    Network {
        /// Error details.
        detail: String,
    },

    /// The server answered HTTP 404, regardless of body content.
    ///
    /// Distinguished from [`Api`](Self::Api) so callers can branch on
    /// "does not exist" semantics.
    NotFound {
        /// Request path that produced the 404.
        path: String,
    },

    /// Any other non-success HTTP status.
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the response body's `error`/`errors`
        /// field, falling back to the raw body text.
        message: String,
    },

    /// A payload failed field-presence validation against an entity schema.
    ///
    /// Raised locally at construction time; enumerates every offending
    /// field name in one shot.
    Schema {
        /// Entity kind being constructed (e.g. `zone`, `rrset`).
        entity: String,
        /// Required fields absent from the payload.
        missing: Vec<String>,
        /// Fields present in the payload but outside the schema.
        unexpected: Vec<String>,
    },

    /// A body could not be parsed or serialized where JSON was required.
    Parse {
        /// Details about the failure.
        detail: String,
    },

    /// A request parameter is invalid; rejected before the network call.
    InvalidParameter {
        /// Name of the invalid parameter.
        param: String,
        /// Description of what's wrong.
        detail: String,
    },
}

impl PowerDnsError {
    /// Whether this error means the requested object does not exist.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl std::fmt::Display for PowerDnsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Network { detail } => {
                write!(f, "network error: {detail}")
            }
            Self::NotFound { path } => {
                write!(f, "'{path}' not found")
            }
            Self::Api { status, message } => {
                write!(f, "API error (status {status}): {message}")
            }
            Self::Schema {
                entity,
                missing,
                unexpected,
            } => {
                write!(f, "invalid {entity}")?;
                if !missing.is_empty() {
                    write!(f, ": missing required fields: {}", missing.join(", "))?;
                }
                if !unexpected.is_empty() {
                    let sep = if missing.is_empty() { ":" } else { ";" };
                    write!(f, "{sep} unexpected fields: {}", unexpected.join(", "))?;
                }
                Ok(())
            }
            Self::Parse { detail } => {
                write!(f, "parse error: {detail}")
            }
            Self::InvalidParameter { param, detail } => {
                write!(f, "invalid parameter '{param}': {detail}")
            }
        }
    }
}

impl std::error::Error for PowerDnsError {}

/// Convenience type alias for `Result<T, PowerDnsError>`.
pub type Result<T> = std::result::Result<T, PowerDnsError>;
