//! # powerdns-client
//!
//! A typed async client for the [PowerDNS Authoritative Server HTTP
//! API](https://doc.powerdns.com/authoritative/http-api/): zones,
//! resource-record sets, DNSSEC cryptokeys, zone metadata, search,
//! statistics, and cache flushing.
//!
//! Every payload is validated against the entity's required/optional
//! field schema before it becomes a typed object, so a successful call
//! never yields a partially populated value.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS
//!   implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use powerdns_client::{ClientConfig, PowerDnsClient, Record, RRSet, Zone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connecting bootstraps eagerly: the server list and zone list
//!     // are fetched before the handle is returned.
//!     let client = PowerDnsClient::connect(ClientConfig::new(
//!         "https://dns.example.net:8081",
//!         "secret-api-key",
//!     ))
//!     .await?;
//!
//!     for zone in client.zones() {
//!         println!("{} ({})", zone.name, zone.kind);
//!     }
//!
//!     // Create an A record (rrset names are normalized to end in a dot).
//!     let zone = client.get_zone("example.com.").await?;
//!     let rrset = RRSet::new(
//!         "www.example.com",
//!         "A",
//!         3600,
//!         vec![Record::new("192.0.2.1", false)],
//!     );
//!     let zone = client.create_records(&zone, vec![rrset]).await?;
//!     println!("serial is now {:?}", zone.serial);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, PowerDnsError>`](PowerDnsError):
//!
//! - [`PowerDnsError::NotFound`] — the server answered 404
//! - [`PowerDnsError::Api`] — any other non-success status, with the
//!   diagnostic extracted from the response body
//! - [`PowerDnsError::Schema`] — a payload did not match an entity's
//!   field schema (every offending field is named)
//! - [`PowerDnsError::Network`] — transport failure, including timeouts
//!
//! Failures propagate to the caller immediately; nothing is retried.

mod client;
mod error;
mod objects;
mod schema;

pub use client::{ClientConfig, PowerDnsClient, SearchObjectType};
pub use error::{PowerDnsError, Result};
pub use objects::{
    CacheFlushResult, ChangeType, Comment, Cryptokey, MapStatisticItem, Metadata, RRSet, Record,
    RingStatisticItem, SearchResult, Server, SimpleStatisticItem, Statistic, StatisticItem,
    TsigKey, Zone,
};
