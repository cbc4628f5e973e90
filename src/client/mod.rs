//! The API client: transport configuration, eager server/zone bootstrap,
//! and one module per operation family.

mod cache;
mod cryptokeys;
mod http;
mod metadata;
mod search;
mod statistics;
mod zones;

pub use search::SearchObjectType;

use std::time::Duration;

use crate::error::{PowerDnsError, Result};
use crate::objects::{Server, Zone};
use crate::schema::ApiObject;

use http::Transport;

/// Versioned API root appended to the host unless already present.
const API_ROOT: &str = "api/v1";

/// Connection settings for [`PowerDnsClient::connect`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    api_host: String,
    api_key: String,
    tls_verify: bool,
    request_timeout: Option<Duration>,
}

impl ClientConfig {
    /// Settings for `api_host` (e.g. `https://dns.example.net:8081`)
    /// authenticated with `api_key`. TLS verification defaults to on,
    /// requests have no timeout unless one is set.
    pub fn new(api_host: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_host: api_host.into(),
            api_key: api_key.into(),
            tls_verify: true,
            request_timeout: None,
        }
    }

    /// Disable or re-enable TLS certificate validation.
    #[must_use]
    pub fn tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }

    /// Per-request timeout. A timed-out request surfaces as
    /// [`PowerDnsError::Network`].
    #[must_use]
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }
}

/// Client for one PowerDNS Authoritative Server HTTP API endpoint.
///
/// Construction is eager: [`connect`](Self::connect) fetches the server
/// list, selects the first server as the context for every subsequent
/// path, and snapshots the zone list. A handle therefore never exists in
/// a partially initialized state. The client holds no mutable state after
/// that, so it is freely shareable across tasks.
pub struct PowerDnsClient {
    transport: Transport,
    servers: Vec<Server>,
    current_server: Server,
    zones: Vec<Zone>,
}

impl PowerDnsClient {
    /// Connect and bootstrap: `GET servers`, select `servers[0]`, then
    /// `GET servers/{id}/zones`. Fails without yielding a handle if either
    /// call fails or the server list is empty.
    pub async fn connect(config: ClientConfig) -> Result<Self> {
        let api_url = if config.api_host.contains(API_ROOT) {
            config.api_host.clone()
        } else {
            format!("{}/{API_ROOT}", config.api_host)
        };

        if !config.tls_verify {
            log::warn!("disabling TLS certificate validation");
        }

        let mut builder = reqwest::Client::builder();
        if !config.tls_verify {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| PowerDnsError::Network {
            detail: format!("failed to build HTTP client: {e}"),
        })?;

        let transport = Transport::new(client, api_url, config.api_key);

        let servers =
            Server::vec_from_value(transport.get("servers").await?.into_json("server list")?)?;
        let current_server = servers
            .first()
            .cloned()
            .ok_or_else(|| PowerDnsError::Parse {
                detail: "server returned an empty server list".to_string(),
            })?;

        let zones = Zone::vec_from_value(
            transport
                .get(&format!("servers/{}/zones", current_server.id))
                .await?
                .into_json("zone list")?,
        )?;

        Ok(Self {
            transport,
            servers,
            current_server,
            zones,
        })
    }

    /// All servers reported at bootstrap.
    #[must_use]
    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    /// The server every request path is scoped to (always the first one
    /// returned; there is no server-switching API).
    #[must_use]
    pub fn current_server(&self) -> &Server {
        &self.current_server
    }

    /// The zone list snapshot taken at bootstrap (shallow, without
    /// rrsets). Use [`get_zone`](Self::get_zone) for a hydrated zone.
    #[must_use]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    pub(crate) fn server_path(&self, suffix: &str) -> String {
        format!("servers/{}/{suffix}", self.current_server.id)
    }
}
