//! In-process mock PowerDNS server for integration tests.
//!
//! Serves a fixed pair of zones under `/api/v1` with the wire shapes of a
//! real 4.x authoritative server, requires the test API key on every
//! request, and records mutation bodies so tests can assert what was
//! actually sent.

#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, Request, State};
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{Value, json};

use powerdns_client::{ClientConfig, PowerDnsClient};

pub const API_KEY: &str = "test-key";

/// Captured request bodies and query strings, shared with the test.
#[derive(Default)]
pub struct Recorded {
    pub patches: Mutex<Vec<Value>>,
    pub puts: Mutex<Vec<Value>>,
    pub searches: Mutex<Vec<HashMap<String, String>>>,
}

pub type SharedState = Arc<Recorded>;

pub struct MockServer {
    pub addr: SocketAddr,
    pub state: SharedState,
}

impl MockServer {
    pub fn api_host(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Bind a random port and serve the mock API in the background.
pub async fn start() -> MockServer {
    let state: SharedState = Arc::new(Recorded::default());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind mock server");
    let addr = listener.local_addr().expect("mock server addr");
    let router = app(state.clone());
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("serve mock API");
    });
    MockServer { addr, state }
}

/// Connect a client to the mock server with the expected key.
pub async fn connect(server: &MockServer) -> PowerDnsClient {
    PowerDnsClient::connect(ClientConfig::new(server.api_host(), API_KEY))
        .await
        .expect("bootstrap against mock server")
}

pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/servers", get(list_servers))
        .route(
            "/api/v1/servers/localhost/zones",
            get(list_zones).post(create_zone),
        )
        .route(
            "/api/v1/servers/localhost/zones/{zone}",
            get(get_zone)
                .patch(patch_zone)
                .put(put_zone)
                .delete(delete_zone),
        )
        .route(
            "/api/v1/servers/localhost/zones/{zone}/cryptokeys",
            get(list_cryptokeys).post(create_cryptokey),
        )
        .route(
            "/api/v1/servers/localhost/zones/{zone}/cryptokeys/{id}",
            get(get_cryptokey).put(put_cryptokey),
        )
        .route(
            "/api/v1/servers/localhost/zones/{zone}/metadata",
            get(list_metadata).post(create_metadata),
        )
        .route(
            "/api/v1/servers/localhost/zones/{zone}/metadata/{kind}",
            get(get_metadata).put(put_metadata).delete(delete_metadata),
        )
        .route("/api/v1/servers/localhost/search-data", get(search_data))
        .route("/api/v1/servers/localhost/statistics", get(statistics))
        .route("/api/v1/servers/localhost/cache/flush", put(flush_cache))
        .layer(middleware::from_fn(require_api_key))
        .with_state(state)
}

async fn require_api_key(request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get("x-api-key")
        .is_some_and(|value| value == API_KEY);
    if authorized {
        next.run(request).await
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({"error": "Unauthorized"}))).into_response()
    }
}

fn server_object(id: &str) -> Value {
    json!({
        "type": "Server",
        "id": id,
        "daemon_type": "authoritative",
        "version": "4.9.0",
        "url": format!("/api/v1/servers/{id}"),
        "config_url": format!("/api/v1/servers/{id}/config{{/config_setting}}"),
        "zones_url": format!("/api/v1/servers/{id}/zones{{/zone}}"),
    })
}

fn shallow_zone(name: &str) -> Value {
    json!({
        "id": name,
        "name": name,
        "type": "Zone",
        "url": format!("/api/v1/servers/localhost/zones/{name}"),
        "kind": "Native",
        "serial": 2024_01_01_01_u32,
        "notified_serial": 0,
        "edited_serial": 2024_01_01_01_u32,
        "masters": [],
        "dnssec": false,
        "last_check": 0,
        "account": "",
    })
}

fn full_zone(name: &str) -> Value {
    let mut zone = shallow_zone(name);
    zone["rrsets"] = json!([
        {
            "name": format!("www.{name}"),
            "type": "A",
            "ttl": 3600,
            "records": [{"content": "192.0.2.1", "disabled": false}],
            "comments": [{"content": "front door", "account": "ops", "modified_at": 1_700_000_000_u64}],
        },
        {
            "name": name,
            "type": "NS",
            "ttl": 3600,
            "records": [{"content": "ns1.example.net.", "disabled": false}],
            "comments": [{"content": "delegation"}],
        },
    ]);
    zone
}

fn cryptokey_object(id: u32) -> Value {
    json!({
        "type": "Cryptokey",
        "id": id,
        "keytype": "csk",
        "active": true,
        "published": true,
        "flags": 257,
        "algorithm": "ECDSAP256SHA256",
        "bits": 256,
        "dnskey": "257 3 13 aGVsbG8gd29ybGQ=",
        "ds": ["12345 13 2 deadbeef"],
    })
}

fn metadata_object(kind: &str) -> Value {
    json!({
        "type": "Metadata",
        "kind": kind,
        "metadata": ["AUTO-NS"],
    })
}

async fn list_servers() -> Json<Value> {
    Json(json!([server_object("localhost"), server_object("secondary")]))
}

async fn list_zones() -> Json<Value> {
    Json(json!([shallow_zone("example.com."), shallow_zone("other.org.")]))
}

async fn create_zone(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let name = body["name"].as_str().unwrap_or("unnamed.");
    let mut zone = shallow_zone(name);
    zone["kind"] = body["kind"].clone();
    zone["rrsets"] = json!([]);
    (StatusCode::CREATED, Json(zone))
}

async fn get_zone(Path(zone): Path<String>) -> Response {
    match zone.as_str() {
        "example.com." | "other.org." | "newzone.org." => Json(full_zone(&zone)).into_response(),
        // Exercises the structured-JSON error path.
        "broken.json." => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "zone not found"})),
        )
            .into_response(),
        // Exercises the raw-text error path.
        "unprocessable." => (StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable Entity").into_response(),
        _ => (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"}))).into_response(),
    }
}

async fn patch_zone(State(state): State<SharedState>, Json(body): Json<Value>) -> StatusCode {
    state.patches.lock().expect("patches lock").push(body);
    StatusCode::NO_CONTENT
}

async fn put_zone(State(state): State<SharedState>, Json(body): Json<Value>) -> StatusCode {
    state.puts.lock().expect("puts lock").push(body);
    StatusCode::NO_CONTENT
}

async fn delete_zone() -> StatusCode {
    // Empty non-JSON success body, as the real server answers.
    StatusCode::NO_CONTENT
}

async fn list_cryptokeys() -> Json<Value> {
    Json(json!([cryptokey_object(42)]))
}

async fn create_cryptokey(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    let mut key = cryptokey_object(43);
    key["keytype"] = body["keytype"].clone();
    key["active"] = body["active"].clone();
    (StatusCode::CREATED, Json(key))
}

async fn get_cryptokey(Path((_zone, id)): Path<(String, u32)>) -> Response {
    if id == 42 {
        Json(cryptokey_object(42)).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"}))).into_response()
    }
}

async fn put_cryptokey() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn list_metadata() -> Json<Value> {
    Json(json!([metadata_object("ALLOW-AXFR-FROM")]))
}

async fn create_metadata() -> StatusCode {
    StatusCode::CREATED
}

async fn get_metadata(Path((_zone, kind)): Path<(String, String)>) -> Response {
    if kind == "ALLOW-AXFR-FROM" {
        Json(metadata_object(&kind)).into_response()
    } else {
        (StatusCode::NOT_FOUND, Json(json!({"error": "Not Found"}))).into_response()
    }
}

async fn put_metadata(Path((_zone, kind)): Path<(String, String)>, Json(body): Json<Value>) -> Json<Value> {
    let mut meta = metadata_object(&kind);
    meta["metadata"] = body["metadata"].clone();
    Json(meta)
}

async fn delete_metadata() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn search_data(
    State(state): State<SharedState>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<Value> {
    state.searches.lock().expect("searches lock").push(params);
    Json(json!([
        {
            "name": "www.example.com.",
            "object_type": "record",
            "zone_id": "example.com.",
            "zone": "example.com.",
            "content": "192.0.2.1",
            "type": "A",
            "ttl": 3600,
            "disabled": false,
        },
        {
            "name": "example.com.",
            "object_type": "zone",
            "zone_id": "example.com.",
        },
    ]))
}

async fn statistics(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    let all = json!([
        {"name": "uptime", "type": "StatisticItem", "value": "3600"},
        {
            "name": "response-by-qtype",
            "type": "MapStatisticItem",
            "value": [{"name": "A", "value": "10"}, {"name": "AAAA", "value": "4"}],
        },
        {
            "name": "queries",
            "type": "RingStatisticItem",
            "size": 10000,
            "value": [{"name": "www.example.com.", "value": "100"}],
        },
        // A kind this client does not recognize; must be dropped silently.
        {"name": "future-metric", "type": "GaugeStatisticItem", "value": "1"},
    ]);

    match params.get("statistic") {
        Some(wanted) => {
            let filtered: Vec<Value> = all
                .as_array()
                .expect("statistics fixture is an array")
                .iter()
                .filter(|item| item["name"].as_str() == Some(wanted))
                .cloned()
                .collect();
            Json(Value::Array(filtered))
        }
        None => Json(all),
    }
}

async fn flush_cache(Query(params): Query<HashMap<String, String>>) -> Response {
    if params.contains_key("domain") {
        Json(json!({"count": 1, "result": "Flushed cache."})).into_response()
    } else {
        (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "Field 'domain' is required"})),
        )
            .into_response()
    }
}
