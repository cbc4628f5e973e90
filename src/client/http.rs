//! Transport core shared by every operation.
//!
//! One method performs the whole exchange: URL join, API-key header, JSON
//! body (an empty object when the caller supplies none), query parameters,
//! status-to-error mapping, and the JSON-or-raw-text success fallback.
//! Requests are never retried.

use reqwest::Method;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PowerDnsError, Result};

/// Successful response payload.
///
/// Some endpoints legitimately answer with an empty or non-JSON body
/// (e.g. `DELETE zones/{name}`), so the raw text is preserved verbatim
/// instead of being treated as a failure.
pub(crate) enum ResponseBody {
    Json(Value),
    Text(String),
}

impl ResponseBody {
    /// Unwrap the parsed JSON value, or fail with a parse error naming
    /// `what` when the endpoint answered with a non-JSON body.
    pub(crate) fn into_json(self, what: &str) -> Result<Value> {
        match self {
            Self::Json(value) => Ok(value),
            Self::Text(text) => Err(PowerDnsError::Parse {
                detail: format!("expected a JSON {what}, got: {text}"),
            }),
        }
    }
}

pub(crate) struct Transport {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
}

impl Transport {
    pub(crate) fn new(client: reqwest::Client, api_url: String, api_key: String) -> Self {
        Self {
            client,
            api_url,
            api_key,
        }
    }

    pub(crate) async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        query: &[(&str, String)],
    ) -> Result<ResponseBody> {
        let url = format!("{}/{}", self.api_url, path.trim_start_matches('/'));
        log::debug!("{method} {url}");

        let payload = match body {
            Some(body) => serde_json::to_value(body).map_err(|e| PowerDnsError::Parse {
                detail: format!("failed to serialize request body: {e}"),
            })?,
            None => Value::Object(Map::new()),
        };

        let mut request = self
            .client
            .request(method, &url)
            .header("X-API-Key", &self.api_key)
            .json(&payload);
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(|e| PowerDnsError::Network {
            detail: e.to_string(),
        })?;

        let status = response.status();
        log::debug!("response status: {status}");

        let text = response.text().await.map_err(|e| PowerDnsError::Network {
            detail: format!("failed to read response body: {e}"),
        })?;

        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), path, &text));
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(ResponseBody::Json(value)),
            Err(_) => Ok(ResponseBody::Text(text)),
        }
    }

    pub(crate) async fn get(&self, path: &str) -> Result<ResponseBody> {
        self.request(Method::GET, path, None::<&()>, &[]).await
    }

    pub(crate) async fn get_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ResponseBody> {
        self.request(Method::GET, path, None::<&()>, query).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody> {
        self.request(Method::POST, path, Some(body), &[]).await
    }

    pub(crate) async fn put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody> {
        self.request(Method::PUT, path, Some(body), &[]).await
    }

    pub(crate) async fn put_with_query(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<ResponseBody> {
        self.request(Method::PUT, path, None::<&()>, query).await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<ResponseBody> {
        self.request(Method::PATCH, path, Some(body), &[]).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<ResponseBody> {
        self.request(Method::DELETE, path, None::<&()>, &[]).await
    }
}

/// Map a non-success status to the error taxonomy. 404 wins regardless of
/// body content; everything else extracts a diagnostic from the body.
fn error_from_response(status: u16, path: &str, body: &str) -> PowerDnsError {
    if status == 404 {
        return PowerDnsError::NotFound {
            path: path.to_string(),
        };
    }
    PowerDnsError::Api {
        status,
        message: extract_error_message(body),
    }
}

/// Pull a human-readable message out of an error body: the JSON `error`
/// field, then `errors`, then a fixed fallback when the JSON object has
/// neither, then the raw body text when it is not a JSON object at all.
fn extract_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map
            .get("error")
            .or_else(|| map.get("errors"))
            .map_or_else(|| "Unknown error".to_string(), field_to_string),
        _ => body.to_string(),
    }
}

fn field_to_string(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
