//! Full-text search over zone data.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PowerDnsError, Result};
use crate::objects::SearchResult;
use crate::schema::ApiObject;

use super::PowerDnsClient;

/// Object kinds the search endpoint can be restricted to.
///
/// Using an enum keeps malformed values out of the request entirely;
/// string input is validated by [`FromStr`] before any network call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchObjectType {
    All,
    Zone,
    Record,
    Comment,
}

impl SearchObjectType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Zone => "zone",
            Self::Record => "record",
            Self::Comment => "comment",
        }
    }
}

impl fmt::Display for SearchObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchObjectType {
    type Err = PowerDnsError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all" => Ok(Self::All),
            "zone" => Ok(Self::Zone),
            "record" => Ok(Self::Record),
            "comment" => Ok(Self::Comment),
            other => Err(PowerDnsError::InvalidParameter {
                param: "object_type".to_string(),
                detail: format!("must be one of all, zone, record, comment; got '{other}'"),
            }),
        }
    }
}

impl PowerDnsClient {
    /// Search zones, records and comments for `query` (`*` wildcards are
    /// understood by the server), returning at most `max_results` hits of
    /// the requested kind.
    pub async fn search(
        &self,
        query: &str,
        max_results: u32,
        object_type: SearchObjectType,
    ) -> Result<Vec<SearchResult>> {
        let path = self.server_path("search-data");
        let params = [
            ("q", query.to_string()),
            ("max", max_results.to_string()),
            ("object_type", object_type.as_str().to_string()),
        ];
        let value = self
            .transport()
            .get_with_query(&path, &params)
            .await?
            .into_json("search result list")?;
        SearchResult::vec_from_value(value)
    }
}
