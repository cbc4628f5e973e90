//! Server statistics.

use serde_json::Value;

use crate::error::{PowerDnsError, Result};
use crate::objects::{MapStatisticItem, RingStatisticItem, Statistic, StatisticItem};
use crate::schema::ApiObject;

use super::PowerDnsClient;

impl PowerDnsClient {
    /// Fetch all server statistics. `includerings` controls whether the
    /// (potentially large) ring statistics are included.
    pub async fn statistics(&self, includerings: bool) -> Result<Vec<Statistic>> {
        self.fetch_statistics(None, includerings).await
    }

    /// Fetch a single statistic by name. `None` when the server returned
    /// no item of a recognized kind under that name; an unknown name is
    /// rejected by the server as an API error.
    pub async fn statistic(&self, name: &str, includerings: bool) -> Result<Option<Statistic>> {
        let items = self.fetch_statistics(Some(name), includerings).await?;
        Ok(items.into_iter().next())
    }

    async fn fetch_statistics(
        &self,
        name: Option<&str>,
        includerings: bool,
    ) -> Result<Vec<Statistic>> {
        let path = self.server_path("statistics");
        let mut params = vec![("includerings", includerings.to_string())];
        if let Some(name) = name {
            params.push(("statistic", name.to_string()));
        }

        let value = self
            .transport()
            .get_with_query(&path, &params)
            .await?
            .into_json("statistics list")?;
        let Value::Array(items) = value else {
            return Err(PowerDnsError::Parse {
                detail: "expected a JSON array of statistics".to_string(),
            });
        };

        let mut statistics = Vec::with_capacity(items.len());
        for item in items {
            let kind = item
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            // Unrecognized kinds are dropped, not surfaced.
            match kind.as_str() {
                "StatisticItem" => {
                    statistics.push(Statistic::Item(StatisticItem::from_value(item)?));
                }
                "MapStatisticItem" => {
                    statistics.push(Statistic::Map(MapStatisticItem::from_value(item)?));
                }
                "RingStatisticItem" => {
                    statistics.push(Statistic::Ring(RingStatisticItem::from_value(item)?));
                }
                other => {
                    log::debug!("skipping statistic of unrecognized type '{other}'");
                }
            }
        }
        Ok(statistics)
    }
}
