//! Cache maintenance.

use crate::error::Result;
use crate::objects::CacheFlushResult;
use crate::schema::ApiObject;

use super::PowerDnsClient;

impl PowerDnsClient {
    /// Flush the packet and query caches for one domain name.
    pub async fn flush_cache(&self, domain: &str) -> Result<CacheFlushResult> {
        let path = self.server_path("cache/flush");
        let value = self
            .transport()
            .put_with_query(&path, &[("domain", domain.to_string())])
            .await?
            .into_json("cache flush result")?;
        CacheFlushResult::from_value(value)
    }
}
