//! Zone operations.

use serde::Serialize;

use crate::error::Result;
use crate::objects::{ChangeType, RRSet, Zone};
use crate::schema::ApiObject;

use super::PowerDnsClient;

impl PowerDnsClient {
    /// Create a zone and return it as stored by the server.
    pub async fn create_zone(&self, zone: &Zone) -> Result<Zone> {
        let path = self.server_path("zones");
        let value = self.transport().post(&path, zone).await?.into_json("zone")?;
        Zone::from_value(value)
    }

    /// Fetch one zone, fully hydrated: every rrset and its nested records
    /// and comments come back as typed objects.
    pub async fn get_zone(&self, zone_name: &str) -> Result<Zone> {
        let path = self.server_path(&format!("zones/{zone_name}"));
        let value = self.transport().get(&path).await?.into_json("zone")?;
        Zone::from_value(value)
    }

    /// Delete a zone and all of its records.
    pub async fn delete_zone(&self, zone_name: &str) -> Result<()> {
        let path = self.server_path(&format!("zones/{zone_name}"));
        self.transport().delete(&path).await?;
        Ok(())
    }

    /// Replace zone-level settings (kind, masters, account, ...), then
    /// re-fetch so the caller sees server-side computed fields.
    pub async fn update_zone_metadata(&self, zone: &Zone) -> Result<Zone> {
        let path = self.server_path(&format!("zones/{}", zone.name));
        self.transport().put(&path, zone).await?;
        self.get_zone(&zone.name).await
    }

    /// Submit the zone's rrsets as a `PATCH` mutation, then re-fetch the
    /// full zone. Each rrset must carry a `changetype`.
    pub async fn patch_rrsets(&self, zone: &Zone) -> Result<Zone> {
        #[derive(Serialize)]
        struct PatchBody<'a> {
            rrsets: &'a [RRSet],
        }

        let path = self.server_path(&format!("zones/{}", zone.name));
        let body = PatchBody {
            rrsets: zone.rrsets.as_deref().unwrap_or_default(),
        };
        self.transport().patch(&path, &body).await?;
        self.get_zone(&zone.name).await
    }

    /// Create or replace records: stamps `changetype = REPLACE` on every
    /// rrset and delegates to [`patch_rrsets`](Self::patch_rrsets).
    pub async fn create_records(&self, zone: &Zone, rrsets: Vec<RRSet>) -> Result<Zone> {
        self.change_records(zone, rrsets, ChangeType::Replace).await
    }

    /// Delete records: stamps `changetype = DELETE` on every rrset and
    /// delegates to [`patch_rrsets`](Self::patch_rrsets).
    pub async fn delete_records(&self, zone: &Zone, rrsets: Vec<RRSet>) -> Result<Zone> {
        self.change_records(zone, rrsets, ChangeType::Delete).await
    }

    async fn change_records(
        &self,
        zone: &Zone,
        mut rrsets: Vec<RRSet>,
        changetype: ChangeType,
    ) -> Result<Zone> {
        for rrset in &mut rrsets {
            rrset.changetype = Some(changetype);
        }
        let patch = Zone {
            rrsets: Some(rrsets),
            ..Zone::new(&*zone.name, &*zone.kind)
        };
        self.patch_rrsets(&patch).await
    }
}
