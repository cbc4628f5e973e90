//! Zone metadata operations.

use crate::error::Result;
use crate::objects::{Metadata, Zone};
use crate::schema::ApiObject;

use super::PowerDnsClient;

impl PowerDnsClient {
    /// List all metadata entries of a zone.
    pub async fn zone_metadata(&self, zone: &Zone) -> Result<Vec<Metadata>> {
        let path = self.server_path(&format!("zones/{}/metadata", zone.name));
        let value = self
            .transport()
            .get(&path)
            .await?
            .into_json("metadata list")?;
        Metadata::vec_from_value(value)
    }

    /// Create a metadata entry, then re-list so the caller sees the
    /// zone's complete metadata set.
    pub async fn create_metadata(&self, zone: &Zone, metadata: &Metadata) -> Result<Vec<Metadata>> {
        let path = self.server_path(&format!("zones/{}/metadata", zone.name));
        self.transport().post(&path, metadata).await?;
        self.zone_metadata(zone).await
    }

    /// Fetch one metadata entry by kind.
    pub async fn get_metadata(&self, zone: &Zone, metadata_kind: &str) -> Result<Metadata> {
        let path = self.server_path(&format!("zones/{}/metadata/{metadata_kind}", zone.name));
        let value = self.transport().get(&path).await?.into_json("metadata")?;
        Metadata::from_value(value)
    }

    /// Replace the values of one metadata kind.
    pub async fn put_metadata(&self, zone: &Zone, metadata: &Metadata) -> Result<Metadata> {
        let path = self.server_path(&format!("zones/{}/metadata/{}", zone.name, metadata.kind));
        let value = self
            .transport()
            .put(&path, metadata)
            .await?
            .into_json("metadata")?;
        Metadata::from_value(value)
    }

    /// Delete one metadata kind from a zone.
    pub async fn delete_metadata(&self, zone: &Zone, metadata: &Metadata) -> Result<()> {
        let path = self.server_path(&format!("zones/{}/metadata/{}", zone.name, metadata.kind));
        self.transport().delete(&path).await?;
        Ok(())
    }
}
