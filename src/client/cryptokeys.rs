//! DNSSEC cryptokey operations.

use crate::error::{PowerDnsError, Result};
use crate::objects::{Cryptokey, Zone};
use crate::schema::ApiObject;

use super::PowerDnsClient;

impl PowerDnsClient {
    /// List a zone's signing keys.
    pub async fn zone_cryptokeys(&self, zone: &Zone) -> Result<Vec<Cryptokey>> {
        let path = self.server_path(&format!("zones/{}/cryptokeys", zone.name));
        let value = self
            .transport()
            .get(&path)
            .await?
            .into_json("cryptokey list")?;
        Cryptokey::vec_from_value(value)
    }

    /// Create a signing key, returning it with the server-assigned `id`
    /// and key material.
    pub async fn create_cryptokey(&self, zone: &Zone, cryptokey: &Cryptokey) -> Result<Cryptokey> {
        let path = self.server_path(&format!("zones/{}/cryptokeys", zone.name));
        let value = self
            .transport()
            .post(&path, cryptokey)
            .await?
            .into_json("cryptokey")?;
        Cryptokey::from_value(value)
    }

    /// Fetch one signing key by id.
    pub async fn get_cryptokey(&self, zone: &Zone, key_id: u32) -> Result<Cryptokey> {
        let path = self.server_path(&format!("zones/{}/cryptokeys/{key_id}", zone.name));
        let value = self.transport().get(&path).await?.into_json("cryptokey")?;
        Cryptokey::from_value(value)
    }

    /// Update a signing key (activate/deactivate, publish/unpublish).
    /// The key must carry the `id` it was fetched with.
    pub async fn put_cryptokey(&self, zone: &Zone, cryptokey: &Cryptokey) -> Result<()> {
        let Some(key_id) = cryptokey.id else {
            return Err(PowerDnsError::InvalidParameter {
                param: "id".to_string(),
                detail: "cryptokey id is required for updates".to_string(),
            });
        };
        let path = self.server_path(&format!("zones/{}/cryptokeys/{key_id}", zone.name));
        self.transport().put(&path, cryptokey).await?;
        Ok(())
    }
}
