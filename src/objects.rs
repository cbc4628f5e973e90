//! Typed entities for the PowerDNS API.
//!
//! Field names match the wire format exactly and are case-sensitive.
//! Required fields are plain, optional ones are `Option` and omitted from
//! outgoing payloads when unset. Construction from wire data goes through
//! [`ApiObject::from_value`](crate::schema::ApiObject), which enforces each
//! entity's required/optional field schema before deserializing.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::schema::{ApiObject, ObjectSchema, validate_items};

/// Append a trailing dot when absent. Zone and rrset names are always
/// stored fully qualified.
fn ensure_canonical(name: &mut String) {
    if !name.ends_with('.') {
        name.push('.');
    }
}

// ============ Server ============

/// A PowerDNS server process as reported by `GET servers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Server {
    #[serde(rename = "type")]
    pub server_type: String,
    pub id: String,
    pub daemon_type: String,
    pub version: String,
    pub url: String,
    pub config_url: String,
    pub zones_url: String,
}

impl ApiObject for Server {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "server",
        required: &[
            "type",
            "id",
            "daemon_type",
            "version",
            "url",
            "config_url",
            "zones_url",
        ],
        optional: &[],
    };
}

// ============ Zone ============

/// An authoritative zone.
///
/// Only `name` and `kind` are mandatory; everything else is filled in by
/// the server. `name` is normalized to end with a trailing dot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub zone_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrsets: Option<Vec<RRSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notified_serial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited_serial: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub masters: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnssec: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsec3param: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nsec3narrow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presigned: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_edit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_edit_api: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_rectify: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nameservers: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_tsig_key_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slave_tsig_key_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_check: Option<u64>,
}

impl Zone {
    /// Create a minimal zone for submission, e.g. to
    /// [`create_zone`](crate::PowerDnsClient::create_zone).
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        let mut zone = Self {
            name: name.into(),
            kind: kind.into(),
            ..Self::default()
        };
        zone.normalize();
        zone
    }
}

impl ApiObject for Zone {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "zone",
        required: &["name", "kind"],
        optional: &[
            "id",
            "type",
            "url",
            "rrsets",
            "serial",
            "notified_serial",
            "edited_serial",
            "masters",
            "dnssec",
            "nsec3param",
            "nsec3narrow",
            "presigned",
            "soa_edit",
            "soa_edit_api",
            "api_rectify",
            "zone",
            "account",
            "nameservers",
            "master_tsig_key_ids",
            "slave_tsig_key_ids",
            "last_check",
        ],
    };

    fn validate_nested(map: &Map<String, Value>) -> Result<()> {
        validate_items(map, "rrsets", &RRSet::SCHEMA, RRSet::validate_nested)
    }

    fn normalize(&mut self) {
        ensure_canonical(&mut self.name);
        if let Some(rrsets) = &mut self.rrsets {
            for rrset in rrsets {
                rrset.normalize();
            }
        }
    }
}

// ============ RRSet ============

/// Mutation semantics of an rrset inside a `PATCH zones/{name}` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChangeType {
    Replace,
    Delete,
}

/// A resource-record set: all records of one name and type, plus comments.
///
/// `name` is normalized to end with a trailing dot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RRSet {
    pub name: String,
    pub ttl: u32,
    #[serde(rename = "type")]
    pub record_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub changetype: Option<ChangeType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<Record>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<Comment>>,
}

impl RRSet {
    /// Create an rrset for submission. `changetype` is stamped later by
    /// [`create_records`](crate::PowerDnsClient::create_records) /
    /// [`delete_records`](crate::PowerDnsClient::delete_records).
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        ttl: u32,
        records: Vec<Record>,
    ) -> Self {
        let mut rrset = Self {
            name: name.into(),
            ttl,
            record_type: record_type.into(),
            changetype: None,
            records: Some(records),
            comments: None,
        };
        rrset.normalize();
        rrset
    }
}

impl ApiObject for RRSet {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "rrset",
        required: &["name", "ttl", "type"],
        optional: &["records", "comments", "changetype"],
    };

    fn validate_nested(map: &Map<String, Value>) -> Result<()> {
        validate_items(map, "records", &Record::SCHEMA, Record::validate_nested)?;
        validate_items(map, "comments", &Comment::SCHEMA, Comment::validate_nested)
    }

    fn normalize(&mut self) {
        ensure_canonical(&mut self.name);
    }
}

// ============ Record / Comment ============

/// One record inside an rrset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub content: String,
    pub disabled: bool,
}

impl Record {
    pub fn new(content: impl Into<String>, disabled: bool) -> Self {
        Self {
            content: content.into(),
            disabled,
        }
    }
}

impl ApiObject for Record {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "record",
        required: &["content", "disabled"],
        optional: &[],
    };
}

/// One comment attached to an rrset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<u64>,
}

impl Comment {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            account: None,
            modified_at: None,
        }
    }
}

impl ApiObject for Comment {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "comment",
        required: &["content"],
        optional: &["account", "modified_at"],
    };
}

// ============ Cryptokey ============

/// A DNSSEC signing key of a zone, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cryptokey {
    pub active: bool,
    pub keytype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privatekey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flags: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dnskey: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ds: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bits: Option<u32>,
}

impl Cryptokey {
    /// Create a key request; `keytype` is `ksk`, `zsk` or `csk`.
    pub fn new(keytype: impl Into<String>, active: bool) -> Self {
        Self {
            active,
            keytype: keytype.into(),
            id: None,
            object_type: None,
            privatekey: None,
            flags: None,
            published: None,
            dnskey: None,
            ds: None,
            algorithm: None,
            bits: None,
        }
    }
}

impl ApiObject for Cryptokey {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "cryptokey",
        required: &["active", "keytype"],
        optional: &[
            "privatekey",
            "flags",
            "id",
            "type",
            "published",
            "dnskey",
            "ds",
            "algorithm",
            "bits",
        ],
    };
}

// ============ Metadata ============

/// One metadata entry of a zone, keyed by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub kind: String,
    pub metadata: Vec<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
}

impl Metadata {
    pub fn new(kind: impl Into<String>, metadata: Vec<String>) -> Self {
        Self {
            kind: kind.into(),
            metadata,
            object_type: None,
        }
    }
}

impl ApiObject for Metadata {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "metadata",
        required: &["kind", "metadata"],
        optional: &["type"],
    };
}

// ============ TSIG key ============

/// A TSIG key. Modeled for payload fidelity; the key endpoints are not
/// implemented by this client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TsigKey {
    pub name: String,
    pub algorithm: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
}

impl ApiObject for TsigKey {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "tsigkey",
        required: &["name", "algorithm"],
        optional: &["id", "key", "type"],
    };
}

// ============ Search ============

/// One hit returned by `GET search-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub object_type: String,
    pub zone_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
}

impl ApiObject for SearchResult {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "search result",
        required: &["name", "object_type", "zone_id"],
        optional: &["content", "disabled", "zone", "type", "ttl"],
    };
}

// ============ Statistics ============

/// A scalar statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticItem {
    pub name: String,
    pub value: String,
}

impl ApiObject for StatisticItem {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "statistic item",
        required: &["name", "type", "value"],
        optional: &[],
    };
}

/// A named scalar nested inside a map or ring statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimpleStatisticItem {
    pub name: String,
    pub value: String,
}

impl ApiObject for SimpleStatisticItem {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "simple statistic item",
        required: &["name", "value"],
        optional: &[],
    };
}

/// A statistic whose value is a set of named scalars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapStatisticItem {
    pub name: String,
    pub value: Vec<SimpleStatisticItem>,
}

impl ApiObject for MapStatisticItem {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "map statistic item",
        required: &["name", "type", "value"],
        optional: &[],
    };

    fn validate_nested(map: &Map<String, Value>) -> Result<()> {
        validate_items(
            map,
            "value",
            &SimpleStatisticItem::SCHEMA,
            SimpleStatisticItem::validate_nested,
        )
    }
}

/// A bounded-size ring statistic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RingStatisticItem {
    pub name: String,
    pub size: u64,
    pub value: Vec<SimpleStatisticItem>,
}

impl ApiObject for RingStatisticItem {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "ring statistic item",
        required: &["name", "type", "size", "value"],
        optional: &[],
    };

    fn validate_nested(map: &Map<String, Value>) -> Result<()> {
        validate_items(
            map,
            "value",
            &SimpleStatisticItem::SCHEMA,
            SimpleStatisticItem::validate_nested,
        )
    }
}

/// One entry of `GET statistics`, discriminated by the wire `type` field.
///
/// Entries with an unrecognized `type` are dropped during mapping rather
/// than surfaced as errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Statistic {
    #[serde(rename = "StatisticItem")]
    Item(StatisticItem),
    #[serde(rename = "MapStatisticItem")]
    Map(MapStatisticItem),
    #[serde(rename = "RingStatisticItem")]
    Ring(RingStatisticItem),
}

impl Statistic {
    /// The statistic's name, independent of its kind.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Item(item) => &item.name,
            Self::Map(item) => &item.name,
            Self::Ring(item) => &item.name,
        }
    }
}

// ============ Cache ============

/// Result of `PUT cache/flush`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheFlushResult {
    pub count: f64,
    pub result: String,
}

impl ApiObject for CacheFlushResult {
    const SCHEMA: ObjectSchema = ObjectSchema {
        entity: "cache flush result",
        required: &["count", "result"],
        optional: &[],
    };
}
