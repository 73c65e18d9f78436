//! Organization model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::coerce::{Coercion, EnumCodec};
use crate::entity::{Entity, EntityDescriptor};

/// `dmp_enabled` vocabulary.
const DMP_SETTINGS: EnumCodec = EnumCodec::new(&["disabled", "enabled"], "disabled");

/// `org_type` vocabulary.
const ORG_TYPES: EnumCodec = EnumCodec::new(&["buyer", "partner"], "buyer");

/// Descriptor for the `organizations` collection.
///
/// The pull table is the authoritative field list; push overrides cover only
/// the flags whose wire form differs between read (`0`/`1` in, boolean in
/// memory) and write (boolean in memory, `0`/`1` out). Enum fields use the
/// same codec in both directions.
pub static ORGANIZATION: EntityDescriptor = EntityDescriptor {
    collection: "organizations",
    resource: "organization",
    relations: &["currency", "seats"],
    pull: &[
        ("address_1", Coercion::Passthrough),
        ("address_2", Coercion::Passthrough),
        ("adx_seat_account_id", Coercion::Int),
        ("allow_byo_price", Coercion::IntToBool),
        ("allow_x_agency_pixels", Coercion::IntToBool),
        ("billing_country_code", Coercion::Passthrough),
        ("city", Coercion::Passthrough),
        ("contact_name", Coercion::Passthrough),
        ("country", Coercion::Passthrough),
        ("created_on", Coercion::Timestamp),
        ("currency_code", Coercion::Passthrough),
        ("dmp_enabled", Coercion::Enum(DMP_SETTINGS)),
        ("id", Coercion::Int),
        ("name", Coercion::Passthrough),
        ("org_type", Coercion::Enum(ORG_TYPES)),
        ("override_suspicious_traffic_filter", Coercion::IntToBool),
        ("phone", Coercion::Passthrough),
        ("platform_contact_name", Coercion::Passthrough),
        ("state", Coercion::Passthrough),
        ("status", Coercion::IntToBool),
        ("suspicious_traffic_filter_level", Coercion::Int),
        ("tag_ruleset", Coercion::Passthrough),
        ("updated_on", Coercion::Timestamp),
        ("use_evidon_optout", Coercion::IntToBool),
        ("version", Coercion::Int),
        ("zip", Coercion::Passthrough),
    ],
    push: &[
        ("allow_byo_price", Coercion::BoolToInt),
        ("allow_x_agency_pixels", Coercion::BoolToInt),
        ("override_suspicious_traffic_filter", Coercion::BoolToInt),
        ("status", Coercion::BoolToInt),
        ("use_evidon_optout", Coercion::BoolToInt),
    ],
};

/// An advertiser or publisher account.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Organization {
    /// Organization ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Organization name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Street address, first line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_1: Option<String>,

    /// Street address, second line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address_2: Option<String>,

    /// Ad Exchange seat account ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub adx_seat_account_id: Option<i64>,

    /// Whether the organization may bring its own pricing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_byo_price: Option<bool>,

    /// Whether cross-agency pixels are allowed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_x_agency_pixels: Option<bool>,

    /// ISO country code used for billing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub billing_country_code: Option<String>,

    /// City
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Primary contact name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_name: Option<String>,

    /// Country
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Creation timestamp (read-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<NaiveDateTime>,

    /// ISO currency code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,

    /// DMP setting: `disabled` or `enabled`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dmp_enabled: Option<String>,

    /// Organization type: `buyer` or `partner`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub org_type: Option<String>,

    /// Whether the suspicious-traffic filter is overridden
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub override_suspicious_traffic_filter: Option<bool>,

    /// Contact phone number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    /// Platform-side account contact name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_contact_name: Option<String>,

    /// State or province
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Whether the organization is active
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<bool>,

    /// Suspicious-traffic filter strictness level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspicious_traffic_filter_level: Option<i64>,

    /// Tag ruleset name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_ruleset: Option<String>,

    /// Last-update timestamp (read-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<NaiveDateTime>,

    /// Whether the Evidon opt-out pixel is served
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_evidon_optout: Option<bool>,

    /// Optimistic-concurrency version counter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,

    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl Entity for Organization {
    fn descriptor() -> &'static EntityDescriptor {
        &ORGANIZATION
    }

    fn id(&self) -> Option<i64> {
        self.id
    }
}
