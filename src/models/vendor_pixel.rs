//! Vendor pixel model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::coerce::{Coercion, EnumCodec};
use crate::entity::{Entity, EntityDescriptor};

/// `set_by` vocabulary.
const SET_BYS: EnumCodec = EnumCodec::new(&["SYSTEM", "USER"], "USER");

/// Descriptor for the `vendor_pixels` collection.
///
/// Every field reads and writes in the same wire form, so there are no
/// push overrides; `set_by` uses its codec in both directions.
pub static VENDOR_PIXEL: EntityDescriptor = EntityDescriptor {
    collection: "vendor_pixels",
    resource: "vendor_pixel",
    relations: &["creative", "vendor_pixel_domains"],
    pull: &[
        ("created_on", Coercion::Timestamp),
        ("creative_id", Coercion::Int),
        ("id", Coercion::Int),
        ("set_by", Coercion::Enum(SET_BYS)),
        ("tag", Coercion::Passthrough),
        ("tag_type", Coercion::Passthrough),
        ("updated_on", Coercion::Timestamp),
        ("version", Coercion::Int),
    ],
    push: &[],
};

/// A tracking pixel attached to a creative.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorPixel {
    /// Pixel ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// Owning creative ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creative_id: Option<i64>,

    /// Creation timestamp (read-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_on: Option<NaiveDateTime>,

    /// Who attached the pixel: `SYSTEM` or `USER`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_by: Option<String>,

    /// Pixel tag markup
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Tag type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_type: Option<String>,

    /// Last-update timestamp (read-only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_on: Option<NaiveDateTime>,

    /// Optimistic-concurrency version counter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<i64>,
}

impl Entity for VendorPixel {
    fn descriptor() -> &'static EntityDescriptor {
        &VENDOR_PIXEL
    }

    fn id(&self) -> Option<i64> {
        self.id
    }
}
