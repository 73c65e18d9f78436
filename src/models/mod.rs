//! AdWire platform data models
//!
//! Each resource kind pairs a plain serde struct with a static
//! [`EntityDescriptor`](crate::entity::EntityDescriptor) declaring its
//! collection, relations, and field coercion tables.

mod organization;
mod vendor_pixel;

pub use organization::{ORGANIZATION, Organization};
pub use vendor_pixel::{VENDOR_PIXEL, VendorPixel};
