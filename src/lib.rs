//! AdWire platform SDK core
//!
//! Typed models for AdWire API resources, plus the generic machinery that
//! moves them across the wire: per-entity field coercion tables, enum codecs
//! with default fallbacks, and a thin session/repository layer.
//!
//! ```no_run
//! use adwire::client::{Repository, Session};
//! use adwire::models::Organization;
//!
//! # async fn example() -> adwire::Result<()> {
//! let session = Session::new(Some("api-key".to_string()))?;
//! let repo = Repository::new(session);
//!
//! let mut org: Organization = repo.find(7).await?;
//! org.status = Some(false);
//! let org = repo.save(&org).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod coerce;
pub mod config;
pub mod entity;
pub mod error;
pub mod models;

pub use config::Config;
pub use entity::{Entity, EntityDescriptor};
pub use error::{Error, Result};
pub use models::{Organization, VendorPixel};
