//! AdWire API client
//!
//! The [`Transport`] trait is the seam between the entity machinery and the
//! network: [`Session`] is the reqwest-backed implementation, and tests
//! substitute a mock. [`Repository`] layers entity pull/push on top of any
//! transport.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod repository;
pub mod session;

pub use repository::Repository;
pub use session::Session;

/// Raw HTTP access to the platform API.
///
/// Implementations return the decoded JSON body; entity coercion and
/// envelope handling live above this trait.
#[async_trait]
pub trait Transport: Send + Sync {
    /// GET a path relative to the API base URL.
    async fn get(&self, path: &str) -> Result<Value>;

    /// POST a JSON body to a path relative to the API base URL.
    async fn post(&self, path: &str, body: &Map<String, Value>) -> Result<Value>;
}
