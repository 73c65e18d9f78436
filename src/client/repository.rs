//! Generic entity repository
//!
//! One repository serves every entity kind: paths and coercion come from the
//! entity's descriptor, the network from the [`Transport`] it wraps.

use serde_json::{Map, Value};

use super::Transport;
use crate::entity::Entity;
use crate::error::{ApiError, Result};

/// Typed access to remote entities over a transport.
pub struct Repository<T: Transport> {
    transport: T,
}

impl<T: Transport> Repository<T> {
    /// Wrap a transport.
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Fetch one entity by ID.
    pub async fn find<E: Entity>(&self, id: i64) -> Result<E> {
        let path = E::descriptor().entity_path(id);
        let response = self.transport.get(&path).await?;
        let data = unwrap_data(E::descriptor().resource, response)?;
        E::from_payload(&data)
    }

    /// Persist an entity, returning the server's view of it.
    ///
    /// Entities without an ID are created against the collection path;
    /// entities with an ID are updated in place.
    pub async fn save<E: Entity>(&self, entity: &E) -> Result<E> {
        let descriptor = E::descriptor();
        let payload = entity.to_payload()?;
        let path = match entity.id() {
            Some(id) => descriptor.entity_path(id),
            None => descriptor.collection_path(),
        };
        log::debug!("saving {} to {}", descriptor.resource, path);
        let response = self.transport.post(&path, &payload).await?;
        let data = unwrap_data(descriptor.resource, response)?;
        E::from_payload(&data)
    }

    /// The wrapped transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Unwrap the API's `{"data": {...}}` envelope.
fn unwrap_data(resource: &str, response: Value) -> Result<Map<String, Value>> {
    match response.get("data") {
        Some(Value::Object(map)) => Ok(map.clone()),
        _ => Err(ApiError::InvalidResponse(format!(
            "missing `data` object in {} response",
            resource
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::MockTransport;
    use crate::models::{Organization, VendorPixel};
    use serde_json::json;

    #[tokio::test]
    async fn test_find_pulls_entity_from_envelope() {
        let transport = MockTransport::new().with_response(json!({
            "data": { "id": 7, "name": "Example Media", "status": 1 }
        }));
        let repo = Repository::new(transport);

        let org: Organization = repo.find(7).await.unwrap();
        assert_eq!(org.id, Some(7));
        assert_eq!(org.name.as_deref(), Some("Example Media"));
        assert_eq!(org.status, Some(true));

        let requests = repo.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, "GET");
        assert_eq!(requests[0].path, "/organizations/7");
    }

    #[tokio::test]
    async fn test_save_posts_to_entity_path_when_id_present() {
        let transport = MockTransport::new().with_response(json!({
            "data": { "id": 7, "status": 0, "org_type": "partner" }
        }));
        let repo = Repository::new(transport);

        let org = Organization {
            id: Some(7),
            status: Some(false),
            org_type: Some("partner".to_string()),
            ..Default::default()
        };
        let saved: Organization = repo.save(&org).await.unwrap();
        assert_eq!(saved.status, Some(false));

        let requests = repo.transport().requests();
        assert_eq!(requests[0].method, "POST");
        assert_eq!(requests[0].path, "/organizations/7");

        // The outbound body is in wire form.
        let body = requests[0].body.as_ref().unwrap();
        assert_eq!(body["status"], json!(0));
        assert_eq!(body["org_type"], json!("partner"));
    }

    #[tokio::test]
    async fn test_save_posts_to_collection_path_when_new() {
        let transport = MockTransport::new().with_response(json!({
            "data": { "id": 300, "creative_id": 55, "set_by": "USER" }
        }));
        let repo = Repository::new(transport);

        let pixel = VendorPixel {
            creative_id: Some(55),
            tag: Some("<img>".to_string()),
            ..Default::default()
        };
        let saved: VendorPixel = repo.save(&pixel).await.unwrap();
        assert_eq!(saved.id, Some(300));

        let requests = repo.transport().requests();
        assert_eq!(requests[0].path, "/vendor_pixels");
    }

    #[tokio::test]
    async fn test_find_rejects_missing_envelope() {
        let transport = MockTransport::new().with_response(json!({ "id": 7 }));
        let repo = Repository::new(transport);

        let err = repo.find::<Organization>(7).await.unwrap_err();
        assert!(err.to_string().contains("data"));
    }
}
