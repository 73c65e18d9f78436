//! Entity descriptors and the generic pull/push machinery
//!
//! Each remote resource kind is described by a static [`EntityDescriptor`]
//! (collection name, relation names, coercion tables) paired with a plain
//! serde struct. The [`Entity`] trait ties the two together: pulling runs
//! the descriptor's coercion tables over a raw payload and then deserializes
//! the normalized map into the struct, pushing does the reverse. There is no
//! base-class hierarchy; transport code is generic over any `Entity`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::coerce::{self, FieldTable};
use crate::error::{Error, Result};

/// Static description of one remote resource kind.
#[derive(Debug)]
pub struct EntityDescriptor {
    /// Collection path segment, e.g. `organizations`.
    pub collection: &'static str,
    /// Singular resource name used by the API envelope.
    pub resource: &'static str,
    /// Names of related resources, resolved out-of-band by the caller.
    pub relations: &'static [&'static str],
    /// Pull-side coercion table; unlisted fields pass through.
    pub pull: FieldTable,
    /// Push-side overrides; fields not listed here fall back to `pull`.
    pub push: FieldTable,
}

impl EntityDescriptor {
    /// Whether `name` is a declared relation of this entity kind.
    pub fn has_relation(&self, name: &str) -> bool {
        self.relations.contains(&name)
    }

    /// Path of the collection, e.g. `/organizations`.
    pub fn collection_path(&self) -> String {
        format!("/{}", self.collection)
    }

    /// Path of one entity, e.g. `/organizations/42`.
    pub fn entity_path(&self, id: i64) -> String {
        format!("/{}/{}", self.collection, id)
    }
}

/// A typed remote resource backed by an [`EntityDescriptor`].
pub trait Entity: Serialize + DeserializeOwned {
    /// The descriptor for this entity kind.
    fn descriptor() -> &'static EntityDescriptor;

    /// The entity's remote identifier, once assigned.
    fn id(&self) -> Option<i64>;

    /// Build an entity from a raw wire payload.
    ///
    /// Applies the pull coercion table, then deserializes the normalized
    /// map. Fields the struct doesn't declare are ignored; absent fields
    /// stay `None` (except enum fields, which take their codec default).
    fn from_payload(raw: &Map<String, Value>) -> Result<Self> {
        let descriptor = Self::descriptor();
        log::debug!(
            "pulling {} payload with {} fields",
            descriptor.resource,
            raw.len()
        );
        let normalized = coerce::pull_payload(descriptor.pull, raw)?;
        let entity = serde_json::from_value(Value::Object(normalized))?;
        Ok(entity)
    }

    /// Serialize the entity into an outbound wire payload.
    ///
    /// Only declared, present fields are emitted; each is run through the
    /// push side of the coercion tables.
    fn to_payload(&self) -> Result<Map<String, Value>> {
        let descriptor = Self::descriptor();
        let serialized = serde_json::to_value(self)?;
        let model = serialized.as_object().ok_or_else(|| {
            Error::Other(format!(
                "{} did not serialize to an object",
                descriptor.resource
            ))
        })?;
        let payload = coerce::push_payload(descriptor.pull, descriptor.push, model)?;
        log::debug!(
            "pushing {} payload with {} fields",
            descriptor.resource,
            payload.len()
        );
        Ok(payload)
    }
}
