//! Entity records passed to the builders.

use std::ops::Deref;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{MutationError, MutationResult};
use crate::mutation::Mutation;

/// Identifier field carried by every stored entity.
pub const ID_FIELD: &str = "_id";

/// A plain key/value record: an application, a source, or a template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Entity(Map<String, Value>);

/// An entity separated into its identifier and the remaining fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSplit {
    /// Identifier value, if the entity had one.
    pub id: Option<Value>,
    /// Every other field, in map key order.
    pub data: Map<String, Value>,
}

impl Entity {
    /// Create an empty entity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a typed record into an entity.
    pub fn from_serializable<T: Serialize + ?Sized>(record: &T) -> MutationResult<Self> {
        Self::try_from(serde_json::to_value(record)?)
    }

    /// Set a field, returning the entity.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Identifier value, if present.
    #[must_use]
    pub fn id(&self) -> Option<&Value> {
        self.0.get(ID_FIELD)
    }

    /// Copy the entity apart into `key` and everything else.
    ///
    /// The entity itself is not modified.
    #[must_use]
    pub fn split_off(&self, key: &str) -> IdSplit {
        let data = self
            .0
            .iter()
            .filter(|(field, _)| field.as_str() != key)
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect();
        IdSplit {
            id: self.0.get(key).cloned(),
            data,
        }
    }

    /// [`Self::split_off`] on [`ID_FIELD`].
    #[must_use]
    pub fn split_id(&self) -> IdSplit {
        self.split_off(ID_FIELD)
    }

    /// Return the inner map.
    #[must_use]
    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl IdSplit {
    /// Identifier as a variable binding; `null` when absent.
    pub(crate) fn id_binding(&self, mutation: Mutation) -> Value {
        id_binding(self.id.as_ref(), mutation)
    }
}

/// An absent identifier is bound as `null` and left for the server to reject.
pub(crate) fn id_binding(id: Option<&Value>, mutation: Mutation) -> Value {
    id.cloned().unwrap_or_else(|| {
        warn!(
            mutation = mutation.name(),
            field = ID_FIELD,
            "entity has no identifier; binding null"
        );
        Value::Null
    })
}

impl Deref for Entity {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Map<String, Value>> for Entity {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Entity {
    type Error = MutationError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(MutationError::NotAnObject {
                kind: json_kind(&other),
            }),
        }
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        Self::Object(entity.0)
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[derive(Serialize)]
    struct Template {
        #[serde(rename = "_id")]
        id: String,
        name: String,
    }

    #[test]
    fn split_leaves_entity_untouched() {
        let entity = Entity::new().with("_id", "A1").with("name", "n");
        let split = entity.split_id();
        assert_eq!(split.id, Some(json!("A1")));
        assert_eq!(Value::Object(split.data), json!({ "name": "n" }));
        assert_eq!(entity.id(), Some(&json!("A1")));
        assert_eq!(entity.len(), 2);
    }

    #[test]
    fn split_without_identifier() {
        let entity = Entity::new().with("name", "n");
        let split = entity.split_id();
        assert_eq!(split.id, None);
        assert_eq!(split.data.len(), 1);
        assert_eq!(split.id_binding(Mutation::UpdateTemplate), Value::Null);
    }

    #[test]
    fn split_data_comes_back_in_key_order() {
        let entity = Entity::new().with("name", "n").with("_id", "A1").with("description", "d");
        let keys: Vec<_> = entity.split_id().data.keys().cloned().collect();
        assert_eq!(keys, vec!["description", "name"]);
    }

    #[test]
    fn typed_records_convert() {
        let entity = Entity::from_serializable(&Template {
            id: "T1".into(),
            name: "obfuscate".into(),
        })
        .unwrap();
        assert_eq!(entity.id(), Some(&json!("T1")));
        assert_eq!(entity.get("name"), Some(&json!("obfuscate")));
    }

    #[test]
    fn converts_back_to_map_and_value() {
        let entity = Entity::from(Map::from_iter([("name".to_owned(), json!("n"))]));
        assert_eq!(Value::from(entity.clone()), json!({ "name": "n" }));
        assert_eq!(entity.into_inner().get("name"), Some(&json!("n")));
    }

    #[test]
    fn non_objects_are_rejected() {
        let err = Entity::try_from(json!(["a"])).unwrap_err();
        assert!(matches!(err, MutationError::NotAnObject { kind: "array" }));

        let err = Entity::from_serializable("just a string").unwrap_err();
        assert!(matches!(err, MutationError::NotAnObject { kind: "string" }));
    }
}
