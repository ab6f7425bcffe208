//! Application mutations.

use serde_json::Value;

use crate::entity::{Entity, id_binding};
use crate::mutation::Mutation;
use crate::operation::{GraphqlQuery, OperationDescriptor};

/// Create an application from `data`.
pub fn create_application(data: impl Into<Value>, fragments: Option<&str>) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::CreateApplication,
        "$data: ApplicationInput!",
        "createApplication(data: $data)",
        fragments,
    ))
    .with_param("data", data)
}

/// Duplicate the application with the given id.
pub fn duplicate_application(id: &str, fragments: Option<&str>) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::DuplicateApplication,
        "$_id: String!",
        "duplicateApplication (_id: $_id)",
        fragments,
    ))
    .with_param("_id", id)
}

/// Remove the application with the given id.
pub fn remove_application(id: &str, fragments: Option<&str>) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::RemoveApplication,
        "$_id: String!",
        "removeApplication (_id: $_id)",
        fragments,
    ))
    .with_param("_id", id)
}

/// Update an application.
///
/// The entity's `_id` becomes `$applicationId` and the remaining fields
/// become `$data`. `application` is only read.
pub fn update_application(application: &Entity, fragments: Option<&str>) -> OperationDescriptor {
    let mutation = Mutation::UpdateApplication;
    let split = application.split_id();
    OperationDescriptor::new(GraphqlQuery::mutation(
        mutation,
        "$applicationId: String!, $data: ApplicationInput!",
        "updateApplication (_id: $applicationId, data: $data)",
        fragments,
    ))
    .with_param("applicationId", split.id_binding(mutation))
    .with_param("data", split.data)
}

/// Unlock an application. Only the entity's `_id` is sent.
pub fn unlock_application(application: &Entity, fragments: Option<&str>) -> OperationDescriptor {
    let mutation = Mutation::UnlockApplication;
    OperationDescriptor::new(GraphqlQuery::mutation(
        mutation,
        "$applicationId: String!",
        "unlockApplication (_id: $applicationId)",
        fragments,
    ))
    .with_param("applicationId", id_binding(application.id(), mutation))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::fragment::defaults;

    fn application() -> Entity {
        Entity::try_from(json!({ "_id": "A1", "name": "n" })).unwrap()
    }

    #[test]
    fn create_binds_data() {
        let descriptor = create_application(json!({ "name": "x" }), None);
        assert!(descriptor.query().contains("$data: ApplicationInput!"));
        assert!(descriptor.query().contains(defaults::CREATE_APPLICATION));
        assert_eq!(descriptor.param("data"), Some(&json!({ "name": "x" })));
        assert_eq!(descriptor.params().len(), 1);
    }

    #[test]
    fn duplicate_and_remove_bind_id() {
        for descriptor in [
            duplicate_application("A1", None),
            remove_application("A1", None),
        ] {
            assert_eq!(descriptor.declared_variables(), vec!["_id"]);
            assert_eq!(descriptor.param("_id"), Some(&json!("A1")));
        }
    }

    #[test]
    fn update_strips_id_from_data() {
        let input = application();
        let descriptor = update_application(&input, None);
        assert_eq!(descriptor.param("applicationId"), Some(&json!("A1")));
        assert_eq!(descriptor.param("data"), Some(&json!({ "name": "n" })));
        assert!(descriptor.query().contains("$data: ApplicationInput!"));
        assert_eq!(input, application());
    }

    #[test]
    fn update_without_id_binds_null() {
        let input = Entity::new().with("name", "n");
        let descriptor = update_application(&input, None);
        assert_eq!(descriptor.param("applicationId"), Some(&Value::Null));
        assert_eq!(descriptor.param("data"), Some(&json!({ "name": "n" })));
    }

    #[test]
    fn unlock_reads_id_only() {
        let input = application();
        let descriptor = unlock_application(&input, Some("_id"));
        assert_eq!(descriptor.declared_variables(), vec!["applicationId"]);
        assert_eq!(descriptor.param("applicationId"), Some(&json!("A1")));
        assert!(descriptor.param("data").is_none());
        assert!(descriptor.query().contains("{\n          _id\n        }"));
        assert!(input.contains_key("_id"));
    }
}
