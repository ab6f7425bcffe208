//! Application source mutations.

use serde_json::Value;

use crate::entity::Entity;
use crate::mutation::Mutation;
use crate::operation::{GraphqlQuery, OperationDescriptor};

/// Attach a new source to `application_id`.
///
/// Sent as the `addSourceToApplication` operation.
pub fn add_application_source(
    application_id: &str,
    data: impl Into<Value>,
    fragments: Option<&str>,
) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::AddApplicationSource,
        "$applicationId: String!, $data: ApplicationSourceCreate!",
        "addSourceToApplication(applicationId: $applicationId, data: $data)",
        fragments,
    ))
    .with_param("applicationId", application_id)
    .with_param("data", data)
}

/// Update a source. Its `_id` becomes `$sourceId`, the rest `$data`.
pub fn update_application_source(
    source: &Entity,
    fragments: Option<&str>,
) -> OperationDescriptor {
    let mutation = Mutation::UpdateApplicationSource;
    let split = source.split_id();
    OperationDescriptor::new(GraphqlQuery::mutation(
        mutation,
        "$sourceId: String!, $data: ApplicationSourceInput!",
        "updateApplicationSource(_id: $sourceId, data: $data)",
        fragments,
    ))
    .with_param("sourceId", split.id_binding(mutation))
    .with_param("data", split.data)
}

/// Detach source `source_id` from `application_id`.
///
/// Sent as the `removeSource` operation. The source is addressed by id, not
/// by filename.
pub fn remove_source_from_application(
    source_id: &str,
    application_id: &str,
    fragments: Option<&str>,
) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::RemoveSourceFromApplication,
        "$_id: String!, $applicationId: String!",
        "removeSource (_id: $_id, applicationId: $applicationId)",
        fragments,
    ))
    .with_param("_id", source_id)
    .with_param("applicationId", application_id)
}
