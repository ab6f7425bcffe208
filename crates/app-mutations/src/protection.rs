//! Protection mutations.

use crate::mutation::Mutation;
use crate::operation::{GraphqlQuery, OperationDescriptor};

/// Start a protection for `application_id`. `bail` stops the run on the first error.
pub fn create_application_protection(
    application_id: &str,
    bail: bool,
    fragments: Option<&str>,
) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::CreateApplicationProtection,
        "$applicationId: String!, $bail: Boolean",
        "createApplicationProtection (applicationId: $applicationId, bail: $bail)",
        fragments,
    ))
    .with_param("applicationId", application_id)
    .with_param("bail", bail)
}

/// Remove protection `id` from `application_id`.
pub fn remove_protection(
    id: &str,
    application_id: &str,
    fragments: Option<&str>,
) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::RemoveProtection,
        "$_id: String!, $applicationId: String!",
        "removeProtection (_id: $_id, applicationId: $applicationId)",
        fragments,
    ))
    .with_param("_id", id)
    .with_param("applicationId", application_id)
}

/// Cancel a running protection.
pub fn cancel_protection(
    id: &str,
    application_id: &str,
    fragments: Option<&str>,
) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::CancelProtection,
        "$_id: String!, $applicationId: String!",
        "cancelProtection (_id: $_id, applicationId: $applicationId)",
        fragments,
    ))
    .with_param("_id", id)
    .with_param("applicationId", application_id)
}
