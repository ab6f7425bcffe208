//! Template mutations.

use serde_json::Value;

use crate::entity::Entity;
use crate::mutation::Mutation;
use crate::operation::{GraphqlQuery, OperationDescriptor};

/// Create a template.
pub fn create_template(template: impl Into<Value>, fragments: Option<&str>) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::CreateTemplate,
        "$data: TemplateInput!",
        "createTemplate (data: $data)",
        fragments,
    ))
    .with_param("data", template)
}

/// Remove a template.
pub fn remove_template(id: &str, fragments: Option<&str>) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::RemoveTemplate,
        "$_id: String!",
        "removeTemplate (_id: $_id)",
        fragments,
    ))
    .with_param("_id", id)
}

/// Update a template. Its `_id` becomes `$templateId` (an `ID!`), the rest `$data`.
pub fn update_template(template: &Entity, fragments: Option<&str>) -> OperationDescriptor {
    let mutation = Mutation::UpdateTemplate;
    let split = template.split_id();
    OperationDescriptor::new(GraphqlQuery::mutation(
        mutation,
        "$templateId: ID!, $data: TemplateInput!",
        "updateTemplate (_id: $templateId, data: $data)",
        fragments,
    ))
    .with_param("templateId", split.id_binding(mutation))
    .with_param("data", split.data)
}

/// Apply template `template_id` to application `app_id`.
pub fn apply_template(
    template_id: &str,
    app_id: &str,
    fragments: Option<&str>,
) -> OperationDescriptor {
    OperationDescriptor::new(GraphqlQuery::mutation(
        Mutation::ApplyTemplate,
        "$templateId: String!, $appId: String!",
        "applyTemplate (templateId: $templateId, appId: $appId)",
        fragments,
    ))
    .with_param("templateId", template_id)
    .with_param("appId", app_id)
}
