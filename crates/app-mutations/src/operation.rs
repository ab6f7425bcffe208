//! Operation descriptors and the request payload they turn into.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::fragment::Fragment;
use crate::mutation::Mutation;

/// GraphQL document text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphqlQuery {
    query: String,
}

impl GraphqlQuery {
    /// Create a new query from a string.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Return the query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.query
    }

    /// Render a single-field mutation document.
    ///
    /// `variables` is the declaration list without parentheses and `call` is
    /// the field invocation, arguments included.
    pub(crate) fn mutation(
        mutation: Mutation,
        variables: &str,
        call: &str,
        fragments: Option<&str>,
    ) -> Self {
        let fragment = Fragment::or_default(fragments, mutation.default_fragment());
        debug!(
            mutation = mutation.name(),
            custom_fragment = fragments.is_some(),
            "building mutation document"
        );
        Self::new(format!(
            "\n      mutation {name} ({variables}) {{\n        {call} {{\n          {fragment}\n        }}\n      }}\n    ",
            name = mutation.name(),
        ))
    }

    /// Text between `mutation`/`query` and the first `{`.
    fn header(&self) -> &str {
        self.query.split('{').next().unwrap_or_default()
    }
}

/// The `{ query, params }` pair handed to a GraphQL executor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationDescriptor {
    query: GraphqlQuery,
    params: Map<String, Value>,
}

impl OperationDescriptor {
    /// Create a descriptor with no bound variables.
    #[must_use]
    pub fn new(query: GraphqlQuery) -> Self {
        Self {
            query,
            params: Map::new(),
        }
    }

    /// Bind a variable.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Return the document text.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Return every bound variable.
    #[must_use]
    pub const fn params(&self) -> &Map<String, Value> {
        &self.params
    }

    /// Look up one bound variable.
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&Value> {
        self.params.get(name)
    }

    /// Operation name following the `mutation` keyword, if any.
    #[must_use]
    pub fn operation_name(&self) -> Option<&str> {
        let rest = self.query.header().trim_start().strip_prefix("mutation")?;
        let name = rest
            .trim_start()
            .split(|c: char| c == '(' || c.is_whitespace())
            .next()?;
        (!name.is_empty()).then_some(name)
    }

    /// Variable names declared in the operation header, without `$`.
    #[must_use]
    pub fn declared_variables(&self) -> Vec<&str> {
        let header = self.query.header();
        let Some(open) = header.find('(') else {
            return Vec::new();
        };
        let close = header[open..].find(')').map_or(header.len(), |i| open + i);
        header[open + 1..close]
            .split(',')
            .filter_map(|decl| decl.trim().strip_prefix('$'))
            .filter_map(|decl| decl.split(':').next())
            .map(str::trim)
            .collect()
    }

    /// Split into document and variables.
    #[must_use]
    pub fn into_parts(self) -> (GraphqlQuery, Map<String, Value>) {
        (self.query, self.params)
    }

    /// Convert into the payload a GraphQL-over-HTTP transport posts.
    #[must_use]
    pub fn into_request(self) -> GraphqlRequest<Map<String, Value>> {
        let operation_name = self.operation_name().map(str::to_owned);
        let request = GraphqlRequest::new(self.query, self.params);
        match operation_name {
            Some(name) => request.with_operation_name(name),
            None => request,
        }
    }
}

/// GraphQL request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlRequest<V> {
    /// Query text.
    pub query: GraphqlQuery,
    /// Variables.
    pub variables: V,
    /// Optional operation name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl<V> GraphqlRequest<V> {
    /// Create a new request.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)]
    pub fn new(query: GraphqlQuery, variables: V) -> Self {
        Self {
            query,
            variables,
            operation_name: None,
        }
    }

    /// Attach an operation name.
    #[must_use]
    pub fn with_operation_name(mut self, name: impl Into<String>) -> Self {
        self.operation_name = Some(name.into());
        self
    }
}
