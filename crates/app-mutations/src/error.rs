//! Error types for the mutation crate.
//!
//! Builders themselves are total; these errors come from the surrounding
//! helpers (name parsing, configuration, typed-record conversion).

use thiserror::Error;

use crate::mutation::Mutation;

/// Result alias used across the crate.
pub type MutationResult<T> = Result<T, MutationError>;

/// Errors raised outside the builders.
#[derive(Debug, Error)]
pub enum MutationError {
    /// A mutation name did not match any known operation.
    #[error("unknown mutation: {name}")]
    UnknownMutation {
        /// The name that failed to parse.
        name: String,
    },

    /// Two configuration keys name the same mutation.
    #[error("fragment override for {mutation} given more than once")]
    DuplicateOverride {
        /// The mutation both keys resolve to.
        mutation: Mutation,
    },

    /// Fragment configuration could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A typed record failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A typed record serialized to something other than a JSON object.
    #[error("expected an object, got {kind}")]
    NotAnObject {
        /// JSON kind of the rejected value.
        kind: &'static str,
    },
}

impl MutationError {
    pub(crate) fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownMutation { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_mutation_message_names_the_input() {
        let err = MutationError::unknown("dropEverything");
        assert_eq!(err.to_string(), "unknown mutation: dropEverything");
    }

    #[test]
    fn json_errors_convert() {
        let err: MutationError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, MutationError::Json(_)));
    }
}
