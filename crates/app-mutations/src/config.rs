//! Fragment configuration and the configured builder facade.
//!
//! Overrides live in a `[fragments]` table keyed by builder or operation name:
//!
//! ```toml
//! [fragments]
//! createApplication = "_id name"
//! removeSource = "_id sources { _id }"
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::entity::Entity;
use crate::error::{MutationError, MutationResult};
use crate::fragment::Fragment;
use crate::mutation::Mutation;
use crate::operation::OperationDescriptor;
use crate::{application, protection, source, template};

/// Per-mutation fragment overrides. Mutations without an entry use their default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFragmentConfig", into = "RawFragmentConfig")]
pub struct FragmentConfig {
    overrides: BTreeMap<Mutation, String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFragmentConfig {
    #[serde(default)]
    fragments: BTreeMap<String, String>,
}

impl TryFrom<RawFragmentConfig> for FragmentConfig {
    type Error = MutationError;

    /// A builder name and its operation name are aliases; giving both is an error.
    fn try_from(raw: RawFragmentConfig) -> Result<Self, Self::Error> {
        let mut config = Self::default();
        for (name, fragment) in raw.fragments {
            let mutation: Mutation = name.parse()?;
            if config.overrides.contains_key(&mutation) {
                return Err(MutationError::DuplicateOverride { mutation });
            }
            config.overrides.insert(mutation, fragment);
        }
        Ok(config)
    }
}

impl From<FragmentConfig> for RawFragmentConfig {
    fn from(config: FragmentConfig) -> Self {
        Self {
            fragments: config
                .overrides
                .into_iter()
                .map(|(mutation, fragment)| (mutation.builder_name().to_owned(), fragment))
                .collect(),
        }
    }
}

impl FragmentConfig {
    /// Parse a TOML document containing a `[fragments]` table.
    pub fn from_toml_str(input: &str) -> MutationResult<Self> {
        let raw: RawFragmentConfig = toml::from_str(input)?;
        let config = Self::try_from(raw)?;
        debug!(overrides = config.overrides.len(), "loaded fragment configuration");
        Ok(config)
    }

    /// Override the fragment for one mutation.
    #[must_use]
    pub fn with_override(mut self, mutation: Mutation, fragment: impl Into<String>) -> Self {
        self.overrides.insert(mutation, fragment.into());
        self
    }

    /// The configured override, if any.
    #[must_use]
    pub fn override_for(&self, mutation: Mutation) -> Option<&str> {
        self.overrides.get(&mutation).map(String::as_str)
    }

    /// The fragment a builder will use for `mutation`.
    #[must_use]
    pub fn fragment_for(&self, mutation: Mutation) -> Fragment {
        Fragment::or_default(self.override_for(mutation), mutation.default_fragment())
    }

    /// Number of overrides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// Returns `true` if nothing is overridden.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

/// Builders bound to a [`FragmentConfig`].
///
/// Each method takes the same inputs as the free function of the same name
/// and supplies the configured fragment.
#[derive(Debug, Clone, Default)]
pub struct MutationSet {
    config: FragmentConfig,
}

impl MutationSet {
    /// Create a set using `config`.
    #[must_use]
    pub const fn new(config: FragmentConfig) -> Self {
        Self { config }
    }

    /// Return the configuration.
    #[must_use]
    pub const fn config(&self) -> &FragmentConfig {
        &self.config
    }

    fn fragment(&self, mutation: Mutation) -> Option<&str> {
        self.config.override_for(mutation)
    }

    /// See [`crate::create_application`].
    pub fn create_application(&self, data: impl Into<Value>) -> OperationDescriptor {
        application::create_application(data, self.fragment(Mutation::CreateApplication))
    }

    /// See [`crate::duplicate_application`].
    pub fn duplicate_application(&self, id: &str) -> OperationDescriptor {
        application::duplicate_application(id, self.fragment(Mutation::DuplicateApplication))
    }

    /// See [`crate::remove_application`].
    pub fn remove_application(&self, id: &str) -> OperationDescriptor {
        application::remove_application(id, self.fragment(Mutation::RemoveApplication))
    }

    /// See [`crate::remove_protection`].
    pub fn remove_protection(&self, id: &str, application_id: &str) -> OperationDescriptor {
        protection::remove_protection(id, application_id, self.fragment(Mutation::RemoveProtection))
    }

    /// See [`crate::cancel_protection`].
    pub fn cancel_protection(&self, id: &str, application_id: &str) -> OperationDescriptor {
        protection::cancel_protection(id, application_id, self.fragment(Mutation::CancelProtection))
    }

    /// See [`crate::update_application`].
    pub fn update_application(&self, application: &Entity) -> OperationDescriptor {
        application::update_application(application, self.fragment(Mutation::UpdateApplication))
    }

    /// See [`crate::unlock_application`].
    pub fn unlock_application(&self, application: &Entity) -> OperationDescriptor {
        application::unlock_application(application, self.fragment(Mutation::UnlockApplication))
    }

    /// See [`crate::add_application_source`].
    pub fn add_application_source(
        &self,
        application_id: &str,
        data: impl Into<Value>,
    ) -> OperationDescriptor {
        source::add_application_source(
            application_id,
            data,
            self.fragment(Mutation::AddApplicationSource),
        )
    }

    /// See [`crate::update_application_source`].
    pub fn update_application_source(&self, source: &Entity) -> OperationDescriptor {
        source::update_application_source(source, self.fragment(Mutation::UpdateApplicationSource))
    }

    /// See [`crate::remove_source_from_application`].
    pub fn remove_source_from_application(
        &self,
        source_id: &str,
        application_id: &str,
    ) -> OperationDescriptor {
        source::remove_source_from_application(
            source_id,
            application_id,
            self.fragment(Mutation::RemoveSourceFromApplication),
        )
    }

    /// See [`crate::create_template`].
    pub fn create_template(&self, template: impl Into<Value>) -> OperationDescriptor {
        template::create_template(template, self.fragment(Mutation::CreateTemplate))
    }

    /// See [`crate::remove_template`].
    pub fn remove_template(&self, id: &str) -> OperationDescriptor {
        template::remove_template(id, self.fragment(Mutation::RemoveTemplate))
    }

    /// See [`crate::update_template`].
    pub fn update_template(&self, template: &Entity) -> OperationDescriptor {
        template::update_template(template, self.fragment(Mutation::UpdateTemplate))
    }

    /// See [`crate::create_application_protection`].
    pub fn create_application_protection(
        &self,
        application_id: &str,
        bail: bool,
    ) -> OperationDescriptor {
        protection::create_application_protection(
            application_id,
            bail,
            self.fragment(Mutation::CreateApplicationProtection),
        )
    }

    /// See [`crate::apply_template`].
    pub fn apply_template(&self, template_id: &str, app_id: &str) -> OperationDescriptor {
        template::apply_template(template_id, app_id, self.fragment(Mutation::ApplyTemplate))
    }
}
