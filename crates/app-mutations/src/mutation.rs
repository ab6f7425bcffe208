//! Catalogue of the supported mutations.

use std::fmt;
use std::str::FromStr;

use crate::error::MutationError;
use crate::fragment::defaults;

/// Every mutation this crate can build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mutation {
    /// `createApplication`
    CreateApplication,
    /// `duplicateApplication`
    DuplicateApplication,
    /// `removeApplication`
    RemoveApplication,
    /// `removeProtection`
    RemoveProtection,
    /// `cancelProtection`
    CancelProtection,
    /// `updateApplication`
    UpdateApplication,
    /// `unlockApplication`
    UnlockApplication,
    /// `addApplicationSource`, sent as `addSourceToApplication`
    AddApplicationSource,
    /// `updateApplicationSource`
    UpdateApplicationSource,
    /// `removeSourceFromApplication`, sent as `removeSource`
    RemoveSourceFromApplication,
    /// `createTemplate`
    CreateTemplate,
    /// `removeTemplate`
    RemoveTemplate,
    /// `updateTemplate`
    UpdateTemplate,
    /// `createApplicationProtection`
    CreateApplicationProtection,
    /// `applyTemplate`
    ApplyTemplate,
}

impl Mutation {
    /// All mutations, in catalogue order.
    pub const ALL: [Self; 15] = [
        Self::CreateApplication,
        Self::DuplicateApplication,
        Self::RemoveApplication,
        Self::RemoveProtection,
        Self::CancelProtection,
        Self::UpdateApplication,
        Self::UnlockApplication,
        Self::AddApplicationSource,
        Self::UpdateApplicationSource,
        Self::RemoveSourceFromApplication,
        Self::CreateTemplate,
        Self::RemoveTemplate,
        Self::UpdateTemplate,
        Self::CreateApplicationProtection,
        Self::ApplyTemplate,
    ];

    /// Operation name written after the `mutation` keyword.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::AddApplicationSource => "addSourceToApplication",
            Self::RemoveSourceFromApplication => "removeSource",
            other => other.builder_name(),
        }
    }

    /// Public builder name.
    #[must_use]
    pub const fn builder_name(self) -> &'static str {
        match self {
            Self::CreateApplication => "createApplication",
            Self::DuplicateApplication => "duplicateApplication",
            Self::RemoveApplication => "removeApplication",
            Self::RemoveProtection => "removeProtection",
            Self::CancelProtection => "cancelProtection",
            Self::UpdateApplication => "updateApplication",
            Self::UnlockApplication => "unlockApplication",
            Self::AddApplicationSource => "addApplicationSource",
            Self::UpdateApplicationSource => "updateApplicationSource",
            Self::RemoveSourceFromApplication => "removeSourceFromApplication",
            Self::CreateTemplate => "createTemplate",
            Self::RemoveTemplate => "removeTemplate",
            Self::UpdateTemplate => "updateTemplate",
            Self::CreateApplicationProtection => "createApplicationProtection",
            Self::ApplyTemplate => "applyTemplate",
        }
    }

    /// Fragment used when the caller supplies none.
    #[must_use]
    pub const fn default_fragment(self) -> &'static str {
        match self {
            Self::CreateApplication => defaults::CREATE_APPLICATION,
            Self::DuplicateApplication => defaults::DUPLICATE_APPLICATION,
            Self::RemoveApplication => defaults::REMOVE_APPLICATION,
            Self::RemoveProtection => defaults::REMOVE_PROTECTION,
            Self::CancelProtection => defaults::CANCEL_PROTECTION,
            Self::UpdateApplication => defaults::UPDATE_APPLICATION,
            Self::UnlockApplication => defaults::UNLOCK_APPLICATION,
            Self::AddApplicationSource => defaults::ADD_APPLICATION_SOURCE,
            Self::UpdateApplicationSource => defaults::UPDATE_APPLICATION_SOURCE,
            Self::RemoveSourceFromApplication => defaults::REMOVE_SOURCE_FROM_APPLICATION,
            Self::CreateTemplate => defaults::CREATE_TEMPLATE,
            Self::RemoveTemplate => defaults::REMOVE_TEMPLATE,
            Self::UpdateTemplate => defaults::UPDATE_TEMPLATE,
            Self::CreateApplicationProtection => defaults::CREATE_APPLICATION_PROTECTION,
            Self::ApplyTemplate => defaults::APPLY_TEMPLATE,
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.builder_name())
    }
}

impl FromStr for Mutation {
    type Err = MutationError;

    /// Accepts either the builder name or the operation name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mutation| mutation.builder_name() == s || mutation.name() == s)
            .ok_or_else(|| MutationError::unknown(s))
    }
}
