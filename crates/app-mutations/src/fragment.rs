//! Result-selection fragments.
//!
//! A fragment is the raw selection-set text placed inside the mutation's
//! field. It is injected verbatim; nothing here parses or validates it.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Default fragment for each operation, indexed by builder.
pub mod defaults {
    /// `createApplication`.
    pub const CREATE_APPLICATION: &str = "\n  _id,\n  createdAt,\n  name\n";
    /// `duplicateApplication`.
    pub const DUPLICATE_APPLICATION: &str = "\n  _id\n";
    /// `removeApplication`.
    pub const REMOVE_APPLICATION: &str = "\n  _id\n";
    /// `removeProtection`.
    pub const REMOVE_PROTECTION: &str = "\n  _id\n";
    /// `cancelProtection`.
    pub const CANCEL_PROTECTION: &str = "\n  _id\n";
    /// `updateApplication`.
    pub const UPDATE_APPLICATION: &str = "\n  _id,\n  createdAt,\n  name\n";
    /// `unlockApplication`.
    pub const UNLOCK_APPLICATION: &str = "\n  _id,\n  createdAt,\n  name\n";
    /// `addApplicationSource`.
    pub const ADD_APPLICATION_SOURCE: &str = "\n  _id,\n  filename,\n  extension\n";
    /// `updateApplicationSource`.
    pub const UPDATE_APPLICATION_SOURCE: &str = "\n  _id,\n  filename,\n  extension\n";
    /// `removeSourceFromApplication`. Empty: the caller picks the selection.
    pub const REMOVE_SOURCE_FROM_APPLICATION: &str = "\n";
    /// `createTemplate`.
    pub const CREATE_TEMPLATE: &str = "\n  _id,\n  name,\n  description,\n  parameters\n";
    /// `removeTemplate`.
    pub const REMOVE_TEMPLATE: &str = "\n  _id\n";
    /// `updateTemplate`.
    pub const UPDATE_TEMPLATE: &str = "\n  _id,\n  parameters\n";
    /// `createApplicationProtection`.
    pub const CREATE_APPLICATION_PROTECTION: &str = "\n  _id,\n  state\n";
    /// `applyTemplate`.
    pub const APPLY_TEMPLATE: &str = "\n  _id,\n  parameters\n";
}

/// Selection-set text injected into a mutation document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(Cow<'static, str>);

impl Fragment {
    /// Create a fragment from owned or borrowed text.
    #[must_use]
    pub fn new(text: impl Into<Cow<'static, str>>) -> Self {
        Self(text.into())
    }

    /// Create a fragment from a static string without allocating.
    #[must_use]
    pub const fn from_static(text: &'static str) -> Self {
        Self(Cow::Borrowed(text))
    }

    /// Pick the caller's fragment when present, otherwise the default.
    #[must_use]
    pub fn or_default(custom: Option<&str>, default: &'static str) -> Self {
        custom.map_or_else(
            || Self::from_static(default),
            |text| Self::new(text.to_owned()),
        )
    }

    /// Return the fragment text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fragment {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

impl From<&'static str> for Fragment {
    fn from(text: &'static str) -> Self {
        Self::from_static(text)
    }
}

impl AsRef<str> for Fragment {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
