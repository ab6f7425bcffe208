//! Application mutations - GraphQL operation descriptors for the application service.
//!
//! This crate provides:
//! - One builder per mutation, each returning an [`OperationDescriptor`]
//!   (`{ query, params }`) ready to hand to any GraphQL transport.
//! - Per-operation default result fragments, overridable per call or through
//!   a [`FragmentConfig`] table.
//! - A [`Mutation`] catalogue naming every operation.
//!
//! Builders never perform I/O and never fail. Update-style builders borrow
//! the caller's [`Entity`] and copy it without its `_id` field.
//!
//! ```
//! use app_mutations::{Entity, update_application};
//! use serde_json::json;
//!
//! let application = Entity::try_from(json!({ "_id": "A1", "name": "n" })).unwrap();
//! let descriptor = update_application(&application, None);
//!
//! assert_eq!(descriptor.param("applicationId"), Some(&json!("A1")));
//! assert_eq!(descriptor.param("data"), Some(&json!({ "name": "n" })));
//! assert!(application.contains_key("_id"));
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

mod application;
mod config;
mod entity;
mod error;
pub mod fragment;
mod mutation;
mod operation;
mod protection;
mod source;
mod template;

pub use application::{
    create_application, duplicate_application, remove_application, unlock_application,
    update_application,
};
pub use config::{FragmentConfig, MutationSet};
pub use entity::{Entity, ID_FIELD, IdSplit};
pub use error::{MutationError, MutationResult};
pub use fragment::Fragment;
pub use mutation::Mutation;
pub use operation::{GraphqlQuery, GraphqlRequest, OperationDescriptor};
pub use protection::{cancel_protection, create_application_protection, remove_protection};
pub use source::{
    add_application_source, remove_source_from_application, update_application_source,
};
pub use template::{apply_template, create_template, remove_template, update_template};
