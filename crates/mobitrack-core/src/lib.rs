//! # Mobitrack Core
//!
//! Core types, traits, and error definitions for the Mobitrack datastore.
//! This crate provides the foundational abstractions used by the
//! data-access layer: the error taxonomy, validation guards, pagination
//! types, and the domain entities themselves.

pub mod domain;
pub mod error;
pub mod ids;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod traits;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use ids::new_record_id;
pub use pagination::*;
pub use result::*;
pub use traits::*;
