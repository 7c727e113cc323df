//! # Mobitrack Datastore
//!
//! Data-access layer for admin and organization records in a managed
//! key-value/document store:
//!
//! ```text
//! Caller
//!   ↓ validation guards (fail fast, before any round trip)
//! AdminDao / OrganizationDao     ← entity semantics, integrity checks
//!   ↓ GenericDao<T>              ← type-agnostic table adapter
//!   ↓ Arc<dyn DocumentStore>     ← store seam
//! MemoryStore / managed store
//! ```
//!
//! ## Structure
//!
//! ```text
//! src/
//!   store/
//!     mod.rs            ← DocumentStore trait, TableSpec, IndexSpec
//!     memory.rs         ← MemoryStore
//!   generic.rs          ← GenericDao<T>
//!   pages.rs            ← QueryPages<T> lazy page cursor
//!   admin_dao.rs        ← AdminDao
//!   organization_dao.rs ← OrganizationDao
//!   config.rs           ← DatastoreConfig
//! ```

pub mod admin_dao;
pub mod config;
pub mod generic;
pub mod organization_dao;
pub mod pages;
pub mod store;

pub use admin_dao::AdminDao;
pub use config::DatastoreConfig;
pub use generic::GenericDao;
pub use organization_dao::OrganizationDao;
pub use pages::QueryPages;
pub use store::{Document, DocumentPage, DocumentStore, IndexSpec, MemoryStore, TableSpec};
