//! Generic CRUD handling for lookup tables.
//!
//! One [`service::LookupService`] is instantiated per entity type; the
//! entity-specific parts come from [`models::Lookup`], persistence goes
//! through a [`repository::LookupRepository`].

pub mod repository;
pub mod service;

pub use repository::{LookupRepository, SeaOrmLookupRepository};
pub use service::LookupService;
