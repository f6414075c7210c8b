//! Service layer: generic CRUD handling of the lookup tables on top of the
//! `models` entities.
//! - Persistence goes through a per-entity repository trait.
//! - Validation and field allow-lists come from `models`.

pub mod errors;
pub mod lookup;
#[cfg(test)]
pub mod test_support;
