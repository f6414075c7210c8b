//! Entities for the patient reference-data lookup tables, plus the
//! per-entity configuration ([`lookup::Lookup`]) and form projection used to
//! bind submitted values onto them.

pub mod errors;
pub mod db;
pub mod form;
pub mod lookup;
pub mod concentration_unit;
pub mod country;
pub mod diagnosis_category;
pub mod dispensing_unit;
pub mod medication_type;

pub use lookup::Lookup;

#[cfg(test)]
mod tests;
