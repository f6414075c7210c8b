//! JSON view-models returned by the lookup routes.

use models::errors::FieldErrors;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct IndexView<T> {
    pub entity: &'static str,
    pub items: Vec<T>,
}

/// A single record, for `Details` and the `Delete` confirmation.
#[derive(Debug, Serialize)]
pub struct RecordView<T> {
    pub entity: &'static str,
    pub action: &'static str,
    pub record: T,
}

/// Create/Edit form: the bindable fields, current values, and any errors
/// from the last submission.
#[derive(Debug, Serialize)]
pub struct FormView {
    pub entity: &'static str,
    pub action: &'static str,
    pub fields: &'static [&'static str],
    pub values: Value,
    pub errors: FieldErrors,
}
