//! Per-entity configuration for the generic lookup-table handler.
//!
//! Each lookup table is a flat record with a natural (or store-generated)
//! key. Implementing [`Lookup`] on an entity's `Model` tells the generic
//! repository and HTTP layer everything they need: display names, the
//! bindable field allow-list, how to read the key, how to bind and validate
//! a submitted candidate, and how to turn a record into the active model
//! used for insert and for update.

use std::fmt::{Debug, Display};

use sea_orm::{EntityTrait, PrimaryKeyTrait};
use serde::{de::DeserializeOwned, Serialize};

use crate::{errors::FieldErrors, form::FormFields};

pub type ActiveModelOf<T> = <<T as Lookup>::Entity as EntityTrait>::ActiveModel;

pub type PrimaryKeyValueOf<T> =
    <<<T as Lookup>::Entity as EntityTrait>::PrimaryKey as PrimaryKeyTrait>::ValueType;

pub trait Lookup: Clone + Debug + PartialEq + Serialize + Send + Sync + Sized + 'static {
    type Entity: EntityTrait<Model = Self>;

    /// Route/primary key value. Immutable once the record exists.
    type Key: Clone
        + Debug
        + Display
        + PartialEq
        + DeserializeOwned
        + Send
        + Sync
        + Into<PrimaryKeyValueOf<Self>>
        + 'static;

    /// Route segment and display name, e.g. `Country`.
    const NAME: &'static str;
    /// Plural name of the table as an entity set, e.g. `Countries`.
    const SET_NAME: &'static str;
    /// Field names a create/update request may set. Anything else is dropped.
    const FIELDS: &'static [&'static str];
    /// Field that carries the key in a submitted form.
    const KEY_FIELD: &'static str;

    fn key(&self) -> Self::Key;

    /// Key carried in a submitted form, if present and well-formed.
    fn key_from(fields: &FormFields) -> Option<Self::Key>;

    /// Bind a candidate record and run the required-field/shape checks.
    fn bind(fields: &FormFields) -> Result<Self, FieldErrors>;

    /// Active model for an insert. Store-generated keys are left unset.
    fn to_insert(&self) -> ActiveModelOf<Self>;

    /// Active model for a full replace of the non-key attributes; the key
    /// only selects the row.
    fn to_update(&self) -> ActiveModelOf<Self>;
}
