use sea_orm::{entity::prelude::*, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::FieldErrors, form::FormFields, lookup::Lookup};

pub const NAME_MAX_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "diagnosis_category")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

impl Lookup for Model {
    type Entity = Entity;
    type Key = i32;

    const NAME: &'static str = "DiagnosisCategory";
    const SET_NAME: &'static str = "DiagnosisCategories";
    const FIELDS: &'static [&'static str] = &["Id", "Name"];
    const KEY_FIELD: &'static str = "Id";

    fn key(&self) -> i32 { self.id }

    fn key_from(fields: &FormFields) -> Option<i32> {
        fields.optional_number(Self::KEY_FIELD, &mut FieldErrors::new())
    }

    /// `Id` may be omitted on create; it is assigned by the store.
    fn bind(fields: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let id = fields.optional_number::<i32>(Self::KEY_FIELD, &mut errors).unwrap_or_default();
        let name = fields.required("Name", NAME_MAX_LEN, &mut errors);
        errors.into_result(Model { id, name })
    }

    fn to_insert(&self) -> ActiveModel {
        ActiveModel { id: ActiveValue::NotSet, name: Set(self.name.clone()) }
    }

    fn to_update(&self) -> ActiveModel {
        ActiveModel { id: ActiveValue::Unchanged(self.id), name: Set(self.name.clone()) }
    }
}
