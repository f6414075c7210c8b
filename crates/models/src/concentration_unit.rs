use sea_orm::{entity::prelude::*, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::FieldErrors, form::FormFields, lookup::Lookup};

pub const CODE_MAX_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "concentration_unit")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub concentration_code: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { match *self {} }
}

impl ActiveModelBehavior for ActiveModel {}

impl Lookup for Model {
    type Entity = Entity;
    type Key = String;

    const NAME: &'static str = "ConcentrationUnit";
    const SET_NAME: &'static str = "ConcentrationUnits";
    const FIELDS: &'static [&'static str] = &["ConcentrationCode"];
    const KEY_FIELD: &'static str = "ConcentrationCode";

    fn key(&self) -> String { self.concentration_code.clone() }

    fn key_from(fields: &FormFields) -> Option<String> {
        fields.text(Self::KEY_FIELD).map(str::to_string)
    }

    fn bind(fields: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let concentration_code = fields.required(Self::KEY_FIELD, CODE_MAX_LEN, &mut errors);
        errors.into_result(Model { concentration_code })
    }

    fn to_insert(&self) -> ActiveModel {
        ActiveModel { concentration_code: Set(self.concentration_code.clone()) }
    }

    // Key-only record: nothing besides the key to write.
    fn to_update(&self) -> ActiveModel {
        ActiveModel { concentration_code: ActiveValue::Unchanged(self.concentration_code.clone()) }
    }
}
