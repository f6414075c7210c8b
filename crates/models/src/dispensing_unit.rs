use sea_orm::{entity::prelude::*, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::FieldErrors, form::FormFields, lookup::Lookup};

pub const CODE_MAX_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dispensing_unit")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dispensing_code: String,
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

    const NAME: &'static str = "DispensingUnit";
    const SET_NAME: &'static str = "DispensingUnits";
    const FIELDS: &'static [&'static str] = &["DispensingCode"];
    const KEY_FIELD: &'static str = "DispensingCode";

    fn key(&self) -> String { self.dispensing_code.clone() }

    fn key_from(fields: &FormFields) -> Option<String> {
        fields.text(Self::KEY_FIELD).map(str::to_string)
    }

    fn bind(fields: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let dispensing_code = fields.required(Self::KEY_FIELD, CODE_MAX_LEN, &mut errors);
        errors.into_result(Model { dispensing_code })
    }

    fn to_insert(&self) -> ActiveModel {
        ActiveModel { dispensing_code: Set(self.dispensing_code.clone()) }
    }

    fn to_update(&self) -> ActiveModel {
        ActiveModel { dispensing_code: ActiveValue::Unchanged(self.dispensing_code.clone()) }
    }
}
