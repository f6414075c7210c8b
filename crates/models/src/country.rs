use sea_orm::{entity::prelude::*, ActiveValue, Set};
use serde::{Deserialize, Serialize};

use crate::{errors::FieldErrors, form::FormFields, lookup::Lookup};

pub const CODE_MAX_LEN: usize = 10;
pub const NAME_MAX_LEN: usize = 50;
pub const PATTERN_MAX_LEN: usize = 50;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "country")]
#[serde(rename_all = "PascalCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub country_code: String,
    pub name: String,
    pub postal_pattern: Option<String>,
    pub phone_pattern: Option<String>,
    pub federal_sales_tax: f64,
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

    const NAME: &'static str = "Country";
    const SET_NAME: &'static str = "Countries";
    const FIELDS: &'static [&'static str] = &["CountryCode", "Name", "PostalPattern", "PhonePattern", "FederalSalesTax"];
    const KEY_FIELD: &'static str = "CountryCode";

    fn key(&self) -> String { self.country_code.clone() }

    fn key_from(fields: &FormFields) -> Option<String> {
        fields.text(Self::KEY_FIELD).map(str::to_string)
    }

    fn bind(fields: &FormFields) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();
        let country_code = fields.required("CountryCode", CODE_MAX_LEN, &mut errors);
        let name = fields.required("Name", NAME_MAX_LEN, &mut errors);
        let postal_pattern = fields.optional("PostalPattern", PATTERN_MAX_LEN, &mut errors);
        let phone_pattern = fields.optional("PhonePattern", PATTERN_MAX_LEN, &mut errors);
        let federal_sales_tax = match fields.number::<f64>("FederalSalesTax", &mut errors) {
            Some(t) if !t.is_finite() => {
                errors.add("FederalSalesTax", "The field FederalSalesTax must be a finite number.");
                0.0
            }
            Some(t) => t,
            None => 0.0,
        };
        errors.into_result(Model { country_code, name, postal_pattern, phone_pattern, federal_sales_tax })
    }

    fn to_insert(&self) -> ActiveModel {
        ActiveModel {
            country_code: Set(self.country_code.clone()),
            name: Set(self.name.clone()),
            postal_pattern: Set(self.postal_pattern.clone()),
            phone_pattern: Set(self.phone_pattern.clone()),
            federal_sales_tax: Set(self.federal_sales_tax),
        }
    }

    fn to_update(&self) -> ActiveModel {
        ActiveModel {
            country_code: ActiveValue::Unchanged(self.country_code.clone()),
            ..self.to_insert()
        }
    }
}
