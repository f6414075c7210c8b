use anyhow::Result;
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait};

use super::setup_test_db;
use crate::form::FormFields;
use crate::lookup::Lookup;
use crate::{concentration_unit, country, diagnosis_category, medication_type};

#[tokio::test]
async fn country_insert_update_delete() -> Result<()> {
    let db = setup_test_db().await?;

    let us = country::Model {
        country_code: "US".into(),
        name: "United States".into(),
        postal_pattern: Some(r"\d{5}".into()),
        phone_pattern: Some(r"\d{10}".into()),
        federal_sales_tax: 0.0,
    };
    let created = us.to_insert().insert(&db).await?;
    assert_eq!(created, us);

    let mut renamed = us.clone();
    renamed.name = "United States of America".into();
    renamed.postal_pattern = None;
    let updated = renamed.to_update().update(&db).await?;
    assert_eq!(updated, renamed);

    let found = country::Entity::find_by_id("US".to_string()).one(&db).await?;
    assert_eq!(found, Some(renamed));

    country::Entity::delete_by_id("US".to_string()).exec(&db).await?;
    assert_eq!(country::Entity::find().count(&db).await?, 0);
    Ok(())
}

#[tokio::test]
async fn generated_keys_ignore_submitted_id() -> Result<()> {
    let db = setup_test_db().await?;

    let fields = FormFields::project([("Id", "999"), ("Name", "Oncology")], diagnosis_category::Model::FIELDS);
    let candidate = diagnosis_category::Model::bind(&fields).unwrap();
    let first = candidate.to_insert().insert(&db).await?;
    let second = diagnosis_category::Model { id: 0, name: "Neurology".into() }.to_insert().insert(&db).await?;

    assert_ne!(first.id, 999);
    assert_ne!(first.id, second.id);
    assert_eq!(first.name, "Oncology");

    let m = medication_type::Model { medication_type_id: 0, name: "Capsule".into() }.to_insert().insert(&db).await?;
    assert!(m.medication_type_id > 0);
    Ok(())
}

#[tokio::test]
async fn update_of_missing_row_is_not_applied() -> Result<()> {
    let db = setup_test_db().await?;
    let ghost = diagnosis_category::Model { id: 42, name: "Ghost".into() };
    let err = ghost.to_update().update(&db).await.unwrap_err();
    assert!(matches!(err, sea_orm::DbErr::RecordNotUpdated), "unexpected error: {err}");
    Ok(())
}

#[tokio::test]
async fn key_only_update_changes_nothing() -> Result<()> {
    let db = setup_test_db().await?;
    let mg = concentration_unit::Model { concentration_code: "mg/mL".into() };
    mg.to_insert().insert(&db).await?;
    assert!(!mg.to_update().is_changed());
    Ok(())
}
