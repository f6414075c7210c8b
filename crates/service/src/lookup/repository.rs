use std::marker::PhantomData;

use async_trait::async_trait;
use migration::SchemaManager;
use models::errors::FieldErrors;
use models::lookup::{ActiveModelOf, Lookup};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityName, EntityTrait,
    FromQueryResult, IntoActiveModel, PaginatorTrait, SqlErr,
};

use crate::errors::ServiceError;

/// Persistence for a single lookup table.
#[async_trait]
pub trait LookupRepository<T: Lookup>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, ServiceError>;
    async fn find(&self, key: &T::Key) -> Result<Option<T>, ServiceError>;
    async fn insert(&self, record: &T) -> Result<T, ServiceError>;
    /// Replace the non-key attributes of `record`. A row that could not be
    /// updated is reported as [`ServiceError::Conflict`].
    async fn update(&self, record: &T) -> Result<T, ServiceError>;
    /// Returns whether a row was removed.
    async fn remove(&self, key: &T::Key) -> Result<bool, ServiceError>;
    async fn exists(&self, key: &T::Key) -> Result<bool, ServiceError>;
    /// Whether the backing table is present at all.
    async fn has_table(&self) -> Result<bool, ServiceError>;
}

/// SeaORM-backed repository implementation, one per entity type.
pub struct SeaOrmLookupRepository<T> {
    pub db: DatabaseConnection,
    _marker: PhantomData<fn() -> T>,
}

impl<T> SeaOrmLookupRepository<T> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db, _marker: PhantomData }
    }
}

#[async_trait]
impl<T> LookupRepository<T> for SeaOrmLookupRepository<T>
where
    T: Lookup + FromQueryResult + IntoActiveModel<ActiveModelOf<T>>,
    ActiveModelOf<T>: ActiveModelTrait<Entity = T::Entity> + ActiveModelBehavior + Send + Sync,
{
    async fn list(&self) -> Result<Vec<T>, ServiceError> {
        Ok(T::Entity::find().all(&self.db).await?)
    }

    async fn find(&self, key: &T::Key) -> Result<Option<T>, ServiceError> {
        Ok(T::Entity::find_by_id(key.clone()).one(&self.db).await?)
    }

    async fn insert(&self, record: &T) -> Result<T, ServiceError> {
        record.to_insert().insert(&self.db).await.map_err(|e| match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                let mut errors = FieldErrors::new();
                errors.add(T::KEY_FIELD, format!("A {} with this {} already exists.", T::NAME, T::KEY_FIELD));
                ServiceError::Validation(errors)
            }
            _ => e.into(),
        })
    }

    async fn update(&self, record: &T) -> Result<T, ServiceError> {
        let am = record.to_update();
        if !am.is_changed() {
            // key-only record: no UPDATE to issue, the row just has to be there
            return self
                .find(&record.key())
                .await?
                .ok_or_else(|| ServiceError::conflict(T::NAME, record.key()));
        }
        am.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => ServiceError::conflict(T::NAME, record.key()),
            other => other.into(),
        })
    }

    async fn remove(&self, key: &T::Key) -> Result<bool, ServiceError> {
        let res = T::Entity::delete_by_id(key.clone()).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    async fn exists(&self, key: &T::Key) -> Result<bool, ServiceError> {
        let n = T::Entity::find_by_id(key.clone()).count(&self.db).await?;
        Ok(n > 0)
    }

    async fn has_table(&self) -> Result<bool, ServiceError> {
        let table = T::Entity::default().table_name().to_string();
        Ok(SchemaManager::new(&self.db).has_table(table).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{get_db, get_unmigrated_db};
    use models::{concentration_unit, country, diagnosis_category};

    fn canada() -> country::Model {
        country::Model {
            country_code: "CA".into(),
            name: "Canada".into(),
            postal_pattern: Some(r"[A-Z]\d[A-Z] \d[A-Z]\d".into()),
            phone_pattern: None,
            federal_sales_tax: 0.05,
        }
    }

    #[tokio::test]
    async fn seaorm_repository_round_trip() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmLookupRepository::<country::Model>::new(db);

        assert!(repo.has_table().await?);
        let created = repo.insert(&canada()).await?;
        assert_eq!(created, canada());
        assert!(repo.exists(&"CA".to_string()).await?);
        assert_eq!(repo.list().await?, vec![canada()]);

        let mut changed = canada();
        changed.federal_sales_tax = 0.07;
        assert_eq!(repo.update(&changed).await?, changed);
        assert_eq!(repo.find(&"CA".to_string()).await?, Some(changed));

        assert!(repo.remove(&"CA".to_string()).await?);
        assert!(!repo.remove(&"CA".to_string()).await?);
        assert!(!repo.exists(&"CA".to_string()).await?);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_key_is_a_validation_error() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let repo = SeaOrmLookupRepository::<country::Model>::new(db);
        repo.insert(&canada()).await?;

        match repo.insert(&canada()).await {
            Err(ServiceError::Validation(errors)) => {
                assert_eq!(errors.get("CountryCode"), ["A Country with this CountryCode already exists."]);
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn update_of_vanished_row_is_a_conflict() -> Result<(), anyhow::Error> {
        let db = get_db().await?;
        let categories = SeaOrmLookupRepository::<diagnosis_category::Model>::new(db.clone());
        let ghost = diagnosis_category::Model { id: 404, name: "Ghost".into() };
        assert!(matches!(categories.update(&ghost).await, Err(ServiceError::Conflict(_))));

        let units = SeaOrmLookupRepository::<concentration_unit::Model>::new(db);
        let unit = concentration_unit::Model { concentration_code: "mg".into() };
        assert!(matches!(units.update(&unit).await, Err(ServiceError::Conflict(_))));
        units.insert(&unit).await?;
        assert_eq!(units.update(&unit).await?, unit);
        Ok(())
    }

    #[tokio::test]
    async fn missing_table_reported() -> Result<(), anyhow::Error> {
        let db = get_unmigrated_db().await?;
        let repo = SeaOrmLookupRepository::<country::Model>::new(db);
        assert!(!repo.has_table().await?);
        Ok(())
    }
}
