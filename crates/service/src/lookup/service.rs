use std::marker::PhantomData;
use std::sync::Arc;

use models::form::FormFields;
use models::Lookup;
use tracing::{debug, error, info, instrument, warn};

use crate::errors::ServiceError;
use crate::lookup::repository::LookupRepository;

/// CRUD handler for one lookup table.
///
/// Stateless apart from the repository handle: every call is an independent
/// request doing at most one read and one write. Keys arrive as `Option`
/// because a missing or unparsable route value is a normal not-found case.
pub struct LookupService<T: Lookup, R: LookupRepository<T>> {
    repo: Arc<R>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Lookup, R: LookupRepository<T>> LookupService<T, R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo, _marker: PhantomData } }

    #[instrument(skip(self), fields(entity = T::NAME))]
    pub async fn list(&self) -> Result<Vec<T>, ServiceError> {
        let rows = self.repo.list().await?;
        debug!(count = rows.len(), "listed records");
        Ok(rows)
    }

    #[instrument(skip(self), fields(entity = T::NAME))]
    pub async fn get(&self, key: Option<T::Key>) -> Result<T, ServiceError> {
        let Some(key) = key else { return Err(ServiceError::not_found(T::NAME)) };
        self.repo.find(&key).await?.ok_or_else(|| ServiceError::not_found(T::NAME))
    }

    /// Bind and validate the allow-listed fields, then insert.
    #[instrument(skip(self, submitted), fields(entity = T::NAME))]
    pub async fn create(&self, submitted: FormFields) -> Result<T, ServiceError> {
        let candidate = T::bind(&submitted).map_err(ServiceError::Validation)?;
        let created = self.repo.insert(&candidate).await?;
        info!(key = %created.key(), "record created");
        Ok(created)
    }

    /// Full replace of the non-key attributes of the record at `key`.
    ///
    /// The submitted key must match `key`; a mismatch is a routing problem and
    /// reported as not found before any validation happens. A conflicting
    /// write is not found when the record has gone, fatal otherwise.
    #[instrument(skip(self, submitted), fields(entity = T::NAME))]
    pub async fn update(&self, key: Option<T::Key>, submitted: FormFields) -> Result<T, ServiceError> {
        let key = match (key, T::key_from(&submitted)) {
            (Some(path), Some(body)) if path == body => path,
            (path, body) => {
                warn!(?path, ?body, "route key does not match submitted key");
                return Err(ServiceError::not_found(T::NAME));
            }
        };
        let candidate = T::bind(&submitted).map_err(ServiceError::Validation)?;
        match self.repo.update(&candidate).await {
            Ok(updated) => {
                info!(key = %key, "record updated");
                Ok(updated)
            }
            Err(ServiceError::Conflict(msg)) => {
                if self.exists(&key).await? {
                    error!(key = %key, "concurrent modification of an existing record");
                    Err(ServiceError::Conflict(msg))
                } else {
                    info!(key = %key, "record removed before update was applied");
                    Err(ServiceError::not_found(T::NAME))
                }
            }
            Err(e) => Err(e),
        }
    }

    /// First step of a delete: show what would be removed.
    pub async fn confirm_delete(&self, key: Option<T::Key>) -> Result<T, ServiceError> {
        self.get(key).await
    }

    /// Second step of a delete. Removing a record that is already gone is a
    /// no-op; the result says whether anything was removed.
    #[instrument(skip(self), fields(entity = T::NAME))]
    pub async fn delete(&self, key: Option<T::Key>) -> Result<bool, ServiceError> {
        if !self.repo.has_table().await? {
            error!(set = T::SET_NAME, "lookup table unavailable");
            return Err(ServiceError::entity_set_missing(T::SET_NAME));
        }
        let Some(key) = key else { return Ok(false) };
        match self.repo.find(&key).await? {
            Some(_) => {
                let removed = self.repo.remove(&key).await?;
                info!(key = %key, removed, "record deleted");
                Ok(removed)
            }
            None => {
                debug!(key = %key, "record already absent");
                Ok(false)
            }
        }
    }

    pub async fn exists(&self, key: &T::Key) -> Result<bool, ServiceError> {
        self.repo.exists(key).await
    }
}
