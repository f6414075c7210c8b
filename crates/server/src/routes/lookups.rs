//! The route set every lookup table gets.
//!
//! Handlers are generic over the entity; `lookup_router` mounts them under
//! `/{Entity}` with a `LookupService` as state.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use models::{errors::FieldErrors, form::FormFields, Lookup};
use serde::Serialize;
use serde_json::Value;
use service::{errors::ServiceError, lookup::{LookupRepository, LookupService}};
use tracing::{info, warn};

use crate::{
    errors::JsonApiError,
    extract::Submission,
    views::{FormView, IndexView, RecordView},
};

type Svc<T, R> = State<Arc<LookupService<T, R>>>;

fn index_location<T: Lookup>() -> String {
    format!("/{}/Index", T::NAME)
}

fn form_view<T: Lookup>(action: &'static str, values: Value, errors: FieldErrors) -> FormView {
    FormView { entity: T::NAME, action, fields: T::FIELDS, values, errors }
}

fn record_view<T: Lookup>(action: &'static str, record: T) -> Json<RecordView<T>> {
    Json(RecordView { entity: T::NAME, action, record })
}

/// Values for a form view. A value that cannot be rendered is a server fault.
fn form_values<V: Serialize + ?Sized>(entity: &'static str, value: &V) -> Result<Value, JsonApiError> {
    serde_json::to_value(value).map_err(|e| {
        warn!(entity, error = %e, "form values could not be serialized");
        JsonApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "Serialization Error", Some(e.to_string()))
    })
}

/// Re-present a rejected submission with its errors, or map any other
/// failure onto a problem response.
fn rejected<T: Lookup>(action: &'static str, submitted: &FormFields, err: ServiceError) -> Response {
    match err {
        ServiceError::Validation(errors) => {
            let invalid: Vec<&str> = errors.fields().collect();
            info!(entity = T::NAME, action, ?invalid, "submission rejected");
            match form_values(T::NAME, submitted) {
                Ok(values) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, Json(form_view::<T>(action, values, errors))).into_response()
                }
                Err(e) => e.into_response(),
            }
        }
        other => JsonApiError::from(other).into_response(),
    }
}

pub async fn index<T, R>(State(svc): Svc<T, R>) -> Result<Json<IndexView<T>>, JsonApiError>
where
    T: Lookup,
    R: LookupRepository<T>,
{
    let items = svc.list().await?;
    Ok(Json(IndexView { entity: T::NAME, items }))
}

pub async fn details<T, R>(
    State(svc): Svc<T, R>,
    key: Option<Path<T::Key>>,
) -> Result<Json<RecordView<T>>, JsonApiError>
where
    T: Lookup,
    R: LookupRepository<T>,
{
    let record = svc.get(key.map(|Path(k)| k)).await?;
    Ok(record_view("Details", record))
}

pub async fn create_form<T: Lookup>() -> Json<FormView> {
    Json(form_view::<T>("Create", Value::Object(Default::default()), FieldErrors::new()))
}

pub async fn create<T, R>(State(svc): Svc<T, R>, Submission(raw): Submission) -> Response
where
    T: Lookup,
    R: LookupRepository<T>,
{
    let submitted = FormFields::project(raw, T::FIELDS);
    match svc.create(submitted.clone()).await {
        Ok(_) => Redirect::to(&index_location::<T>()).into_response(),
        Err(e) => rejected::<T>("Create", &submitted, e),
    }
}

pub async fn edit_form<T, R>(
    State(svc): Svc<T, R>,
    key: Option<Path<T::Key>>,
) -> Result<Json<FormView>, JsonApiError>
where
    T: Lookup,
    R: LookupRepository<T>,
{
    let record = svc.get(key.map(|Path(k)| k)).await?;
    let values = form_values(T::NAME, &record)?;
    Ok(Json(form_view::<T>("Edit", values, FieldErrors::new())))
}

pub async fn edit<T, R>(
    State(svc): Svc<T, R>,
    key: Option<Path<T::Key>>,
    Submission(raw): Submission,
) -> Response
where
    T: Lookup,
    R: LookupRepository<T>,
{
    let submitted = FormFields::project(raw, T::FIELDS);
    match svc.update(key.map(|Path(k)| k), submitted.clone()).await {
        Ok(_) => Redirect::to(&index_location::<T>()).into_response(),
        Err(e) => rejected::<T>("Edit", &submitted, e),
    }
}

pub async fn delete_confirm<T, R>(
    State(svc): Svc<T, R>,
    key: Option<Path<T::Key>>,
) -> Result<Json<RecordView<T>>, JsonApiError>
where
    T: Lookup,
    R: LookupRepository<T>,
{
    let record = svc.confirm_delete(key.map(|Path(k)| k)).await?;
    Ok(record_view("Delete", record))
}

pub async fn delete_confirmed<T, R>(
    State(svc): Svc<T, R>,
    key: Option<Path<T::Key>>,
) -> Result<Redirect, JsonApiError>
where
    T: Lookup,
    R: LookupRepository<T>,
{
    svc.delete(key.map(|Path(k)| k)).await?;
    Ok(Redirect::to(&index_location::<T>()))
}

/// Routes for one entity, rooted at `/{Entity}`.
pub fn lookup_router<T, R>(svc: Arc<LookupService<T, R>>) -> Router
where
    T: Lookup,
    R: LookupRepository<T> + 'static,
{
    let base = format!("/{}", T::NAME);
    Router::new()
        .route(&base, get(index::<T, R>))
        .route(&format!("{base}/Index"), get(index::<T, R>))
        .route(&format!("{base}/Details"), get(details::<T, R>))
        .route(&format!("{base}/Details/:key"), get(details::<T, R>))
        .route(&format!("{base}/Create"), get(create_form::<T>).post(create::<T, R>))
        .route(&format!("{base}/Edit"), get(edit_form::<T, R>).post(edit::<T, R>))
        .route(&format!("{base}/Edit/:key"), get(edit_form::<T, R>).post(edit::<T, R>))
        .route(&format!("{base}/Delete"), get(delete_confirm::<T, R>).post(delete_confirmed::<T, R>))
        .route(&format!("{base}/Delete/:key"), get(delete_confirm::<T, R>).post(delete_confirmed::<T, R>))
        .with_state(svc)
}
