//! Request-body extraction for create/edit submissions.

use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde_json::{Map, Value};

/// Raw name/value pairs of a submitted record, from either an urlencoded
/// form or a flat JSON object. Not yet narrowed to any allow-list.
#[derive(Debug, Default)]
pub struct Submission(pub Vec<(String, String)>);

#[async_trait]
impl<S> FromRequest<S> for Submission
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/json"));

        if is_json {
            let Json(body) = Json::<Map<String, Value>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            let pairs = body
                .into_iter()
                .filter_map(|(name, value)| scalar_text(value).map(|text| (name, text)))
                .collect();
            Ok(Submission(pairs))
        } else {
            let Form(pairs) = Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            Ok(Submission(pairs))
        }
    }
}

/// Form-equivalent text of a JSON scalar; nulls and nested values bind nothing.
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_scalars_become_text() {
        assert_eq!(scalar_text(json!("US")), Some("US".to_string()));
        assert_eq!(scalar_text(json!(0.05)), Some("0.05".to_string()));
        assert_eq!(scalar_text(json!(7)), Some("7".to_string()));
        assert_eq!(scalar_text(json!(true)), Some("true".to_string()));
        assert_eq!(scalar_text(json!(null)), None);
        assert_eq!(scalar_text(json!({"nested": 1})), None);
    }
}
