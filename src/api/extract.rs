//! Request extractors that fail with the unified error body.

use axum::Json;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON body extractor whose rejection is an [`AppError`].
///
/// A malformed or missing body produces the same `{code, message}` envelope
/// as every other failure instead of axum's plain-text rejection.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;

    fn json_request(body: &'static str) -> Request {
        Request::builder()
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_extracted() {
        let result = ApiJson::<serde_json::Value>::from_request(json_request(r#"{"a":1}"#), &())
            .await
            .unwrap();
        assert_eq!(result.0["a"], 1);
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_bad_request() {
        let result = ApiJson::<serde_json::Value>::from_request(json_request("{not json"), &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }
}
