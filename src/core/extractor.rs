use axum::{
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;

/// JSON body extractor that never rejects. A missing, unreadable, or
/// malformed body degrades to `T::default()`; per-field fallbacks are then
/// the handler's concern.
pub struct LenientJson<T>(pub T);

impl<T, S> FromRequest<S> for LenientJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = match Bytes::from_request(req, state).await {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!("Failed to read request body: {}", e);
                return Ok(Self(T::default()));
            }
        };

        if bytes.is_empty() {
            return Ok(Self(T::default()));
        }

        match serde_json::from_slice(&bytes) {
            Ok(value) => Ok(Self(value)),
            Err(e) => {
                tracing::debug!("Request body is not valid JSON, using defaults: {}", e);
                Ok(Self(T::default()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Payload {
        name: Option<String>,
    }

    async fn extract(body: &'static str) -> Payload {
        let req = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();
        let LenientJson(value) = LenientJson::<Payload>::from_request(req, &())
            .await
            .unwrap();
        value
    }

    #[tokio::test]
    async fn parses_valid_json() {
        let payload = extract(r#"{"name": "zaphod"}"#).await;
        assert_eq!(payload.name.as_deref(), Some("zaphod"));
    }

    #[tokio::test]
    async fn malformed_json_falls_back_to_default() {
        let payload = extract("{not json at all").await;
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn empty_body_falls_back_to_default() {
        let payload = extract("").await;
        assert_eq!(payload, Payload::default());
    }

    #[tokio::test]
    async fn unknown_fields_are_ignored() {
        let payload = extract(r#"{"name": "trillian", "extra": 42}"#).await;
        assert_eq!(payload.name.as_deref(), Some("trillian"));
    }
}
