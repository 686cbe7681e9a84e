use crate::handlers::MenuError;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, HeaderMap},
    Json,
};
use serde::de::DeserializeOwned;

/// JSON body extractor that reads a missing body, or one not sent as JSON,
/// as `T::default()`. Malformed or wrongly typed JSON is still rejected.
#[derive(Debug, Clone, Default)]
pub struct JsonOrEmpty<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for JsonOrEmpty<T>
where
    T: DeserializeOwned + Default + Send + 'static,
    S: Send + Sync,
{
    type Rejection = MenuError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Ok(Self(T::default()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| MenuError::InvalidPayload(e.body_text()))?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        Ok(Self(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|content_type| {
            let essence = content_type
                .split(';')
                .next()
                .unwrap_or_default()
                .trim()
                .to_ascii_lowercase();
            essence == "application/json"
                || (essence.starts_with("application/") && essence.ends_with("+json"))
        })
        .unwrap_or(false)
}
