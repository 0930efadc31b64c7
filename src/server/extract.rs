use super::types::ValidationErrorResponse;
use axum::{
    async_trait,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use tracing::debug;

/// `Json` extractor whose rejections are JSON `{"detail": ...}` bodies.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = (StatusCode, Json<ValidationErrorResponse>);

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!("Rejected request body: {}", rejection.body_text());
                Err((
                    rejection.status(),
                    Json(ValidationErrorResponse {
                        detail: rejection.body_text(),
                    }),
                ))
            }
        }
    }
}
