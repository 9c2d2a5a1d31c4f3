//! JSON body extractor with the project's error semantics.
//!
//! A missing or malformed body field is a validation failure (400), not
//! axum's default 422, so handlers take `AppJson<T>` instead of `Json<T>`.

use axum::extract::{FromRequest, Request};
use axum::Json;

use lexcase_core::error::CoreError;

use crate::error::AppError;

/// `Json<T>` wrapper whose rejection is a 400 validation error.
pub struct AppJson<T>(pub T);

impl<S, T> FromRequest<S> for AppJson<T>
where
    S: Send + Sync,
    T: serde::de::DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(AppJson(value)),
            Err(rejection) => Err(AppError::Core(CoreError::Validation(rejection.body_text()))),
        }
    }
}
