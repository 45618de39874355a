//! Custom Axum extractors
//!
//! Each rejects with [`ApiError`] so extraction failures use the same JSON
//! envelope as handler failures.

use std::convert::Infallible;

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Query, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::{Pagination, PaginationParams};

/// Extract an integer id from the path.
///
/// A non-integer segment means no route matched, so it is a 404.
pub struct PathId(pub i64);

impl<S> FromRequestParts<S> for PathId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::not_found("route", parts.uri.path()))?;

        let id = raw
            .parse()
            .map_err(|_| ApiError::not_found("route", parts.uri.path()))?;
        Ok(Self(id))
    }
}

/// Extract the `page` query parameter, defaulting to page 1.
pub struct PageQuery(pub Pagination);

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let params = Query::<PaginationParams>::try_from_uri(&parts.uri)
            .map(|Query(params)| params)
            .unwrap_or_default();
        Ok(Self(Pagination::from(params)))
    }
}

/// JSON body whose rejections render through [`ApiError`].
///
/// Syntax errors and a missing content type are 400; a body that parses but
/// has the wrong shape is 422.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(JsonRejection::JsonDataError(e)) => Err(ApiError::Unprocessable {
                reason: e.body_text(),
            }),
            Err(e) => Err(ApiError::BadRequest {
                reason: e.body_text(),
            }),
        }
    }
}
