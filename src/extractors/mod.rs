//! Request extractors shared by the handlers.

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures::future::LocalBoxFuture;
use serde::de::DeserializeOwned;

use crate::errors::ApiError;

/// Named request parameters, read from a JSON body or, when the body is
/// empty, from the query string.
///
/// A request with neither yields every field as absent, so validation can
/// report which one is missing. Anything unparseable becomes
/// `ApiError::MalformedRequest`.
pub struct RequestParams<T>(pub T);

impl<T> RequestParams<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for RequestParams<T>
where
    T: DeserializeOwned + 'static,
{
    type Error = ApiError;
    type Future = LocalBoxFuture<'static, Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let query = req.query_string().to_owned();
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move {
            let body = body.await.map_err(|e| ApiError::MalformedRequest {
                detail: e.to_string(),
            })?;
            parse_params(&body, &query).map(RequestParams)
        })
    }
}

fn parse_params<T: DeserializeOwned>(body: &[u8], query: &str) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return web::Query::<T>::from_query(query)
            .map(web::Query::into_inner)
            .map_err(|e| ApiError::MalformedRequest {
                detail: e.to_string(),
            });
    }

    serde_json::from_slice(body).map_err(|e| ApiError::MalformedRequest {
        detail: e.to_string(),
    })
}
