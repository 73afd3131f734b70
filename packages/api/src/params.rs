// ABOUTME: Lenient request parameter extractors for query strings and form bodies
// ABOUTME: Keeps the first value of repeated keys and reads urlencoded or multipart forms

use axum::{
    extract::{FromRequest, FromRequestParts, Multipart, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form,
};
use std::convert::Infallible;
use tracing::warn;

/// Raw request parameters in arrival order; lookups return the first value for a key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_owned(&self, key: &str) -> Option<String> {
        self.get(key).map(str::to_string)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<(String, String)>> for Params {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Params(pairs)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Params(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Query string parameters. An unreadable query yields no parameters.
#[derive(Debug, Default)]
pub struct QueryParams(pub Params);

impl<S> FromRequestParts<S> for QueryParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<Vec<(String, String)>>::from_request_parts(parts, state).await {
            Ok(Query(pairs)) => Ok(QueryParams(pairs.into())),
            Err(rejection) => {
                warn!("Unreadable query string: {}", rejection);
                Ok(QueryParams::default())
            }
        }
    }
}

/// Form body parameters from `application/x-www-form-urlencoded` or
/// `multipart/form-data`. File parts are skipped; an unreadable body yields no parameters.
#[derive(Debug, Default)]
pub struct FormParams(pub Params);

impl<S> FromRequest<S> for FormParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let result = if is_multipart(&req) {
            read_multipart(req, state).await
        } else {
            Form::<Vec<(String, String)>>::from_request(req, state)
                .await
                .map(|Form(pairs)| pairs)
                .map_err(|e| e.to_string())
        };

        match result {
            Ok(pairs) => Ok(FormParams(pairs.into())),
            Err(e) => {
                warn!("Unreadable form body: {}", e);
                Ok(FormParams::default())
            }
        }
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.starts_with("multipart/form-data"))
}

async fn read_multipart<S>(req: Request, state: &S) -> Result<Vec<(String, String)>, String>
where
    S: Send + Sync,
{
    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| e.to_string())?;

    let mut pairs = Vec::new();
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };
        if field.file_name().is_some() {
            continue;
        }
        let value = field.text().await.map_err(|e| e.to_string())?;
        pairs.push((name, value));
    }

    Ok(pairs)
}
