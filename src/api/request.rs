use std::{borrow::Cow, fmt};

use anyhow::Context;
use serde::{de::DeserializeOwned, Serialize};

use crate::api::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single call against the API, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct Request<'a> {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub endpoint: Cow<'a, str>,
    /// Already URL-encoded query string, without the leading `?`.
    pub query: Option<String>,
    pub body: Option<serde_json::Value>,
    /// Sent after the default headers, replacing those with the same name.
    pub headers: Vec<(String, String)>,
}

impl<'a> Request<'a> {
    pub fn new(method: Method, endpoint: impl Into<Cow<'a, str>>) -> Self {
        Request {
            method,
            endpoint: endpoint.into(),
            query: None,
            body: None,
            headers: Vec::new(),
        }
    }

    pub fn get(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Request::new(Method::Get, endpoint)
    }

    pub fn post(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Request::new(Method::Post, endpoint)
    }

    pub fn put(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Request::new(Method::Put, endpoint)
    }

    pub fn patch(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Request::new(Method::Patch, endpoint)
    }

    pub fn delete(endpoint: impl Into<Cow<'a, str>>) -> Self {
        Request::new(Method::Delete, endpoint)
    }

    /// Serializes `body` as the JSON request body.
    pub fn body<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self> {
        let value = serde_json::to_value(body)
            .context("serializing request body")
            .map_err(|source| self.encode_error(source))?;
        self.body = Some(value);
        Ok(self)
    }

    /// Encodes `params` as the query string.
    ///
    /// Parameters keep the order of the struct fields or map entries of `params`.
    pub fn query<Q: Serialize>(mut self, params: &Q) -> Result<Self> {
        let query = serde_qs::to_string(&params)
            .map_err(|err| anyhow::anyhow!("{}", err))
            .context("serializing query parameters")
            .map_err(|source| self.encode_error(source))?;
        self.query = if query.is_empty() { None } else { Some(query) };
        Ok(self)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// The endpoint including the query string, as it is appended to the base URL.
    pub fn path_and_query(&self) -> String {
        match &self.query {
            Some(query) => format!("{}?{}", self.endpoint, query),
            None => self.endpoint.clone().into_owned(),
        }
    }

    fn encode_error(&self, source: anyhow::Error) -> Error {
        Error::Encode {
            endpoint: self.endpoint.clone().into_owned(),
            source,
        }
    }
}

/// The body of a successful response.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    /// Any response not declared as `application/json`, unmodified.
    Text(String),
}

impl Payload {
    /// What `204 No Content` resolves to.
    pub fn empty() -> Self {
        Payload::Json(serde_json::Value::Object(serde_json::Map::new()))
    }

    pub(crate) fn decode<T: DeserializeOwned>(self, endpoint: &str) -> Result<T> {
        let decoded = match self {
            Payload::Json(value) => {
                serde_json::from_value(value).context("deserializing json response failed")
            }
            Payload::Text(text) => serde_json::from_str(&text)
                .with_context(|| format!("deserializing text response failed:\n{}", text)),
        };
        decoded.map_err(|source| Error::Decode {
            endpoint: endpoint.to_owned(),
            source,
        })
    }

    pub fn into_text(self) -> String {
        match self {
            Payload::Json(value) => value.to_string(),
            Payload::Text(text) => text,
        }
    }
}

/// Sends [`Request`]s to the API.
///
/// Implementations classify every non-2xx response into an
/// [`ApiError`](crate::api::error::ApiError) and hold no per-call state, so a
/// single executor can serve concurrent calls.
pub trait Executor: Send + Sync {
    fn execute(&self, request: Request<'_>) -> Result<Payload>;
}

#[cfg(test)]
mod tests {
    use super::{Payload, Request};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Filter<'a> {
        project_id: &'a str,
        archived: bool,
    }

    #[test]
    fn query_keeps_field_order() {
        let request = Request::get("/audiences")
            .query(&Filter { project_id: "42", archived: false })
            .unwrap();
        assert_eq!(request.path_and_query(), "/audiences?project_id=42&archived=false");
    }

    #[test]
    fn query_values_are_url_encoded() {
        let request = Request::get("/pages")
            .query(&Filter { project_id: "a b&c", archived: true })
            .unwrap();
        let query = request.query.unwrap();
        assert!(query.starts_with("project_id=a"), "{}", query);
        assert!(!query.contains(' '), "{}", query);
        assert!(query.ends_with("&archived=true"), "{}", query);
    }

    #[test]
    fn query_keeps_json_map_order() {
        let request = Request::get("/x")
            .query(&serde_json::json!({ "project_id": 1, "archived": false, "page": 2 }))
            .unwrap();
        assert_eq!(request.path_and_query(), "/x?project_id=1&archived=false&page=2");
    }

    #[test]
    fn default_method_is_get() {
        assert_eq!(super::Method::default(), super::Method::Get);
    }

    #[test]
    fn empty_query_is_omitted() {
        let params: std::collections::BTreeMap<String, String> = Default::default();
        let request = Request::get("/projects").query(&params).unwrap();
        assert_eq!(request.query, None);
        assert_eq!(request.path_and_query(), "/projects");
    }

    #[test]
    fn no_content_is_an_empty_object() {
        assert_eq!(Payload::empty(), Payload::Json(serde_json::json!({})));
    }

    #[test]
    fn text_payload_is_returned_unmodified() {
        let csv = "variation,visitors\nOriginal,100\n".to_owned();
        assert_eq!(Payload::Text(csv.clone()).into_text(), csv);
    }
}
