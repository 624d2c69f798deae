use std::future;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use super::http::HttpClient;
use super::validator::{JsonSchemaValidator, Validator};
use crate::core::decode_json;
use crate::data::{RawResponse, Request};
use crate::error::{FetchError, Result};

/// Fetches a resource and turns its body into a typed value.
///
/// Each call issues exactly one request and yields exactly one outcome.
/// The loader keeps no state between calls, so it can be shared freely
/// across concurrent tasks.
#[derive(Debug, Clone)]
pub struct ResourceLoader<C, V = JsonSchemaValidator> {
    client:    C,
    validator: V,
}

impl<C: HttpClient> ResourceLoader<C> {
    /// Create a loader that validates schemas with [`JsonSchemaValidator`].
    pub fn new(client: C) -> Self {
        Self {
            client,
            validator: JsonSchemaValidator,
        }
    }
}

impl<C: HttpClient, V: Validator> ResourceLoader<C, V> {
    pub fn with_validator(client: C, validator: V) -> Self { Self { client, validator } }

    pub fn client(&self) -> &C { &self.client }

    pub fn validator(&self) -> &V { &self.validator }

    /// Fetch `url` and hand the raw body text to `transform`.
    ///
    /// A status outside `[200, 300)` or a transport failure is converted
    /// into the caller's error type through `From<FetchError>`. An error
    /// returned by `transform` itself is passed back untouched.
    pub async fn fetch<T, E, F>(&self, url: &str, transform: F) -> std::result::Result<T, E>
    where
        F: FnOnce(String) -> std::result::Result<T, E>,
        E: From<FetchError>,
    {
        let response = self.request(url).await?;
        transform(response.body)
    }

    /// Fetch `url`, optionally validate, decode it as JSON and transform it.
    ///
    /// Stages run in order and stop at the first failure:
    ///
    /// 1. request: [`FetchError::HttpStatus`] or [`FetchError::Transport`]
    /// 2. schema gate on the raw text, only when `schema` is `Some`
    /// 3. decode: [`FetchError::Decode`]
    /// 4. transform: `None` becomes [`FetchError::Transform`]
    ///
    /// # Non-termination
    ///
    /// When the document fails the schema gate the returned future never
    /// completes. Callers that need a bound must wrap the call in a timeout.
    pub async fn fetch_json<T, F>(&self, url: &str, transform: F, schema: Option<&V::Schema>) -> Result<T>
    where
        F: FnOnce(Value) -> Option<T>,
    {
        let response = self.request(url).await?;

        if let Some(schema) = schema
            && !self.validator.validate(&response.body, schema)
        {
            warn!(url = %url, "document failed schema validation, request will not settle");
            return future::pending().await;
        }

        let value = decode_json(&response.body).map_err(|e| {
            debug!(url = %url, error = %e, "body is not JSON");
            FetchError::decode(url, e)
        })?;

        match transform(value) {
            Some(object) => {
                debug!(url = %url, "fetch resolved");
                Ok(object)
            }
            None => {
                debug!(url = %url, "transform produced no result");
                Err(FetchError::Transform { url: url.to_owned() })
            }
        }
    }

    /// [`fetch_json`](Self::fetch_json) with a `serde` transform: a document
    /// that does not deserialize into `T` fails as [`FetchError::Transform`].
    pub async fn fetch_json_as<T>(&self, url: &str, schema: Option<&V::Schema>) -> Result<T>
    where
        T: DeserializeOwned,
    {
        self.fetch_json(url, |value| serde_json::from_value(value).ok(), schema)
            .await
    }

    async fn request(&self, url: &str) -> Result<RawResponse> {
        let request = Request::get(url);
        debug!(url = %request.url(), method = %request.method(), "issuing request");

        let response = self.client.send(&request).await.map_err(|failure| {
            debug!(url = %url, kind = ?failure.kind, error = %failure, "transport failure");
            FetchError::Transport {
                url: url.to_owned(),
                failure,
            }
        })?;

        if !response.is_success() {
            debug!(url = %url, status = response.status, "unsuccessful status");
            return Err(FetchError::HttpStatus {
                url:         url.to_owned(),
                status:      response.status,
                status_text: response.status_text,
            });
        }

        Ok(response)
    }
}
