use std::future::Future;

use crate::data::{RawResponse, Request};
use crate::error::TransportFailure;

/// Asynchronous HTTP transport abstraction.
///
/// The loader needs exactly one capability: send a [`Request`] and hand back
/// the status line and the body text. Implementations decide redirects,
/// timeouts and connection reuse on their own.
///
/// # Implementations
///
/// - [`ReqwestClient`]: Production implementation using `reqwest`
/// - Mock implementations for testing
pub trait HttpClient: Send + Sync {
    /// Send `request` and read the whole body as text.
    ///
    /// Any response that arrives, whatever its status, is `Ok`. `Err` is
    /// reserved for requests that never produced a complete response.
    fn send(&self, request: &Request) -> impl Future<Output = Result<RawResponse, TransportFailure>> + Send;
}

#[cfg(feature = "reqwest")]
mod reqwest_impl {
    use tracing::debug;

    use super::*;
    use crate::data::{ClientOptions, Method};
    use crate::error::{FetchError, Result};

    /// Production HTTP client implementation using reqwest.
    ///
    /// `status_text` is the canonical reason phrase for the status code;
    /// HTTP/2 carries no reason phrase on the wire.
    #[derive(Debug, Clone)]
    pub struct ReqwestClient {
        client:  reqwest::Client,
        options: ClientOptions,
    }

    impl ReqwestClient {
        /// Create a new ReqwestClient with default configuration.
        pub fn new() -> Result<Self> {
            Self::with_options(ClientOptions::default())
        }

        pub fn with_options(options: ClientOptions) -> Result<Self> {
            let mut builder = reqwest::Client::builder();

            if let Some(timeout) = options.timeout {
                builder = builder.timeout(timeout);
            }
            if let Some(user_agent) = &options.user_agent {
                builder = builder.user_agent(user_agent.as_str());
            }
            if !options.proxies.is_empty() || !options.system_proxy {
                builder = builder.no_proxy();
            }

            let (secure, insecure) = options.partition_proxies();
            for u in secure {
                builder = builder.proxy(reqwest::Proxy::https(u.as_str()).map_err(FetchError::Client)?);
            }
            for u in insecure {
                builder = builder.proxy(reqwest::Proxy::http(u.as_str()).map_err(FetchError::Client)?);
            }

            let client = builder.build().map_err(FetchError::Client)?;
            Ok(Self { client, options })
        }

        pub fn options(&self) -> &ClientOptions { &self.options }
    }

    fn transport_failure(e: reqwest::Error) -> TransportFailure {
        let failure = if e.is_timeout() {
            TransportFailure::timeout()
        } else {
            TransportFailure::network()
        };
        failure.with_source(e)
    }

    impl HttpClient for ReqwestClient {
        async fn send(&self, request: &Request) -> std::result::Result<RawResponse, TransportFailure> {
            let target = self
                .options
                .resolve(request.url())
                .map_err(|e| TransportFailure::network().with_source(e))?;
            let method = match request.method() {
                Method::Get => reqwest::Method::GET,
            };
            debug!(url = %target, %method, "sending request");

            let response = self
                .client
                .request(method, target)
                .send()
                .await
                .map_err(transport_failure)?;
            let status = response.status();
            let status_text = status.canonical_reason().unwrap_or_default().to_owned();
            let body = response.text().await.map_err(transport_failure)?;

            Ok(RawResponse {
                status: status.as_u16(),
                status_text,
                body,
            })
        }
    }
}

#[cfg(feature = "reqwest")]
pub use reqwest_impl::ReqwestClient;
