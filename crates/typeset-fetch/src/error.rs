//! Error types for typeset-fetch.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

use crate::core::DecodeErrorKind;

pub type Result<T> = std::result::Result<T, FetchError>;

/// Every way a fetch can fail.
///
/// The per-request variants all render as
/// `fetching '<url>' failed (<detail>): <message>`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a status outside `[200, 300)`.
    #[error("fetching '{url}' failed ({status}): {status_text}")]
    HttpStatus {
        url:         String,
        status:      u16,
        status_text: String,
    },

    /// The request never produced a response (network error or timeout).
    #[error("fetching '{url}' failed ({}): {}", .failure.status, .failure.status_text)]
    Transport {
        url:     String,
        #[source]
        failure: TransportFailure,
    },

    /// The body is not valid JSON.
    #[error("fetching '{url}' failed ({kind}): {source}")]
    Decode {
        url:    String,
        kind:   DecodeErrorKind,
        source: serde_json::Error,
    },

    /// The transform reported no result for the decoded document.
    #[error("fetching '{url}' failed (TransformError): transforming the object failed.")]
    Transform { url: String },

    /// A JSON Schema that does not compile.
    #[error("invalid schema: {0}")]
    Schema(String),

    #[cfg(feature = "reqwest")]
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    /// The locator of the failed request, if the error belongs to one.
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::HttpStatus { url, .. }
            | FetchError::Transport { url, .. }
            | FetchError::Decode { url, .. }
            | FetchError::Transform { url } => Some(url),
            FetchError::Schema(_) => None,
            #[cfg(feature = "reqwest")]
            FetchError::Client(_) => None,
        }
    }

    pub(crate) fn decode(url: &str, source: serde_json::Error) -> Self {
        FetchError::Decode {
            url: url.to_owned(),
            kind: DecodeErrorKind::from(source.classify()),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailureKind {
    /// Connection, DNS, TLS or body read failure.
    Network,
    /// The transport gave up waiting.
    Timeout,
}

/// A request that failed below the HTTP layer.
///
/// `status` and `status_text` carry whatever the transport knew when it
/// failed, which is normally `0` and an empty string.
#[derive(Debug)]
pub struct TransportFailure {
    pub kind:        TransportFailureKind,
    pub status:      u16,
    pub status_text: String,
    source:          Option<Box<dyn StdError + Send + Sync + 'static>>,
}

impl TransportFailure {
    pub fn network() -> Self {
        Self {
            kind:        TransportFailureKind::Network,
            status:      0,
            status_text: String::new(),
            source:      None,
        }
    }

    pub fn timeout() -> Self {
        Self {
            kind: TransportFailureKind::Timeout,
            ..Self::network()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: u16, status_text: impl Into<String>) -> Self {
        self.status = status;
        self.status_text = status_text.into();
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<Box<dyn StdError + Send + Sync + 'static>>) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TransportFailureKind::Network => write!(f, "network error")?,
            TransportFailureKind::Timeout => write!(f, "request timed out")?,
        }
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for TransportFailure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|e| e as &(dyn StdError + 'static))
    }
}
