//! Fetch, validate, decode and transform remote JSON documents.
//!
//! # Architecture
//!
//! This crate follows the three-layer pattern:
//! - [`data`] - Immutable request, response and client option types
//! - [`core`] - Pure transformations (status classification, JSON decoding)
//! - [`effects`] - I/O operations with trait abstraction
//!
//! # Pipeline
//!
//! [`ResourceLoader`] issues exactly one GET per call and pipes the body
//! through an optional schema gate, a JSON decode and a caller-supplied
//! transform. Every failure surfaces as a [`FetchError`], except a failed
//! schema check, which leaves the returned future pending forever.
//!
//! ```no_run
//! # async fn run() -> Result<(), typeset_fetch::FetchError> {
//! use typeset_fetch::{ReqwestClient, ResourceLoader};
//!
//! let loader = ResourceLoader::new(ReqwestClient::new()?);
//! let family: String = loader
//!     .fetch_json(
//!         "https://example.com/fonts/roboto.json",
//!         |doc| doc.get("family")?.as_str().map(str::to_owned),
//!         None,
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod data;
pub mod effects;
mod error;

pub use self::core::{DecodeErrorKind, decode_json, is_success};
pub use data::{ClientOptions, Method, RawResponse, Request};
pub use effects::{
    CompiledSchemaValidator, FnValidator, HttpClient, JsonSchemaValidator, ResourceLoader, Validator,
    validator_fn,
};

#[cfg(feature = "reqwest")]
pub use effects::ReqwestClient;

pub use error::{FetchError, Result, TransportFailure, TransportFailureKind};
