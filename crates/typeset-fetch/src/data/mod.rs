//! Immutable data types for fetch operations.
//!
//! Requests and responses are created per call and owned by that call;
//! nothing here is shared between invocations.

pub mod options;
pub mod request;
pub mod response;

pub use options::ClientOptions;
pub use request::{Method, Request};
pub use response::RawResponse;
