//! I/O operations and effectful computations for the fetch pipeline.
//!
//! The transport and the validator are collaborators behind traits so the
//! loader can be driven by mocks in tests and by `reqwest`/`jsonschema` in
//! production.

mod http;
mod loader;
mod validator;

pub use http::HttpClient;
pub use loader::ResourceLoader;
pub use validator::{
    CompiledSchemaValidator, FnValidator, JsonSchemaValidator, Validator, validator_fn,
};

#[cfg(feature = "reqwest")]
pub use http::ReqwestClient;
