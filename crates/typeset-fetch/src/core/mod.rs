//! Pure transformations for the fetch pipeline.
//!
//! Nothing in here performs I/O: these functions classify responses and
//! decode bodies so the effectful loader only has to sequence them.

mod decode;
mod status;

pub use decode::{DecodeErrorKind, decode_json};
pub use status::is_success;
