use std::fmt;

use serde_json::Value;
use serde_json::error::Category;

/// Category of a JSON decode failure, rendered the way it appears in
/// error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// Malformed or truncated JSON text.
    Syntax,
    /// Well-formed JSON that does not fit the requested type.
    Data,
    /// The underlying reader failed.
    Io,
}

impl DecodeErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecodeErrorKind::Syntax => "SyntaxError",
            DecodeErrorKind::Data => "DataError",
            DecodeErrorKind::Io => "IoError",
        }
    }
}

impl From<Category> for DecodeErrorKind {
    fn from(category: Category) -> Self {
        match category {
            Category::Syntax | Category::Eof => DecodeErrorKind::Syntax,
            Category::Data => DecodeErrorKind::Data,
            Category::Io => DecodeErrorKind::Io,
        }
    }
}

impl fmt::Display for DecodeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decode a response body into a JSON value.
///
/// # Examples
///
/// ```
/// use typeset_fetch::core::{decode_json, DecodeErrorKind};
///
/// let value = decode_json(r#"{"name":"x"}"#).unwrap();
/// assert_eq!(value["name"], "x");
///
/// let err = decode_json("{not json").unwrap_err();
/// assert_eq!(DecodeErrorKind::from(err.classify()), DecodeErrorKind::Syntax);
/// ```
pub fn decode_json(body: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(body)
}
