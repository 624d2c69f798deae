use std::fmt;

/// HTTP method of a [`Request`]. Only `GET` is ever issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Descriptor of a single outgoing request.
///
/// The locator is kept verbatim: it may be absolute or relative, and it is
/// the string that appears in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url:    String,
    method: Method,
}

impl Request {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url:    url.into(),
            method: Method::Get,
        }
    }

    pub fn url(&self) -> &str { &self.url }

    pub fn method(&self) -> Method { self.method }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_is_always_get() {
        let request = Request::get("fonts/roboto.json");
        assert_eq!(request.url(), "fonts/roboto.json");
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.method().to_string(), "GET");
    }
}
