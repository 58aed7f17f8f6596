//! Requests and the executor seam.
//!
//! Every network operation in this crate builds a [`Request`] and hands it
//! to a [`ServiceRequest`] supplied by the caller. The executor owns all
//! transport concerns (connections, TLS, timeouts, credentials); the API
//! objects only see the raw response body or a [`TransportError`].

use std::fmt;
use std::sync::Arc;

use crate::error::TransportError;

/// HTTP method of a [`Request`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Upper-case method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single API request: full URL, method, optional body and headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    url: String,
    method: Method,
    body: Option<String>,
    headers: Vec<(String, String)>,
}

impl Request {
    /// Create a GET request for a full URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            method: Method::Get,
            body: None,
            headers: Vec::new(),
        }
    }

    /// Set the method
    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Set the request body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// First header with this name, compared case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Executes requests and returns the raw response body.
///
/// Implementations must return `Err` for any response they do not consider
/// successful; the body of a successful response is parsed by the caller.
pub trait ServiceRequest {
    fn execute(&self, request: &Request) -> Result<String, TransportError>;
}

impl<T: ServiceRequest + ?Sized> ServiceRequest for &T {
    fn execute(&self, request: &Request) -> Result<String, TransportError> {
        (**self).execute(request)
    }
}

impl<T: ServiceRequest + ?Sized> ServiceRequest for Box<T> {
    fn execute(&self, request: &Request) -> Result<String, TransportError> {
        (**self).execute(request)
    }
}

impl<T: ServiceRequest + ?Sized> ServiceRequest for Arc<T> {
    fn execute(&self, request: &Request) -> Result<String, TransportError> {
        (**self).execute(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct Echo;

    impl ServiceRequest for Echo {
        fn execute(&self, request: &Request) -> Result<String, TransportError> {
            Ok(format!("{} {}", request.method(), request.url()))
        }
    }

    #[test]
    fn test_request_builder() {
        let request = Request::new("https://example.com/feed")
            .with_method(Method::Post)
            .with_body("<entry/>")
            .with_header("Content-Type", "application/atom+xml");

        assert_eq!(request.url(), "https://example.com/feed");
        assert_eq!(request.method(), Method::Post);
        assert_eq!(request.body(), Some("<entry/>"));
        assert_eq!(request.header("content-type"), Some("application/atom+xml"));
        assert_eq!(request.header("Accept"), None);
    }

    #[test]
    fn test_default_is_get_without_body() {
        let request = Request::new("https://example.com");
        assert_eq!(request.method(), Method::Get);
        assert_eq!(request.body(), None);
        assert!(request.headers().is_empty());
    }

    #[test]
    fn test_forwarding_impls() {
        let request = Request::new("u").with_method(Method::Delete);

        let boxed: Box<dyn ServiceRequest> = Box::new(Echo);
        assert_eq!(boxed.execute(&request).unwrap(), "DELETE u");

        let shared = Arc::new(Echo);
        assert_eq!((&shared).execute(&request).unwrap(), "DELETE u");
    }
}
