//! Blocking HTTP executor backed by `reqwest`

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::config::ServiceConfig;
use crate::error::TransportError;
use crate::request::{Method, Request, ServiceRequest};

/// [`ServiceRequest`] implementation that performs real HTTP round trips.
///
/// Configured default headers are attached to every request; per-request
/// headers are added after them. Any non-2xx status becomes
/// [`TransportError::Status`] carrying the response body.
#[derive(Debug, Clone)]
pub struct HttpServiceRequest {
    client: Client,
}

impl HttpServiceRequest {
    /// Build an executor from configuration
    pub fn new(config: &ServiceConfig) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        for (name, value) in &config.default_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| TransportError::InvalidHeader(name.clone()))?;
            let header_value = HeaderValue::from_str(value)
                .map_err(|_| TransportError::InvalidHeader(format!("{name}: {value}")))?;
            headers.append(header_name, header_value);
        }

        let mut builder = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .default_headers(headers);
        if config.no_proxy {
            builder = builder.no_proxy();
        }

        let client = builder.build()?;

        Ok(Self { client })
    }
}

impl ServiceRequest for HttpServiceRequest {
    fn execute(&self, request: &Request) -> Result<String, TransportError> {
        let method = match request.method() {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
            Method::Delete => reqwest::Method::DELETE,
        };

        tracing::debug!("{} {}", request.method(), request.url());

        let mut builder = self.client.request(method, request.url());
        for (name, value) in request.headers() {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body() {
            builder = builder.body(body.to_owned());
        }

        let response = builder.send()?;
        let status = response.status();
        let body = response.text()?;
        tracing::trace!("{} {} -> {} ({} bytes)", request.method(), request.url(), status, body.len());

        if !status.is_success() {
            tracing::warn!("{} {} failed with status {}", request.method(), request.url(), status);
            return Err(TransportError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_default_header_name() {
        let config = ServiceConfig::default().with_header("Bad Header", "x");
        let err = HttpServiceRequest::new(&config).unwrap_err();
        assert!(matches!(err, TransportError::InvalidHeader(name) if name == "Bad Header"));
    }

    #[test]
    fn test_invalid_default_header_value() {
        let config = ServiceConfig::default().with_header("X-Test", "line\nbreak");
        assert!(matches!(
            HttpServiceRequest::new(&config),
            Err(TransportError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_default_config_builds() {
        assert!(HttpServiceRequest::new(&ServiceConfig::default()).is_ok());
    }
}
