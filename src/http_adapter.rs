//! Host capabilities for the [`http`] crate's request and response types.

use crate::host::{RequestView, ResponseView};
use crate::response::SyntheticResponse;
use http::header::{HeaderName, HeaderValue};
use http::{Request, Response, StatusCode};

impl<B> RequestView for Request<B> {
    fn method(&self) -> &str {
        Request::method(self).as_str()
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }
}

impl<B> ResponseView for Response<B> {
    fn contains(&self, name: &str) -> bool {
        self.headers().contains_key(name)
    }

    fn get_first(&self, name: &str) -> Option<&str> {
        self.headers()
            .get(name)
            .and_then(|value| value.to_str().ok())
    }

    fn set(&mut self, name: &str, value: String) {
        let header_name = match HeaderName::from_bytes(name.as_bytes()) {
            Ok(header_name) => header_name,
            Err(_) => {
                tracing::warn!(header = name, "skipping invalid header name");
                return;
            }
        };
        match HeaderValue::from_str(&value) {
            Ok(header_value) => {
                self.headers_mut().insert(header_name, header_value);
            }
            Err(_) => {
                tracing::warn!(header = name, value = %value, "skipping invalid header value")
            }
        }
    }

    fn remove(&mut self, name: &str) {
        self.headers_mut().remove(name);
    }

    fn status(&self) -> u16 {
        Response::status(self).as_u16()
    }

    fn set_status(&mut self, status: u16) {
        match StatusCode::from_u16(status) {
            Ok(code) => *self.status_mut() = code,
            Err(_) => tracing::warn!(status, "skipping invalid status code"),
        }
    }
}

impl SyntheticResponse {
    /// Converts the local response into an [`http::Response`] with an empty body.
    pub fn into_http<B: Default>(self) -> Response<B> {
        let (status, headers) = self.into_parts();
        let mut response = Response::new(B::default());
        ResponseView::set_status(&mut response, status);
        for (name, value) in headers.iter() {
            ResponseView::set(&mut response, name, value.to_string());
        }
        response
    }
}

#[cfg(test)]
#[path = "http_adapter_test.rs"]
mod http_adapter_test;
