use crate::constants::header;
use crate::host::RequestView;
use crate::util::equals_ignore_case;

/// Borrowed view over the request values the CORS stage reads.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
}

impl RequestView for RequestContext<'_> {
    fn method(&self) -> &str {
        self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        lookup(
            name,
            self.origin,
            self.access_control_request_method,
            self.access_control_request_headers,
        )
    }
}

/// Owned copy of a request's CORS inputs.
///
/// Captured when a preflight is short-circuited so that the end-of-body hook
/// does not borrow the host's request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestSnapshot {
    method: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl RequestSnapshot {
    pub fn capture<R: RequestView + ?Sized>(request: &R) -> Self {
        Self {
            method: request.method().to_string(),
            origin: request.header(header::ORIGIN).map(str::to_string),
            access_control_request_method: request
                .header(header::ACCESS_CONTROL_REQUEST_METHOD)
                .map(str::to_string),
            access_control_request_headers: request
                .header(header::ACCESS_CONTROL_REQUEST_HEADERS)
                .map(str::to_string),
        }
    }

    pub fn as_context(&self) -> RequestContext<'_> {
        RequestContext {
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

impl RequestView for RequestSnapshot {
    fn method(&self) -> &str {
        &self.method
    }

    fn header(&self, name: &str) -> Option<&str> {
        lookup(
            name,
            self.origin.as_deref(),
            self.access_control_request_method.as_deref(),
            self.access_control_request_headers.as_deref(),
        )
    }
}

fn lookup<'a>(
    name: &str,
    origin: Option<&'a str>,
    request_method: Option<&'a str>,
    request_headers: Option<&'a str>,
) -> Option<&'a str> {
    if equals_ignore_case(name, header::ORIGIN) {
        origin
    } else if equals_ignore_case(name, header::ACCESS_CONTROL_REQUEST_METHOD) {
        request_method
    } else if equals_ignore_case(name, header::ACCESS_CONTROL_REQUEST_HEADERS) {
        request_headers
    } else {
        None
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
