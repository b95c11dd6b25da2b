use crate::allow_list::is_subset;
use crate::configuration::CorsConfiguration;
use crate::constants::{WILDCARD, header, status};
use crate::host::RequestView;
use crate::preflight::is_preflight;

/// Outcome of validating one request against the configured allow-lists.
///
/// Computed per request and never cached; the response phase evaluates it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreflightVerdict {
    pub is_preflight: bool,
    pub origin_allowed: bool,
    pub method_allowed: bool,
    pub headers_allowed: bool,
}

impl PreflightVerdict {
    pub fn evaluate<R: RequestView + ?Sized>(config: &CorsConfiguration, request: &R) -> Self {
        Self {
            is_preflight: is_preflight(request),
            origin_allowed: origin_allowed(config, request.header(header::ORIGIN)),
            method_allowed: is_subset(
                request.header(header::ACCESS_CONTROL_REQUEST_METHOD),
                &config.allow_methods,
            ),
            headers_allowed: is_subset(
                request.header(header::ACCESS_CONTROL_REQUEST_HEADERS),
                &config.allow_headers,
            ),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.origin_allowed && self.method_allowed && self.headers_allowed
    }

    /// Status a short-circuited preflight answers with.
    pub fn status(&self, config: &CorsConfiguration) -> u16 {
        if self.is_accepted() {
            status::OK
        } else {
            config.error_status_code
        }
    }
}

// Origins are not allow-listed: any non-empty origin passes, as does every
// request when the configured origin is the wildcard.
fn origin_allowed(config: &CorsConfiguration, origin: Option<&str>) -> bool {
    config.allow_origin == WILDCARD || origin.is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
#[path = "verdict_test.rs"]
mod verdict_test;
