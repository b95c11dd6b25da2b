use crate::constants::{header, method};
use crate::host::RequestView;

/// A preflight is an `OPTIONS` request carrying both a non-empty `Origin` and a
/// non-empty `Access-Control-Request-Method`. Anything else is an actual request.
pub fn is_preflight<R: RequestView + ?Sized>(request: &R) -> bool {
    request.method().eq_ignore_ascii_case(method::OPTIONS)
        && has_value(request, header::ORIGIN)
        && has_value(request, header::ACCESS_CONTROL_REQUEST_METHOD)
}

fn has_value<R: RequestView + ?Sized>(request: &R, name: &str) -> bool {
    request
        .header(name)
        .is_some_and(|value| !value.trim().is_empty())
}

#[cfg(test)]
#[path = "preflight_test.rs"]
mod preflight_test;
