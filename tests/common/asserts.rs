#![allow(dead_code)]

use super::headers::{has_header, header_value};
use http::Response;

pub fn assert_header_eq<B>(response: &Response<B>, name: &str, expected: &str) {
    assert_eq!(
        header_value(response, name),
        Some(expected),
        "unexpected value for {name}"
    );
}

pub fn assert_header_absent<B>(response: &Response<B>, name: &str) {
    assert!(
        !has_header(response, name),
        "{name} should be absent, got {:?}",
        header_value(response, name)
    );
}
