#![allow(dead_code)]

use cors_stage::constants::header;
use cors_stage::split_header_list;
use http::Response;
use std::collections::HashSet;

pub fn header_value<'a, B>(response: &'a Response<B>, name: &str) -> Option<&'a str> {
    response
        .headers()
        .get(name)
        .and_then(|value| value.to_str().ok())
}

pub fn has_header<B>(response: &Response<B>, name: &str) -> bool {
    response.headers().contains_key(name)
}

pub fn vary_values<B>(response: &Response<B>) -> HashSet<String> {
    header_value(response, header::VARY)
        .map(|value| split_header_list(value).map(str::to_string).collect())
        .unwrap_or_default()
}
