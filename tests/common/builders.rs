#![allow(dead_code)]

use cors_stage::constants::method;
use cors_stage::{CorsConfiguration, CorsStage, HeaderModes};
use http::Request;

#[derive(Default)]
pub struct StageBuilder {
    config: CorsConfiguration,
}

impl StageBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.config.allow_origin = origin.into();
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.config.allow_credentials = enabled;
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allow_methods = methods.into_iter().collect();
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.allow_headers = headers.into_iter().collect();
        self
    }

    pub fn expose_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.expose_headers = headers.into_iter().collect();
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.config.max_age_seconds = Some(seconds);
        self
    }

    pub fn error_status(mut self, status: u16) -> Self {
        self.config.error_status_code = status;
        self
    }

    pub fn header_modes(mut self, modes: HeaderModes) -> Self {
        self.config.header_modes = modes;
        self
    }

    pub fn config(self) -> CorsConfiguration {
        self.config
    }

    pub fn build(self) -> CorsStage {
        CorsStage::new(self.config).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl RequestBuilder {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn build(self) -> Request<()> {
        let mut builder = Request::builder()
            .method(self.method.as_str())
            .uri("https://api.example/resource");
        if let Some(origin) = &self.origin {
            builder = builder.header("Origin", origin.as_str());
        }
        if let Some(value) = &self.request_method {
            builder = builder.header("Access-Control-Request-Method", value.as_str());
        }
        if let Some(value) = &self.request_headers {
            builder = builder.header("Access-Control-Request-Headers", value.as_str());
        }
        builder.body(()).expect("valid request")
    }
}

pub fn stage() -> StageBuilder {
    StageBuilder::new()
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

pub fn actual_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}
