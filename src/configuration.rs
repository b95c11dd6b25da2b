use crate::case_insensitive_set::CaseInsensitiveSet;
use crate::constants::{WILDCARD, status};
use crate::util::is_http_token;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// How the stage treats one `Access-Control-*` response header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HeaderMode {
    /// Never touch the header.
    Disabled,
    /// Write the header only when the response does not carry it yet.
    Enabled,
    /// Always overwrite the header.
    #[default]
    EnabledOverride,
}

impl HeaderMode {
    pub fn permits_write(self, already_present: bool) -> bool {
        match self {
            Self::Disabled => false,
            Self::Enabled => !already_present,
            Self::EnabledOverride => true,
        }
    }

    pub fn is_override(self) -> bool {
        matches!(self, Self::EnabledOverride)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderModes {
    pub allow_origin: HeaderMode,
    pub allow_credentials: HeaderMode,
    pub expose_headers: HeaderMode,
    pub max_age: HeaderMode,
    pub allow_methods: HeaderMode,
    pub allow_headers: HeaderMode,
}

impl HeaderModes {
    pub fn uniform(mode: HeaderMode) -> Self {
        Self {
            allow_origin: mode,
            allow_credentials: mode,
            expose_headers: mode,
            max_age: mode,
            allow_methods: mode,
            allow_headers: mode,
        }
    }
}

/// Resolved CORS policy, shared read-only by every request it applies to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CorsConfiguration {
    /// Allow-origin value used when the request origin is not echoed.
    #[serde(
        rename = "accessControlAllowOrigin",
        deserialize_with = "origin_or_wildcard"
    )]
    pub allow_origin: String,
    #[serde(rename = "accessControlAllowCredentials")]
    pub allow_credentials: bool,
    #[serde(rename = "accessControlExposeHeaders", deserialize_with = "nullable_set")]
    pub expose_headers: CaseInsensitiveSet,
    /// `None` omits `Access-Control-Max-Age`; the wire form uses `-1` for it.
    #[serde(rename = "accessControlMaxAge", deserialize_with = "max_age_sentinel")]
    pub max_age_seconds: Option<u64>,
    #[serde(rename = "accessControlAllowMethods", deserialize_with = "nullable_set")]
    pub allow_methods: CaseInsensitiveSet,
    #[serde(rename = "accessControlAllowHeaders", deserialize_with = "nullable_set")]
    pub allow_headers: CaseInsensitiveSet,
    /// Status answered to a preflight that fails validation.
    #[serde(rename = "corsErrorStatusCode")]
    pub error_status_code: u16,
    #[serde(rename = "headerModes")]
    pub header_modes: HeaderModes,
}

impl Default for CorsConfiguration {
    fn default() -> Self {
        Self {
            allow_origin: WILDCARD.to_string(),
            allow_credentials: false,
            expose_headers: CaseInsensitiveSet::new(),
            max_age_seconds: None,
            allow_methods: CaseInsensitiveSet::new(),
            allow_headers: CaseInsensitiveSet::new(),
            error_status_code: status::BAD_REQUEST,
            header_modes: HeaderModes::default(),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("allow-origin value must not be empty")]
    EmptyAllowOrigin,
    #[error("CORS error status {0} is not a 4xx or 5xx HTTP status code")]
    InvalidErrorStatus(u16),
    #[error("allowed method `{0}` is not a valid HTTP token")]
    InvalidMethod(String),
    #[error("allowed header `{0}` is not a valid HTTP header name")]
    InvalidAllowedHeader(String),
    #[error("exposed header `{0}` is not a valid HTTP header name")]
    InvalidExposedHeader(String),
}

impl CorsConfiguration {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.allow_origin.trim().is_empty() {
            return Err(ValidationError::EmptyAllowOrigin);
        }

        if !(400..=599).contains(&self.error_status_code) {
            return Err(ValidationError::InvalidErrorStatus(self.error_status_code));
        }

        if let Some(method) = self.allow_methods.iter().find(|m| !is_http_token(m)) {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self.allow_headers.iter().find(|h| !is_http_token(h)) {
            return Err(ValidationError::InvalidAllowedHeader(name.to_string()));
        }

        if let Some(name) = self.expose_headers.iter().find(|h| !is_http_token(h)) {
            return Err(ValidationError::InvalidExposedHeader(name.to_string()));
        }

        Ok(())
    }
}

fn nullable_set<'de, D>(deserializer: D) -> Result<CaseInsensitiveSet, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CaseInsensitiveSet>::deserialize(deserializer)?.unwrap_or_default())
}

fn origin_or_wildcard<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty());
    Ok(value.unwrap_or_else(|| WILDCARD.to_string()))
}

fn max_age_sentinel<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<i64>::deserialize(deserializer)? {
        None | Some(-1) => Ok(None),
        Some(seconds) => u64::try_from(seconds).map(Some).map_err(|_| {
            D::Error::custom(format!(
                "max age must be -1 or a non-negative number of seconds, got {seconds}"
            ))
        }),
    }
}

#[cfg(test)]
#[path = "configuration_test.rs"]
mod configuration_test;
