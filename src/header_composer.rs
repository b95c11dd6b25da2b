use crate::configuration::{CorsConfiguration, HeaderMode};
use crate::constants::{WILDCARD, header};
use crate::headers::merge_vary;
use crate::host::{RequestView, ResponseView};
use crate::verdict::PreflightVerdict;

/// Writes the `Access-Control-*` headers of one response.
///
/// Every write is an overwrite computed from configuration, so composing the
/// same response twice leaves it unchanged. `Access-Control-Allow-Origin: *`
/// never leaves next to `Access-Control-Allow-Credentials`.
pub struct HeaderComposer<'a> {
    config: &'a CorsConfiguration,
}

impl<'a> HeaderComposer<'a> {
    pub fn new(config: &'a CorsConfiguration) -> Self {
        Self { config }
    }

    pub fn compose<Req, Res>(&self, verdict: &PreflightVerdict, request: &Req, response: &mut Res)
    where
        Req: RequestView + ?Sized,
        Res: ResponseView + ?Sized,
    {
        if verdict.is_preflight {
            self.apply_allow_headers(response);
            self.apply_allow_methods(response);
            self.apply_max_age(response);
        } else {
            self.apply_expose_headers(response);
        }

        if self.config.allow_credentials {
            self.apply_echoed_origin(request, response);
            if has_wildcard_origin(response) {
                drop_credentials(response);
            } else {
                self.apply_credentials(response);
            }
        } else {
            self.apply_configured_origin(response);
            if has_wildcard_origin(response)
                || self.config.header_modes.allow_credentials.is_override()
            {
                drop_credentials(response);
            }
        }
    }

    fn apply_allow_headers<Res: ResponseView + ?Sized>(&self, response: &mut Res) {
        if self.config.allow_headers.is_empty() {
            return;
        }
        write(
            response,
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            self.config.header_modes.allow_headers,
            self.config.allow_headers.join(", "),
        );
    }

    fn apply_allow_methods<Res: ResponseView + ?Sized>(&self, response: &mut Res) {
        if self.config.allow_methods.is_empty() {
            return;
        }
        let methods = self
            .config
            .allow_methods
            .iter()
            .map(str::to_ascii_uppercase)
            .collect::<Vec<_>>()
            .join(", ");
        write(
            response,
            header::ACCESS_CONTROL_ALLOW_METHODS,
            self.config.header_modes.allow_methods,
            methods,
        );
    }

    fn apply_max_age<Res: ResponseView + ?Sized>(&self, response: &mut Res) {
        if let Some(seconds) = self.config.max_age_seconds {
            write(
                response,
                header::ACCESS_CONTROL_MAX_AGE,
                self.config.header_modes.max_age,
                seconds.to_string(),
            );
        }
    }

    fn apply_expose_headers<Res: ResponseView + ?Sized>(&self, response: &mut Res) {
        if self.config.expose_headers.is_empty() {
            return;
        }
        write(
            response,
            header::ACCESS_CONTROL_EXPOSE_HEADERS,
            self.config.header_modes.expose_headers,
            self.config.expose_headers.join(", "),
        );
    }

    fn apply_credentials<Res: ResponseView + ?Sized>(&self, response: &mut Res) {
        write(
            response,
            header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
            self.config.header_modes.allow_credentials,
            "true".to_string(),
        );
    }

    fn apply_echoed_origin<Req, Res>(&self, request: &Req, response: &mut Res)
    where
        Req: RequestView + ?Sized,
        Res: ResponseView + ?Sized,
    {
        let Some(origin) = request
            .header(header::ORIGIN)
            .filter(|origin| !origin.trim().is_empty())
        else {
            return;
        };

        let mode = self.config.header_modes.allow_origin;
        // A credentialed response may not keep an upstream `*`.
        let written = if mode != HeaderMode::Disabled && has_wildcard_origin(response) {
            response.set(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin.to_string());
            true
        } else {
            write(
                response,
                header::ACCESS_CONTROL_ALLOW_ORIGIN,
                mode,
                origin.to_string(),
            )
        };
        if written {
            let vary = merge_vary(response.get_first(header::VARY), header::ORIGIN);
            response.set(header::VARY, vary);
        }
    }

    fn apply_configured_origin<Res: ResponseView + ?Sized>(&self, response: &mut Res) {
        write(
            response,
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            self.config.header_modes.allow_origin,
            self.config.allow_origin.clone(),
        );
    }
}

fn has_wildcard_origin<Res: ResponseView + ?Sized>(response: &Res) -> bool {
    response
        .get_first(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_some_and(|value| value.trim() == WILDCARD)
}

fn drop_credentials<Res: ResponseView + ?Sized>(response: &mut Res) {
    if response.contains(header::ACCESS_CONTROL_ALLOW_CREDENTIALS) {
        tracing::trace!("dropping upstream Access-Control-Allow-Credentials");
        response.remove(header::ACCESS_CONTROL_ALLOW_CREDENTIALS);
    }
}

fn write<Res: ResponseView + ?Sized>(
    response: &mut Res,
    name: &str,
    mode: HeaderMode,
    value: String,
) -> bool {
    if !mode.permits_write(response.contains(name)) {
        tracing::trace!(header = name, ?mode, "leaving header untouched");
        return false;
    }
    response.set(name, value);
    true
}

#[cfg(test)]
#[path = "header_composer_test.rs"]
mod header_composer_test;
