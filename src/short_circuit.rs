use crate::configuration::CorsConfiguration;
use crate::context::RequestSnapshot;
use crate::host::RequestView;
use crate::preflight::is_preflight;
use crate::response::SyntheticResponse;
use crate::verdict::PreflightVerdict;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponderState {
    Uninstalled,
    Installed,
    Responded,
}

/// Answers a preflight locally so the backend is never contacted.
#[derive(Debug, Clone)]
pub struct ShortCircuitResponder {
    config: Arc<CorsConfiguration>,
    request: Option<RequestSnapshot>,
    state: ResponderState,
}

impl ShortCircuitResponder {
    pub fn new(config: Arc<CorsConfiguration>) -> Self {
        Self {
            config,
            request: None,
            state: ResponderState::Uninstalled,
        }
    }

    pub fn state(&self) -> ResponderState {
        self.state
    }

    /// Takes over the backend call for `request` if it is a preflight.
    ///
    /// Returns whether the responder is now installed. Installing twice, or
    /// after responding, has no effect.
    pub fn install<R: RequestView + ?Sized>(&mut self, request: &R) -> bool {
        if self.state != ResponderState::Uninstalled {
            return self.state == ResponderState::Installed;
        }
        if !is_preflight(request) {
            return false;
        }

        self.request = Some(RequestSnapshot::capture(request));
        self.state = ResponderState::Installed;
        true
    }

    /// Called once the inbound body has been fully read.
    ///
    /// Produces the terminal response on the `Installed -> Responded`
    /// transition and `None` in every other state.
    pub fn on_request_end(&mut self) -> Option<SyntheticResponse> {
        if self.state != ResponderState::Installed {
            return None;
        }
        let request = self.request.take()?;

        let verdict = PreflightVerdict::evaluate(&self.config, &request.as_context());
        let status = verdict.status(&self.config);
        tracing::debug!(
            status,
            origin_allowed = verdict.origin_allowed,
            method_allowed = verdict.method_allowed,
            headers_allowed = verdict.headers_allowed,
            "answering preflight without invoking backend"
        );

        self.state = ResponderState::Responded;
        Some(SyntheticResponse::new(status))
    }
}

/// What the host should do once the inbound request has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// Invoke the backend as usual.
    Forward,
    /// Send this locally built response downstream instead of calling the backend.
    Respond(SyntheticResponse),
    /// A local response was already produced; nothing else may be written.
    Complete,
}

/// Per-request choice between calling the backend and answering locally.
#[derive(Debug, Clone, Default)]
pub enum RequestHandler {
    #[default]
    PassThrough,
    ShortCircuit(ShortCircuitResponder),
}

impl RequestHandler {
    pub fn is_short_circuit(&self) -> bool {
        matches!(self, Self::ShortCircuit(_))
    }

    pub fn on_request_end(&mut self) -> HandlerOutcome {
        match self {
            Self::PassThrough => HandlerOutcome::Forward,
            Self::ShortCircuit(responder) if responder.state() == ResponderState::Uninstalled => {
                HandlerOutcome::Forward
            }
            Self::ShortCircuit(responder) => match responder.on_request_end() {
                Some(response) => HandlerOutcome::Respond(response),
                None => HandlerOutcome::Complete,
            },
        }
    }
}

#[cfg(test)]
#[path = "short_circuit_test.rs"]
mod short_circuit_test;
