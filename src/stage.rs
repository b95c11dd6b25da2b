use crate::configuration::{CorsConfiguration, ValidationError};
use crate::header_composer::HeaderComposer;
use crate::host::{PolicyChain, RequestView, ResponseView};
use crate::short_circuit::{HandlerOutcome, RequestHandler, ShortCircuitResponder};
use crate::verdict::PreflightVerdict;
use std::sync::Arc;

/// Per-request slot holding the handler chosen during the request phase.
#[derive(Debug, Default)]
pub struct ExecutionContext {
    handler: RequestHandler,
}

impl ExecutionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handler(&self) -> &RequestHandler {
        &self.handler
    }

    /// Forwards the host's end-of-body signal to the installed handler.
    pub fn on_request_end(&mut self) -> HandlerOutcome {
        self.handler.on_request_end()
    }
}

/// CORS stage of a request/response pipeline.
///
/// Preflights are answered locally; every response, local or from the backend,
/// receives its `Access-Control-*` headers on the way out. The stage always
/// hands control to the next pipeline stage.
#[derive(Debug, Clone)]
pub struct CorsStage {
    config: Arc<CorsConfiguration>,
}

impl CorsStage {
    pub fn new(config: CorsConfiguration) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
        })
    }

    pub fn configuration(&self) -> &CorsConfiguration {
        &self.config
    }

    pub fn on_request<Req, Res, C>(
        &self,
        request: &Req,
        response: &mut Res,
        ctx: &mut ExecutionContext,
        chain: &mut C,
    ) where
        Req: RequestView + ?Sized,
        Res: ?Sized,
        C: PolicyChain<Req, Res> + ?Sized,
    {
        let mut responder = ShortCircuitResponder::new(Arc::clone(&self.config));
        if responder.install(request) {
            tracing::debug!(
                method = request.method(),
                "preflight detected, backend call suppressed"
            );
            ctx.handler = RequestHandler::ShortCircuit(responder);
        } else {
            ctx.handler = RequestHandler::PassThrough;
        }

        chain.do_next(request, response);
    }

    pub fn on_response<Req, Res, C>(&self, request: &Req, response: &mut Res, chain: &mut C)
    where
        Req: RequestView + ?Sized,
        Res: ResponseView + ?Sized,
        C: PolicyChain<Req, Res> + ?Sized,
    {
        let verdict = PreflightVerdict::evaluate(&self.config, request);
        if verdict.is_preflight {
            response.set_status(verdict.status(&self.config));
        }

        HeaderComposer::new(&self.config).compose(&verdict, request, response);
        tracing::trace!(preflight = verdict.is_preflight, "CORS headers composed");

        chain.do_next(request, response);
    }
}

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;
