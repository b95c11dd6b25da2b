#![allow(dead_code)]

use cors_stage::{CorsStage, ExecutionContext, HandlerOutcome};
use http::{Request, Response};

/// What a simulated gateway observed while running one request through the stage.
pub struct Exchange {
    pub response: Response<()>,
    pub backend_calls: usize,
    pub chain_calls: usize,
}

pub fn dispatch(stage: &CorsStage, request: &Request<()>) -> Exchange {
    dispatch_with(stage, request, |_| Response::new(()))
}

/// Drives request phase, end-of-body signal, backend call and response phase
/// the way a host pipeline would.
pub fn dispatch_with<F>(stage: &CorsStage, request: &Request<()>, mut backend: F) -> Exchange
where
    F: FnMut(&Request<()>) -> Response<()>,
{
    let mut ctx = ExecutionContext::new();
    let mut chain_calls = 0;
    let mut backend_calls = 0;

    let mut pending = Response::new(());
    stage.on_request(
        request,
        &mut pending,
        &mut ctx,
        &mut |_: &Request<()>, _: &mut Response<()>| chain_calls += 1,
    );

    let mut response = match ctx.on_request_end() {
        HandlerOutcome::Forward => {
            backend_calls += 1;
            backend(request)
        }
        HandlerOutcome::Respond(local) => local.into_http(),
        HandlerOutcome::Complete => panic!("request end signalled after local response"),
    };

    stage.on_response(
        request,
        &mut response,
        &mut |_: &Request<()>, _: &mut Response<()>| chain_calls += 1,
    );

    Exchange {
        response,
        backend_calls,
        chain_calls,
    }
}
