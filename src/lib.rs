//! CORS enforcement stage for HTTP gateway pipelines.
//!
//! [`CorsStage`] classifies each request, answers preflights locally through a
//! [`ShortCircuitResponder`] so they never reach the backend, and writes the
//! `Access-Control-*` headers of every outgoing response.

mod allow_list;
mod case_insensitive_set;
mod configuration;
pub mod constants;
mod context;
mod header_composer;
mod headers;
mod host;
#[cfg(feature = "http")]
mod http_adapter;
mod preflight;
mod response;
mod short_circuit;
mod stage;
mod util;
mod verdict;

pub use allow_list::is_subset;
pub use case_insensitive_set::CaseInsensitiveSet;
pub use configuration::{CorsConfiguration, HeaderMode, HeaderModes, ValidationError};
pub use context::{RequestContext, RequestSnapshot};
pub use header_composer::HeaderComposer;
pub use headers::{HeaderCollection, merge_vary};
pub use host::{PolicyChain, RequestView, ResponseView};
pub use preflight::is_preflight;
pub use response::SyntheticResponse;
pub use short_circuit::{HandlerOutcome, RequestHandler, ResponderState, ShortCircuitResponder};
pub use stage::{CorsStage, ExecutionContext};
pub use util::{equals_ignore_case, normalize_lower, split_header_list};
pub use verdict::PreflightVerdict;
