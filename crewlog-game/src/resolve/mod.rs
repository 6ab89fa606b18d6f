//! Turning a session snapshot into ranked impostor hypotheses.

pub mod fallback;
pub mod normalize;
pub mod resolver;
pub mod wire;

pub use fallback::{SuspectScore, SuspicionWeights, fallback_hypotheses, suspicion_scores};
pub use normalize::{Hypothesis, effective_cost, fitness, normalize};
pub use resolver::{
    DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS, OfflineTransport, Resolution, ResolutionSource,
    Resolver, ResolverConfig, SolverTransport, TransportError, settle,
};
#[cfg(feature = "async")]
pub use resolver::with_deadline;
pub use wire::{Detail, Evidence, RawHypothesis, SolveRequest};
