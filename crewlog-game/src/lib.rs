//! Crewlog Core
//!
//! Platform-agnostic session bookkeeping and impostor resolution for the
//! Crewlog deduction assistant. No UI or network stack lives here; transports
//! plug in through [`SolverTransport`].

pub mod event;
pub mod locations;
pub mod resolve;
pub mod roster;
pub mod session;
pub mod text;

// Re-export commonly used types
pub use event::{EventDraft, EventKind, LogEntry};
pub use locations::{LOCATIONS, Location, location_by_id};
pub use resolve::{
    Detail, Evidence, Hypothesis, OfflineTransport, RawHypothesis, Resolution, ResolutionSource,
    Resolver, ResolverConfig, SolveRequest, SolverTransport, SuspicionWeights, TransportError,
    normalize, settle,
};
#[cfg(feature = "async")]
pub use resolve::with_deadline;
pub use roster::{Player, PlayerColor, PlayerId, PlayerPayload, PlayerStatus};
pub use session::{Phase, ResetConfirmation, Session, SessionError};
pub use text::to_simplified;
