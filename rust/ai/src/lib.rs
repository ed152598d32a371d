//! # cardroom-ai: Decisions for Non-human Seats
//!
//! Connects the engine's [`SeatDecider`](cardroom_engine::table::SeatDecider)
//! seam to a text-in, text-out [`Collaborator`].
//!
//! ## Core Components
//!
//! - [`Collaborator`] - Trait for the external decision service
//! - [`baseline`] - Rule-based collaborator that needs no network
//! - [`decision`] - Timeout, retry with backoff, and fallback around a collaborator
//! - [`logging`] - Subscriber setup and a capturing layer for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use cardroom_ai::create_collaborator;
//! use cardroom_ai::decision::{DecisionConfig, DecisionRequester};
//!
//! let collaborator = create_collaborator("baseline");
//! assert_eq!(collaborator.name(), "BaselineCollaborator");
//! let requester = DecisionRequester::new(collaborator, DecisionConfig::default());
//! assert_eq!(requester.config().max_retries, 3);
//! ```

use std::sync::Arc;

pub mod baseline;
pub mod collaborator;
pub mod decision;
pub mod logging;

pub use collaborator::{Collaborator, CollaboratorError};

/// Builds a collaborator by name. Unknown names fall back to the baseline so
/// a table can always be seated.
///
/// ```rust
/// use cardroom_ai::create_collaborator;
///
/// let c = create_collaborator("something-else");
/// assert_eq!(c.name(), "BaselineCollaborator");
/// ```
pub fn create_collaborator(name: &str) -> Arc<dyn Collaborator> {
    match name {
        "baseline" | "" => Arc::new(baseline::BaselineCollaborator::new()),
        other => {
            tracing::warn!(requested = other, "unknown collaborator, using baseline");
            Arc::new(baseline::BaselineCollaborator::new())
        }
    }
}
