//! Bridges solving techniques.
//!
//! This module provides the deduction rules used by
//! [`TechniqueSolver`](crate::TechniqueSolver). Each technique implements the
//! [`Technique`] trait and reports at most one safe [`Move`](crate::Move) per
//! call.

pub use self::{
    connectivity_closing::ConnectivityClosing, exact_match::ExactMatch,
    forced_minimum::ForcedMinimum, isolation_avoidance::IsolationAvoidance,
    sealed_network_avoidance::SealedNetworkAvoidance, traits::*,
};

mod connectivity_closing;
mod exact_match;
mod forced_minimum;
mod isolation_avoidance;
mod sealed_network_avoidance;
mod slot;
mod traits;

pub(crate) use self::slot::{Slot, open_slots};

/// Returns all available techniques.
///
/// Techniques are ordered from the most specific to the most general.
#[must_use]
pub fn all_techniques() -> Vec<BoxedTechnique> {
    let mut techniques = fundamental_techniques();
    techniques.push(Box::new(ForcedMinimum::new()));
    techniques.push(Box::new(SealedNetworkAvoidance::new()));
    techniques
}

/// Returns the fundamental techniques.
///
/// - **Exact Match**: an island whose remaining count equals what its slots
///   can still take fills them all
/// - **Isolation Avoidance**: an island with a single open slot puts all its
///   remaining bridges on it
/// - **Connectivity Closing**: a network with a single way out must take it
///
/// This set remains stable over time and serves as a baseline for
/// benchmarking.
///
/// # Examples
///
/// ```
/// use bridges_solver::technique;
///
/// let techniques = technique::fundamental_techniques();
/// assert_eq!(techniques.len(), 3);
/// ```
#[must_use]
pub fn fundamental_techniques() -> Vec<BoxedTechnique> {
    vec![
        Box::new(ExactMatch::new()),
        Box::new(IsolationAvoidance::new()),
        Box::new(ConnectivityClosing::new()),
    ]
}
