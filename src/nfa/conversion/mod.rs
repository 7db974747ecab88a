//! Language-preserving NFA conversions.
//!
//! Each conversion establishes one structural normal form under the shared
//! [`Conversion`](crate::conversion::Conversion) contract:
//!
//! - [`EpsilonRemoval`]: no epsilon transitions remain.
//! - [`SingleInitialState`]: exactly one (generated) initial state.
//! - [`ReachableOnly`]: every state is reachable.
//! - [`PowerSetConstruction`]: deterministic and total (subset states).
//! - [`Minimization`]: no two distinct states are bisimilar (requires a
//!   deterministic, total input).

mod epsilon_removal;
mod minimize;
mod power_set;
mod reachable;
mod single_initial;

pub use epsilon_removal::EpsilonRemoval;
pub use minimize::Minimization;
pub use power_set::PowerSetConstruction;
pub use reachable::ReachableOnly;
pub use single_initial::SingleInitialState;
