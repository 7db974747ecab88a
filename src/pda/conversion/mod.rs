//! Equivalence-preserving PDA conversions.
//!
//! Every conversion implements [`Conversion`](crate::conversion::Conversion)
//! and preserves the recognized language. Stages that generate states or
//! stack symbols operate on [`MaybeFresh`](crate::fresh::MaybeFresh)-labeled
//! automata (enter via [`Pda::labeled`](crate::pda::Pda::labeled)) and draw
//! identifiers from a shared seeded allocator, so arbitrary stage chains
//! compose without collisions.

mod acceptance;
mod single_initial;
mod stack_writes;
mod wildcard;

pub use acceptance::{AcceptingStatesToEmptyStack, EmptyStackToAcceptingStates};
pub use single_initial::PdaSingleInitialState;
pub use stack_writes::StackWriteLimit;
pub use wildcard::WildcardElimination;
