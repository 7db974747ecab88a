//! # libchomsky
//!
//! Finite and pushdown automata, formal grammars, and the
//! equivalence-preserving conversions between them.
//!
//! The library is organized around a small trait bundle
//! ([`automaton::Automaton`], [`automaton::Transition`],
//! [`automaton::Configuration`]) that the two machine families implement:
//!
//! * [`nfa::Nfa`] — nondeterministic finite automata with epsilon
//!   transitions, plus determinization, epsilon removal, reachability
//!   pruning, and bisimulation-based minimization under
//!   [`nfa::conversion`].
//! * [`pda::Pda`] — pushdown automata with wildcard stack guards and a
//!   selectable acceptance strategy, plus wildcard elimination,
//!   stack-write limiting, and acceptance-strategy conversions under
//!   [`pda::conversion`].
//!
//! Words are run with the eager [`automaton::Executor`] (epsilon-closed,
//! symbol at a time, suitable for finite automata) or the transition-bounded
//! [`automaton::AutomatonStepper`] (breadth-first over single firings,
//! suitable for machines whose epsilon moves may not terminate).
//!
//! [`grammar`] adds the Chomsky hierarchy: unrestricted grammars with
//! classification, context-free grammars, and the two classic translations
//! [`grammar::cfg_to_pda`] and [`grammar::pda_to_cfg`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use libchomsky::prelude::*;
//!
//! let nfa: Nfa<u32, char> = NfaBuilder::new()
//!     .with_states([0, 1])
//!     .with_symbols(['a', 'b'])
//!     .with_initial(0)
//!     .with_accepting(1)
//!     .with_transition(0, 'a', 0)
//!     .with_transition(0, 'a', 1)
//!     .build()?;
//!
//! assert!(nfa.accepts(&['a', 'a']));
//! let dfa = PowerSetConstruction::new().apply(&nfa);
//! assert!(dfa.is_deterministic() && dfa.is_total());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod automaton;
pub mod conversion;
pub mod fault;
pub mod fresh;
pub mod grammar;
pub mod graph;
pub mod nfa;
pub mod pda;

/// Convenience re-exports of the types most programs need.
pub mod prelude {
    pub use crate::alphabet::Alphabet;
    pub use crate::automaton::{
        Automaton, AutomatonStepper, Configuration, DeterminacyFault, DeterminacyReason, Executor,
        StateId, SymbolId, Transition,
    };
    pub use crate::conversion::Conversion;
    pub use crate::fault::FaultCollection;
    pub use crate::fresh::{FreshId, FreshIdAllocator, MaybeFresh};
    pub use crate::grammar::cfg::{CfgBuilder, ChomskyNormalFormGrammar, ContextFreeGrammar};
    pub use crate::grammar::cfg_to_pda::CfgToPda;
    pub use crate::grammar::pda_to_cfg::{PdaNonTerminal, PdaToCfg};
    pub use crate::grammar::{Grammar, GrammarBuilder, GrammarClass, GrammarSymbol};
    pub use crate::graph::{bisimulation, LabeledGraph};
    pub use crate::nfa::conversion::{
        EpsilonRemoval, Minimization, PowerSetConstruction, ReachableOnly, SingleInitialState,
    };
    pub use crate::nfa::{Nfa, NfaBuilder, NfaTransition};
    pub use crate::pda::conversion::{
        AcceptingStatesToEmptyStack, EmptyStackToAcceptingStates, PdaSingleInitialState,
        StackWriteLimit, WildcardElimination,
    };
    pub use crate::pda::{AcceptanceStrategy, Pda, PdaBuilder, PdaTransition, StackGuard};
}
