//! Account-backed implementations of the engine's capability traits.
//!
//! Instruction handlers wrap the raw accounts they receive in these adapters
//! before handing them to the claim engine.

pub mod collaborators;
pub mod governance;
pub mod ledger;
pub mod minter;

pub use collaborators::*;
pub use governance::*;
pub use ledger::*;
pub use minter::*;
