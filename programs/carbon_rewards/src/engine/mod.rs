//! Claim state machine and reward engine.
//!
//! Everything here is independent of account loading: collaborators and the
//! claim ledger are reached through the traits in [`collaborators`] and
//! [`ledger`], so the instruction handlers plug in account-backed adapters and
//! the unit tests plug in in-memory fakes.

pub mod admin;
pub mod batch;
pub mod calculator;
pub mod collaborators;
pub mod ledger;
pub mod orchestrator;

pub use collaborators::*;
pub use ledger::*;
pub use orchestrator::*;
