//! `uat-agent` — the actor contracts of the `uat` permit market.
//!
//! # Crate layout
//!
//! | Module      | Contents                                            |
//! |-------------|-----------------------------------------------------|
//! | [`agent`]   | The [`Agent`] trait — bid/ask phases and callbacks  |
//! | [`factory`] | [`AgentFactory`] — per-tick onboarding seam         |
//!
//! # Design notes
//!
//! Agents are trait objects: the driver owns them as `Box<dyn Agent<R>>`
//! and addresses them by dense `AgentId`.  All market access during a phase
//! goes through the capability handle the driver passes in, so an agent can
//! neither hold onto the book between ticks nor act outside its phase.

pub mod agent;
pub mod factory;


pub use agent::Agent;
pub use factory::AgentFactory;
