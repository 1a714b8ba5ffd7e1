//! `uat-book` — the permit data model and the authoritative market ledger.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                     |
//! |------------|--------------------------------------------------------------|
//! | [`permit`] | [`Permit<R>`] — the `(region, tick)` unit of trade           |
//! | [`status`] | [`PermitState`] (engine-private), [`PublicStatus`] (per-agent) |
//! | [`book`]   | [`PermitBook<R>`] sliding window, [`BookEntry`], [`BookView`] |
//! | [`access`] | [`BidContext`]/[`AskContext`] — phase capability handles     |
//!
//! # Design notes
//!
//! The book is a deque of per-tick buckets; bucket `i` holds the permits for
//! tick `front + i`, keyed by region (the tick is the bucket index, so it is
//! not repeated in the key).  Buckets and entries materialise on first touch
//! with the first-issuance `OnSale` state, and the head bucket is dropped
//! whole when the clock advances — permits never outlive their tick.
//!
//! Mutation during agent phases goes exclusively through the capability
//! handles in [`access`], which encode the auction rules: a bid must
//! strictly improve on both the listed minimum and the running highest; an
//! ask must come from the current owner and is deferred until the phase
//! ends.  The driver in `uat-sim` is the only caller that touches
//! [`PermitBook::entry`] directly.

pub mod access;
pub mod book;
pub mod permit;
pub mod status;


pub use access::{AskContext, BidContext, PendingAsk};
pub use book::{BookEntry, BookView, PermitBook};
pub use permit::Permit;
pub use status::{PermitState, PublicStatus};
