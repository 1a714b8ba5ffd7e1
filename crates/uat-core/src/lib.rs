//! `uat-core` — foundational types for the `uat` permit-market framework.
//!
//! This crate is a dependency of every other `uat-*` crate.  It intentionally
//! has no `uat-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                      |
//! |-----------|-----------------------------------------------|
//! | [`ids`]   | `AgentId`                                     |
//! | [`time`]  | `Tick`                                        |
//! | [`value`] | `Value` — the common bid/ask currency type    |
//! | [`rng`]   | `SimRng` (driver-owned), `AgentRng` (per-call)|
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod ids;
pub mod rng;
pub mod time;
pub mod value;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::AgentId;
pub use rng::{AgentRng, SimRng};
pub use time::Tick;
pub use value::Value;
