//! Session layer
//!
//! Explicit per-session state and the compute-once table cache.

mod cache;
mod ledger;
mod state;

pub use cache::TableCache;
pub use ledger::Ledger;
pub use state::Session;
