//! bc-core: stable foundation for batchcalc.
//!
//! Contains:
//! - ids (compact IDs for catalog records)
//! - numeric (Real + tolerances + float guards)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{BcError, BcResult};
pub use ids::*;
pub use numeric::*;
