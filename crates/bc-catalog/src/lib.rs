//! bc-catalog: reagent/component catalog for batchcalc.
//!
//! Provides:
//! - Record types (components, reagents, stoichiometric links, reactions)
//! - The `CatalogSource` read-only query trait consumed by the calculator
//! - `MemoryCatalog`, a vec-backed implementation with an insertion API
//! - A builtin catalog of common zeolite-synthesis chemistry
//!
//! # Architecture
//!
//! The calculator never owns catalog data and never mutates it; it borrows a
//! `&dyn CatalogSource` per session. Records are plain values linked by ids,
//! so external stores (a database, a file) can implement the trait without
//! sharing any object graph with the core.
//!
//! # Example
//!
//! ```
//! use bc_catalog::{CatalogSource, builtin_catalog};
//!
//! let catalog = builtin_catalog();
//! let silica = catalog.find_component("SiO2").unwrap().clone();
//! let sources = catalog.reagents_sourcing(&[silica.id]).unwrap();
//! assert!(sources.iter().any(|r| r.name == "Fumed silica"));
//! ```

pub mod builtin;
pub mod error;
pub mod memory;
pub mod records;
pub mod source;

// Re-exports for ergonomics
pub use builtin::builtin_catalog;
pub use error::{CatalogError, CatalogResult};
pub use memory::{MemoryCatalog, NewComponent, NewReagent};
pub use records::{
    Category, ComponentRecord, ReactionRecord, ReagentKind, ReagentRecord, StoichiometricLink,
    WATER_FORMULA,
};
pub use source::CatalogSource;
