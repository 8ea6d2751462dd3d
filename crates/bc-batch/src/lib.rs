//! bc-batch: composition-to-mass batch calculator.
//!
//! Given a target composition in moles and a set of stock reagents from a
//! [`bc_catalog::CatalogSource`], this crate decomposes each reagent into
//! per-component weight fractions and solves the resulting linear system for
//! the reagent masses to weigh out.
//!
//! Modules:
//! - [`parse`]: composition strings like `1SiO2:0.02Al2O3:40H2O`
//! - [`fractions`]: per-reagent weight fraction rules by reagent kind
//! - [`session`]: selections, solving, and inverse mode
//! - [`rescale`]: adjusting solved amounts to laboratory quantities
//! - [`report`]: text tables and a serializable batch report
//!
//! # Example
//!
//! ```
//! use bc_batch::BatchSession;
//! use bc_catalog::{Category, MemoryCatalog, NewComponent, NewReagent, ReagentKind};
//!
//! let mut catalog = MemoryCatalog::new();
//! let silica = catalog.add_component(NewComponent::new(
//!     "Silicon dioxide",
//!     "SiO2",
//!     60.08,
//!     Category::Zeolite,
//! ));
//! let fumed = catalog.add_reagent(NewReagent::new(
//!     "Fumed silica",
//!     "SiO2",
//!     60.08,
//!     ReagentKind::Reactant,
//!     1.0,
//! ));
//! catalog.link(fumed, silica, 1.0)?;
//!
//! let mut session = BatchSession::new(&catalog);
//! session.select_component(silica, 1.0)?;
//! session.select_reagent(fumed)?;
//! session.solve()?;
//! assert!((session.masses()[0] - 60.08).abs() < 1e-9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod fractions;
pub mod parse;
pub mod report;
pub mod rescale;
pub mod session;

mod assemble;
mod solve;

pub use error::{BatchError, BatchResult};
pub use report::BatchReport;
pub use session::{BatchSession, SelectedComponent, SelectedReagent};
