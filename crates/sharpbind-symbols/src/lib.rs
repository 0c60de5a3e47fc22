//! Symbol graph for the sharpbind binder.
//!
//! The binder never builds or mutates symbols; it queries a host-owned graph
//! through [`SymbolGraph`]. This crate defines that contract, the enums that
//! classify symbols, the assembly friendship relation, and [`SymbolArena`],
//! a reference implementation used by tests and small hosts.

pub mod arena;
pub mod assembly;
pub mod graph;
pub mod symbol;

pub use arena::{SymbolArena, SymbolData};
pub use assembly::{AssemblyData, AssemblyTable, NoTrustGroups, SubmissionChainPolicy, TrustPolicy};
pub use graph::{BasesBeingResolved, SymbolGraph};
pub use symbol::{Accessibility, AssemblyId, FileId, SymbolId, SymbolKind, TypeKind};
