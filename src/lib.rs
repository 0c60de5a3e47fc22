//! sharpbind: two semantic queries of a C# binder.
//!
//! - [`AccessibilityResolver`] decides whether a symbol may be referenced from
//!   a type or assembly context, optionally through a qualifier type.
//! - [`get_best_type`], [`infer_best_type`] and
//!   [`infer_best_type_for_conditional_operator`] pick the best common type of
//!   a set of candidate types or expressions.
//!
//! Both operate over host-owned data: symbols through
//! [`SymbolGraph`](symbols::SymbolGraph) and conversions through
//! [`Conversions`](infer::Conversions). [`SymbolArena`] is a ready-made symbol
//! graph for tests and small hosts.

// Re-export the member crates under short names
pub use sharpbind_access as access;
pub use sharpbind_common as common;
pub use sharpbind_infer as infer;
pub use sharpbind_symbols as symbols;

// Tracing subscriber setup for hosts and test runs
pub mod tracing_config;

pub use sharpbind_access::{
    AccessCacheStats, AccessContext, AccessError, AccessOutcome, AccessibilityResolver,
};
pub use sharpbind_common::{ResolverOptions, UseSiteDiagnostic, UseSiteDiagnostics};
pub use sharpbind_infer::{
    BestTypeResult, Conversions, better, get_best_type, infer_best_type,
    infer_best_type_for_conditional_operator,
};
pub use sharpbind_symbols::{
    Accessibility, AssemblyId, BasesBeingResolved, FileId, SymbolArena, SymbolGraph, SymbolId,
    SymbolKind, TypeKind,
};
