//! Common types and utilities for the sharpbind semantic binder.
//!
//! This crate provides foundational pieces shared by the binder crates:
//! - Use-site diagnostics accumulator (`UseSiteDiagnostics`) and diagnostic codes
//! - Centralized limits for base-chain walks and type-argument recursion
//! - Resolver configuration (`ResolverOptions`)

// Use-site diagnostics threaded through accessibility and inference queries
pub mod diagnostics;
pub use diagnostics::{
    DiagnosticCategory, DiagnosticMessage, UseSiteDiagnostic, UseSiteDiagnostics, format_message,
};

// Centralized limits and thresholds
pub mod limits;

// Resolver configuration
pub mod options;
pub use options::ResolverOptions;
