//! Symbol accessibility for the sharpbind binder.
//!
//! Answers "is symbol `S` accessible from context `W`, optionally through a
//! qualifier of static type `T`?" over a host-supplied [`SymbolGraph`]:
//!
//! ```ignore
//! let resolver = AccessibilityResolver::new(&arena);
//! let mut diagnostics = UseSiteDiagnostics::new();
//! let outcome = resolver.is_symbol_accessible(
//!     field,
//!     AccessContext::Type(derived),
//!     Some(base),
//!     &mut diagnostics,
//! )?;
//! assert!(!outcome.accessible && outcome.failed_through_type_check);
//! ```
//!
//! [`SymbolGraph`]: sharpbind_symbols::SymbolGraph

pub mod cache;
pub mod error;
mod inheritance;
mod protected;
pub(crate) mod query_trace;
pub mod recursion;
pub mod resolver;

pub use cache::{AccessCache, AccessCacheStats, AccessKey};
pub use error::AccessError;
pub use resolver::{AccessContext, AccessOutcome, AccessibilityResolver};
