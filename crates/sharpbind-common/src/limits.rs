//! Centralized limits for the binder's recursive queries.
//!
//! Well-formed programs have finite, acyclic inheritance and type-argument
//! structure, so these limits only matter for ill-formed input (cyclic bases
//! from metadata, pathological generic nesting). Hitting a limit never panics:
//! the query answers conservatively and records a use-site diagnostic.

/// Maximum number of base types visited in one inheritance walk.
///
/// Bounds `inherits_from_or_implements_ignoring_construction` and the
/// protected-access walk. Real inheritance chains are short; the walk gives
/// up on a longer one without a diagnostic. Cycles are caught separately by
/// revisiting a type:
///
/// ```csharp
/// class A : B {}
/// class B : A {}   // CS0146, walk from A stops when it reaches A again
/// ```
pub const MAX_BASE_CHAIN_DEPTH: u32 = 512;

/// Maximum number of interfaces collected while checking interface
/// inheritance for a protected member declared in an interface.
pub const MAX_INTERFACE_SET_SIZE: u32 = 4_096;

/// Maximum nesting depth of type arguments checked for accessibility.
///
/// ```csharp
/// List<List<List<List</* ... */>>>> x;
/// ```
///
/// When exceeded the remaining arguments are assumed accessible and
/// `CS8078` is recorded as a use-site diagnostic.
pub const MAX_TYPE_ARGUMENT_NESTING: u32 = 100;

/// Maximum depth of type containment (`Outer.Inner.Innermost...`) walked when
/// testing whether a context is nested inside a type.
pub const MAX_CONTAINMENT_DEPTH: u32 = 256;
