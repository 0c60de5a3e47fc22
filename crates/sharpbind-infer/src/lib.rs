//! Best-common-type inference for the sharpbind binder.
//!
//! Used when binding implicitly typed array creation (`new[] { 1, 2L }`), the
//! conditional operator, switch expressions, and lambdas with several
//! `return` statements. The host supplies its conversion rules through
//! [`Conversions`]; this crate only orders candidates.
//!
//! "Better type" is not transitive once `dynamic` and tuple element names
//! are involved, so [`get_best_type`] scans forward once and then confirms
//! the winner against every candidate it skipped.

pub mod best_type;
pub mod conversions;
pub mod expressions;

pub use best_type::{better, get_best_type};
pub use conversions::Conversions;
pub use expressions::{BestTypeResult, infer_best_type, infer_best_type_for_conditional_operator};
