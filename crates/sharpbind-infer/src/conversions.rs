//! The conversion capability the host compiler injects.

use sharpbind_common::UseSiteDiagnostics;
use std::fmt::Debug;
use std::hash::Hash;

/// Host conversion rules, consistent with those used by overload resolution.
///
/// Conversions are classified ignoring nullability. Implementations may
/// record use-site diagnostics (for example, a type from an unreferenced
/// assembly met while looking for user-defined conversions).
pub trait Conversions {
    /// Handle to a type. Equality is structural identity, so `(int a, int b)`
    /// and `(int, int)` are distinct values.
    type Type: Copy + Eq + Hash + Debug;

    /// A bound expression.
    type Expr;

    /// `true` if an implicit conversion exists from `from` to `to`.
    fn classify_implicit_conversion(
        &self,
        from: Self::Type,
        to: Self::Type,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> bool;

    /// `true` if `expr` converts implicitly to `to`. Unlike
    /// [`classify_implicit_conversion`](Self::classify_implicit_conversion)
    /// this sees the expression itself, so `null` converts to `string` and a
    /// constant `0` converts to an enum.
    fn classify_implicit_conversion_from_expression(
        &self,
        expr: &Self::Expr,
        to: Self::Type,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> bool;

    /// Natural type of `expr`; `None` for typeless expressions like `null`.
    fn type_of(&self, expr: &Self::Expr) -> Option<Self::Type>;

    fn is_error_type(&self, ty: Self::Type) -> bool;

    fn is_dynamic(&self, ty: Self::Type) -> bool;

    /// `true` for the natural "function type" of a lambda or method group.
    fn is_function_type(&self, _ty: Self::Type) -> bool {
        false
    }

    /// Equality that ignores `dynamic` versus `object` and tuple element names.
    fn equals_ignoring_dynamic_and_tuple_names(&self, a: Self::Type, b: Self::Type) -> bool;

    /// Merge two types equal under
    /// [`equals_ignoring_dynamic_and_tuple_names`](Self::equals_ignoring_dynamic_and_tuple_names).
    /// Must be symmetric.
    fn merge_equivalent_types(&self, a: Self::Type, b: Self::Type) -> Self::Type;

    /// The delegate type a function type stands for once inference is done.
    fn delegate_for_function_type(&self, ty: Self::Type) -> Self::Type {
        ty
    }
}
