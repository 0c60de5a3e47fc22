//! Best type of a set of expressions.

use crate::best_type::get_best_type;
use crate::conversions::Conversions;
use indexmap::IndexSet;
use sharpbind_common::UseSiteDiagnostics;
use smallvec::SmallVec;
use tracing::debug;

/// Result of inferring a best type from expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BestTypeResult<T> {
    pub best: Option<T>,
    /// More than one distinct candidate type was considered. Callers use this
    /// to word the "no best type" diagnostic.
    pub had_multiple_candidates: bool,
}

impl<T> BestTypeResult<T> {
    fn error(ty: T) -> Self {
        Self {
            best: Some(ty),
            had_multiple_candidates: false,
        }
    }
}

/// Best type for `cond ? e1 : e2`.
///
/// A type is a candidate only if the other operand converts to it. An
/// operand of error type short-circuits to that type.
pub fn infer_best_type_for_conditional_operator<C: Conversions + ?Sized>(
    e1: &C::Expr,
    e2: &C::Expr,
    conversions: &C,
    diagnostics: &mut UseSiteDiagnostics,
) -> BestTypeResult<C::Type> {
    let mut candidates: SmallVec<[C::Type; 2]> = SmallVec::new();

    let t1 = conversions.type_of(e1);
    if let Some(t1) = t1 {
        if conversions.is_error_type(t1) {
            return BestTypeResult::error(t1);
        }
        if conversions.classify_implicit_conversion_from_expression(e2, t1, diagnostics) {
            candidates.push(t1);
        }
    }

    if let Some(t2) = conversions.type_of(e2) {
        if conversions.is_error_type(t2) {
            return BestTypeResult::error(t2);
        }
        if Some(t2) != t1
            && conversions.classify_implicit_conversion_from_expression(e1, t2, diagnostics)
        {
            candidates.push(t2);
        }
    }

    let result = BestTypeResult {
        best: get_best_type(&candidates, conversions, diagnostics),
        had_multiple_candidates: candidates.len() > 1,
    };
    debug!(?candidates, best = ?result.best, "conditional operator best type");
    result
}

/// Best type of `exprs`: array initializers, switch arms, lambda returns.
///
/// Distinct natural types are collected in first-occurrence order;
/// typeless expressions contribute nothing. Any error type short-circuits.
/// A function-type result is replaced by its delegate type.
pub fn infer_best_type<'e, C, I>(
    exprs: I,
    conversions: &C,
    diagnostics: &mut UseSiteDiagnostics,
) -> BestTypeResult<C::Type>
where
    C: Conversions + ?Sized,
    C::Expr: 'e,
    I: IntoIterator<Item = &'e C::Expr>,
{
    let mut candidates: IndexSet<C::Type> = IndexSet::new();
    for expr in exprs {
        let Some(ty) = conversions.type_of(expr) else {
            continue;
        };
        if conversions.is_error_type(ty) {
            return BestTypeResult::error(ty);
        }
        candidates.insert(ty);
    }

    let candidates: Vec<C::Type> = candidates.into_iter().collect();
    let best = get_best_type(&candidates, conversions, diagnostics).map(|ty| {
        if conversions.is_function_type(ty) {
            conversions.delegate_for_function_type(ty)
        } else {
            ty
        }
    });
    debug!(?candidates, ?best, "best type of expressions");
    BestTypeResult {
        best,
        had_multiple_candidates: candidates.len() > 1,
    }
}
