//! The "better type" relation and the best-type scan.

use crate::conversions::Conversions;
use sharpbind_common::UseSiteDiagnostics;
use tracing::trace;

/// The single best type of `types`, or `None` if there is none.
///
/// Every other candidate must convert to the result. Duplicates should be
/// removed by the caller; order only matters for which of two merged types
/// is reported when candidates differ in `dynamic` or tuple names.
///
/// ```text
/// {int, long}          -> long
/// {int, long, string}  -> none
/// {object, dynamic}    -> dynamic
/// ```
pub fn get_best_type<C: Conversions + ?Sized>(
    types: &[C::Type],
    conversions: &C,
    diagnostics: &mut UseSiteDiagnostics,
) -> Option<C::Type> {
    match types {
        [] => return None,
        [only] => return Some(*only),
        _ => {}
    }

    // Forward pass: each candidate after `best_index` is worse than `best`.
    let mut best: Option<C::Type> = None;
    let mut best_index = 0usize;
    for (index, &ty) in types.iter().enumerate() {
        match best {
            None => {
                best = Some(ty);
                best_index = index;
            }
            Some(current) => match better(current, ty, conversions, diagnostics) {
                Some(winner) => {
                    best = Some(winner);
                    best_index = index;
                }
                None => {
                    trace!(?current, candidate = ?ty, "best type: no better type, restarting");
                    best = None;
                }
            },
        }
    }

    let mut best = best?;

    // Backward pass: "better" is not transitive, so confirm against every
    // candidate before the winner.
    for &ty in &types[..best_index] {
        let confirmed = better(best, ty, conversions, diagnostics);
        match confirmed {
            Some(winner) if conversions.equals_ignoring_dynamic_and_tuple_names(best, winner) => {
                best = winner;
            }
            _ => {
                trace!(?best, candidate = ?ty, "best type: rejected in backward pass");
                return None;
            }
        }
    }
    Some(best)
}

/// Which of `a` and `b` is the better common type, if either.
///
/// - an error type loses to anything
/// - a function type loses to a non-function type
/// - if only one converts to the other, the target wins
/// - if both convert, `dynamic` wins, then types equal up to `dynamic` and
///   tuple names merge, otherwise neither is better
pub fn better<C: Conversions + ?Sized>(
    a: C::Type,
    b: C::Type,
    conversions: &C,
    diagnostics: &mut UseSiteDiagnostics,
) -> Option<C::Type> {
    if conversions.is_error_type(a) {
        return Some(b);
    }
    if conversions.is_error_type(b) {
        return Some(a);
    }

    match (conversions.is_function_type(a), conversions.is_function_type(b)) {
        (true, false) => return Some(b),
        (false, true) => return Some(a),
        _ => {}
    }

    let a_to_b = conversions.classify_implicit_conversion(a, b, diagnostics);
    let b_to_a = conversions.classify_implicit_conversion(b, a, diagnostics);

    match (a_to_b, b_to_a) {
        (true, true) => {
            if conversions.is_dynamic(a) {
                Some(a)
            } else if conversions.is_dynamic(b) {
                Some(b)
            } else if conversions.equals_ignoring_dynamic_and_tuple_names(a, b) {
                Some(conversions.merge_equivalent_types(a, b))
            } else {
                None
            }
        }
        (true, false) => Some(b),
        (false, true) => Some(a),
        (false, false) => None,
    }
}
