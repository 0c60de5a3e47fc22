//! Tests for best-type inference over expressions.

mod support;

use sharpbind_common::UseSiteDiagnostics;
use sharpbind_infer::{BestTypeResult, infer_best_type, infer_best_type_for_conditional_operator};
use support::{Expr, TestConversions, Ty, null_literal, typed};

fn conditional(e1: &Expr, e2: &Expr) -> BestTypeResult<Ty> {
    let conversions = TestConversions::default();
    let mut diags = UseSiteDiagnostics::new();
    infer_best_type_for_conditional_operator(e1, e2, &conversions, &mut diags)
}

fn of_exprs(exprs: &[Expr]) -> BestTypeResult<Ty> {
    let conversions = TestConversions::default();
    let mut diags = UseSiteDiagnostics::new();
    infer_best_type(exprs, &conversions, &mut diags)
}

// =============================================================================
// Conditional operator
// =============================================================================

#[test]
fn test_conditional_widens_to_common_type() {
    let result = conditional(&typed(Ty::Int), &typed(Ty::Long));
    assert_eq!(result.best, Some(Ty::Long));
    // int is not a candidate: the long operand does not convert to it.
    assert!(!result.had_multiple_candidates);
}

#[test]
fn test_conditional_same_type_is_one_candidate() {
    let result = conditional(&typed(Ty::Str), &typed(Ty::Str));
    assert_eq!(
        result,
        BestTypeResult {
            best: Some(Ty::Str),
            had_multiple_candidates: false,
        }
    );
}

#[test]
fn test_conditional_with_null_operand() {
    let result = conditional(&typed(Ty::Str), &null_literal());
    assert_eq!(result.best, Some(Ty::Str));

    let result = conditional(&null_literal(), &typed(Ty::Int));
    assert_eq!(result.best, None);
    assert!(!result.had_multiple_candidates);
}

#[test]
fn test_conditional_unrelated_operands_have_no_type() {
    let result = conditional(&typed(Ty::Dog), &typed(Ty::Cat));
    assert_eq!(result.best, None);
    assert!(!result.had_multiple_candidates);
}

#[test]
fn test_conditional_mutually_convertible_operands() {
    let result = conditional(&typed(Ty::Object), &typed(Ty::Dynamic));
    assert_eq!(result.best, Some(Ty::Dynamic));
    assert!(result.had_multiple_candidates);
}

#[test]
fn test_conditional_error_operand_short_circuits() {
    for (e1, e2) in [
        (typed(Ty::Error), typed(Ty::Int)),
        (typed(Ty::Int), typed(Ty::Error)),
        (null_literal(), typed(Ty::Error)),
    ] {
        let conversions = TestConversions::default();
        let mut diags = UseSiteDiagnostics::new();
        let result = infer_best_type_for_conditional_operator(&e1, &e2, &conversions, &mut diags);
        assert_eq!(result.best, Some(Ty::Error));
        assert!(!result.had_multiple_candidates);
    }
}

// =============================================================================
// Expression sets
// =============================================================================

#[test]
fn test_array_initializer_best_type() {
    let exprs = [typed(Ty::Int), typed(Ty::Long), typed(Ty::Int)];
    let result = of_exprs(&exprs);
    assert_eq!(result.best, Some(Ty::Long));
    assert!(result.had_multiple_candidates);
}

#[test]
fn test_duplicates_collapse_to_one_candidate() {
    let exprs = [typed(Ty::Str), typed(Ty::Str), null_literal()];
    let result = of_exprs(&exprs);
    assert_eq!(
        result,
        BestTypeResult {
            best: Some(Ty::Str),
            had_multiple_candidates: false,
        }
    );
}

#[test]
fn test_no_typed_expressions() {
    let result = of_exprs(&[null_literal(), null_literal()]);
    assert_eq!(result.best, None);
    assert!(!result.had_multiple_candidates);
    assert_eq!(of_exprs(&[]).best, None);
}

#[test]
fn test_int_long_string_expressions_have_no_best_type() {
    let exprs = [typed(Ty::Int), typed(Ty::Long), typed(Ty::Str)];
    let result = of_exprs(&exprs);
    assert_eq!(result.best, None);
    assert!(result.had_multiple_candidates);
}

#[test]
fn test_error_expression_short_circuits() {
    let exprs = [typed(Ty::Int), typed(Ty::Error), typed(Ty::Str)];
    let result = of_exprs(&exprs);
    assert_eq!(result.best, Some(Ty::Error));
    assert!(!result.had_multiple_candidates);
}

#[test]
fn test_lambda_returns_infer_delegate_type() {
    let result = of_exprs(&[typed(Ty::Lambda)]);
    assert_eq!(result.best, Some(Ty::Action));

    // A lambda loses to any other candidate.
    let result = of_exprs(&[typed(Ty::Lambda), typed(Ty::Action)]);
    assert_eq!(result.best, Some(Ty::Action));
}

#[test]
fn test_accepts_any_expression_iterator() {
    let owned = vec![typed(Ty::Dog), typed(Ty::Animal)];
    let conversions = TestConversions::default();
    let mut diags = UseSiteDiagnostics::new();
    let result = infer_best_type(owned.iter().rev(), &conversions, &mut diags);
    assert_eq!(result.best, Some(Ty::Animal));
}
