//! A tiny type universe with C#-like implicit conversions.

#![allow(dead_code)]

use sharpbind_common::UseSiteDiagnostics;
use sharpbind_infer::Conversions;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Ty {
    Int,
    Long,
    Str,
    Object,
    Dynamic,
    Error,
    Animal,
    Dog,
    Cat,
    /// `(int, int)`, with or without element names.
    Pair { named: bool },
    /// Natural function type of a lambda.
    Lambda,
    /// `System.Action`
    Action,
}

#[derive(Clone, Debug)]
pub struct Expr {
    pub ty: Option<Ty>,
    /// Extra targets this expression converts to beyond its type's conversions
    /// (`null` to `string`, say).
    pub also_converts_to: Vec<Ty>,
}

pub fn typed(ty: Ty) -> Expr {
    Expr {
        ty: Some(ty),
        also_converts_to: Vec::new(),
    }
}

pub fn null_literal() -> Expr {
    Expr {
        ty: None,
        also_converts_to: vec![Ty::Str, Ty::Object, Ty::Dynamic, Ty::Animal, Ty::Dog, Ty::Cat],
    }
}

/// Conversions over [`Ty`], counting how often the host was asked.
#[derive(Default)]
pub struct TestConversions {
    pub queries: std::cell::Cell<u32>,
}

fn converts(from: Ty, to: Ty) -> bool {
    use Ty::*;
    if from == to {
        return true;
    }
    match (from, to) {
        (Error, _) | (_, Error) => false,
        (_, Dynamic) | (Dynamic, _) => true,
        (_, Object) => true,
        (Int, Long) => true,
        (Dog | Cat, Animal) => true,
        (Pair { .. }, Pair { .. }) => true,
        (Lambda, Action) => true,
        _ => false,
    }
}

impl Conversions for TestConversions {
    type Type = Ty;
    type Expr = Expr;

    fn classify_implicit_conversion(
        &self,
        from: Ty,
        to: Ty,
        _diagnostics: &mut UseSiteDiagnostics,
    ) -> bool {
        self.queries.set(self.queries.get() + 1);
        converts(from, to)
    }

    fn classify_implicit_conversion_from_expression(
        &self,
        expr: &Expr,
        to: Ty,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> bool {
        if expr.also_converts_to.contains(&to) {
            return true;
        }
        expr.ty
            .is_some_and(|from| self.classify_implicit_conversion(from, to, diagnostics))
    }

    fn type_of(&self, expr: &Expr) -> Option<Ty> {
        expr.ty
    }

    fn is_error_type(&self, ty: Ty) -> bool {
        ty == Ty::Error
    }

    fn is_dynamic(&self, ty: Ty) -> bool {
        ty == Ty::Dynamic
    }

    fn is_function_type(&self, ty: Ty) -> bool {
        ty == Ty::Lambda
    }

    fn equals_ignoring_dynamic_and_tuple_names(&self, a: Ty, b: Ty) -> bool {
        let erase = |ty: Ty| match ty {
            Ty::Dynamic => Ty::Object,
            Ty::Pair { .. } => Ty::Pair { named: false },
            other => other,
        };
        erase(a) == erase(b)
    }

    fn merge_equivalent_types(&self, a: Ty, b: Ty) -> Ty {
        match (a, b) {
            (Ty::Dynamic, _) | (_, Ty::Dynamic) => Ty::Dynamic,
            // Names survive only where both sides agree.
            (Ty::Pair { named: x }, Ty::Pair { named: y }) => Ty::Pair { named: x && y },
            (a, _) => a,
        }
    }

    fn delegate_for_function_type(&self, ty: Ty) -> Ty {
        if ty == Ty::Lambda { Ty::Action } else { ty }
    }
}
