//! A small C# world built on `SymbolArena`, shared by the end-to-end tests.

#![allow(dead_code)]

use sharpbind::{
    AccessibilityResolver, AssemblyId, Conversions, SymbolArena, SymbolGraph, SymbolId,
    SymbolKind, TypeKind, UseSiteDiagnostics,
};
use sharpbind::Accessibility::Public;

/// Core library types plus one application assembly.
pub struct World {
    pub arena: SymbolArena,
    pub corlib: AssemblyId,
    pub app: AssemblyId,
    pub object: SymbolId,
    pub int: SymbolId,
    pub long: SymbolId,
    pub string: SymbolId,
    pub dynamic: SymbolId,
}

impl World {
    pub fn new() -> Self {
        let mut arena = SymbolArena::new();
        let corlib = arena.add_assembly("System.Runtime");
        let app = arena.add_assembly("App");
        let object = arena.add_type(corlib, "Object", TypeKind::Class, Public);
        let int = arena.add_type(corlib, "Int32", TypeKind::Struct, Public);
        let long = arena.add_type(corlib, "Int64", TypeKind::Struct, Public);
        let string = arena.add_type(corlib, "String", TypeKind::Class, Public);
        let dynamic = arena.dynamic_type();
        for ty in [int, long, string] {
            arena.set_base_type(ty, object);
        }
        Self {
            arena,
            corlib,
            app,
            object,
            int,
            long,
            string,
            dynamic,
        }
    }

    pub fn conversions(&self) -> WorldConversions<'_> {
        WorldConversions {
            arena: &self.arena,
            object: self.object,
            widening: vec![(self.int, self.long)],
        }
    }
}

/// An expression operand: its natural type, if it has one.
#[derive(Clone, Copy, Debug)]
pub struct Operand {
    pub ty: Option<SymbolId>,
}

pub fn operand(ty: SymbolId) -> Operand {
    Operand { ty: Some(ty) }
}

/// Implicit conversions over the arena: identity, `dynamic`, numeric
/// widening, and reference conversions to base types.
pub struct WorldConversions<'a> {
    arena: &'a SymbolArena,
    object: SymbolId,
    widening: Vec<(SymbolId, SymbolId)>,
}

impl WorldConversions<'_> {
    fn is_kind(&self, ty: SymbolId, kind: SymbolKind) -> bool {
        self.arena.kind(ty) == kind
    }
}

impl Conversions for WorldConversions<'_> {
    type Type = SymbolId;
    type Expr = Operand;

    fn classify_implicit_conversion(
        &self,
        from: SymbolId,
        to: SymbolId,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> bool {
        if from == to {
            return true;
        }
        if self.is_error_type(from) || self.is_error_type(to) {
            return false;
        }
        if self.is_dynamic(from) || self.is_dynamic(to) || to == self.object {
            return true;
        }
        if self.widening.contains(&(from, to)) {
            return true;
        }
        self.arena.type_kind(from) == Some(TypeKind::Class)
            && AccessibilityResolver::new(self.arena)
                .inherits_from_or_implements_ignoring_construction(from, to, None, diagnostics)
    }

    fn classify_implicit_conversion_from_expression(
        &self,
        expr: &Operand,
        to: SymbolId,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> bool {
        expr.ty
            .is_some_and(|from| self.classify_implicit_conversion(from, to, diagnostics))
    }

    fn type_of(&self, expr: &Operand) -> Option<SymbolId> {
        expr.ty
    }

    fn is_error_type(&self, ty: SymbolId) -> bool {
        self.is_kind(ty, SymbolKind::ErrorType)
    }

    fn is_dynamic(&self, ty: SymbolId) -> bool {
        self.is_kind(ty, SymbolKind::DynamicType)
    }

    fn equals_ignoring_dynamic_and_tuple_names(&self, a: SymbolId, b: SymbolId) -> bool {
        let erase = |ty: SymbolId| if self.is_dynamic(ty) { self.object } else { ty };
        erase(a) == erase(b)
    }

    fn merge_equivalent_types(&self, a: SymbolId, b: SymbolId) -> SymbolId {
        if self.is_dynamic(b) { b } else { a }
    }
}
