//! Tests for the per-resolver memo and for sharing a resolver across threads.

use rayon::prelude::*;
use sharpbind_access::{AccessContext, AccessOutcome, AccessibilityResolver};
use sharpbind_common::diagnostics::diagnostic_codes;
use sharpbind_common::{ResolverOptions, UseSiteDiagnostics};
use sharpbind_symbols::{
    Accessibility, BasesBeingResolved, SymbolArena, SymbolId, SymbolKind, TypeKind,
};

struct Fixture {
    arena: SymbolArena,
    queries: Vec<(SymbolId, AccessContext, Option<SymbolId>)>,
}

fn fixture() -> Fixture {
    let mut arena = SymbolArena::new();
    let lib = arena.add_assembly("Lib");
    let app = arena.add_assembly("App");
    let base = arena.add_type(lib, "Base", TypeKind::Class, Accessibility::Public);
    let derived = arena.add_type(app, "Derived", TypeKind::Class, Accessibility::Public);
    arena.set_base_type(derived, base);
    let other = arena.add_type(app, "Other", TypeKind::Class, Accessibility::Public);
    let hidden = arena.add_type(lib, "Hidden", TypeKind::Class, Accessibility::Internal);

    let mut members = Vec::new();
    for acc in [
        Accessibility::Private,
        Accessibility::ProtectedAndInternal,
        Accessibility::Protected,
        Accessibility::Internal,
        Accessibility::ProtectedOrInternal,
        Accessibility::Public,
    ] {
        members.push(arena.add_member(base, "m", SymbolKind::Method, acc));
        members.push(arena.add_member(hidden, "h", SymbolKind::Field, acc));
    }

    let contexts = [
        AccessContext::Type(base),
        AccessContext::Type(derived),
        AccessContext::Type(other),
        AccessContext::Assembly(lib),
        AccessContext::Assembly(app),
    ];
    let mut queries = Vec::new();
    for &member in &members {
        for within in contexts {
            for through in [None, Some(base), Some(derived)] {
                queries.push((member, within, through));
            }
        }
    }
    Fixture { arena, queries }
}

fn answer(
    resolver: &AccessibilityResolver<'_, SymbolArena>,
    (symbol, within, through): (SymbolId, AccessContext, Option<SymbolId>),
) -> AccessOutcome {
    let mut diags = UseSiteDiagnostics::new();
    resolver
        .is_symbol_accessible(symbol, within, through, &mut diags)
        .expect("well-formed query")
}

#[test]
fn test_memoized_answers_match_direct_answers() {
    let f = fixture();
    let direct = AccessibilityResolver::new(&f.arena);
    let memo = AccessibilityResolver::with_options(
        &f.arena,
        ResolverOptions::default().with_memoization(true),
    );

    for &query in &f.queries {
        let expected = answer(&direct, query);
        assert_eq!(answer(&memo, query), expected, "first call {query:?}");
        assert_eq!(answer(&memo, query), expected, "cached call {query:?}");
    }

    let stats = memo.cache_stats().expect("memoization enabled");
    assert_eq!(stats.entries, f.queries.len());
    assert_eq!(stats.hits, f.queries.len() as u64);
    assert!(direct.cache_stats().is_none());
}

#[test]
fn test_answers_with_diagnostics_are_not_memoized() {
    let mut arena = SymbolArena::new();
    let asm = arena.add_assembly("App");
    let base = arena.add_type(asm, "Base", TypeKind::Class, Accessibility::Public);
    let x = arena.add_member(base, "X", SymbolKind::Field, Accessibility::Protected);
    let a = arena.add_type(asm, "A", TypeKind::Class, Accessibility::Public);
    let b = arena.add_type(asm, "B", TypeKind::Class, Accessibility::Public);
    arena.set_base_type(a, b);
    arena.set_base_type(b, a);

    let options = ResolverOptions::from_json(r#"{ "memoize": true }"#).expect("valid options");
    let resolver = AccessibilityResolver::with_options(&arena, options);

    for _ in 0..2 {
        let mut diags = UseSiteDiagnostics::new();
        let outcome = resolver
            .is_symbol_accessible(x, AccessContext::Type(a), None, &mut diags)
            .expect("well-formed query");
        assert!(!outcome.accessible);
        let codes: Vec<u32> = diags.iter().map(|d| d.code).collect();
        assert_eq!(codes, vec![diagnostic_codes::CIRCULAR_BASE_DEPENDENCY]);
    }
    assert_eq!(resolver.cache_stats().map(|s| s.entries), Some(0));
}

#[test]
fn test_discarding_caller_does_not_poison_memo() {
    let mut arena = SymbolArena::new();
    let asm = arena.add_assembly("App");
    let missing = arena.missing_type("Vendor.Widget", "Vendor");
    let base = arena.add_type(asm, "Base", TypeKind::Class, Accessibility::Public);
    let x = arena.add_member(base, "X", SymbolKind::Field, Accessibility::Protected);
    let widget = arena.add_type(asm, "MyWidget", TypeKind::Class, Accessibility::Public);
    arena.set_base_type(widget, missing);

    let resolver = AccessibilityResolver::with_options(
        &arena,
        ResolverOptions::default().with_memoization(true),
    );

    let mut discarded = UseSiteDiagnostics::discarded();
    resolver
        .is_symbol_accessible(x, AccessContext::Type(widget), None, &mut discarded)
        .expect("well-formed query");
    assert!(discarded.is_empty());

    let mut diags = UseSiteDiagnostics::new();
    resolver
        .is_symbol_accessible(x, AccessContext::Type(widget), None, &mut diags)
        .expect("well-formed query");
    assert_eq!(diags.len(), 1);
}

#[test]
fn test_shared_resolver_across_threads() {
    let f = fixture();
    let direct = AccessibilityResolver::new(&f.arena);
    let expected: Vec<AccessOutcome> = f.queries.iter().map(|&q| answer(&direct, q)).collect();

    let memo = AccessibilityResolver::with_options(
        &f.arena,
        ResolverOptions::default().with_memoization(true),
    );
    for _ in 0..4 {
        let parallel: Vec<AccessOutcome> =
            f.queries.par_iter().map(|&q| answer(&memo, q)).collect();
        assert_eq!(parallel, expected);
    }
}

#[test]
fn test_bases_being_resolved_bypass_the_memo() {
    let mut arena = SymbolArena::new();
    let asm = arena.add_assembly("App");
    let base = arena.add_type(asm, "Base", TypeKind::Class, Accessibility::Public);
    let x = arena.add_member(base, "X", SymbolKind::Method, Accessibility::Protected);
    let derived = arena.add_type(asm, "Derived", TypeKind::Class, Accessibility::Public);
    arena.set_base_type(derived, base);

    let resolver = AccessibilityResolver::with_options(
        &arena,
        ResolverOptions::default().with_memoization(true),
    );
    let within = AccessContext::Type(derived);
    let mut diags = UseSiteDiagnostics::new();

    // While Derived's bases are being resolved its base chain is invisible.
    let resolving = BasesBeingResolved::new(derived);
    let outcome = resolver
        .is_symbol_accessible_resolving_bases(x, within, None, Some(&resolving), &mut diags)
        .expect("well-formed query");
    assert!(!outcome.accessible);
    assert_eq!(resolver.cache_stats().map(|s| s.entries), Some(0));

    let outcome = resolver
        .is_symbol_accessible(x, within, None, &mut diags)
        .expect("well-formed query");
    assert!(outcome.accessible);
    assert_eq!(resolver.cache_stats().map(|s| s.entries), Some(1));
    assert!(diags.is_empty());
}
