//! Base-chain and interface walks over original definitions.

use rustc_hash::FxHashSet;
use sharpbind_common::UseSiteDiagnostics;
use sharpbind_common::diagnostics::diagnostic_messages;
use sharpbind_common::limits;
use sharpbind_symbols::{BasesBeingResolved, SymbolGraph, SymbolId};
use smallvec::SmallVec;
use tracing::trace;

/// `true` if `ty` is `base`, derives from it, or (for an interface `base`)
/// implements it, comparing original definitions at every step.
///
/// The walk stops on a repeated type, reporting `CIRCULAR_BASE_DEPENDENCY`,
/// or silently after `max_steps` base types; either way the answer is
/// "not found".
pub(crate) fn inherits_from_or_implements<G: SymbolGraph + ?Sized>(
    graph: &G,
    ty: SymbolId,
    base: SymbolId,
    bases_being_resolved: Option<&BasesBeingResolved<'_>>,
    max_steps: u32,
    diagnostics: &mut UseSiteDiagnostics,
) -> bool {
    let start = graph.original_definition(ty);
    let target = graph.original_definition(base);
    let target_is_interface = graph.is_interface(target);

    let mut visited: FxHashSet<SymbolId> = FxHashSet::default();
    let mut pending_interfaces: SmallVec<[SymbolId; 8]> = SmallVec::new();
    let mut current = Some(start);
    let mut previous = start;
    let mut steps = 0u32;

    while let Some(ty) = current {
        if ty == target {
            trace!(start = %start, target = %target, steps, "inheritance: found in base chain");
            return true;
        }
        if !visited.insert(ty) {
            diagnostics.report(
                diagnostic_messages::CIRCULAR_BASE_DEPENDENCY,
                &[graph.name(ty), graph.name(previous)],
            );
            trace!(start = %start, at = %ty, steps, "inheritance: cyclic base chain");
            break;
        }
        if steps >= max_steps {
            trace!(start = %start, at = %ty, steps, "inheritance: base chain too long");
            break;
        }
        steps += 1;
        if target_is_interface {
            pending_interfaces.extend(graph.interfaces(ty, bases_being_resolved, diagnostics));
        }
        previous = ty;
        current = graph
            .next_base_type(ty, bases_being_resolved, diagnostics)
            .map(|next| graph.original_definition(next));
    }

    if target_is_interface {
        return implements_interface(
            graph,
            pending_interfaces,
            target,
            bases_being_resolved,
            diagnostics,
        );
    }
    false
}

/// Breadth-first search of the interface closure of `roots` for `target`.
fn implements_interface<G: SymbolGraph + ?Sized>(
    graph: &G,
    roots: SmallVec<[SymbolId; 8]>,
    target: SymbolId,
    bases_being_resolved: Option<&BasesBeingResolved<'_>>,
    diagnostics: &mut UseSiteDiagnostics,
) -> bool {
    let mut seen: FxHashSet<SymbolId> = FxHashSet::default();
    let mut queue: std::collections::VecDeque<SymbolId> = roots.into_iter().collect();

    while let Some(interface) = queue.pop_front() {
        let interface = graph.original_definition(interface);
        if interface == target {
            return true;
        }
        if !seen.insert(interface) {
            continue;
        }
        if seen.len() as u32 >= limits::MAX_INTERFACE_SET_SIZE {
            trace!(target = %target, "inheritance: interface set limit reached");
            break;
        }
        queue.extend(graph.interfaces(interface, bases_being_resolved, diagnostics));
    }
    false
}

/// `true` if `within` is `container` or is nested (at any depth) inside it.
/// `container` must already be an original definition.
pub(crate) fn is_nested_within<G: SymbolGraph + ?Sized>(
    graph: &G,
    within: SymbolId,
    container: SymbolId,
    max_depth: u32,
) -> bool {
    let mut current = Some(graph.original_definition(within));
    let mut depth = 0u32;
    while let Some(ty) = current {
        if ty == container {
            return true;
        }
        depth += 1;
        if depth > max_depth {
            return false;
        }
        current = graph
            .containing_type(ty)
            .map(|outer| graph.original_definition(outer));
    }
    false
}

/// The outermost type enclosing `ty` (or `ty` itself).
pub(crate) fn outermost_type<G: SymbolGraph + ?Sized>(
    graph: &G,
    ty: SymbolId,
    max_depth: u32,
) -> SymbolId {
    let mut current = ty;
    let mut depth = 0u32;
    while let Some(outer) = graph.containing_type(current) {
        depth += 1;
        if depth > max_depth {
            break;
        }
        current = outer;
    }
    current
}
