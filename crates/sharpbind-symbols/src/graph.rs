//! The read-only symbol graph the binder queries.
//!
//! The host compiler owns the symbol table. Accessibility checks only
//! traverse it: containment, inheritance, declared accessibility, and the
//! assembly friendship relation. `SymbolGraph` is that traversal surface.

use crate::symbol::{Accessibility, AssemblyId, FileId, SymbolId, SymbolKind, TypeKind};
use sharpbind_common::UseSiteDiagnostics;
use smallvec::SmallVec;

/// Cycle-guard token naming the types whose bases are currently being
/// resolved by the host.
///
/// The binder threads it through every base-type lookup without looking
/// inside. The host uses it to avoid re-entering base resolution for a type
/// that is already on the stack.
#[derive(Clone, Copy, Debug)]
pub struct BasesBeingResolved<'a> {
    head: SymbolId,
    tail: Option<&'a BasesBeingResolved<'a>>,
}

impl<'a> BasesBeingResolved<'a> {
    pub fn new(ty: SymbolId) -> Self {
        Self {
            head: ty,
            tail: None,
        }
    }

    /// A new token with `ty` pushed on top of `self`.
    pub fn prepend(&'a self, ty: SymbolId) -> BasesBeingResolved<'a> {
        BasesBeingResolved {
            head: ty,
            tail: Some(self),
        }
    }

    pub fn contains(&self, ty: SymbolId) -> bool {
        self.iter().any(|t| t == ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = SymbolId> + '_ {
        let mut cursor = Some(self);
        std::iter::from_fn(move || {
            let node = cursor?;
            cursor = node.tail;
            Some(node.head)
        })
    }
}

/// Read-only access to the host symbol table.
///
/// Every `SymbolId` passed in must have come from the same graph.
/// Implementations must be free of interior mutation visible to callers so
/// that queries can run concurrently on a shared reference.
pub trait SymbolGraph {
    fn kind(&self, sym: SymbolId) -> SymbolKind;

    /// Display name, used for diagnostics and tracing.
    fn name(&self, sym: SymbolId) -> &str;

    fn declared_accessibility(&self, sym: SymbolId) -> Accessibility;

    fn containing_type(&self, sym: SymbolId) -> Option<SymbolId>;

    fn containing_assembly(&self, sym: SymbolId) -> Option<AssemblyId>;

    fn is_static(&self, sym: SymbolId) -> bool;

    /// The unconstructed definition. Definitions map to themselves.
    fn original_definition(&self, sym: SymbolId) -> SymbolId;

    fn is_definition(&self, sym: SymbolId) -> bool {
        self.original_definition(sym) == sym
    }

    /// Kind of a named type. `None` for symbols that are not named types.
    fn type_kind(&self, ty: SymbolId) -> Option<TypeKind>;

    fn is_interface(&self, ty: SymbolId) -> bool {
        self.type_kind(ty) == Some(TypeKind::Interface)
    }

    /// Type arguments of a constructed generic, in declaration order.
    fn type_arguments(&self, ty: SymbolId) -> &[SymbolId];

    /// Element type of an array or pointed-at type of a pointer.
    fn element_type(&self, ty: SymbolId) -> Option<SymbolId>;

    /// Parameter and return types of a function pointer type.
    fn signature_types(&self, ty: SymbolId) -> &[SymbolId];

    /// File that declares a file-local type; `None` for ordinary types.
    fn file_local_to(&self, ty: SymbolId) -> Option<FileId>;

    /// File declaring a type, if it was declared in source.
    fn declaring_file(&self, ty: SymbolId) -> Option<FileId>;

    /// The direct base class, if resolved.
    ///
    /// Implementations may append use-site diagnostics (for example, a base
    /// type defined in an unreferenced assembly) and must return `None` for
    /// a type whose bases are listed in `bases_being_resolved`.
    fn next_base_type(
        &self,
        ty: SymbolId,
        bases_being_resolved: Option<&BasesBeingResolved<'_>>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> Option<SymbolId>;

    /// Directly declared interfaces.
    fn interfaces(
        &self,
        ty: SymbolId,
        bases_being_resolved: Option<&BasesBeingResolved<'_>>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> SmallVec<[SymbolId; 4]>;

    /// `true` if code in `from` may see internals of `to`.
    fn has_internal_access_to(&self, from: AssemblyId, to: AssemblyId) -> bool;
}
