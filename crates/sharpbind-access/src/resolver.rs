//! `AccessibilityResolver`: is symbol `S` accessible from context `W`,
//! optionally through a qualifier of static type `T`?
//!
//! Dispatch by symbol kind:
//!
//! | Kind | Rule |
//! |---|---|
//! | array, pointer | element type, through-type dropped |
//! | function pointer | every parameter and return type |
//! | error type | accessible |
//! | type parameter, parameter, local, label, namespace, dynamic, ... | accessible |
//! | named type | type arguments, file-local rule, then top-level or nested rule |
//! | method, property, event, field | containing type, then declared accessibility |
//!
//! Members and nested types share [`AccessibilityResolver::member_accessible`];
//! the protected rule lives in `protected.rs`.

use crate::cache::{AccessCache, AccessCacheStats, AccessKey};
use crate::error::AccessError;
use crate::inheritance;
use crate::query_trace;
use crate::recursion::{Nesting, TypeArgumentGuard};
use sharpbind_common::diagnostics::diagnostic_messages;
use sharpbind_common::{ResolverOptions, UseSiteDiagnostics, limits};
use sharpbind_symbols::{
    Accessibility, AssemblyId, BasesBeingResolved, FileId, SymbolGraph, SymbolId, SymbolKind,
    TypeKind,
};
use tracing::{debug, trace};

/// The place an access is checked from. Type contexts are always
/// definitions, never constructed generics.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum AccessContext {
    Type(SymbolId),
    Assembly(AssemblyId),
}

impl AccessContext {
    pub fn as_type(self) -> Option<SymbolId> {
        match self {
            Self::Type(ty) => Some(ty),
            Self::Assembly(_) => None,
        }
    }
}

/// Answer to an accessibility query.
///
/// `failed_through_type_check` is only ever set on inaccessible outcomes: the
/// member would have been accessible as a protected member of some enclosing
/// type's base, but the qualifier's type does not derive from that type.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct AccessOutcome {
    pub accessible: bool,
    pub failed_through_type_check: bool,
}

impl AccessOutcome {
    pub const ACCESSIBLE: Self = Self {
        accessible: true,
        failed_through_type_check: false,
    };

    pub const INACCESSIBLE: Self = Self {
        accessible: false,
        failed_through_type_check: false,
    };

    #[inline]
    pub const fn from_bool(accessible: bool) -> Self {
        if accessible {
            Self::ACCESSIBLE
        } else {
            Self::INACCESSIBLE
        }
    }
}

/// Mutable state of one top-level query.
pub(crate) struct QueryState<'d, 'b> {
    pub(crate) diagnostics: &'d mut UseSiteDiagnostics,
    pub(crate) bases_being_resolved: Option<&'b BasesBeingResolved<'b>>,
    type_arguments: TypeArgumentGuard,
}

/// Accessibility checks against one symbol graph.
///
/// A resolver is cheap to create and holds no per-query state, so one
/// instance can serve every binding thread of a compilation. With
/// `ResolverOptions::memoize` it keeps a per-instance memo; create a new
/// resolver for each compilation.
pub struct AccessibilityResolver<'g, G: SymbolGraph + ?Sized> {
    pub(crate) graph: &'g G,
    pub(crate) options: ResolverOptions,
    cache: Option<AccessCache>,
}

impl<'g, G: SymbolGraph + ?Sized> AccessibilityResolver<'g, G> {
    pub fn new(graph: &'g G) -> Self {
        Self::with_options(graph, ResolverOptions::default())
    }

    pub fn with_options(graph: &'g G, options: ResolverOptions) -> Self {
        Self {
            graph,
            options,
            cache: options.memoize.then(AccessCache::new),
        }
    }

    pub fn graph(&self) -> &'g G {
        self.graph
    }

    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Memo statistics, or `None` when memoization is off.
    pub fn cache_stats(&self) -> Option<AccessCacheStats> {
        self.cache.as_ref().map(AccessCache::stats)
    }

    // =========================================================================
    // Entry points
    // =========================================================================

    /// Is `symbol` accessible from `within`, qualified by an expression of
    /// type `through`?
    ///
    /// `through` is ignored for static members. Use-site diagnostics found
    /// while walking base types are appended to `diagnostics`.
    pub fn is_symbol_accessible(
        &self,
        symbol: SymbolId,
        within: AccessContext,
        through: Option<SymbolId>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> Result<AccessOutcome, AccessError> {
        self.is_symbol_accessible_resolving_bases(symbol, within, through, None, diagnostics)
    }

    /// [`is_symbol_accessible`](Self::is_symbol_accessible) while the host is
    /// itself resolving the bases listed in `bases_being_resolved`.
    ///
    /// Answers computed under a cycle-guard token are never memoized.
    pub fn is_symbol_accessible_resolving_bases(
        &self,
        symbol: SymbolId,
        within: AccessContext,
        through: Option<SymbolId>,
        bases_being_resolved: Option<&BasesBeingResolved<'_>>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> Result<AccessOutcome, AccessError> {
        let span = query_trace::begin("is_symbol_accessible", symbol, within, through);

        let key = AccessKey {
            symbol,
            within,
            through,
        };
        let cache = self.cache.as_ref().filter(|_| bases_being_resolved.is_none());
        if let Some(cache) = cache
            && let Some(hit) = cache.get(&key)
        {
            if let Some(span) = span {
                span.finish(hit, true);
            }
            return Ok(hit);
        }

        let result = match cache {
            Some(cache) => {
                // Compute into a private accumulator so we know whether the
                // answer is clean enough to memoize.
                let mut local = UseSiteDiagnostics::new();
                let result = self.compute(symbol, within, through, None, &mut local);
                if let Ok(outcome) = result
                    && local.is_empty()
                {
                    cache.insert(key, outcome);
                }
                diagnostics.merge(local);
                result
            }
            None => self.compute(symbol, within, through, bases_being_resolved, diagnostics),
        };

        match &result {
            Ok(outcome) => {
                debug!(
                    symbol = %symbol,
                    kind = ?self.graph.kind(symbol),
                    ?within,
                    ?through,
                    accessible = outcome.accessible,
                    failed_through_type_check = outcome.failed_through_type_check,
                    "is_symbol_accessible"
                );
                if let Some(span) = span {
                    span.finish(*outcome, false);
                }
            }
            Err(error) => {
                debug!(symbol = %symbol, ?within, %error, "is_symbol_accessible failed");
                if let Some(span) = span {
                    span.fail(error);
                }
            }
        }
        result
    }

    /// Accessibility from an assembly context, where no through-type applies.
    pub fn is_symbol_accessible_from_assembly(
        &self,
        symbol: SymbolId,
        assembly: AssemblyId,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> Result<bool, AccessError> {
        self.is_symbol_accessible(symbol, AccessContext::Assembly(assembly), None, diagnostics)
            .map(|outcome| outcome.accessible)
    }

    /// `true` if `ty` is `base`, derives from it, or implements it, comparing
    /// original definitions so `List<int>` and `List<string>` count as `List<T>`.
    pub fn inherits_from_or_implements_ignoring_construction(
        &self,
        ty: SymbolId,
        base: SymbolId,
        bases_being_resolved: Option<&BasesBeingResolved<'_>>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> bool {
        inheritance::inherits_from_or_implements(
            self.graph,
            ty,
            base,
            bases_being_resolved,
            self.options.max_base_chain_depth,
            diagnostics,
        )
    }

    // =========================================================================
    // Core
    // =========================================================================

    fn compute(
        &self,
        symbol: SymbolId,
        within: AccessContext,
        through: Option<SymbolId>,
        bases_being_resolved: Option<&BasesBeingResolved<'_>>,
        diagnostics: &mut UseSiteDiagnostics,
    ) -> Result<AccessOutcome, AccessError> {
        self.validate_context(within)?;
        let mut state = QueryState {
            diagnostics,
            bases_being_resolved,
            type_arguments: TypeArgumentGuard::from_options(&self.options),
        };
        self.symbol_accessible(symbol, within, through, &mut state)
    }

    fn validate_context(&self, within: AccessContext) -> Result<(), AccessError> {
        let AccessContext::Type(ty) = within else {
            return Ok(());
        };
        match self.graph.kind(ty) {
            SymbolKind::NamedType | SymbolKind::ErrorType => {}
            kind => return Err(AccessError::ContextNotType { symbol: ty, kind }),
        }
        if !self.graph.is_definition(ty) {
            return Err(AccessError::ContextNotDefinition(ty));
        }
        Ok(())
    }

    fn symbol_accessible(
        &self,
        symbol: SymbolId,
        within: AccessContext,
        through: Option<SymbolId>,
        state: &mut QueryState<'_, '_>,
    ) -> Result<AccessOutcome, AccessError> {
        let graph = self.graph;
        match graph.kind(symbol) {
            SymbolKind::ArrayType | SymbolKind::PointerType => match graph.element_type(symbol) {
                Some(element) => self.symbol_accessible(element, within, None, state),
                None => Ok(AccessOutcome::ACCESSIBLE),
            },
            SymbolKind::FunctionPointerType => {
                for &ty in graph.signature_types(symbol) {
                    if !self.symbol_accessible(ty, within, None, state)?.accessible {
                        return Ok(AccessOutcome::INACCESSIBLE);
                    }
                }
                Ok(AccessOutcome::ACCESSIBLE)
            }
            // Reporting an error type as inaccessible would only cascade.
            SymbolKind::ErrorType => Ok(AccessOutcome::ACCESSIBLE),
            SymbolKind::TypeParameter
            | SymbolKind::Parameter
            | SymbolKind::Local
            | SymbolKind::Label
            | SymbolKind::RangeVariable
            | SymbolKind::Alias
            | SymbolKind::Discard
            | SymbolKind::Namespace
            | SymbolKind::DynamicType
            | SymbolKind::Assembly
            | SymbolKind::NetModule => Ok(AccessOutcome::ACCESSIBLE),
            SymbolKind::NamedType => self
                .named_type_accessible(symbol, within, state)
                .map(AccessOutcome::from_bool),
            SymbolKind::Method | SymbolKind::Property | SymbolKind::Event | SymbolKind::Field => {
                let through = if graph.is_static(symbol) { None } else { through };
                let containing = graph
                    .containing_type(symbol)
                    .ok_or(AccessError::MemberWithoutContainingType(symbol))?;
                self.member_accessible(
                    containing,
                    graph.declared_accessibility(symbol),
                    within,
                    through,
                    state,
                )
            }
            kind @ SymbolKind::Preprocessing => {
                Err(AccessError::UnexpectedSymbolKind { symbol, kind })
            }
        }
    }

    fn named_type_accessible(
        &self,
        ty: SymbolId,
        within: AccessContext,
        state: &mut QueryState<'_, '_>,
    ) -> Result<bool, AccessError> {
        let graph = self.graph;
        if !graph.is_definition(ty) && !self.type_arguments_accessible(ty, within, state)? {
            trace!(ty = %ty, "named type: inaccessible type argument");
            return Ok(false);
        }

        if let Some(file) = graph.file_local_to(graph.original_definition(ty))
            && !self.is_within_file(within, file)
        {
            trace!(ty = %ty, "named type: file-local type outside its file");
            return Ok(false);
        }

        match graph.containing_type(ty) {
            None => self.top_level_type_accessible(ty, within),
            Some(containing) => Ok(self
                .member_accessible(
                    containing,
                    graph.declared_accessibility(ty),
                    within,
                    None,
                    state,
                )?
                .accessible),
        }
    }

    fn type_arguments_accessible(
        &self,
        ty: SymbolId,
        within: AccessContext,
        state: &mut QueryState<'_, '_>,
    ) -> Result<bool, AccessError> {
        match state.type_arguments.enter(ty) {
            Nesting::Entered => {
                let result = self.check_type_arguments(ty, within, state);
                state
                    .type_arguments
                    .leave(ty, matches!(result, Ok(true)));
                result
            }
            Nesting::Proven | Nesting::Revisited => Ok(true),
            Nesting::TooDeep => {
                trace!(chain = ?state.type_arguments.chain(), "type arguments nested too deeply");
                state
                    .diagnostics
                    .report(diagnostic_messages::EXPRESSION_TOO_COMPLEX, &[]);
                Ok(true)
            }
        }
    }

    fn check_type_arguments(
        &self,
        ty: SymbolId,
        within: AccessContext,
        state: &mut QueryState<'_, '_>,
    ) -> Result<bool, AccessError> {
        for &argument in self.graph.type_arguments(ty) {
            if self.graph.kind(argument) == SymbolKind::TypeParameter {
                continue;
            }
            if !self.symbol_accessible(argument, within, None, state)?.accessible {
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn is_within_file(&self, within: AccessContext, file: FileId) -> bool {
        let Some(ty) = within.as_type() else {
            return false;
        };
        let outermost = inheritance::outermost_type(self.graph, ty, limits::MAX_CONTAINMENT_DEPTH);
        self.graph.declaring_file(outermost) == Some(file)
    }

    fn top_level_type_accessible(
        &self,
        ty: SymbolId,
        within: AccessContext,
    ) -> Result<bool, AccessError> {
        match self.graph.declared_accessibility(ty) {
            Accessibility::Public | Accessibility::NotApplicable => Ok(true),
            // Not valid on a top-level type.
            Accessibility::Private | Accessibility::Protected | Accessibility::ProtectedAndInternal => {
                Ok(false)
            }
            Accessibility::Internal | Accessibility::ProtectedOrInternal => {
                let declaring = self.declaring_assembly(ty)?;
                self.has_internal_access(within, declaring)
            }
        }
    }

    /// Shared by members and nested types: `containing` is the (possibly
    /// constructed) type declaring the member.
    pub(crate) fn member_accessible(
        &self,
        containing: SymbolId,
        declared: Accessibility,
        within: AccessContext,
        through: Option<SymbolId>,
        state: &mut QueryState<'_, '_>,
    ) -> Result<AccessOutcome, AccessError> {
        if within == AccessContext::Type(containing) {
            return Ok(AccessOutcome::ACCESSIBLE);
        }
        // A member is never more visible than its container.
        if !self.named_type_accessible(containing, within, state)? {
            return Ok(AccessOutcome::INACCESSIBLE);
        }
        if declared == Accessibility::Public {
            return Ok(AccessOutcome::ACCESSIBLE);
        }
        self.non_public_member_accessible(containing, declared, within, through, state)
    }

    fn non_public_member_accessible(
        &self,
        containing: SymbolId,
        declared: Accessibility,
        within: AccessContext,
        through: Option<SymbolId>,
        state: &mut QueryState<'_, '_>,
    ) -> Result<AccessOutcome, AccessError> {
        let original_containing = self.graph.original_definition(containing);
        match declared {
            Accessibility::NotApplicable | Accessibility::Public => Ok(AccessOutcome::ACCESSIBLE),
            Accessibility::Private => {
                // Later submissions see the private members of earlier ones.
                if self.is_submission(original_containing) {
                    return Ok(AccessOutcome::ACCESSIBLE);
                }
                Ok(AccessOutcome::from_bool(within.as_type().is_some_and(|ty| {
                    inheritance::is_nested_within(
                        self.graph,
                        ty,
                        original_containing,
                        limits::MAX_CONTAINMENT_DEPTH,
                    )
                })))
            }
            Accessibility::Internal => {
                let declaring = self.declaring_assembly(original_containing)?;
                self.has_internal_access(within, declaring)
                    .map(AccessOutcome::from_bool)
            }
            Accessibility::ProtectedAndInternal => {
                let declaring = self.declaring_assembly(original_containing)?;
                if !self.has_internal_access(within, declaring)? {
                    return Ok(AccessOutcome::INACCESSIBLE);
                }
                self.protected_accessible(within, through, original_containing, state)
            }
            Accessibility::ProtectedOrInternal => {
                let declaring = self.declaring_assembly(original_containing)?;
                if self.has_internal_access(within, declaring)? {
                    return Ok(AccessOutcome::ACCESSIBLE);
                }
                self.protected_accessible(within, through, original_containing, state)
            }
            Accessibility::Protected => {
                self.protected_accessible(within, through, original_containing, state)
            }
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    pub(crate) fn is_submission(&self, ty: SymbolId) -> bool {
        self.graph.type_kind(ty) == Some(TypeKind::Submission)
    }

    fn declaring_assembly(&self, sym: SymbolId) -> Result<AssemblyId, AccessError> {
        self.graph
            .containing_assembly(sym)
            .ok_or(AccessError::MissingContainingAssembly(sym))
    }

    fn context_assembly(&self, within: AccessContext) -> Result<AssemblyId, AccessError> {
        match within {
            AccessContext::Type(ty) => self.declaring_assembly(ty),
            AccessContext::Assembly(assembly) => Ok(assembly),
        }
    }

    fn has_internal_access(
        &self,
        within: AccessContext,
        declaring: AssemblyId,
    ) -> Result<bool, AccessError> {
        let from = self.context_assembly(within)?;
        Ok(self.graph.has_internal_access_to(from, declaring))
    }
}
