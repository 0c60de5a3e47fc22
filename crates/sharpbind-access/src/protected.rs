//! The protected-access rule.
//!
//! ```csharp
//! class Base { protected int X; }
//! class Derived : Base {
//!     void M(Base b, Derived d) {
//!         _ = b.X; // error: qualifier must be Derived or derive from it
//!         _ = d.X; // ok
//!     }
//! }
//! ```
//!
//! Starting at the context type and moving outward through its enclosing
//! types, the first type that derives from the member's declaring type and
//! that the qualifier's type also derives from grants access. A type that
//! derives from the declaring type but rejects the qualifier sets
//! `failed_through_type_check` and the walk continues outward.

use crate::error::AccessError;
use crate::inheritance;
use crate::resolver::{AccessContext, AccessOutcome, AccessibilityResolver, QueryState};
use sharpbind_common::limits;
use sharpbind_symbols::{SymbolGraph, SymbolId};
use tracing::trace;

impl<G: SymbolGraph + ?Sized> AccessibilityResolver<'_, G> {
    pub(crate) fn protected_accessible(
        &self,
        within: AccessContext,
        through: Option<SymbolId>,
        original_containing: SymbolId,
        state: &mut QueryState<'_, '_>,
    ) -> Result<AccessOutcome, AccessError> {
        // Protected behaves like private inside submissions.
        if self.is_submission(original_containing) {
            return Ok(AccessOutcome::ACCESSIBLE);
        }
        let Some(within_type) = within.as_type() else {
            return Ok(AccessOutcome::INACCESSIBLE);
        };
        if inheritance::is_nested_within(
            self.graph,
            within_type,
            original_containing,
            limits::MAX_CONTAINMENT_DEPTH,
        ) {
            return Ok(AccessOutcome::ACCESSIBLE);
        }

        let through_definition = through.map(|ty| self.graph.original_definition(ty));
        let mut failed_through_type_check = false;
        let mut current = Some(self.graph.original_definition(within_type));
        let mut depth = 0u32;

        while let Some(ty) = current {
            if self.derives_from(ty, original_containing, state) {
                match through_definition {
                    None => return Ok(AccessOutcome::ACCESSIBLE),
                    Some(qualifier) if self.qualifier_derives_from(qualifier, ty, state) => {
                        return Ok(AccessOutcome::ACCESSIBLE);
                    }
                    Some(qualifier) => {
                        trace!(
                            at = %ty,
                            qualifier = %qualifier,
                            "protected: qualifier does not derive from accessing type"
                        );
                        failed_through_type_check = true;
                    }
                }
            }
            depth += 1;
            if depth > limits::MAX_CONTAINMENT_DEPTH {
                break;
            }
            current = self
                .graph
                .containing_type(ty)
                .map(|outer| self.graph.original_definition(outer));
        }

        Ok(AccessOutcome {
            accessible: false,
            failed_through_type_check,
        })
    }

    fn derives_from(&self, ty: SymbolId, base: SymbolId, state: &mut QueryState<'_, '_>) -> bool {
        inheritance::inherits_from_or_implements(
            self.graph,
            ty,
            base,
            state.bases_being_resolved,
            self.options.max_base_chain_depth,
            state.diagnostics,
        )
    }

    /// The qualifier's bases are walked without the host's cycle token: only
    /// the context type's own bases may be mid-resolution.
    fn qualifier_derives_from(
        &self,
        qualifier: SymbolId,
        ty: SymbolId,
        state: &mut QueryState<'_, '_>,
    ) -> bool {
        inheritance::inherits_from_or_implements(
            self.graph,
            qualifier,
            ty,
            None,
            self.options.max_base_chain_depth,
            state.diagnostics,
        )
    }
}
