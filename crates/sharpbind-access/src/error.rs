//! Internal invariant violations.
//!
//! An inaccessible symbol is an ordinary `false` answer, not an error. The
//! variants here mean the host handed the resolver something it must never
//! hand it, and the current binding step should abort.

use sharpbind_symbols::{SymbolId, SymbolKind};
use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error("symbol {symbol} of kind {kind:?} has no accessibility")]
    UnexpectedSymbolKind { symbol: SymbolId, kind: SymbolKind },

    #[error("access context {0} is a constructed type; contexts must be definitions")]
    ContextNotDefinition(SymbolId),

    #[error("access context {symbol} has kind {kind:?}; expected a named type")]
    ContextNotType { symbol: SymbolId, kind: SymbolKind },

    #[error("member {0} has no containing type")]
    MemberWithoutContainingType(SymbolId),

    #[error("symbol {0} has no containing assembly")]
    MissingContainingAssembly(SymbolId),
}
