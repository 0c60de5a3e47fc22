//! JSON-friendly trace events for resolver entry points.
//!
//! Every top-level accessibility query emits a `start` event and then one
//! `end` or `error` event on target `sharpbind::query_json`, linked by a
//! process-wide query id:
//!
//! ```bash
//! SHARPBIND_LOG=sharpbind::query_json=trace SHARPBIND_LOG_FORMAT=json cargo test
//! ```
//!
//! `SHARPBIND_QUERY_RUN_ID` tags every event so traces from several runs can
//! be merged.

use crate::{AccessContext, AccessError, AccessOutcome};
use sharpbind_symbols::SymbolId;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{Level, trace};

const TARGET: &str = "sharpbind::query_json";

static QUERY_IDS: AtomicU64 = AtomicU64::new(1);

fn run_id() -> &'static str {
    static RUN_ID: OnceLock<String> = OnceLock::new();
    RUN_ID.get_or_init(|| std::env::var("SHARPBIND_QUERY_RUN_ID").unwrap_or_else(|_| "default".into()))
}

/// An open query. Dropping it without [`finish`](Self::finish) or
/// [`fail`](Self::fail) emits nothing further.
pub(crate) struct QuerySpan {
    id: u64,
    op: &'static str,
}

/// Emit the `start` event, or return `None` when nobody listens.
pub(crate) fn begin(
    op: &'static str,
    symbol: SymbolId,
    within: AccessContext,
    through: Option<SymbolId>,
) -> Option<QuerySpan> {
    if !tracing::enabled!(target: TARGET, Level::TRACE) {
        return None;
    }
    let id = QUERY_IDS.fetch_add(1, Ordering::Relaxed);
    let (within_kind, within_id) = match within {
        AccessContext::Type(ty) => ("type", ty.0),
        AccessContext::Assembly(assembly) => ("assembly", assembly.0),
    };
    trace!(
        target: TARGET,
        event = "query",
        phase = "start",
        run_id = run_id(),
        query_id = id,
        op,
        symbol_id = symbol.0,
        within_kind,
        within_id,
        through_type_id = through.map(|t| t.0)
    );
    Some(QuerySpan { id, op })
}

impl QuerySpan {
    pub(crate) fn finish(self, outcome: AccessOutcome, cache_hit: bool) {
        trace!(
            target: TARGET,
            event = "query",
            phase = "end",
            run_id = run_id(),
            query_id = self.id,
            op = self.op,
            accessible = outcome.accessible,
            failed_through_type_check = outcome.failed_through_type_check,
            cache_hit
        );
    }

    pub(crate) fn fail(self, error: &AccessError) {
        trace!(
            target: TARGET,
            event = "query",
            phase = "error",
            run_id = run_id(),
            query_id = self.id,
            op = self.op,
            error = %error
        );
    }
}
