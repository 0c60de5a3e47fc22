//! Resolver configuration.
//!
//! Options are normally constructed by the host compiler from its own
//! configuration. They deserialize from camelCase JSON so they can be embedded
//! in a project's compiler options file:
//!
//! ```json
//! { "memoize": true, "maxBaseChainDepth": 64 }
//! ```

use crate::limits;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverOptions {
    /// Cache accessibility answers per `(symbol, within, through)` for the
    /// lifetime of one resolver.
    pub memoize: bool,
    /// Cap on base types visited in a single inheritance walk.
    pub max_base_chain_depth: u32,
    /// Cap on nested type-argument recursion.
    pub max_type_argument_nesting: u32,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            memoize: false,
            max_base_chain_depth: limits::MAX_BASE_CHAIN_DEPTH,
            max_type_argument_nesting: limits::MAX_TYPE_ARGUMENT_NESTING,
        }
    }
}

impl ResolverOptions {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    #[must_use]
    pub fn with_memoization(mut self, memoize: bool) -> Self {
        self.memoize = memoize;
        self
    }
}
