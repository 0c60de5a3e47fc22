//! Guard for the type-argument recursion of an accessibility query.
//!
//! `Outer<Middle<Inner>>` is accessible only if `Middle<Inner>` is, which in
//! turn needs `Inner`. The guard keeps the chain of constructed types
//! currently being checked, plus the set of constructed types whose
//! arguments were already found accessible during this query, so a shared
//! subtree such as `Pair<T, T>` is checked once however often it appears.
//!
//! It stops on a type already on the chain (self-referential arguments) and
//! on a chain longer than `max_depth`.
//!
//! In debug builds, dropping a guard with a non-empty chain panics, catching
//! a forgotten `leave()`.

use rustc_hash::FxHashSet;
use sharpbind_common::ResolverOptions;
use sharpbind_symbols::SymbolId;
use smallvec::SmallVec;

/// Outcome of [`TypeArgumentGuard::enter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nesting {
    Entered,
    /// Arguments already found accessible earlier in this query.
    Proven,
    /// The type is already being checked further up the chain.
    Revisited,
    TooDeep,
}

impl Nesting {
    #[inline]
    pub fn is_entered(self) -> bool {
        self == Self::Entered
    }
}

pub struct TypeArgumentGuard {
    chain: SmallVec<[SymbolId; 8]>,
    proven: FxHashSet<SymbolId>,
    max_depth: u32,
    exceeded: bool,
}

impl TypeArgumentGuard {
    pub fn new(max_depth: u32) -> Self {
        Self {
            chain: SmallVec::new(),
            proven: FxHashSet::default(),
            max_depth,
            exceeded: false,
        }
    }

    pub fn from_options(options: &ResolverOptions) -> Self {
        Self::new(options.max_type_argument_nesting)
    }

    /// Start checking the arguments of `ty`. Only after
    /// [`Nesting::Entered`] must the caller [`leave`](Self::leave) `ty`.
    pub fn enter(&mut self, ty: SymbolId) -> Nesting {
        if self.proven.contains(&ty) {
            return Nesting::Proven;
        }
        if self.chain.contains(&ty) {
            return Nesting::Revisited;
        }
        if self.chain.len() as u32 >= self.max_depth {
            self.exceeded = true;
            return Nesting::TooDeep;
        }
        self.chain.push(ty);
        Nesting::Entered
    }

    /// Finish checking `ty`. An accessible answer is remembered unless some
    /// limit was hit on the way, since that answer was partly assumed.
    pub fn leave(&mut self, ty: SymbolId, accessible: bool) {
        let top = self.chain.pop();
        debug_assert_eq!(top, Some(ty), "TypeArgumentGuard::leave out of order");
        if accessible && !self.exceeded {
            self.proven.insert(ty);
        }
    }

    /// Types whose arguments are being checked, outermost first.
    #[inline]
    pub fn chain(&self) -> &[SymbolId] {
        &self.chain
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    #[inline]
    pub fn is_proven(&self, ty: SymbolId) -> bool {
        self.proven.contains(&ty)
    }

    /// Stays set once the depth limit was hit during the query.
    #[inline]
    pub fn is_exceeded(&self) -> bool {
        self.exceeded
    }
}

#[cfg(debug_assertions)]
impl Drop for TypeArgumentGuard {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.chain.is_empty() {
            panic!(
                "TypeArgumentGuard dropped while still checking {:?}",
                self.chain
            );
        }
    }
}

#[cfg(test)]
#[path = "../tests/recursion_tests.rs"]
mod tests;
