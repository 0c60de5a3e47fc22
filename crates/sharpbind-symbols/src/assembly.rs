//! Assembly friendship.
//!
//! Assembly `A` has internal access to assembly `B` iff they are the same
//! assembly, `B` names `A` as a friend, or a [`TrustPolicy`] places both in
//! one mutually-trusting group.

use crate::symbol::AssemblyId;
use rustc_hash::FxHashSet;
use tracing::trace;

/// An assembly as seen by the friendship relation.
#[derive(Clone, Debug)]
pub struct AssemblyData {
    pub name: String,
    /// Names of assemblies this assembly grants internal access to.
    pub friends: FxHashSet<String>,
    /// Interactive session this assembly is a submission of, if any.
    pub submission_chain: Option<u32>,
}

impl AssemblyData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friends: FxHashSet::default(),
            submission_chain: None,
        }
    }

    pub fn grants_friend_access_to(&self, other: &AssemblyData) -> bool {
        self.friends.contains(&other.name)
    }
}

/// Host policy deciding which assemblies trust each other beyond explicit
/// friend grants.
pub trait TrustPolicy: Send + Sync {
    /// `true` if code in `from` may see internals of `to` by group membership.
    fn trusts(&self, from: &AssemblyData, to: &AssemblyData) -> bool;
}

impl<F> TrustPolicy for F
where
    F: Fn(&AssemblyData, &AssemblyData) -> bool + Send + Sync,
{
    fn trusts(&self, from: &AssemblyData, to: &AssemblyData) -> bool {
        self(from, to)
    }
}

/// No groups: only identity and explicit friend grants.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrustGroups;

impl TrustPolicy for NoTrustGroups {
    fn trusts(&self, _from: &AssemblyData, _to: &AssemblyData) -> bool {
        false
    }
}

/// Submissions of the same interactive session trust each other.
#[derive(Clone, Copy, Debug, Default)]
pub struct SubmissionChainPolicy;

impl TrustPolicy for SubmissionChainPolicy {
    fn trusts(&self, from: &AssemblyData, to: &AssemblyData) -> bool {
        match (from.submission_chain, to.submission_chain) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// The assemblies of one compilation plus its trust policy.
pub struct AssemblyTable {
    assemblies: Vec<AssemblyData>,
    policy: Box<dyn TrustPolicy>,
}

impl Default for AssemblyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl AssemblyTable {
    pub fn new() -> Self {
        Self {
            assemblies: Vec::new(),
            policy: Box::new(NoTrustGroups),
        }
    }

    pub fn add(&mut self, data: AssemblyData) -> AssemblyId {
        let id = AssemblyId(self.assemblies.len() as u32);
        self.assemblies.push(data);
        id
    }

    pub fn get(&self, id: AssemblyId) -> &AssemblyData {
        &self.assemblies[id.index()]
    }

    pub fn get_mut(&mut self, id: AssemblyId) -> &mut AssemblyData {
        &mut self.assemblies[id.index()]
    }

    pub fn set_policy(&mut self, policy: impl TrustPolicy + 'static) {
        self.policy = Box::new(policy);
    }

    pub fn len(&self) -> usize {
        self.assemblies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assemblies.is_empty()
    }

    pub fn has_internal_access_to(&self, from: AssemblyId, to: AssemblyId) -> bool {
        if from == to {
            return true;
        }
        let from_data = self.get(from);
        let to_data = self.get(to);
        let granted =
            to_data.grants_friend_access_to(from_data) || self.policy.trusts(from_data, to_data);
        trace!(
            from = %from_data.name,
            to = %to_data.name,
            granted,
            "AssemblyTable::has_internal_access_to"
        );
        granted
    }
}
