//! Joiner implementations: the policy layer over the cross-product engine.
//!
//! Every joiner here reduces to a per-stream outer-eligibility vector handed
//! to [`JoinIterator`]; a stream is actually padded only when it is both
//! eligible and empty for the current group.

use serde::{Deserialize, Serialize};

use super::closure::GroupClosure;
use super::error::{JoinError, JoinResult};
use super::iterator::JoinIterator;

/// Per-stream join policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JoinPolicy {
    /// The stream must contribute a real row or the whole group is dropped.
    StrictInner,
    /// An empty stream is padded with one null tuple so the group still
    /// produces output.
    EmptyAsOuter,
}

impl JoinPolicy {
    /// True if an empty stream under this policy may be null-padded.
    pub fn allows_padding(&self) -> bool {
        matches!(self, JoinPolicy::EmptyAsOuter)
    }
}

/// Produces the joined-tuple sequence for one group.
///
/// Implementations are configured once at pipeline construction and then
/// invoked once per group closure as the pipeline crosses key boundaries.
pub trait Joiner {
    /// Validates the closure against this joiner's configuration and returns
    /// the lazy sequence of joined tuples for the current group.
    fn join<'a>(&self, closure: &'a dyn GroupClosure) -> JoinResult<JoinIterator<'a>>;

    /// Number of streams this joiner is configured for, or `None` when it
    /// adapts to any stream count. The pipeline uses this to validate
    /// closure compatibility before invocation.
    fn num_joins(&self) -> Option<usize> {
        None
    }
}

/// Strict inner join: every stream must contribute real rows, so a group
/// with any empty stream yields nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct InnerJoin;

impl Joiner for InnerJoin {
    fn join<'a>(&self, closure: &'a dyn GroupClosure) -> JoinResult<JoinIterator<'a>> {
        JoinIterator::new(closure, vec![false; closure.stream_count()])
    }
}

/// Full outer join: the base data-driven algorithm. A stream is padded with
/// one null tuple exactly when it has no rows for the current group, so the
/// group still yields output instead of being dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct OuterJoin;

impl Joiner for OuterJoin {
    fn join<'a>(&self, closure: &'a dyn GroupClosure) -> JoinResult<JoinIterator<'a>> {
        JoinIterator::new(closure, vec![true; closure.stream_count()])
    }
}

/// Left join: stream 0 is strictly inner, every later stream is padded when
/// empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct LeftJoin;

impl Joiner for LeftJoin {
    fn join<'a>(&self, closure: &'a dyn GroupClosure) -> JoinResult<JoinIterator<'a>> {
        let eligible = (0..closure.stream_count()).map(|i| i != 0).collect();
        JoinIterator::new(closure, eligible)
    }
}

/// Right join: the last stream is strictly inner, every earlier stream is
/// padded when empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct RightJoin;

impl Joiner for RightJoin {
    fn join<'a>(&self, closure: &'a dyn GroupClosure) -> JoinResult<JoinIterator<'a>> {
        let stream_count = closure.stream_count();
        let eligible = (0..stream_count).map(|i| i + 1 != stream_count).collect();
        JoinIterator::new(closure, eligible)
    }
}

/// Joins each stream under an explicitly configured [`JoinPolicy`],
/// decoupling outer-eligibility from raw emptiness.
///
/// For three streams, `MixedJoin::from_flags(&[true, false, false])` joins
/// them 'inner', 'outer', 'outer'. The policy vector length must match the
/// closure's stream count at join time; a mismatch is a configuration error,
/// never silently clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MixedJoin {
    policies: Vec<JoinPolicy>,
}

impl MixedJoin {
    /// Creates a mixed join from per-stream policies, in stream order.
    pub fn new(policies: Vec<JoinPolicy>) -> Self {
        MixedJoin { policies }
    }

    /// Boolean form: `true` marks a stream strictly inner, `false` allows
    /// outer padding.
    pub fn from_flags(as_inner: &[bool]) -> Self {
        MixedJoin {
            policies: as_inner
                .iter()
                .map(|&inner| {
                    if inner {
                        JoinPolicy::StrictInner
                    } else {
                        JoinPolicy::EmptyAsOuter
                    }
                })
                .collect(),
        }
    }

    /// The configured per-stream policies.
    pub fn policies(&self) -> &[JoinPolicy] {
        &self.policies
    }
}

impl Joiner for MixedJoin {
    fn join<'a>(&self, closure: &'a dyn GroupClosure) -> JoinResult<JoinIterator<'a>> {
        if self.policies.len() != closure.stream_count() {
            return Err(JoinError::configuration_mismatch(
                self.policies.len(),
                closure.stream_count(),
            ));
        }
        let eligible = self
            .policies
            .iter()
            .map(|policy| policy.allows_padding())
            .collect();
        JoinIterator::new(closure, eligible)
    }

    fn num_joins(&self) -> Option<usize> {
        Some(self.policies.len())
    }
}
