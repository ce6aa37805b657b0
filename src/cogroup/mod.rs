// Multi-way cogroup join over keyed tuple streams.
// The grouping/partitioning stage delivers per-key groups through a
// GroupClosure; a Joiner turns each group into a lazy sequence of joined
// tuples under a per-stream inner/outer policy.

pub mod closure;
pub mod error;
pub mod iterator;
pub mod joiner;
pub mod tuple;

// Re-export main API
pub use closure::{GroupBuffer, GroupClosure};
pub use error::{JoinError, JoinResult};
pub use iterator::JoinIterator;
pub use joiner::{InnerJoin, JoinPolicy, Joiner, LeftJoin, MixedJoin, OuterJoin, RightJoin};
pub use tuple::{FieldValue, Tuple};
