//! # tuplestream
//!
//! Multi-way cogroup join iterator for keyed tuple streams: given per-key
//! groups of tuples, one group per input stream, produce the joined rows
//! for that key under an independently configurable inner/outer policy per
//! stream.
//!
//! ## Features
//!
//! - **Single cross-product engine**: inner, outer, left, right, and mixed
//!   joins are thin policy layers over one odometer-style iterator
//! - **Data-driven outer padding**: an empty, outer-eligible stream
//!   contributes exactly one null tuple; an empty inner stream drops the
//!   whole group
//! - **Lazy, pull-driven**: the consumer paces the product; early
//!   abandonment is always safe
//! - **Fail-loud contracts**: policy/stream-count mismatches and closure
//!   contract violations surface as errors, never as degenerate rows
//!
//! ## Quick Start
//!
//! ```rust
//! use tuplestream::{FieldValue, GroupBuffer, Joiner, MixedJoin, Tuple};
//!
//! // One group: stream 0 has a row, stream 1 has none for this key.
//! let closure = GroupBuffer::new()
//!     .with_stream(
//!         2,
//!         vec![Tuple::new(vec![
//!             FieldValue::Integer(1),
//!             FieldValue::String("x".to_string()),
//!         ])],
//!     )?
//!     .with_stream(1, vec![])?;
//!
//! // Stream 0 strictly inner, stream 1 padded when empty.
//! let joiner = MixedJoin::from_flags(&[true, false]);
//! let rows: Vec<Tuple> = joiner.join(&closure)?.collect::<Result<_, _>>()?;
//!
//! assert_eq!(rows.len(), 1);
//! assert_eq!(rows[0].to_string(), "(1, x, NULL)");
//! # Ok::<(), tuplestream::JoinError>(())
//! ```

pub mod cogroup;

// Re-export main API at crate root for easy access
pub use cogroup::{
    FieldValue, GroupBuffer, GroupClosure, InnerJoin, JoinError, JoinIterator, JoinPolicy,
    JoinResult, Joiner, LeftJoin, MixedJoin, OuterJoin, RightJoin, Tuple,
};
