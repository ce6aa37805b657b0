//! Per-group access to each input stream's tuples.
//!
//! A [`GroupClosure`] is the handle the grouping stage hands to a joiner for
//! one group key: per input stream, the tuples sharing that key plus the
//! stream's null tuple for outer padding. [`GroupBuffer`] is the in-memory
//! implementation used once a key's rows have been materialized.

use super::error::{JoinError, JoinResult};
use super::tuple::Tuple;

/// Per-key handle giving the join engine access to each input stream's
/// tuples for the current group.
///
/// The pipeline creates one closure per group key boundary; a joiner
/// consumes it to produce that group's joined rows, and the closure is
/// discarded when the pipeline advances to the next key. Stream indices are
/// 0-based and stable for the lifetime of the closure; behavior for indices
/// at or above [`stream_count`](GroupClosure::stream_count) is undefined.
pub trait GroupClosure {
    /// Number of input streams participating in the cogroup.
    fn stream_count(&self) -> usize;

    /// True if stream `stream` has no tuples for the current key.
    fn is_empty(&self, stream: usize) -> bool;

    /// A fresh, independently positioned iterator over stream `stream`'s
    /// tuples for the current key.
    ///
    /// The sequence is finite, and calling this again restarts from the
    /// first tuple; the join engine relies on restartability to enumerate
    /// the cross product.
    fn tuples(&self, stream: usize) -> Box<dyn Iterator<Item = Tuple> + '_>;

    /// A tuple of stream `stream`'s declared arity with every field NULL,
    /// used for outer-join padding.
    ///
    /// Arity comes from the stream's static schema, never inferred from the
    /// data currently present.
    fn null_tuple(&self, stream: usize) -> Tuple;
}

/// In-memory [`GroupClosure`] over per-stream buffered tuples.
///
/// Streams are added in cogroup order, each with its declared tuple arity.
/// Adding a tuple whose arity disagrees with the stream's declaration is
/// rejected up front so padding and concatenation stay well-formed.
#[derive(Debug, Clone, Default)]
pub struct GroupBuffer {
    streams: Vec<BufferedStream>,
}

#[derive(Debug, Clone)]
struct BufferedStream {
    arity: usize,
    tuples: Vec<Tuple>,
}

impl GroupBuffer {
    /// Creates an empty buffer; streams are added with
    /// [`with_stream`](GroupBuffer::with_stream).
    pub fn new() -> Self {
        GroupBuffer {
            streams: Vec::new(),
        }
    }

    /// Adds the next input stream with its declared arity and the tuples
    /// buffered for the current key.
    pub fn with_stream(mut self, arity: usize, tuples: Vec<Tuple>) -> JoinResult<Self> {
        self.push_stream(arity, tuples)?;
        Ok(self)
    }

    /// Non-consuming form of [`with_stream`](GroupBuffer::with_stream).
    pub fn push_stream(&mut self, arity: usize, tuples: Vec<Tuple>) -> JoinResult<()> {
        let stream = self.streams.len();
        for tuple in &tuples {
            if tuple.arity() != arity {
                return Err(JoinError::contract(
                    format!(
                        "tuple arity {} does not match the stream's declared arity {}",
                        tuple.arity(),
                        arity
                    ),
                    Some(stream),
                ));
            }
        }
        self.streams.push(BufferedStream { arity, tuples });
        Ok(())
    }
}

impl GroupClosure for GroupBuffer {
    fn stream_count(&self) -> usize {
        self.streams.len()
    }

    fn is_empty(&self, stream: usize) -> bool {
        self.streams[stream].tuples.is_empty()
    }

    fn tuples(&self, stream: usize) -> Box<dyn Iterator<Item = Tuple> + '_> {
        Box::new(self.streams[stream].tuples.iter().cloned())
    }

    fn null_tuple(&self, stream: usize) -> Tuple {
        Tuple::null_of(self.streams[stream].arity)
    }
}
