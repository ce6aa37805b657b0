//! The cross-product join engine.
//!
//! One engine serves every joiner: the per-stream outer-eligibility
//! decision is injected as data, so inner, outer, left, right, and mixed
//! joins differ only in the flags they pass in.

use log::{debug, warn};

use super::closure::GroupClosure;
use super::error::{JoinError, JoinResult};
use super::tuple::Tuple;

/// Lazy iterator over the joined tuples of one group.
///
/// Each stream contributes either its real tuples or, when it is empty and
/// outer-eligible, exactly one null-padded tuple. An empty stream that is
/// not outer-eligible drops the whole group: the iterator yields nothing.
///
/// The Cartesian product is walked odometer style with one saved cursor per
/// stream: stream 0 varies slowest and the last stream varies fastest; when
/// a cursor exhausts it restarts and the cursor to its left advances. The
/// order is deterministic for identical input.
///
/// Items are `Result<Tuple, JoinError>`: a closure whose stream iterator
/// stops being restartable mid-product surfaces as an `Err` item, after
/// which the iterator is fused. Dropping the iterator early is always safe;
/// no restart state outlives it.
pub struct JoinIterator<'a> {
    closure: &'a dyn GroupClosure,
    padded: Vec<bool>,
    cursors: Vec<Box<dyn Iterator<Item = Tuple> + 'a>>,
    current: Vec<Tuple>,
    done: bool,
}

impl std::fmt::Debug for JoinIterator<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JoinIterator")
            .field("padded", &self.padded)
            .field("current", &self.current)
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}

impl<'a> JoinIterator<'a> {
    /// Builds the iterator for one group.
    ///
    /// `outer_eligible[i]` says whether stream `i` may be null-padded; it is
    /// only consulted for empty streams. Fails on a closure with zero
    /// streams, on an eligibility vector of the wrong length, on a group
    /// where every stream is empty, and on a stream whose `is_empty` and
    /// `tuples` reports disagree.
    pub(crate) fn new(
        closure: &'a dyn GroupClosure,
        outer_eligible: Vec<bool>,
    ) -> JoinResult<Self> {
        let stream_count = closure.stream_count();
        if stream_count == 0 {
            return Err(JoinError::contract(
                "group closure exposes zero streams",
                None,
            ));
        }
        if outer_eligible.len() != stream_count {
            return Err(JoinError::configuration_mismatch(
                outer_eligible.len(),
                stream_count,
            ));
        }

        // The grouping stage only emits a key because some stream contributed
        // it, so an all-empty group is a lying closure. Fail loudly rather
        // than emit an all-null row.
        if (0..stream_count).all(|stream| closure.is_empty(stream)) {
            warn!("group closure claims a group but every stream is empty");
            return Err(JoinError::contract(
                "every stream is empty for the current group",
                None,
            ));
        }

        for stream in 0..stream_count {
            if closure.is_empty(stream) && !outer_eligible[stream] {
                debug!(
                    "stream {} is empty and required inner, dropping group",
                    stream
                );
                return Ok(JoinIterator::finished(closure));
            }
        }

        // Every remaining empty stream is outer-eligible and gets one null
        // tuple; non-empty streams use their real rows.
        let padded: Vec<bool> = (0..stream_count)
            .map(|stream| closure.is_empty(stream))
            .collect();

        let mut cursors: Vec<Box<dyn Iterator<Item = Tuple> + 'a>> =
            Vec::with_capacity(stream_count);
        let mut current: Vec<Tuple> = Vec::with_capacity(stream_count);

        for stream in 0..stream_count {
            if padded[stream] {
                debug!("padding empty stream {} with one null tuple", stream);
            }
            let mut cursor = Self::start_stream(closure, stream, padded[stream]);
            match cursor.next() {
                Some(tuple) => current.push(tuple),
                None => {
                    warn!("stream {} reported non-empty but yielded no tuples", stream);
                    return Err(JoinError::contract(
                        "stream reported non-empty but its iterator yielded no tuples",
                        Some(stream),
                    ));
                }
            }
            cursors.push(cursor);
        }

        Ok(JoinIterator {
            closure,
            padded,
            cursors,
            current,
            done: false,
        })
    }

    fn finished(closure: &'a dyn GroupClosure) -> Self {
        JoinIterator {
            closure,
            padded: Vec::new(),
            cursors: Vec::new(),
            current: Vec::new(),
            done: true,
        }
    }

    fn start_stream(
        closure: &'a dyn GroupClosure,
        stream: usize,
        padded: bool,
    ) -> Box<dyn Iterator<Item = Tuple> + 'a> {
        if padded {
            Box::new(std::iter::once(closure.null_tuple(stream)))
        } else {
            closure.tuples(stream)
        }
    }
}

impl<'a> Iterator for JoinIterator<'a> {
    type Item = JoinResult<Tuple>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let row = Tuple::concat(self.current.iter());

        // Odometer advance: try the rightmost cursor first; an exhausted
        // cursor restarts and the carry moves one stream to the left. Running
        // off the left end means the product is complete.
        let mut stream = self.cursors.len();
        loop {
            if stream == 0 {
                self.done = true;
                break;
            }
            stream -= 1;

            if let Some(tuple) = self.cursors[stream].next() {
                self.current[stream] = tuple;
                break;
            }

            let mut fresh = Self::start_stream(self.closure, stream, self.padded[stream]);
            match fresh.next() {
                Some(tuple) => {
                    self.current[stream] = tuple;
                    self.cursors[stream] = fresh;
                }
                None => {
                    self.done = true;
                    warn!("stream {} iterator was not restartable", stream);
                    return Some(Err(JoinError::contract(
                        "stream iterator yielded tuples earlier but restarted empty",
                        Some(stream),
                    )));
                }
            }
        }

        Some(Ok(row))
    }
}
