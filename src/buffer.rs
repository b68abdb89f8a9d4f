//! Helper module with the tokenizer's resumption substrate.

use crate::opt::Options;

/// An append-only scratch buffer with amortized prefix-drop.
///
/// This is the tokenizer's only mutable state: bytes are appended at the
/// tail by [`ByteBuffer::extend`], inspected from the head by
/// [`ByteBuffer::as_slice`], and dropped from the head by
/// [`ByteBuffer::drop_front`]. Dropping compacts immediately rather than
/// tracking a separate head index, which keeps `as_slice` a plain slice
/// (no wraparound to reason about) at the cost of an occasional `copy_within`
/// — the buffer's footprint is bounded by the longest outstanding partial
/// sequence, so that copy is cheap in practice.
pub(crate) struct ByteBuffer {
    data: Vec<u8>,
}

impl ByteBuffer {
    /// Create a new buffer with the given options.
    pub fn with_options(options: &Options) -> Self {
        Self {
            data: Vec::with_capacity(options.initial_buffer_size()),
        }
    }

    /// Append bytes to the tail of the buffer.
    pub fn extend(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Get a slice with all unconsumed bytes, from the head of the buffer.
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Determine whether the buffer holds no unconsumed bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drop the given number of bytes from the head of the buffer.
    ///
    /// # Panics
    ///
    /// If `count` exceeds the number of unconsumed bytes.
    pub fn drop_front(&mut self, count: usize) {
        assert!(
            count <= self.data.len(),
            "cannot drop more bytes than are buffered"
        );
        self.data.drain(..count);
    }
}

impl std::fmt::Debug for ByteBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ByteBuffer")
            .field("len", &self.data.len())
            .field("capacity", &self.data.capacity())
            .finish_non_exhaustive()
    }
}
