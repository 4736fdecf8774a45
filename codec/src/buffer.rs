//! Bit-addressable buffer state shared by [`Reader`](crate::Reader) and
//! [`Writer`](crate::Writer).

use crate::Error;

/// Bit cursor plus sticky fault over a byte buffer.
///
/// `B` is [`Bytes`](bytes::Bytes) for the reader and
/// [`BytesMut`](bytes::BytesMut) for the writer; the shared bookkeeping only
/// needs the byte-slice view.
#[derive(Debug, Clone, Default)]
pub(crate) struct BitBuffer<B> {
    pub(crate) data: B,
    pub(crate) position: u64,
    pub(crate) error: Option<Error>,
}

impl<B: AsRef<[u8]>> BitBuffer<B> {
    pub(crate) fn new(data: B) -> Self {
        Self {
            data,
            position: 0,
            error: None,
        }
    }

    /// Total bits the current buffer can hold.
    pub(crate) fn capacity_bits(&self) -> u64 {
        self.data.as_ref().len() as u64 * 8
    }

    /// Whole bytes needed to cover every bit up to the cursor.
    pub(crate) fn len_bytes(&self) -> usize {
        self.position.div_ceil(8) as usize
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.capacity_bits()
    }

    /// Records `error` unless a fault is already set (first failure wins).
    pub(crate) fn fault(&mut self, error: Error) {
        self.error.get_or_insert(error);
    }

    /// Moves the cursor to `position` if it lies within the buffer; faults
    /// [`Error::InvalidArgument`] and leaves the cursor unchanged otherwise.
    pub(crate) fn seek(&mut self, position: u64) {
        if self.error.is_some() {
            return;
        }
        if position > self.capacity_bits() {
            self.fault(Error::InvalidArgument);
            return;
        }
        self.position = position;
    }

    /// Advances the cursor to the next byte boundary; no-op when aligned.
    ///
    /// The buffer length is always a whole number of bytes, so this never
    /// moves the cursor past the capacity.
    pub(crate) fn align_to_byte(&mut self) {
        self.position = self.position.next_multiple_of(8);
    }

    /// Rewinds the cursor and forgets any fault. The buffer is untouched.
    pub(crate) fn reset(&mut self) {
        self.position = 0;
        self.error = None;
    }
}
