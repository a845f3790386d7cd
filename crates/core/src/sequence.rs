//! Sequence capability for sequential identifiers.
//!
//! Numbers are handed out by an explicitly passed [`SequenceGenerator`] rather
//! than hidden global state. The process-wide default lives in
//! [`process_sequence`]; it starts at 0 and is never persisted, so numbers are
//! unique only within a single process lifetime.

use core::sync::atomic::{AtomicU64, Ordering};

/// Source of monotonically increasing sequence values.
pub trait SequenceGenerator {
    /// Returns the current value and advances the sequence by one.
    ///
    /// Read and advance happen as one indivisible step, so two callers never
    /// observe the same value.
    fn next_value(&self) -> u64;

    /// The value the next call to [`next_value`](Self::next_value) will return.
    fn peek(&self) -> u64;
}

/// Lock-free sequence backed by an [`AtomicU64`].
#[derive(Debug, Default)]
pub struct AtomicSequence {
    next: AtomicU64,
}

impl AtomicSequence {
    pub const fn new() -> Self {
        Self::starting_at(0)
    }

    pub const fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Rewind to 0. Only for scoped sequences; the process sequence is never reset.
    pub fn reset(&self) {
        self.next.store(0, Ordering::SeqCst);
    }
}

impl SequenceGenerator for AtomicSequence {
    fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::SeqCst)
    }

    fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }
}

impl<S: SequenceGenerator + ?Sized> SequenceGenerator for &S {
    fn next_value(&self) -> u64 {
        (**self).next_value()
    }

    fn peek(&self) -> u64 {
        (**self).peek()
    }
}

static PROCESS_SEQUENCE: AtomicSequence = AtomicSequence::new();

/// Process-wide sequence used when no generator is injected.
pub fn process_sequence() -> &'static AtomicSequence {
    &PROCESS_SEQUENCE
}
