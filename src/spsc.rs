//! Single-producer/single-consumer transport between the input thread
//! and the worker loop.
//!
//! The one-producer/one-consumer rule is enforced by construction rather
//! than at runtime: `channel` hands out exactly one `Producer` and one
//! `Consumer`, and neither is `Clone`. Ownership of a pushed value moves
//! into the queue and comes back out of `pop` — dropping the popped value
//! is the release, so a double-release cannot be written.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

/// Create an unbounded SPSC queue, split into its two endpoints.
pub fn channel<T>() -> (Producer<T>, Consumer<T>) {
    let (tx, rx) = mpsc::channel();
    (Producer { tx }, Consumer { rx })
}

/// The push endpoint. Owned by the single designated producer thread.
pub struct Producer<T> {
    tx: Sender<T>,
}

/// The pop endpoint. Owned by the single consumer thread.
pub struct Consumer<T> {
    rx: Receiver<T>,
}

impl<T> Producer<T> {
    /// Push a value, transferring ownership into the queue. Never blocks.
    ///
    /// Returns `false` once the consumer endpoint has been dropped, which
    /// is the producer thread's signal to stop.
    pub fn push(&self, value: T) -> bool {
        self.tx.send(value).is_ok()
    }
}

impl<T> Consumer<T> {
    /// Pop the oldest queued value, or `None` if the queue is currently
    /// empty. Never blocks, spins, or sleeps.
    ///
    /// A disconnected producer with nothing left queued also yields
    /// `None`; polling after shutdown stays safe.
    pub fn pop(&self) -> Option<T> {
        match self.rx.try_recv() {
            Ok(value) => Some(value),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn fifo_order_preserved() {
        let (tx, rx) = channel();
        for i in 0..100 {
            assert!(tx.push(i));
        }
        for i in 0..100 {
            assert_eq!(rx.pop(), Some(i));
        }
        assert_eq!(rx.pop(), None);
    }

    #[test]
    fn empty_pop_is_idempotent() {
        let (_tx, rx) = channel::<u32>();
        for _ in 0..1000 {
            assert_eq!(rx.pop(), None);
        }
    }

    #[test]
    fn pop_interleaves_with_push() {
        let (tx, rx) = channel();
        assert!(tx.push(1));
        assert_eq!(rx.pop(), Some(1));
        assert_eq!(rx.pop(), None);
        assert!(tx.push(2));
        assert!(tx.push(3));
        assert_eq!(rx.pop(), Some(2));
        assert_eq!(rx.pop(), Some(3));
        assert_eq!(rx.pop(), None);
    }

    #[test]
    fn push_fails_after_consumer_dropped() {
        let (tx, rx) = channel();
        drop(rx);
        assert!(!tx.push(42));
    }

    #[test]
    fn pop_after_producer_dropped_drains_then_none() {
        let (tx, rx) = channel();
        assert!(tx.push('a'));
        assert!(tx.push('b'));
        drop(tx);
        assert_eq!(rx.pop(), Some('a'));
        assert_eq!(rx.pop(), Some('b'));
        assert_eq!(rx.pop(), None);
        assert_eq!(rx.pop(), None);
    }

    #[test]
    fn concurrent_producer_consumer_sees_exact_sequence() {
        const COUNT: usize = 100_000;
        let (tx, rx) = channel();

        let producer = thread::spawn(move || {
            for i in 0..COUNT {
                assert!(tx.push(i));
            }
        });

        let mut received = Vec::with_capacity(COUNT);
        while received.len() < COUNT {
            match rx.pop() {
                Some(v) => received.push(v),
                None => thread::yield_now(),
            }
        }
        assert_eq!(rx.pop(), None);
        assert!(received.iter().copied().eq(0..COUNT));

        producer.join().unwrap();
    }

    #[test]
    fn every_popped_value_dropped_exactly_once() {
        static DROPS: AtomicUsize = AtomicUsize::new(0);

        struct Token;
        impl Drop for Token {
            fn drop(&mut self) {
                DROPS.fetch_add(1, Ordering::SeqCst);
            }
        }

        let (tx, rx) = channel();
        for _ in 0..50 {
            assert!(tx.push(Token));
        }
        // Pop half explicitly; the rest are released when the queue drops.
        for _ in 0..25 {
            drop(rx.pop().unwrap());
        }
        assert_eq!(DROPS.load(Ordering::SeqCst), 25);
        drop(rx);
        drop(tx);
        assert_eq!(DROPS.load(Ordering::SeqCst), 50);
    }
}
