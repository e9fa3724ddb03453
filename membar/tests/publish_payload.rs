//! Cross-thread scenarios for the bound backend.
//!
//! Payload words and flags are relaxed atomics, so the ordering observed
//! here comes entirely from the fences under test, not from acquire/release
//! operations. Failures are probabilistic by nature; the round counts are
//! high enough that a missing or miscompiled fence shows up reliably on
//! weakly ordered hardware and a store-buffer leak shows up on x86.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use membar::{load_load, load_store, store_load, store_store, FenceKind};

const PAYLOAD_WORDS: usize = 8;

fn payload_word(round: usize, index: usize) -> u64 {
    (round as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15) ^ index as u64
}

/// Writer publishes a multi-word payload behind a sequence flag; the reader
/// must never observe the flag for a round while any payload word is stale.
///
/// Writer: fill payload, `store_store()`, publish `seq`, then wait for the
/// ack before reusing the buffer (`load_store()` between the ack load and
/// the next round's stores). Reader: poll `seq`, `load_load()`, read the
/// payload, `load_store()`, store the ack.
#[test]
fn publication_is_never_torn() {
    const ROUNDS: usize = 100_000;

    let payload: [AtomicU64; PAYLOAD_WORDS] = std::array::from_fn(|_| AtomicU64::new(0));
    let seq = AtomicUsize::new(0);
    let ack = AtomicUsize::new(0);

    thread::scope(|s| {
        s.spawn(|| {
            for round in 1..=ROUNDS {
                for (i, word) in payload.iter().enumerate() {
                    word.store(payload_word(round, i), Ordering::Relaxed);
                }
                store_store();
                seq.store(round, Ordering::Relaxed);

                while ack.load(Ordering::Relaxed) < round {
                    std::hint::spin_loop();
                }
                load_store();
            }
        });

        s.spawn(|| {
            for round in 1..=ROUNDS {
                while seq.load(Ordering::Relaxed) < round {
                    std::hint::spin_loop();
                }
                load_load();
                for (i, word) in payload.iter().enumerate() {
                    let got = word.load(Ordering::Relaxed);
                    assert_eq!(
                        got,
                        payload_word(round, i),
                        "round {round}: stale word {i} behind a published flag"
                    );
                }
                load_store();
                ack.store(round, Ordering::Relaxed);
            }
        });
    });
}

/// Dekker's handshake: each thread stores its own flag, fences, then loads
/// the other's. Without a store-load fence the store buffer lets both
/// threads read zero in the same round; `store_load()` forbids it.
#[test]
fn store_load_drains_the_store_buffer() {
    const ROUNDS: usize = 10_000;

    let x = AtomicUsize::new(0);
    let y = AtomicUsize::new(0);
    let rendezvous = Barrier::new(2);

    let (mine, theirs) = thread::scope(|s| {
        let left = s.spawn(|| {
            let mut seen = Vec::with_capacity(ROUNDS);
            for _ in 0..ROUNDS {
                rendezvous.wait();
                x.store(1, Ordering::Relaxed);
                store_load();
                seen.push(y.load(Ordering::Relaxed));
                rendezvous.wait();
                // Left thread resets for the next round.
                x.store(0, Ordering::Relaxed);
                y.store(0, Ordering::Relaxed);
                rendezvous.wait();
            }
            seen
        });
        let right = s.spawn(|| {
            let mut seen = Vec::with_capacity(ROUNDS);
            for _ in 0..ROUNDS {
                rendezvous.wait();
                y.store(1, Ordering::Relaxed);
                store_load();
                seen.push(x.load(Ordering::Relaxed));
                rendezvous.wait();
                rendezvous.wait();
            }
            seen
        });
        (left.join().unwrap(), right.join().unwrap())
    });

    for (round, (a, b)) in mine.iter().zip(theirs.iter()).enumerate() {
        assert!(
            *a == 1 || *b == 1,
            "round {round}: both threads read 0 past a store_load fence"
        );
    }
}

/// N threads hammering every fence kind around relaxed increments: fences
/// need no coordination among their callers and corrupt nothing.
#[test]
fn fences_are_reentrant() {
    const THREADS: usize = 8;
    const ITERS: usize = 10_000;

    let counter = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for _ in 0..ITERS {
                    for kind in FenceKind::ALL {
                        kind.issue();
                    }
                    counter.fetch_add(1, Ordering::Relaxed);
                }
            });
        }
    });

    assert_eq!(counter.load(Ordering::Relaxed), THREADS * ITERS);
}
