//! Architecture-independent memory barrier primitives.
//!
//! This crate is the fence layer under a concurrency library: a fixed set of
//! ordering operations that higher-level primitives (spinlocks, reference
//! counts, lock-free queues, single-writer/multi-reader structures) call
//! instead of hand-coding per-architecture instructions. Each operation is
//! bound to one backend at compile time and inlines to the minimal correct
//! sequence for the target; there is no runtime dispatch and no state.
//!
//! # Fence kinds
//!
//! A fence takes no data and produces none. It constrains the order in which
//! the current thread's surrounding memory accesses become visible to other
//! threads, and pins the optimizer the same way (accesses are never
//! reordered, merged, or eliminated across a fence).
//!
//! | Operation      | Forbidden reordering             | x86 family | AArch64    | RISC-V         |
//! |----------------|----------------------------------|------------|------------|----------------|
//! | [`load_load`]  | earlier load past later load     | (compiler) | `dmb ishld`| `fence r, r`   |
//! | [`store_store`]| earlier store past later store   | (compiler) | `dmb ishst`| `fence w, w`   |
//! | [`load_store`] | earlier load past later store    | (compiler) | `dmb ishld`| `fence r, w`   |
//! | [`store_load`] | earlier store past later load    | `mfence`   | `dmb ish`  | `fence w, r`   |
//! | [`full`]       | all of the above                 | `mfence`   | `dmb ish`  | `fence rw, rw` |
//!
//! "(compiler)" means the hardware's total store order already forbids the
//! reordering and only a compiler barrier is emitted. [`cost`] and
//! [`enforced`] expose these tables to code; [`BACKEND`] names the bound
//! backend.
//!
//! # Pairing
//!
//! A fence only constrains the issuing thread. Cross-thread ordering comes
//! from matched pairs: the writer fills a payload, issues [`store_store`],
//! then publishes a flag; the reader observes the flag, issues
//! [`load_load`], then reads the payload. Neither side's fence helps without
//! the other.
//!
//! # Unsupported targets
//!
//! Building for a target with no backend fails at compile time. The
//! `portable-fallback` feature instead binds a backend that issues a
//! sequentially consistent atomic fence for every kind, trading performance
//! for portability. There is no silent no-op path.

#![no_std]

mod arch;
mod fence;
mod kind;

pub use fence::{cost, enforced, full, load_load, load_store, store_load, store_store, BACKEND};
pub use kind::{FenceCost, FenceKind, OrderSet};
