//! Fence backend for the x86 family (x86 and x86_64).
//!
//! Total store order: the hardware already keeps load-load, load-store and
//! store-store in program order, so those three kinds cost nothing at runtime
//! and only pin the optimizer. The store buffer can still make an earlier
//! store visible after a later load, so `store_load` and `full` need a real
//! fence.
//!
//! Cost table:
//!
//! * `load_load` -- compiler barrier only.
//! * `store_store` -- compiler barrier only.
//! * `load_store` -- compiler barrier only.
//! * `store_load` -- `core::sync::atomic::fence(SeqCst)`, MFENCE semantics.
//! * `full` -- `core::sync::atomic::fence(SeqCst)`, MFENCE semantics.

use core::sync::atomic::{compiler_fence, fence, Ordering};

use crate::kind::{FenceCost, FenceKind, OrderSet};

pub(crate) const NAME: &str = "x86 (total store order)";

#[inline(always)]
pub(crate) fn load_load() {
    compiler_fence(Ordering::SeqCst);
}

#[inline(always)]
pub(crate) fn store_store() {
    compiler_fence(Ordering::SeqCst);
}

#[inline(always)]
pub(crate) fn load_store() {
    compiler_fence(Ordering::SeqCst);
}

#[inline(always)]
pub(crate) fn store_load() {
    fence(Ordering::SeqCst);
}

#[inline(always)]
pub(crate) fn full() {
    fence(Ordering::SeqCst);
}

pub(crate) const fn cost(kind: FenceKind) -> FenceCost {
    match kind {
        FenceKind::LoadLoad | FenceKind::StoreStore | FenceKind::LoadStore => {
            FenceCost::CompilerOnly
        }
        FenceKind::StoreLoad | FenceKind::Full => FenceCost::HardwareFence,
    }
}

pub(crate) const fn enforced(kind: FenceKind) -> OrderSet {
    match kind {
        // The compiler barrier pins program order; TSO then guarantees every
        // ordering except store-then-load.
        FenceKind::LoadLoad | FenceKind::StoreStore | FenceKind::LoadStore => OrderSet::LOAD_LOAD
            .union(OrderSet::LOAD_STORE)
            .union(OrderSet::STORE_STORE),
        FenceKind::StoreLoad | FenceKind::Full => OrderSet::all(),
    }
}
