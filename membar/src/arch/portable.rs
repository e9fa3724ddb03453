//! Fallback fence backend for targets without a dedicated one.
//!
//! Compiled only when the `portable-fallback` feature is enabled. Every kind
//! issues a sequentially consistent atomic fence, the strongest mechanism
//! core exposes on every target. That over-delivers for most kinds; this
//! backend trades performance for correctness and must never hand out a
//! weaker fence than the kind names.

use core::sync::atomic::{fence, Ordering};

use crate::kind::{FenceCost, FenceKind, OrderSet};

pub(crate) const NAME: &str = "portable (sequentially consistent fallback)";

#[inline(always)]
pub(crate) fn load_load() {
    fence(Ordering::SeqCst);
}

#[inline(always)]
pub(crate) fn store_store() {
    fence(Ordering::SeqCst);
}

#[inline(always)]
pub(crate) fn load_store() {
    fence(Ordering::SeqCst);
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
        FenceKind::LoadLoad
        | FenceKind::StoreStore
        | FenceKind::LoadStore
        | FenceKind::StoreLoad
        | FenceKind::Full => FenceCost::HardwareFence,
    }
}

pub(crate) const fn enforced(kind: FenceKind) -> OrderSet {
    match kind {
        FenceKind::LoadLoad
        | FenceKind::StoreStore
        | FenceKind::LoadStore
        | FenceKind::StoreLoad
        | FenceKind::Full => OrderSet::all(),
    }
}
