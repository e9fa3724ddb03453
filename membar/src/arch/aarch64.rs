//! Fence backend for AArch64.
//!
//! Weakly ordered: the hardware may reorder any pair of independent accesses,
//! so every kind emits a real barrier. `dmb` in the inner-shareable domain is
//! the right scope here; this layer orders normal cacheable memory between
//! threads, not device memory (that is `dsb` territory and out of scope).
//!
//! Cost table:
//!
//! * `load_load` -- `dmb ishld`.
//! * `store_store` -- `dmb ishst`.
//! * `load_store` -- `dmb ishld` (the load variant also orders later stores).
//! * `store_load` -- `dmb ish` (only the full barrier holds stores against
//!   later loads).
//! * `full` -- `dmb ish`.

use crate::kind::{FenceCost, FenceKind, OrderSet};

pub(crate) const NAME: &str = "aarch64 (weakly ordered)";

#[inline(always)]
pub(crate) fn load_load() {
    // SAFETY: `dmb ishld` only constrains memory access order in the
    // inner-shareable domain; it reads and writes no architectural state.
    unsafe {
        core::arch::asm!("dmb ishld", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn store_store() {
    // SAFETY: `dmb ishst` only constrains store order; no architectural
    // state is read or written.
    unsafe {
        core::arch::asm!("dmb ishst", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn load_store() {
    // `dmb ishld` orders earlier loads against later loads *and* stores,
    // which covers this kind; there is no cheaper load-store-only barrier.
    // SAFETY: same as `load_load`.
    unsafe {
        core::arch::asm!("dmb ishld", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn store_load() {
    // SAFETY: `dmb ish` is the full inner-shareable data memory barrier; it
    // only constrains access order.
    unsafe {
        core::arch::asm!("dmb ish", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn full() {
    // SAFETY: same as `store_load`.
    unsafe {
        core::arch::asm!("dmb ish", options(nostack, preserves_flags));
    }
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
        // `dmb ishld` waits for earlier loads, holding back later loads and
        // stores both.
        FenceKind::LoadLoad | FenceKind::LoadStore => {
            OrderSet::LOAD_LOAD.union(OrderSet::LOAD_STORE)
        }
        FenceKind::StoreStore => OrderSet::STORE_STORE,
        FenceKind::StoreLoad | FenceKind::Full => OrderSet::all(),
    }
}
