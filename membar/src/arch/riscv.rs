//! Fence backend for RISC-V (riscv32 and riscv64).
//!
//! Weakly ordered under RVWMO. The FENCE instruction takes explicit
//! predecessor and successor access sets, so every kind maps to exactly the
//! ordering it names and nothing more.
//!
//! Cost table:
//!
//! * `load_load` -- `fence r, r`.
//! * `store_store` -- `fence w, w`.
//! * `load_store` -- `fence r, w`.
//! * `store_load` -- `fence w, r`.
//! * `full` -- `fence rw, rw`.

use crate::kind::{FenceCost, FenceKind, OrderSet};

pub(crate) const NAME: &str = "riscv (weakly ordered)";

#[inline(always)]
pub(crate) fn load_load() {
    // SAFETY: FENCE only constrains memory access order between the named
    // predecessor and successor sets; no architectural state changes.
    unsafe {
        core::arch::asm!("fence r, r", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn store_store() {
    // SAFETY: same as `load_load`, with store/store sets.
    unsafe {
        core::arch::asm!("fence w, w", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn load_store() {
    // SAFETY: same as `load_load`, with load/store sets.
    unsafe {
        core::arch::asm!("fence r, w", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn store_load() {
    // SAFETY: same as `load_load`, with store/load sets.
    unsafe {
        core::arch::asm!("fence w, r", options(nostack, preserves_flags));
    }
}

#[inline(always)]
pub(crate) fn full() {
    // SAFETY: same as `load_load`, over both sets in both directions.
    unsafe {
        core::arch::asm!("fence rw, rw", options(nostack, preserves_flags));
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
        FenceKind::LoadLoad => OrderSet::LOAD_LOAD,
        FenceKind::StoreStore => OrderSet::STORE_STORE,
        FenceKind::LoadStore => OrderSet::LOAD_STORE,
        FenceKind::StoreLoad => OrderSet::STORE_LOAD,
        FenceKind::Full => OrderSet::all(),
    }
}
