//! The architecture-independent fence operations.
//!
//! Each function resolves at compile time to the backend bound in
//! [`crate::arch`] and inlines to that backend's instruction sequence.
//! Nothing here blocks, allocates, or touches shared state; every operation
//! is safe from any context, including interrupt and signal handlers, and is
//! freely reentrant.

use crate::arch::imp;
use crate::kind::{FenceCost, FenceKind, OrderSet};

/// Name of the fence backend bound at compile time.
pub const BACKEND: &str = imp::NAME;

/// Earlier loads complete before later loads.
///
/// Compiler barrier only on the x86 family; `dmb ishld` on AArch64;
/// `fence r, r` on RISC-V.
#[inline(always)]
pub fn load_load() {
    imp::load_load();
}

/// Earlier stores become visible before later stores.
///
/// The writer half of a publication pair: fill the payload, `store_store()`,
/// then publish the flag.
///
/// Compiler barrier only on the x86 family; `dmb ishst` on AArch64;
/// `fence w, w` on RISC-V.
#[inline(always)]
pub fn store_store() {
    imp::store_store();
}

/// Earlier loads complete before later stores become visible.
///
/// Compiler barrier only on the x86 family; `dmb ishld` on AArch64;
/// `fence r, w` on RISC-V.
#[inline(always)]
pub fn load_store() {
    imp::load_store();
}

/// Earlier stores become visible before later loads complete.
///
/// The one reordering even strongly-ordered hardware performs (the store
/// buffer), and the most expensive kind to forbid: a hardware fence on every
/// backend. Needed wherever a thread writes one location then reads another
/// and a peer does the mirror image, as in Dekker-style mutual exclusion.
#[inline(always)]
pub fn store_load() {
    imp::store_load();
}

/// All four orderings at once.
///
/// At least as strong as issuing each of the other four kinds in sequence.
#[inline(always)]
pub fn full() {
    imp::full();
}

/// What `kind` costs on the backend bound at compile time.
///
/// Upstream primitives size their fast paths around this: a kind that is
/// [`FenceCost::CompilerOnly`] is free at runtime, a
/// [`FenceCost::HardwareFence`] is not.
pub const fn cost(kind: FenceKind) -> FenceCost {
    imp::cost(kind)
}

/// The full ordering the bound backend actually guarantees for `kind`.
///
/// Always a superset of [`FenceKind::required`]: a backend may implement a
/// kind with a stronger instruction than the name asks for, never a weaker
/// one. The exact set varies per backend because hardware fences come in
/// coarser granularities than the kind set.
pub const fn enforced(kind: FenceKind) -> OrderSet {
    imp::enforced(kind)
}
