//! Fence kinds and the ordering relation between them.
//!
//! A [`FenceKind`] names a constraint on the order in which the current
//! thread's memory accesses become visible to other threads. [`OrderSet`] is
//! the formal side of that naming: the set of primitive orderings a kind
//! promises, used by the introspection API and the strength-lattice tests to
//! compare fences without timing anything.

use bitflags::bitflags;

bitflags! {
    /// Set of primitive memory-access orderings.
    ///
    /// Each flag reads "an earlier X is not reordered past a later Y".
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct OrderSet: u8 {
        /// Earlier load ordered before later load.
        const LOAD_LOAD = 1 << 0;
        /// Earlier load ordered before later store.
        const LOAD_STORE = 1 << 1;
        /// Earlier store ordered before later store.
        const STORE_STORE = 1 << 2;
        /// Earlier store ordered before later load.
        const STORE_LOAD = 1 << 3;
    }
}

/// The closed set of fence operations this crate provides.
///
/// `Full` subsumes the other four; `StoreLoad` is the expensive one on most
/// hardware because it has to drain the store buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FenceKind {
    /// Earlier loads complete before later loads.
    LoadLoad,
    /// Earlier stores become visible before later stores.
    StoreStore,
    /// Earlier loads complete before later stores become visible.
    LoadStore,
    /// Earlier stores become visible before later loads complete.
    StoreLoad,
    /// All four orderings at once.
    Full,
}

impl FenceKind {
    /// Every kind, for exhaustive iteration in tests and benches.
    pub const ALL: [FenceKind; 5] = [
        FenceKind::LoadLoad,
        FenceKind::StoreStore,
        FenceKind::LoadStore,
        FenceKind::StoreLoad,
        FenceKind::Full,
    ];

    /// The minimum ordering this kind's name promises.
    ///
    /// A backend may deliver more than this for a given kind, never less.
    pub const fn required(self) -> OrderSet {
        match self {
            FenceKind::LoadLoad => OrderSet::LOAD_LOAD,
            FenceKind::StoreStore => OrderSet::STORE_STORE,
            FenceKind::LoadStore => OrderSet::LOAD_STORE,
            FenceKind::StoreLoad => OrderSet::STORE_LOAD,
            FenceKind::Full => OrderSet::all(),
        }
    }

    /// Issue the fence this kind names.
    ///
    /// Equivalent to calling the matching free function. When `self` is a
    /// constant the match folds away and this inlines to the same code.
    #[inline(always)]
    pub fn issue(self) {
        match self {
            FenceKind::LoadLoad => crate::load_load(),
            FenceKind::StoreStore => crate::store_store(),
            FenceKind::LoadStore => crate::load_store(),
            FenceKind::StoreLoad => crate::store_load(),
            FenceKind::Full => crate::full(),
        }
    }

    /// Stable name, for diagnostics and bench labels.
    pub const fn as_str(self) -> &'static str {
        match self {
            FenceKind::LoadLoad => "load_load",
            FenceKind::StoreStore => "store_store",
            FenceKind::LoadStore => "load_store",
            FenceKind::StoreLoad => "store_load",
            FenceKind::Full => "full",
        }
    }
}

/// What a fence kind costs on the backend bound at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceCost {
    /// No instruction is emitted; only compiler reordering is pinned.
    CompilerOnly,
    /// A hardware fence instruction is emitted.
    HardwareFence,
}
