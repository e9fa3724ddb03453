//! Compile-time selection of the fence backend.
//!
//! Exactly one backend module is compiled in and bound as `imp`; the facade
//! in [`crate`] calls through it with no runtime branch, table, or
//! indirection. Every backend exposes the same surface: `NAME`, the five
//! fence functions, and the `cost`/`enforced` contract tables.
//!
//! A target with no dedicated backend is a hard compile error unless the
//! `portable-fallback` feature opts into sequentially consistent fences for
//! every kind. Silently compiling fences down to no-ops would corrupt every
//! caller's invariants without a symptom, so that is never the default.

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) mod x86_64;

#[cfg(any(target_arch = "x86", target_arch = "x86_64"))]
pub(crate) use self::x86_64 as imp;

#[cfg(target_arch = "aarch64")]
pub(crate) mod aarch64;

#[cfg(target_arch = "aarch64")]
pub(crate) use self::aarch64 as imp;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub(crate) mod riscv;

#[cfg(any(target_arch = "riscv32", target_arch = "riscv64"))]
pub(crate) use self::riscv as imp;

#[cfg(all(
    not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
    )),
    feature = "portable-fallback"
))]
pub(crate) mod portable;

#[cfg(all(
    not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
    )),
    feature = "portable-fallback"
))]
pub(crate) use self::portable as imp;

#[cfg(all(
    not(any(
        target_arch = "x86",
        target_arch = "x86_64",
        target_arch = "aarch64",
        target_arch = "riscv32",
        target_arch = "riscv64",
    )),
    not(feature = "portable-fallback")
))]
compile_error!(
    "membar: no fence backend for this target architecture. \
     Enable the `portable-fallback` feature to use sequentially consistent \
     atomic fences for every kind, or add a backend under src/arch/."
);
