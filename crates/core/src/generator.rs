//! Entity code generation.
//!
//! Entities receive their generator explicitly. Distributed id schemes live in
//! consuming services; only local generators are provided here.

use core::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::id::Code;

/// Produces a fresh, truthy code for a newly constructed entity.
pub trait CodeGenerator {
    fn generate(&self) -> Code;
}

impl<F> CodeGenerator for F
where
    F: Fn() -> Code,
{
    fn generate(&self) -> Code {
        self()
    }
}

/// UUIDv7 text codes (time-ordered).
#[derive(Debug, Default, Copy, Clone)]
pub struct UuidCodeGenerator;

impl CodeGenerator for UuidCodeGenerator {
    fn generate(&self) -> Code {
        Code::from(Uuid::now_v7())
    }
}

/// Monotonic numeric codes. Deterministic, so handy in tests.
#[derive(Debug)]
pub struct SequenceCodeGenerator {
    next: AtomicU64,
}

impl SequenceCodeGenerator {
    /// Start the sequence at `first`. Zero is bumped to one, and the sequence
    /// wraps from `u64::MAX` back to one, so it never yields a zero code.
    pub const fn starting_at(first: u64) -> Self {
        let first = if first == 0 { 1 } else { first };
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequenceCodeGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> Code {
        let step = |n: u64| Some(n.checked_add(1).unwrap_or(1));
        let current = match self.next.fetch_update(Ordering::Relaxed, Ordering::Relaxed, step) {
            Ok(n) | Err(n) => n,
        };
        Code::from(current)
    }
}
