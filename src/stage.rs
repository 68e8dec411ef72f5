//! Text normalization stage abstraction.
//!
//! A stage is one text-rewriting step of a host analysis pipeline. Every stage
//! has two entry points:
//!
//! * `needs_apply(&self, text)` – fast pre-check. `false` means the stage
//!   would return its input unchanged, so callers can skip it entirely.
//! * `apply(&self, Cow<str>)` – the transformation itself. Must return the
//!   input untouched (same `Cow`, same pointer) when nothing changes.
//!
//! Stages are stateless and `Send + Sync`; one instance can serve any number
//! of threads.

pub mod ascii_fold;

use std::borrow::Cow;

pub use ascii_fold::AsciiFold;

/// A single normalisation step.
pub trait Stage: Send + Sync {
    /// Human-readable name – used in logs and test diagnostics.
    fn name(&self) -> &'static str;

    /// Fast pre-check. Returning `false` skips the whole stage.
    fn needs_apply(&self, text: &str) -> bool;

    /// Allocation-aware transformation. Must always be correct, even when
    /// called without consulting `needs_apply` first.
    fn apply<'a>(&self, text: Cow<'a, str>) -> Cow<'a, str>;
}
