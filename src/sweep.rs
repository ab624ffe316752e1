// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Shared knobs for the spin-sweep enumerators.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

/// Options controlling how a spin sweep is executed. The canonical
/// lexicographic result order is unaffected by either setting.
#[derive(Clone, Default)]
pub struct SweepOptions {
    /// Shard the sigma-enumeration across a `rayon` thread pool.
    pub parallel: bool,
    /// Checked once per sigma/x step; a sweep that observes it set returns
    /// `Error::CancelledSweep` early.
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SweepOptions {
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(std::sync::atomic::Ordering::Relaxed))
    }
}
