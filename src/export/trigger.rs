//! Guard against overlapping exports.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{Error, Result};

/// Stands in for the control that starts an export.
///
/// While an export started through [`ExportTrigger::run`] is in progress
/// the trigger is busy and further runs are refused. It becomes available
/// again when the run ends, however it ends.
#[derive(Debug, Default)]
pub struct ExportTrigger {
    busy: AtomicBool,
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ExportTrigger {
    /// Create an idle trigger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if an export is running.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Run `f` unless another run is in progress.
    pub fn run<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        if self
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(Error::ExportInProgress);
        }
        let _guard = BusyGuard(&self.busy);
        f()
    }
}
