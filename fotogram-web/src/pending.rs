//! Re-entry latch for in-flight form submissions.

use std::cell::Cell;
use std::rc::Rc;

/// Shared flag marking a submission as outstanding. Clones observe the
/// same flag, so an event handler and the async task it spawns can hand
/// the latch around freely. Reads and writes are synchronous, which keeps
/// two dispatches in the same task from both starting a request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingGuard {
    flag: Rc<Cell<bool>>,
}

impl PendingGuard {
    /// Whether a submission is outstanding. Handlers bail out while this
    /// holds.
    pub fn busy(&self) -> bool {
        self.flag.get()
    }

    /// Mark a submission as started.
    pub fn begin(&self) {
        self.flag.set(true);
    }

    /// Clear the flag once the submission concluded, whatever the outcome.
    pub fn finish(&self) {
        self.flag.set(false);
    }
}
