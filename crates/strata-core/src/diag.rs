//! Rate-limited diagnostics feed backing the on-page error overlay.

use fnv::FnvHashSet;
use std::collections::VecDeque;

/// Maximum entries kept visible; older entries are evicted first.
pub const MAX_VISIBLE_ENTRIES: usize = 5;

#[derive(Clone, Debug)]
pub struct DiagEntry {
    pub context: String,
    pub message: String,
}

/// Bounded, deduplicated diagnostics log.
///
/// A given context key is reported at most once so a scene failing on every
/// frame produces a single entry instead of flooding the overlay. The
/// particle fault is stickier still: one report per session regardless of
/// message text.
#[derive(Default)]
pub struct Diagnostics {
    entries: VecDeque<DiagEntry>,
    seen: FnvHashSet<String>,
    particle_fault: bool,
    revision: u64,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report a recoverable failure under a dedupe context key.
    pub fn report(&mut self, context: &str, message: impl Into<String>) {
        if self.seen.contains(context) {
            return;
        }
        self.seen.insert(context.to_owned());
        self.push(DiagEntry {
            context: context.to_owned(),
            message: message.into(),
        });
    }

    /// Report the particle simulation fault. Sticky: subsequent calls are
    /// dropped for the rest of the session.
    pub fn report_particle_fault(&mut self, message: impl Into<String>) {
        if self.particle_fault {
            return;
        }
        self.particle_fault = true;
        self.push(DiagEntry {
            context: "particles/step".to_owned(),
            message: message.into(),
        });
    }

    fn push(&mut self, entry: DiagEntry) {
        log::error!("[diag] {}: {}", entry.context, entry.message);
        self.entries.push_back(entry);
        while self.entries.len() > MAX_VISIBLE_ENTRIES {
            self.entries.pop_front();
        }
        self.revision += 1;
    }

    pub fn entries(&self) -> impl Iterator<Item = &DiagEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn has_particle_fault(&self) -> bool {
        self.particle_fault
    }

    /// Monotonic change counter; the overlay re-renders only when it moves.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedupes_by_context_key() {
        let mut d = Diagnostics::new();
        d.report("helix/update", "boom");
        d.report("helix/update", "boom again");
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn evicts_oldest_beyond_cap() {
        let mut d = Diagnostics::new();
        for i in 0..8 {
            d.report(&format!("ctx{i}"), "x");
        }
        assert_eq!(d.len(), MAX_VISIBLE_ENTRIES);
        let first = d.entries().next().unwrap();
        assert_eq!(first.context, "ctx3");
    }

    #[test]
    fn particle_fault_reports_once() {
        let mut d = Diagnostics::new();
        d.report_particle_fault("nan");
        d.report_particle_fault("nan again");
        assert_eq!(d.len(), 1);
        assert!(d.has_particle_fault());
    }
}
