use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one load of a view. Later loads carry larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn get(&self) -> u64 {
        self.0
    }
}

/// Hands out load tickets and remembers the newest.
#[derive(Debug, Default)]
pub struct LoadSequencer {
    latest: AtomicU64,
}

impl LoadSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> LoadTicket {
        LoadTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        self.latest.load(Ordering::SeqCst) == ticket.0
    }
}

/// A display region that only shows the result of the newest load.
#[derive(Debug)]
pub struct Region<T> {
    shown: Option<(LoadTicket, T)>,
}

impl<T> Default for Region<T> {
    fn default() -> Self {
        Self { shown: None }
    }
}

impl<T> Region<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show `value` if `ticket` is still the newest load. Results of
    /// superseded loads are dropped and `false` is returned.
    pub fn offer(&mut self, sequencer: &LoadSequencer, ticket: LoadTicket, value: T) -> bool {
        if !sequencer.is_current(ticket) {
            tracing::debug!(ticket = ticket.get(), "dropping stale load result");
            return false;
        }
        if let Some((shown, _)) = &self.shown
            && *shown > ticket
        {
            return false;
        }
        self.shown = Some((ticket, value));
        true
    }

    pub fn get(&self) -> Option<&T> {
        self.shown.as_ref().map(|(_, value)| value)
    }

    pub fn take(&mut self) -> Option<T> {
        self.shown.take().map(|(_, value)| value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_increase() {
        let sequencer = LoadSequencer::new();
        let first = sequencer.issue();
        let second = sequencer.issue();
        assert!(second > first);
        assert!(!sequencer.is_current(first));
        assert!(sequencer.is_current(second));
    }

    #[test]
    fn test_stale_result_is_rejected() {
        let sequencer = LoadSequencer::new();
        let mut region = Region::new();

        let slow = sequencer.issue();
        let fast = sequencer.issue();

        assert!(region.offer(&sequencer, fast, "card B"));
        assert!(!region.offer(&sequencer, slow, "card A"));
        assert_eq!(region.get(), Some(&"card B"));
    }

    #[test]
    fn test_result_of_only_load_is_shown() {
        let sequencer = LoadSequencer::new();
        let mut region = Region::new();
        let ticket = sequencer.issue();

        assert!(region.offer(&sequencer, ticket, 42));
        assert_eq!(region.take(), Some(42));
        assert!(region.get().is_none());
    }
}
