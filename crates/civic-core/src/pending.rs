//! Pending Runs
//!
//! Bookkeeping for the simulated long-running actions (report generation,
//! voice capture). Every start hands out a ticket and a completion only lands
//! while its ticket is still the active one, so a cancelled run never
//! finishes.

/// Identifies one started run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RunTicket(u32);

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingRun {
    issued: u32,
    active: Option<u32>,
}

impl PendingRun {
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Start a run. Returns `None` while another is in flight.
    pub fn start(&mut self) -> Option<RunTicket> {
        if self.active.is_some() {
            return None;
        }
        self.issued = self.issued.wrapping_add(1);
        self.active = Some(self.issued);
        Some(RunTicket(self.issued))
    }

    /// Settle the run behind `ticket`; `false` if it was cancelled or superseded
    pub fn complete(&mut self, ticket: RunTicket) -> bool {
        if self.active == Some(ticket.0) {
            self.active = None;
            true
        } else {
            log::debug!("dropping completion of stale run {}", ticket.0);
            false
        }
    }

    /// Abandon the active run, if any
    pub fn cancel(&mut self) -> bool {
        self.active.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_complete() {
        let mut run = PendingRun::default();
        let ticket = run.start().unwrap();
        assert!(run.is_active());
        assert!(run.start().is_none());
        assert!(run.complete(ticket));
        assert!(!run.is_active());
    }

    #[test]
    fn test_cancelled_run_never_completes() {
        let mut run = PendingRun::default();
        let ticket = run.start().unwrap();
        assert!(run.cancel());
        assert!(!run.complete(ticket));
        assert!(!run.is_active());
        assert!(!run.cancel());
    }

    #[test]
    fn test_stale_ticket_does_not_settle_new_run() {
        let mut run = PendingRun::default();
        let first = run.start().unwrap();
        run.cancel();
        let second = run.start().unwrap();
        assert_ne!(first, second);
        assert!(!run.complete(first));
        assert!(run.is_active());
        assert!(run.complete(second));
    }
}
