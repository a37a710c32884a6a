/// How long the scripted "AI search" pretends to work.
pub const SEARCH_DELAY_MS: u32 = 1700;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchState {
    #[default]
    Idle,
    Searching,
    Done,
}

/// Identifies one submission. Timers from earlier submissions carry a stale
/// ticket and are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

/// idle -> searching -> done, restarted by every submit. Never goes back to idle.
#[derive(Debug, Clone, Default)]
pub struct SearchSequencer {
    state: SearchState,
    generation: u64,
    elapsed_ms: u32,
}

impl SearchSequencer {
    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn is_searching(&self) -> bool {
        self.state == SearchState::Searching
    }

    pub fn is_done(&self) -> bool {
        self.state == SearchState::Done
    }

    pub fn submit(&mut self) -> SearchTicket {
        self.generation = self.generation.wrapping_add(1);
        self.elapsed_ms = 0;
        self.state = SearchState::Searching;
        SearchTicket(self.generation)
    }

    /// Feeds elapsed time for `ticket`. Returns true when this call finished the run.
    pub fn advance(&mut self, ticket: SearchTicket, elapsed_ms: u32) -> bool {
        if ticket.0 != self.generation || self.state != SearchState::Searching {
            return false;
        }

        self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        if self.elapsed_ms < SEARCH_DELAY_MS {
            return false;
        }

        self.state = SearchState::Done;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_starts_searching_immediately() {
        let mut seq = SearchSequencer::default();
        assert_eq!(seq.state(), SearchState::Idle);

        seq.submit();
        assert!(seq.is_searching());
        assert!(!seq.is_done());
    }

    #[test]
    fn done_after_exactly_the_delay() {
        let mut seq = SearchSequencer::default();
        let ticket = seq.submit();

        assert!(!seq.advance(ticket, SEARCH_DELAY_MS - 1));
        assert!(seq.is_searching());
        assert!(!seq.is_done());

        assert!(seq.advance(ticket, 1));
        assert!(seq.is_done());
        assert!(!seq.is_searching());
    }

    #[test]
    fn done_sticks_until_next_submit() {
        let mut seq = SearchSequencer::default();
        let ticket = seq.submit();
        seq.advance(ticket, SEARCH_DELAY_MS);
        assert!(!seq.advance(ticket, SEARCH_DELAY_MS));
        assert_eq!(seq.state(), SearchState::Done);

        seq.submit();
        assert_eq!(seq.state(), SearchState::Searching);
    }

    #[test]
    fn resubmit_supersedes_pending_run() {
        let mut seq = SearchSequencer::default();
        let first = seq.submit();
        seq.advance(first, 1000);

        let second = seq.submit();
        assert!(!seq.advance(first, SEARCH_DELAY_MS));
        assert!(seq.is_searching());

        assert!(!seq.advance(second, 1000));
        assert!(seq.advance(second, 700));
        assert!(seq.is_done());
    }
}
