//! Generation tickets for discarding stale reload results.

/// Identifies one reload cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ticket(u64);

impl Ticket {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic reload counter. Only the most recently issued ticket is current.
#[derive(Debug, Default)]
pub struct Generation {
    latest: u64,
}

impl Generation {
    /// Starts a new cycle; every earlier ticket becomes stale.
    pub fn begin(&mut self) -> Ticket {
        self.latest += 1;
        Ticket(self.latest)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        ticket.0 == self.latest
    }
}
