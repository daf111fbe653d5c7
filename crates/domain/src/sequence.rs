//! Request sequencing — fences out-of-order status responses.
//!
//! Polls are never cancelled, so a slow response can land after a faster,
//! newer one. Each poll takes a ticket before it is sent; its response is
//! applied only if no newer ticket has been applied already.

/// Ticket attached to one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    #[must_use]
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Monotonic ticket dispenser plus the high-water mark of applied tickets.
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    issued: u64,
    applied: u64,
}

impl RequestSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the next ticket. Tickets start at 1 and strictly increase.
    pub fn issue(&mut self) -> Ticket {
        self.issued += 1;
        Ticket(self.issued)
    }

    /// Record that the response for `ticket` is about to be applied.
    ///
    /// Returns `false`, leaving the mark untouched, when a response with a
    /// newer ticket was already applied.
    pub fn try_apply(&mut self, ticket: Ticket) -> bool {
        if ticket.0 <= self.applied {
            return false;
        }
        self.applied = ticket.0;
        true
    }

    /// Ticket number of the newest applied response (0 when none).
    #[must_use]
    pub fn last_applied(&self) -> u64 {
        self.applied
    }
}
