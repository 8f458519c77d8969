/// Sequence number handed out per submit. Only the completion carrying the
/// latest ticket may touch view state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn next(self) -> Self {
        RequestTicket(self.0 + 1)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}
