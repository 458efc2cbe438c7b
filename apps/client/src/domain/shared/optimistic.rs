/// One in-flight optimistic increment of a displayed counter.
///
/// `begin` captures the currently displayed value and yields the value to
/// render immediately; the round trip then ends in exactly one of
/// `commit` (render the authoritative value, not `before + 1`) or
/// `rollback` (render the captured value again). Consuming `self` makes a
/// second settle of the same increment a type error.
#[derive(Debug)]
pub struct OptimisticCounter {
    before: i32,
}

impl OptimisticCounter {
    pub fn begin(displayed: i32) -> (Self, i32) {
        let optimistic = displayed.saturating_add(1);
        (Self { before: displayed }, optimistic)
    }

    /// The value that was displayed before the increment started.
    pub fn before(&self) -> i32 {
        self.before
    }

    /// Settle with the value the backend reports.
    pub fn commit(self, authoritative: i32) -> i32 {
        authoritative
    }

    /// Settle a failed round trip: back to the pre-click value.
    pub fn rollback(self) -> i32 {
        self.before
    }
}
