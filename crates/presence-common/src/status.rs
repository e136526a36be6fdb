/// Lifecycle of an event relative to a point in time. Derived, never stored.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum EventStatus {
    Scheduled,
    Active,
    Ended,
}

impl EventStatus {
    /// Both bounds are inclusive: an event is still active at `end_ts`.
    pub const fn at(now: u64, start_ts: u64, end_ts: u64) -> EventStatus {
        if now < start_ts {
            EventStatus::Scheduled
        } else if now > end_ts {
            EventStatus::Ended
        } else {
            EventStatus::Active
        }
    }
}
