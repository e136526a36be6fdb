use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum PresenceError {
    /// Indicates the admin was never set.
    NotInitialized = 300,
    /// Indicates the operator is not an enabled supervisor.
    NotSupervisor = 301,
    /// Indicates a zero timestamp or an end not after the start.
    InvalidWindow = 302,
    /// Indicates a non-existent `event_id`.
    EventNotFound = 303,
    /// Indicates registration after the event end.
    EventEnded = 304,
    /// Indicates the attendee already holds a presence for the event.
    AlreadyRegistered = 305,
    /// Indicates registration before the early window opens.
    TooEarly = 306,
    /// Indicates the attendee has no presence to remove.
    NotRegistered = 307,
    /// Indicates an empty event name.
    InvalidName = 308,
}
