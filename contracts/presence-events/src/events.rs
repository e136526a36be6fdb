use soroban_sdk::{Address, String, contractevent};


#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventCreated {
    #[topic]
    pub event_id: u64,
    #[topic]
    pub operator: Address,
    pub name: String,
    pub start_ts: u64,
    pub end_ts: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresenceRegistered {
    #[topic]
    pub event_id: u64,
    #[topic]
    pub attendee: Address,
    pub registered_at: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PresenceRemoved {
    #[topic]
    pub event_id: u64,
    #[topic]
    pub attendee: Address,
    pub index: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SupervisorUpdated {
    #[topic]
    pub user: Address,
    pub status: bool,
}
