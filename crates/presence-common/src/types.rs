use soroban_sdk::{contracttype, Address, String};

/// Event as stored by the events contract.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventData {
    pub name: String,
    pub start_ts: u64,
    pub end_ts: u64,
}

/// Event row returned by the listing operations.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EventSummary {
    pub id: u64,
    pub name: String,
    pub start_ts: u64,
    pub end_ts: u64,
}

/// One registration of a wallet for an event. Removal flips `active`
/// instead of deleting the row so cursors stay stable.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttendeeInfo {
    pub address: Address,
    pub registered_at: u64,
    pub active: bool,
}
