//! Contract adapter seams.
//!
//! Every remote operation the client issues goes through one of these two
//! traits. Each call is a suspension point: it either settles with a value or
//! with a classified [`ClientError`], and never panics.

use presence_common::Role;

use crate::error::ClientError;
use crate::model::{AttendeeRecord, ClaimToken, Event};

/// Role and ownership contract.
pub trait RoleContract {
    fn has_role(&self, wallet: &str, role: Role) -> Result<bool, ClientError>;

    fn get_event_contract(&self) -> Result<Option<String>, ClientError>;

    fn set_event_contract(&self, contract_id: &str) -> Result<(), ClientError>;

    fn generate_supervisor_claim_link(&self, recipient: &str) -> Result<ClaimToken, ClientError>;

    fn generate_associate_claim_link(&self, recipient: &str, operator: &str) -> Result<ClaimToken, ClientError>;

    /// Returns the id of the minted credential.
    fn claim_nft(&self, token: &ClaimToken, wallet: &str) -> Result<u64, ClientError>;

    fn revoke_credential(&self, wallet: &str, role: Role) -> Result<(), ClientError>;

    fn initialize(&self, admin: &str) -> Result<(), ClientError>;

    fn transfer_admin(&self, new_admin: &str) -> Result<(), ClientError>;

    fn pause(&self) -> Result<(), ClientError>;

    fn unpause(&self) -> Result<(), ClientError>;

    fn is_paused(&self) -> Result<bool, ClientError>;

    fn set_base_uri(&self, uri: &str) -> Result<(), ClientError>;
}

/// Events and attendance contract.
pub trait EventsContract {
    fn create_event(&self, name: &str, start_ts: u64, end_ts: u64, operator: &str) -> Result<u64, ClientError>;

    fn get_event(&self, event_id: u64) -> Result<Option<Event>, ClientError>;

    fn register_presence(&self, event_id: u64, attendee: &str) -> Result<(), ClientError>;

    fn has_presence(&self, event_id: u64, attendee: &str) -> Result<bool, ClientError>;

    fn remove_presence(&self, event_id: u64, attendee: &str) -> Result<(), ClientError>;

    fn list_events(&self, start_id: u64, limit: u32) -> Result<Vec<Event>, ClientError>;

    fn list_upcoming(&self) -> Result<Vec<Event>, ClientError>;

    fn list_closed(&self, cursor: u64, limit: u32) -> Result<Vec<Event>, ClientError>;

    /// `cursor` is a raw row index; inactive rows are returned too.
    fn list_attendees(&self, event_id: u64, cursor: u64, limit: u32) -> Result<Vec<AttendeeRecord>, ClientError>;

    fn set_supervisor(&self, user: &str, status: bool) -> Result<(), ClientError>;

    fn transfer_admin(&self, new_admin: &str) -> Result<(), ClientError>;
}
