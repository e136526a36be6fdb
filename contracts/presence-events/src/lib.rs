#![no_std]

use soroban_sdk::{contract, contractmeta, Address, Env, String, Vec};

contractmeta!(key = "Description", val = "PresenceTrack events and attendance");

mod contract;

mod errors;
mod events;

pub use errors::PresenceError;
pub use presence_common::{AttendeeInfo, EventData, EventSummary};

/// How many events `list_upcoming` returns at most.
pub const UPCOMING_LIMIT: u32 = 5;
/// How many of the newest event ids `list_upcoming` inspects.
pub const UPCOMING_SCAN: u32 = 64;

#[contract]
pub struct PresenceEvents;

pub trait PresenceEventsContract {

    fn __constructor(e: &Env, admin: Address);

    fn transfer_admin(e: &Env, new_admin: Address);

    /// Enables or disables `user` as an event supervisor. Requires the admin.
    fn set_supervisor(e: &Env, user: Address, status: bool);

    fn is_supervisor(e: &Env, user: Address) -> bool;

    /// Creates an event and returns its id.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `name` - Display name, must not be empty.
    /// * `start_ts` - Unix start time in seconds, non-zero.
    /// * `end_ts` - Unix end time in seconds, strictly after `start_ts`.
    /// * `operator` - Enabled supervisor creating the event.
    ///
    /// # Events
    ///
    /// * topics - `["event_created", event_id: u64, operator: Address]`
    /// * data - `[name: String, start_ts: u64, end_ts: u64]`
    fn create_event(e: &Env, name: String, start_ts: u64, end_ts: u64, operator: Address) -> u64;

    fn get_event(e: &Env, event_id: u64) -> Option<EventData>;

    /// Records the presence of `attendee` at `event_id`.
    ///
    /// Registration opens two hours before the start, closes after the end
    /// and is accepted once per attendee.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `event_id` - Event to register for.
    /// * `attendee` - Registering account, must authorize the call.
    fn register_presence(e: &Env, event_id: u64, attendee: Address);

    fn has_presence(e: &Env, event_id: u64, attendee: Address) -> bool;

    /// Withdraws the presence of `attendee`. Requires the admin.
    ///
    /// The attendee row is kept and marked inactive so listing cursors stay
    /// valid.
    fn remove_presence(e: &Env, event_id: u64, attendee: Address);

    /// Returns events with ids in `[start_id, start_id + limit)`, skipping gaps.
    fn list_events(e: &Env, start_id: u64, limit: u32) -> Vec<EventSummary>;

    /// Returns the soonest events that have not ended yet.
    fn list_upcoming(e: &Env) -> Vec<EventSummary>;

    /// Returns ended events, newest id first.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `cursor` - Number of ended events to skip.
    /// * `limit` - Maximum number of events returned.
    fn list_closed(e: &Env, cursor: u64, limit: u32) -> Vec<EventSummary>;

    /// Returns attendee rows in registration order.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `event_id` - Event to list.
    /// * `cursor` - Index of the first row, counting inactive rows.
    /// * `limit` - Maximum number of rows returned.
    fn list_attendees(e: &Env, event_id: u64, cursor: u64, limit: u32) -> Vec<AttendeeInfo>;
}
