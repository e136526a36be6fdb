//! Events and attendance - contract binding

use presence_common::{evaluate, AttendeeInfo, Eligibility, EligibilityInput, EventData, EventSummary};
use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, Address, Env, String, Vec};
use crate::errors::PresenceError;
use crate::{
    events, PresenceEvents, PresenceEventsArgs, PresenceEventsClient, PresenceEventsContract,
    UPCOMING_LIMIT, UPCOMING_SCAN,
};

#[contracttype]
pub enum DataKey {
    Admin,
    NextEventId,
    Supervisor(Address),
}

#[contracttype]
pub enum EventKey {
    Event(u64),
    Presence(u64, Address),
    AttendeeCount(u64),
    Attendee(u64, u64),
}


#[contractimpl]
impl PresenceEventsContract for PresenceEvents {

    fn __constructor(e: &Env, admin: Address) {
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::NextEventId, &1u64);
    }

    fn transfer_admin(e: &Env, new_admin: Address) {
        require_admin(e);
        e.storage().instance().set(&DataKey::Admin, &new_admin);
    }

    fn set_supervisor(e: &Env, user: Address, status: bool) {
        require_admin(e);
        e.storage().instance().set(&DataKey::Supervisor(user.clone()), &status);
        events::SupervisorUpdated { user, status }.publish(e);
    }

    fn is_supervisor(e: &Env, user: Address) -> bool {
        e.storage().instance().get(&DataKey::Supervisor(user)).unwrap_or(false)
    }

    fn create_event(e: &Env, name: String, start_ts: u64, end_ts: u64, operator: Address) -> u64 {
        operator.require_auth();
        if !Self::is_supervisor(e, operator.clone()) {
            panic_with_error!(e, PresenceError::NotSupervisor);
        }
        if name.len() == 0 {
            panic_with_error!(e, PresenceError::InvalidName);
        }
        if start_ts == 0 || end_ts <= start_ts {
            panic_with_error!(e, PresenceError::InvalidWindow);
        }

        let event_id = next_event_id(e);
        e.storage().persistent().set(
            &EventKey::Event(event_id),
            &EventData { name: name.clone(), start_ts, end_ts },
        );

        events::EventCreated { event_id, operator, name, start_ts, end_ts }.publish(e);
        event_id
    }

    fn get_event(e: &Env, event_id: u64) -> Option<EventData> {
        e.storage().persistent().get(&EventKey::Event(event_id))
    }

    fn register_presence(e: &Env, event_id: u64, attendee: Address) {
        attendee.require_auth();
        let event = Self::get_event(e, event_id)
            .unwrap_or_else(|| panic_with_error!(e, PresenceError::EventNotFound));

        let now = e.ledger().timestamp();
        let decision = evaluate(&EligibilityInput {
            now,
            start_ts: event.start_ts,
            end_ts: event.end_ts,
            already_registered: Self::has_presence(e, event_id, attendee.clone()),
            has_required_role: true,
        });
        match decision {
            // roles are enforced by the calling surface
            Eligibility::Allowed | Eligibility::DeniedMissingRole => {}
            Eligibility::DeniedEnded => panic_with_error!(e, PresenceError::EventEnded),
            Eligibility::DeniedAlreadyRegistered => panic_with_error!(e, PresenceError::AlreadyRegistered),
            Eligibility::DeniedTooEarly => {
                log!(e, "registration not open yet", now, event.start_ts);
                panic_with_error!(e, PresenceError::TooEarly)
            }
        }

        e.storage()
            .persistent()
            .set(&EventKey::Presence(event_id, attendee.clone()), &true);

        let count = attendee_count(e, event_id);
        e.storage().persistent().set(
            &EventKey::Attendee(event_id, count),
            &AttendeeInfo { address: attendee.clone(), registered_at: now, active: true },
        );
        e.storage()
            .persistent()
            .set(&EventKey::AttendeeCount(event_id), &(count + 1));

        events::PresenceRegistered { event_id, attendee, registered_at: now }.publish(e);
    }

    fn has_presence(e: &Env, event_id: u64, attendee: Address) -> bool {
        e.storage()
            .persistent()
            .get(&EventKey::Presence(event_id, attendee))
            .unwrap_or(false)
    }

    fn remove_presence(e: &Env, event_id: u64, attendee: Address) {
        require_admin(e);
        if !Self::has_presence(e, event_id, attendee.clone()) {
            panic_with_error!(e, PresenceError::NotRegistered);
        }

        let count = attendee_count(e, event_id);
        let mut index = 0u64;
        while index < count {
            let key = EventKey::Attendee(event_id, index);
            if let Some(mut info) = e.storage().persistent().get::<EventKey, AttendeeInfo>(&key) {
                // a wallet can register again after removal, only the live row matters
                if info.active && info.address == attendee {
                    info.active = false;
                    e.storage().persistent().set(&key, &info);
                    break;
                }
            }
            index += 1;
        }

        e.storage()
            .persistent()
            .set(&EventKey::Presence(event_id, attendee.clone()), &false);

        events::PresenceRemoved { event_id, attendee, index }.publish(e);
    }

    fn list_events(e: &Env, start_id: u64, limit: u32) -> Vec<EventSummary> {
        let mut out = Vec::new(e);
        let end = start_id.saturating_add(limit as u64);
        for id in start_id..end {
            if let Some(item) = summary(e, id) {
                out.push_back(item);
            }
        }
        out
    }

    fn list_upcoming(e: &Env) -> Vec<EventSummary> {
        let now = e.ledger().timestamp();
        let mut selected: Vec<EventSummary> = Vec::new(e);

        let mut id = last_event_id(e);
        let mut scanned = 0u32;
        while id >= 1 && scanned < UPCOMING_SCAN {
            if let Some(item) = summary(e, id) {
                if item.end_ts > now {
                    // keep `selected` sorted by start, soonest first
                    let mut position = selected.len();
                    for (idx, current) in selected.iter().enumerate() {
                        if item.start_ts < current.start_ts {
                            position = idx as u32;
                            break;
                        }
                    }
                    selected.insert(position, item);
                    if selected.len() > UPCOMING_LIMIT {
                        selected.pop_back();
                    }
                }
            }
            id -= 1;
            scanned += 1;
        }
        selected
    }

    fn list_closed(e: &Env, cursor: u64, limit: u32) -> Vec<EventSummary> {
        let now = e.ledger().timestamp();
        let mut out = Vec::new(e);
        if limit == 0 {
            return out;
        }

        let mut skipped = 0u64;
        let mut id = last_event_id(e);
        while id >= 1 && out.len() < limit {
            if let Some(item) = summary(e, id) {
                if item.end_ts <= now {
                    if skipped < cursor {
                        skipped += 1;
                    } else {
                        out.push_back(item);
                    }
                }
            }
            id -= 1;
        }
        out
    }

    fn list_attendees(e: &Env, event_id: u64, cursor: u64, limit: u32) -> Vec<AttendeeInfo> {
        let count = attendee_count(e, event_id);
        let mut out = Vec::new(e);
        let end = cursor.saturating_add(limit as u64).min(count);
        for index in cursor..end {
            if let Some(info) = e.storage().persistent().get(&EventKey::Attendee(event_id, index)) {
                out.push_back(info);
            }
        }
        out
    }

}

fn require_admin(e: &Env) {
    let admin: Address = e
        .storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(e, PresenceError::NotInitialized));
    admin.require_auth();
}

fn next_event_id(e: &Env) -> u64 {
    let id: u64 = e.storage().instance().get(&DataKey::NextEventId).unwrap_or(1);
    e.storage().instance().set(&DataKey::NextEventId, &(id + 1));
    id
}

/// Highest id handed out so far, zero before the first event.
fn last_event_id(e: &Env) -> u64 {
    let next: u64 = e.storage().instance().get(&DataKey::NextEventId).unwrap_or(1);
    next.saturating_sub(1)
}

fn attendee_count(e: &Env, event_id: u64) -> u64 {
    e.storage()
        .persistent()
        .get(&EventKey::AttendeeCount(event_id))
        .unwrap_or(0)
}

fn summary(e: &Env, id: u64) -> Option<EventSummary> {
    let data: EventData = e.storage().persistent().get(&EventKey::Event(id))?;
    Some(EventSummary { id, name: data.name, start_ts: data.start_ts, end_ts: data.end_ts })
}
