//! Adapters over the generated contract clients.
//!
//! Wallets and contract ids cross the adapter boundary as strkeys. Host
//! failures are folded into [`ClientError`] here so callers never see raw
//! invocation results.

use owner_rules::{OwnerRulesClient, RulesError};
use presence_common::{is_valid_contract_id, AttendeeInfo, EventSummary, Role};
use presence_events::{PresenceError, PresenceEventsClient};
use soroban_sdk::xdr::ScErrorType;
use soroban_sdk::{Address, BytesN, Env, InvokeError, String as SorobanString};
use stellar_strkey::Strkey;

use crate::adapter::{EventsContract, RoleContract};
use crate::error::ClientError;
use crate::model::{AttendeeRecord, ClaimToken, Event};

impl From<soroban_sdk::Error> for ClientError {
    fn from(err: soroban_sdk::Error) -> Self {
        if err.is_type(ScErrorType::Auth) {
            return ClientError::Unauthorized("signature missing or rejected".into());
        }
        if !err.is_type(ScErrorType::Contract) {
            return ClientError::SimulationFailed(format!("{err:?}"));
        }

        let code = err.get_code();
        if let Ok(rules) = RulesError::try_from(err) {
            return match rules {
                RulesError::Unauthorized => ClientError::Unauthorized(format!("{rules:?}")),
                other => ClientError::Rejected { code, reason: format!("{other:?}") },
            };
        }
        if let Ok(presence) = PresenceError::try_from(err) {
            return match presence {
                PresenceError::NotSupervisor => ClientError::Unauthorized(format!("{presence:?}")),
                PresenceError::EventNotFound => ClientError::NotFound("event".into()),
                other => ClientError::Rejected { code, reason: format!("{other:?}") },
            };
        }
        ClientError::Rejected { code, reason: "unknown contract error".into() }
    }
}

impl From<InvokeError> for ClientError {
    fn from(err: InvokeError) -> Self {
        match err {
            InvokeError::Contract(code) => ClientError::from(soroban_sdk::Error::from_contract_error(code)),
            InvokeError::Abort => ClientError::SimulationFailed("invocation aborted".into()),
        }
    }
}

/// Flattens the nested result of a `try_*` client call.
fn settle<T, C, E>(outcome: Result<Result<T, C>, Result<E, InvokeError>>) -> Result<T, ClientError>
where
    C: core::fmt::Debug,
    E: Into<ClientError>,
{
    match outcome {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(ClientError::SimulationFailed(format!(
            "unexpected return value: {conversion:?}"
        ))),
        Err(Ok(err)) => Err(err.into()),
        Err(Err(invoke)) => Err(invoke.into()),
    }
}

fn address(env: &Env, field: &'static str, strkey: &str) -> Result<Address, ClientError> {
    let strkey = strkey.trim();
    if !is_valid_contract_id(strkey) {
        return Err(ClientError::validation(field, "expected a 56 character strkey"));
    }
    // the host aborts on strkeys it cannot decode
    match strkey.parse::<Strkey>() {
        Ok(Strkey::PublicKeyEd25519(_) | Strkey::Contract(_)) => Ok(Address::from_str(env, strkey)),
        Ok(_) => Err(ClientError::validation(field, "not an account or contract strkey")),
        Err(_) => Err(ClientError::validation(field, "bad strkey checksum")),
    }
}

pub(crate) fn to_std_string(value: &SorobanString) -> Result<String, ClientError> {
    let mut buf = vec![0u8; value.len() as usize];
    value.copy_into_slice(&mut buf);
    String::from_utf8(buf).map_err(|_| ClientError::SimulationFailed("string is not utf-8".into()))
}

fn strkey_of(value: &Address) -> Result<String, ClientError> {
    to_std_string(&value.to_string())
}

fn event_from_summary(item: &EventSummary) -> Result<Event, ClientError> {
    Ok(Event {
        id: item.id,
        name: to_std_string(&item.name)?,
        start_ts: item.start_ts,
        end_ts: item.end_ts,
    })
}

fn record_from_info(info: &AttendeeInfo) -> Result<AttendeeRecord, ClientError> {
    Ok(AttendeeRecord {
        address: strkey_of(&info.address)?,
        registered_at: info.registered_at,
        active: info.active,
    })
}

/// Role contract reached through an in-process host.
pub struct SorobanOwnerRules<'a> {
    env: Env,
    client: OwnerRulesClient<'a>,
}

impl SorobanOwnerRules<'_> {
    pub fn new(env: &Env, contract: &Address) -> Self {
        SorobanOwnerRules { env: env.clone(), client: OwnerRulesClient::new(env, contract) }
    }

    pub fn address(&self) -> &Address {
        &self.client.address
    }
}

impl RoleContract for SorobanOwnerRules<'_> {
    fn has_role(&self, wallet: &str, role: Role) -> Result<bool, ClientError> {
        let wallet = address(&self.env, "wallet", wallet)?;
        settle(self.client.try_has_role(&wallet, &role.id()))
    }

    fn get_event_contract(&self) -> Result<Option<String>, ClientError> {
        let stored = settle(self.client.try_get_event_contract())?;
        stored.as_ref().map(to_std_string).transpose()
    }

    fn set_event_contract(&self, contract_id: &str) -> Result<(), ClientError> {
        let contract_id = contract_id.trim();
        if !is_valid_contract_id(contract_id) {
            return Err(ClientError::validation("contract id", "expected a 56 character strkey"));
        }
        let value = SorobanString::from_str(&self.env, contract_id);
        settle(self.client.try_set_event_contract(&value))
    }

    fn generate_supervisor_claim_link(&self, recipient: &str) -> Result<ClaimToken, ClientError> {
        let recipient = address(&self.env, "recipient", recipient)?;
        let hash: BytesN<32> = settle(self.client.try_generate_supervisor_claim_link(&recipient))?;
        Ok(ClaimToken(hash.to_array()))
    }

    fn generate_associate_claim_link(&self, recipient: &str, operator: &str) -> Result<ClaimToken, ClientError> {
        let recipient = address(&self.env, "recipient", recipient)?;
        let operator = address(&self.env, "operator", operator)?;
        let hash: BytesN<32> = settle(self.client.try_generate_associate_claim_link(&recipient, &operator))?;
        Ok(ClaimToken(hash.to_array()))
    }

    fn claim_nft(&self, token: &ClaimToken, wallet: &str) -> Result<u64, ClientError> {
        let wallet = address(&self.env, "wallet", wallet)?;
        let hash = BytesN::from_array(&self.env, &token.0);
        settle(self.client.try_claim_nft(&hash, &wallet))
    }

    fn revoke_credential(&self, wallet: &str, role: Role) -> Result<(), ClientError> {
        let wallet = address(&self.env, "wallet", wallet)?;
        settle(self.client.try_revoke_credential(&wallet, &role.id()))
    }

    fn initialize(&self, admin: &str) -> Result<(), ClientError> {
        let admin = address(&self.env, "admin", admin)?;
        settle(self.client.try_initialize(&admin))
    }

    fn transfer_admin(&self, new_admin: &str) -> Result<(), ClientError> {
        let new_admin = address(&self.env, "admin", new_admin)?;
        settle(self.client.try_transfer_admin(&new_admin))
    }

    fn pause(&self) -> Result<(), ClientError> {
        settle(self.client.try_pause())
    }

    fn unpause(&self) -> Result<(), ClientError> {
        settle(self.client.try_unpause())
    }

    fn is_paused(&self) -> Result<bool, ClientError> {
        settle(self.client.try_is_paused())
    }

    fn set_base_uri(&self, uri: &str) -> Result<(), ClientError> {
        let uri = SorobanString::from_str(&self.env, uri);
        settle(self.client.try_set_base_uri(&uri))
    }
}

/// Events contract reached through an in-process host.
pub struct SorobanPresenceEvents<'a> {
    env: Env,
    client: PresenceEventsClient<'a>,
}

impl SorobanPresenceEvents<'_> {
    pub fn new(env: &Env, contract: &Address) -> Self {
        SorobanPresenceEvents { env: env.clone(), client: PresenceEventsClient::new(env, contract) }
    }

    pub fn address(&self) -> &Address {
        &self.client.address
    }
}

impl EventsContract for SorobanPresenceEvents<'_> {
    fn create_event(&self, name: &str, start_ts: u64, end_ts: u64, operator: &str) -> Result<u64, ClientError> {
        let operator = address(&self.env, "operator", operator)?;
        let name = SorobanString::from_str(&self.env, name);
        settle(self.client.try_create_event(&name, &start_ts, &end_ts, &operator))
    }

    fn get_event(&self, event_id: u64) -> Result<Option<Event>, ClientError> {
        let Some(data) = settle(self.client.try_get_event(&event_id))? else {
            return Ok(None);
        };
        Ok(Some(Event {
            id: event_id,
            name: to_std_string(&data.name)?,
            start_ts: data.start_ts,
            end_ts: data.end_ts,
        }))
    }

    fn register_presence(&self, event_id: u64, attendee: &str) -> Result<(), ClientError> {
        let attendee = address(&self.env, "attendee", attendee)?;
        settle(self.client.try_register_presence(&event_id, &attendee))
    }

    fn has_presence(&self, event_id: u64, attendee: &str) -> Result<bool, ClientError> {
        let attendee = address(&self.env, "attendee", attendee)?;
        settle(self.client.try_has_presence(&event_id, &attendee))
    }

    fn remove_presence(&self, event_id: u64, attendee: &str) -> Result<(), ClientError> {
        let attendee = address(&self.env, "attendee", attendee)?;
        settle(self.client.try_remove_presence(&event_id, &attendee))
    }

    fn list_events(&self, start_id: u64, limit: u32) -> Result<Vec<Event>, ClientError> {
        let items = settle(self.client.try_list_events(&start_id, &limit))?;
        items.iter().map(|item| event_from_summary(&item)).collect()
    }

    fn list_upcoming(&self) -> Result<Vec<Event>, ClientError> {
        let items = settle(self.client.try_list_upcoming())?;
        items.iter().map(|item| event_from_summary(&item)).collect()
    }

    fn list_closed(&self, cursor: u64, limit: u32) -> Result<Vec<Event>, ClientError> {
        let items = settle(self.client.try_list_closed(&cursor, &limit))?;
        items.iter().map(|item| event_from_summary(&item)).collect()
    }

    fn list_attendees(&self, event_id: u64, cursor: u64, limit: u32) -> Result<Vec<AttendeeRecord>, ClientError> {
        let rows = settle(self.client.try_list_attendees(&event_id, &cursor, &limit))?;
        rows.iter().map(|row| record_from_info(&row)).collect()
    }

    fn set_supervisor(&self, user: &str, status: bool) -> Result<(), ClientError> {
        let user = address(&self.env, "user", user)?;
        settle(self.client.try_set_supervisor(&user, &status))
    }

    fn transfer_admin(&self, new_admin: &str) -> Result<(), ClientError> {
        let new_admin = address(&self.env, "admin", new_admin)?;
        settle(self.client.try_transfer_admin(&new_admin))
    }
}
