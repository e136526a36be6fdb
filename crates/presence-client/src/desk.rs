//! Page-level actions.
//!
//! [`PresenceDesk`] is what a surface calls when the user clicks something.
//! Each action checks what can be checked locally (connection, input shape,
//! role snapshot, eligibility) before dispatching to a contract, and records
//! its outcome in the desk's [`OpLog`]. Nothing is retried.

use presence_common::{evaluate, is_valid_contract_id, Eligibility, EligibilityInput, Role};

use crate::adapter::{EventsContract, RoleContract};
use crate::cancel::CancelToken;
use crate::error::ClientError;
use crate::links::{claim_link, token_from_link};
use crate::model::Event;
use crate::oplog::OpLog;
use crate::pager::{AttendeePager, PagerOutcome, DEFAULT_COLLECT_PAGE};
use crate::roles::RoleSnapshot;

/// Who may register and remove presences, and how attendees are paged.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct RegistrationPolicy {
    pub required_role: Role,
    pub removal_role: Role,
    pub page_size: u32,
}

impl Default for RegistrationPolicy {
    fn default() -> Self {
        RegistrationPolicy {
            required_role: Role::Associate,
            removal_role: Role::Admin,
            page_size: DEFAULT_COLLECT_PAGE,
        }
    }
}

impl RegistrationPolicy {
    /// Registration performed by supervisors on behalf of attendees.
    pub fn supervisor_mediated() -> Self {
        RegistrationPolicy { required_role: Role::Supervisor, ..Self::default() }
    }
}

pub struct PresenceDesk<'a> {
    roles: &'a dyn RoleContract,
    events: &'a dyn EventsContract,
    policy: RegistrationPolicy,
    wallet: Option<String>,
    log: OpLog,
}

impl<'a> PresenceDesk<'a> {
    pub fn new(roles: &'a dyn RoleContract, events: &'a dyn EventsContract, policy: RegistrationPolicy) -> Self {
        PresenceDesk { roles, events, policy, wallet: None, log: OpLog::new() }
    }

    pub fn policy(&self) -> &RegistrationPolicy {
        &self.policy
    }

    pub fn log(&self) -> &OpLog {
        &self.log
    }

    pub fn log_mut(&mut self) -> &mut OpLog {
        &mut self.log
    }

    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    pub fn connect(&mut self, wallet: &str, now: u64) -> Result<(), ClientError> {
        let wallet = wallet.trim();
        if !is_valid_contract_id(wallet) {
            let err = ClientError::validation("wallet", "expected a 56 character strkey");
            self.log.report(now, "connecting wallet", &err);
            return Err(err);
        }
        self.wallet = Some(wallet.to_owned());
        self.log.info(now, format!("wallet {wallet} connected"));
        Ok(())
    }

    pub fn disconnect(&mut self, now: u64) {
        if self.wallet.take().is_some() {
            self.log.info(now, "wallet disconnected");
        }
    }

    fn connected(&self) -> Result<&str, ClientError> {
        self.wallet.as_deref().ok_or(ClientError::NotConnected)
    }

    fn finish<T>(&mut self, now: u64, action: &str, result: Result<T, ClientError>) -> Result<T, ClientError> {
        match &result {
            Ok(_) => self.log.success(now, format!("{action} succeeded")),
            Err(err) => self.log.report(now, action, err),
        }
        result
    }

    /// Runs the eligibility gate for the connected wallet.
    ///
    /// A failed presence lookup aborts the check; nothing is sent for
    /// signing on an unknown registration state.
    pub fn eligibility(&self, event_id: u64, snapshot: &RoleSnapshot, now: u64) -> Result<Eligibility, ClientError> {
        let wallet = self.connected()?.to_owned();
        let event = self.event(event_id)?;
        let already_registered = self.events.has_presence(event_id, &wallet)?;

        Ok(evaluate(&EligibilityInput {
            now,
            start_ts: event.start_ts,
            end_ts: event.end_ts,
            already_registered,
            has_required_role: snapshot.has(self.policy.required_role),
        }))
    }

    fn event(&self, event_id: u64) -> Result<Event, ClientError> {
        self.events
            .get_event(event_id)?
            .ok_or_else(|| ClientError::NotFound(format!("event #{event_id}")))
    }

    /// Registers the connected wallet, only sending a transaction when the
    /// local gate allows it.
    pub fn register_presence(&mut self, event_id: u64, snapshot: &RoleSnapshot, now: u64) -> Result<(), ClientError> {
        let result = self.eligibility(event_id, snapshot, now).and_then(|decision| {
            if !decision.is_allowed() {
                return Err(ClientError::Ineligible(decision));
            }
            let wallet = self.connected()?;
            self.events.register_presence(event_id, wallet)
        });
        self.finish(now, "presence registration", result)
    }

    pub fn remove_presence(
        &mut self,
        event_id: u64,
        attendee: &str,
        snapshot: &RoleSnapshot,
        now: u64,
    ) -> Result<(), ClientError> {
        let result = self
            .require(snapshot, &[self.policy.removal_role])
            .and_then(|_| self.events.remove_presence(event_id, attendee.trim()));
        self.finish(now, "presence removal", result)
    }

    /// Creates an event operated by the connected wallet. Times are Unix seconds.
    pub fn create_meeting(
        &mut self,
        name: &str,
        start_ts: u64,
        end_ts: u64,
        snapshot: &RoleSnapshot,
        now: u64,
    ) -> Result<u64, ClientError> {
        let result = self.require(snapshot, &[Role::Supervisor]).and_then(|operator| {
            let name = name.trim();
            if name.is_empty() {
                return Err(ClientError::validation("name", "must not be empty"));
            }
            if start_ts == 0 || end_ts <= start_ts {
                return Err(ClientError::validation("schedule", "end must be after a non-zero start"));
            }
            self.events.create_event(name, start_ts, end_ts, operator)
        });
        self.finish(now, "meeting creation", result)
    }

    /// Redeems a claim link or bare token for the connected wallet.
    pub fn claim_credential(&mut self, link_or_token: &str, now: u64) -> Result<u64, ClientError> {
        let result = token_from_link(link_or_token).and_then(|token| {
            let wallet = self.connected()?;
            self.roles.claim_nft(&token, wallet)
        });
        self.finish(now, "credential claim", result)
    }

    /// Issues a supervisor claim and returns the link to hand over.
    pub fn issue_supervisor_link(
        &mut self,
        recipient: &str,
        origin: &str,
        snapshot: &RoleSnapshot,
        now: u64,
    ) -> Result<String, ClientError> {
        let result = self
            .require(snapshot, &[Role::Admin])
            .and_then(|_| self.roles.generate_supervisor_claim_link(recipient.trim()))
            .map(|token| claim_link(origin, &token));
        self.finish(now, "supervisor claim link", result)
    }

    pub fn issue_associate_link(
        &mut self,
        recipient: &str,
        origin: &str,
        snapshot: &RoleSnapshot,
        now: u64,
    ) -> Result<String, ClientError> {
        let result = self
            .require(snapshot, &[Role::Admin, Role::Supervisor])
            .and_then(|operator| self.roles.generate_associate_claim_link(recipient.trim(), operator))
            .map(|token| claim_link(origin, &token));
        self.finish(now, "associate claim link", result)
    }

    pub fn revoke_credential(
        &mut self,
        wallet: &str,
        role: Role,
        snapshot: &RoleSnapshot,
        now: u64,
    ) -> Result<(), ClientError> {
        let result = self
            .require(snapshot, &[Role::Admin])
            .and_then(|_| self.roles.revoke_credential(wallet.trim(), role));
        self.finish(now, "credential revocation", result)
    }

    pub fn set_paused(&mut self, paused: bool, snapshot: &RoleSnapshot, now: u64) -> Result<(), ClientError> {
        let result = self.require(snapshot, &[Role::Admin]).and_then(|_| {
            if paused {
                self.roles.pause()
            } else {
                self.roles.unpause()
            }
        });
        self.finish(now, if paused { "pause" } else { "unpause" }, result)
    }

    /// Full active attendee list of `event_id`.
    pub fn attendees(&mut self, event_id: u64, cancel: &CancelToken, now: u64) -> PagerOutcome {
        let outcome = AttendeePager::new(self.events, self.policy.page_size).collect(event_id, cancel, now, &mut self.log);
        if outcome.is_complete() {
            self.log.success(now, format!("{} attendees loaded", outcome.attendees.len()));
        }
        outcome
    }

    /// Connected wallet, provided the snapshot holds one of `roles`.
    fn require(&self, snapshot: &RoleSnapshot, roles: &[Role]) -> Result<&str, ClientError> {
        let wallet = self.connected()?;
        if roles.iter().any(|role| snapshot.has(*role)) {
            return Ok(wallet);
        }
        let names: Vec<&str> = roles.iter().map(|role| role.label()).collect();
        Err(ClientError::Unauthorized(format!("requires the {} role", names.join(" or "))))
    }
}
