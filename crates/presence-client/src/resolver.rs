//! Events contract resolution.
//!
//! The role contract holds the authoritative events contract id. When that
//! lookup fails the last id seen is served from the cache, then the network
//! default. An empty string means nothing is configured.

use presence_common::is_valid_contract_id;

use crate::adapter::RoleContract;
use crate::cache::{ContractCache, EVENT_CONTRACT_KEY};
use crate::config::Network;
use crate::error::ClientError;
use crate::oplog::OpLog;

pub struct EventContractResolver<'a> {
    roles: &'a dyn RoleContract,
    cache: &'a dyn ContractCache,
    network: Network,
}

impl<'a> EventContractResolver<'a> {
    pub fn new(roles: &'a dyn RoleContract, cache: &'a dyn ContractCache, network: Network) -> Self {
        EventContractResolver { roles, cache, network }
    }

    /// Syntax only: a well-formed id may still point at nothing.
    pub fn validate(candidate: &str) -> bool {
        is_valid_contract_id(candidate)
    }

    /// Never fails. Remote failures are logged as warnings at `now`.
    pub fn resolve(&self, now: u64, log: &mut OpLog) -> String {
        match self.roles.get_event_contract() {
            Ok(Some(id)) if Self::validate(&id) => {
                let id = id.trim().to_owned();
                self.cache.set(EVENT_CONTRACT_KEY, &id);
                return id;
            }
            Ok(Some(id)) => {
                log.warning(now, format!("ignoring malformed events contract id {id:?}"));
            }
            Ok(None) => self.cache.invalidate(EVENT_CONTRACT_KEY),
            Err(err) => {
                log.warning(now, format!("events contract lookup failed: {err}"));
                if let Some(cached) = self.cache.get(EVENT_CONTRACT_KEY).filter(|id| Self::validate(id)) {
                    return cached;
                }
            }
        }
        self.network.default_event_contract().to_owned()
    }

    /// Like [`resolve`](Self::resolve) but treats an empty result as an error.
    pub fn resolve_required(&self, now: u64, log: &mut OpLog) -> Result<String, ClientError> {
        let id = self.resolve(now, log);
        if id.is_empty() {
            return Err(ClientError::NotConfigured);
        }
        Ok(id)
    }

    /// Whether the role contract carries a global id. Lookup failures count as no.
    pub fn is_global_contract_set(&self, now: u64, log: &mut OpLog) -> bool {
        match self.roles.get_event_contract() {
            Ok(id) => id.is_some_and(|id| !id.trim().is_empty()),
            Err(err) => {
                log.warning(now, format!("events contract lookup failed: {err}"));
                false
            }
        }
    }

    /// Validates and submits a new global id. Admin only on-chain.
    pub fn set_event_contract(&self, candidate: &str) -> Result<(), ClientError> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Err(ClientError::validation("contract id", "must not be empty"));
        }
        if !Self::validate(candidate) {
            return Err(ClientError::validation("contract id", "expected 56 uppercase alphanumeric characters"));
        }
        self.roles.set_event_contract(candidate)?;
        self.cache.set(EVENT_CONTRACT_KEY, candidate);
        Ok(())
    }

    /// Drops the local copy; the on-chain value is left alone.
    pub fn clear_cache(&self) {
        self.cache.invalidate(EVENT_CONTRACT_KEY);
    }
}
