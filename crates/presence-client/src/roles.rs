use presence_common::Role;

use crate::adapter::RoleContract;
use crate::cancel::CancelToken;
use crate::error::ClientError;
use crate::oplog::OpLog;

/// Roles held by the connected wallet.
///
/// `ready` stays false until every role query has settled.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RoleSnapshot {
    pub admin: bool,
    pub supervisor: bool,
    pub associate: bool,
    pub ready: bool,
}

impl RoleSnapshot {
    pub const PENDING: RoleSnapshot = RoleSnapshot { admin: false, supervisor: false, associate: false, ready: false };
    /// No wallet connected: nothing is held and nothing needs asking.
    pub const DISCONNECTED: RoleSnapshot = RoleSnapshot { admin: false, supervisor: false, associate: false, ready: true };

    pub fn has(&self, role: Role) -> bool {
        match role {
            Role::Admin => self.admin,
            Role::Supervisor => self.supervisor,
            Role::Associate => self.associate,
        }
    }

    fn set(&mut self, role: Role, held: bool) {
        match role {
            Role::Admin => self.admin = held,
            Role::Supervisor => self.supervisor = held,
            Role::Associate => self.associate = held,
        }
    }
}

/// Asks the role contract about every role of `wallet`.
///
/// Each query settles independently and a failed one reads as "not held".
/// The failures are returned alongside the snapshot so the caller can report
/// them.
pub fn fetch_roles(
    roles: &dyn RoleContract,
    wallet: &str,
    cancel: &CancelToken,
) -> Result<(RoleSnapshot, Vec<(Role, ClientError)>), ClientError> {
    let mut snapshot = RoleSnapshot::PENDING;
    let mut failures = Vec::new();
    for role in Role::ALL {
        cancel.check()?;
        match roles.has_role(wallet, role) {
            Ok(held) => snapshot.set(role, held),
            Err(err) => failures.push((role, err)),
        }
    }
    snapshot.ready = true;
    Ok((snapshot, failures))
}

/// Keeps the role snapshot of the connected wallet current.
#[derive(Debug, Default)]
pub struct RoleWatcher {
    wallet: Option<String>,
    snapshot: RoleSnapshot,
}

impl RoleWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> RoleSnapshot {
        self.snapshot
    }

    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    /// Re-queries the roles of `wallet`, or resets to disconnected without a
    /// query when there is none.
    ///
    /// A cancelled token leaves the previous snapshot in place.
    pub fn refresh(
        &mut self,
        wallet: Option<&str>,
        roles: &dyn RoleContract,
        cancel: &CancelToken,
        now: u64,
        log: &mut OpLog,
    ) -> Result<RoleSnapshot, ClientError> {
        let Some(wallet) = wallet else {
            cancel.check()?;
            self.wallet = None;
            self.snapshot = RoleSnapshot::DISCONNECTED;
            return Ok(self.snapshot);
        };

        let (snapshot, failures) = fetch_roles(roles, wallet, cancel)?;
        cancel.check()?;

        for (role, err) in &failures {
            log.report(now, &format!("{} role lookup", role.label()), err);
        }
        self.wallet = Some(wallet.to_owned());
        self.snapshot = snapshot;
        Ok(snapshot)
    }
}
