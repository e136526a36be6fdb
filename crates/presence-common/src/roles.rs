/// Role identifier of the contract administrator.
pub const ROLE_ADMIN: u32 = 1;
/// Role identifier of event supervisors.
pub const ROLE_SUPERVISOR: u32 = 2;
/// Role identifier of associates (regular attendees).
pub const ROLE_ASSOCIATE: u32 = 3;

/// Credential roles issued by the role contract.
///
/// Roles are independent: a wallet can hold any combination of them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Role {
    Admin,
    Supervisor,
    Associate,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Supervisor, Role::Associate];

    /// The numeric identifier used on-chain.
    pub const fn id(self) -> u32 {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Supervisor => ROLE_SUPERVISOR,
            Role::Associate => ROLE_ASSOCIATE,
        }
    }

    pub const fn from_id(id: u32) -> Option<Role> {
        match id {
            ROLE_ADMIN => Some(Role::Admin),
            ROLE_SUPERVISOR => Some(Role::Supervisor),
            ROLE_ASSOCIATE => Some(Role::Associate),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Supervisor => "supervisor",
            Role::Associate => "associate",
        }
    }
}
