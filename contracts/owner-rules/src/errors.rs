use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RulesError {
    /// Indicates `initialize` was called on a contract that already has an admin.
    AlreadyInitialized = 100,
    /// Indicates the admin was never set.
    NotInitialized = 101,
    /// Indicates the caller lacks the role the operation requires.
    Unauthorized = 102,
    /// Indicates claims are suspended.
    Paused = 103,
    /// Indicates the claim token was never issued.
    InvalidClaimToken = 104,
    /// Indicates the claim token was already redeemed.
    ClaimAlreadyUsed = 105,
    /// Indicates the claim token was issued to another wallet.
    RecipientMismatch = 106,
    /// Indicates the wallet already holds the role being granted.
    RoleAlreadyHeld = 107,
    /// Indicates the wallet does not hold the credential being revoked.
    CredentialNotFound = 108,
    /// Indicates a role id outside admin/supervisor/associate.
    InvalidRole = 109,
    /// Indicates a contract id that is not a 56 character strkey.
    InvalidContractId = 110,
    /// Indicates a non-existent `token_id`.
    NonExistentToken = 111,
}
