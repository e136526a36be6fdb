//! Role credentials - contract binding

use presence_common::{Role, ROLE_ADMIN, ROLE_ASSOCIATE, ROLE_SUPERVISOR, is_valid_contract_id};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{contractimpl, contracttype, log, panic_with_error, Address, Bytes, BytesN, Env, Map, String};
use crate::errors::RulesError;
use crate::{events, OwnerRules, OwnerRulesArgs, OwnerRulesClient, OwnerRulesContract};

#[contracttype]
pub enum DataKey {
    Admin,
    Paused,
    NextTokenId,
    BaseUri,
    EventContract,
    Authorized(Address),
}

#[contracttype]
pub enum CredentialKey {
    /// role id -> token id held by a wallet
    Roles(Address),
    Token(u64),
    Claim(BytesN<32>),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenData {
    pub role_id: u32,
    pub owner: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimData {
    pub role_id: u32,
    pub recipient: Address,
    pub used: bool,
}


#[contractimpl]
impl OwnerRulesContract for OwnerRules {

    fn __constructor(e: &Env, admin: Address) {
        setup(e, &admin);
    }

    fn initialize(e: &Env, admin: Address) {
        if e.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(e, RulesError::AlreadyInitialized);
        }
        admin.require_auth();
        setup(e, &admin);
    }

    fn admin(e: &Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::Admin)
    }

    fn transfer_admin(e: &Env, new_admin: Address) {
        require_admin(e);
        move_admin(e, new_admin);
    }

    fn pause(e: &Env) {
        require_admin(e);
        set_paused(e, true);
    }

    fn unpause(e: &Env) {
        require_admin(e);
        set_paused(e, false);
    }

    fn is_paused(e: &Env) -> bool {
        e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
    }

    fn set_base_uri(e: &Env, uri: String) {
        require_admin(e);
        e.storage().instance().set(&DataKey::BaseUri, &uri);
        events::BaseUriUpdated { uri }.publish(e);
    }

    fn token_uri(e: &Env, token_id: u64) -> String {
        if !e.storage().persistent().has(&CredentialKey::Token(token_id)) {
            panic_with_error!(e, RulesError::NonExistentToken);
        }
        e.storage()
            .instance()
            .get(&DataKey::BaseUri)
            .unwrap_or_else(|| String::from_str(e, ""))
    }

    fn set_event_contract(e: &Env, contract_id: String) {
        require_admin(e);

        let len = contract_id.len() as usize;
        if len != presence_common::CONTRACT_ID_LEN {
            panic_with_error!(e, RulesError::InvalidContractId);
        }
        let mut buf = [0u8; presence_common::CONTRACT_ID_LEN];
        contract_id.copy_into_slice(&mut buf);
        let valid = core::str::from_utf8(&buf)
            .map(is_valid_contract_id)
            .unwrap_or(false);
        if !valid {
            panic_with_error!(e, RulesError::InvalidContractId);
        }

        e.storage().instance().set(&DataKey::EventContract, &contract_id);
        events::EventContractUpdated { contract_id }.publish(e);
    }

    fn get_event_contract(e: &Env) -> Option<String> {
        e.storage().instance().get(&DataKey::EventContract)
    }

    fn authorize_contract(e: &Env, contract: Address, status: bool) {
        require_admin(e);
        e.storage().instance().set(&DataKey::Authorized(contract), &status);
    }

    fn recover_admin(e: &Env, new_admin: Address, operator: Address) {
        operator.require_auth();
        let authorized: bool = e
            .storage()
            .instance()
            .get(&DataKey::Authorized(operator))
            .unwrap_or(false);
        if !authorized {
            panic_with_error!(e, RulesError::Unauthorized);
        }
        move_admin(e, new_admin);
    }

    fn generate_supervisor_claim_link(e: &Env, recipient: Address) -> BytesN<32> {
        require_admin(e);
        new_claim(e, recipient, ROLE_SUPERVISOR)
    }

    fn generate_associate_claim_link(e: &Env, recipient: Address, operator: Address) -> BytesN<32> {
        operator.require_auth();
        if !has_credential(e, &operator, ROLE_ADMIN) && !has_credential(e, &operator, ROLE_SUPERVISOR) {
            panic_with_error!(e, RulesError::Unauthorized);
        }
        new_claim(e, recipient, ROLE_ASSOCIATE)
    }

    fn claim_nft(e: &Env, token_hash: BytesN<32>, wallet: Address) -> u64 {
        wallet.require_auth();
        if Self::is_paused(e) {
            panic_with_error!(e, RulesError::Paused);
        }

        let claim_key = CredentialKey::Claim(token_hash);
        let mut claim: ClaimData = e
            .storage()
            .persistent()
            .get(&claim_key)
            .unwrap_or_else(|| panic_with_error!(e, RulesError::InvalidClaimToken));

        if claim.used {
            panic_with_error!(e, RulesError::ClaimAlreadyUsed);
        }
        if claim.recipient != wallet {
            panic_with_error!(e, RulesError::RecipientMismatch);
        }
        if has_credential(e, &wallet, claim.role_id) {
            panic_with_error!(e, RulesError::RoleAlreadyHeld);
        }

        claim.used = true;
        e.storage().persistent().set(&claim_key, &claim);

        mint(e, &wallet, claim.role_id)
    }

    fn revoke_credential(e: &Env, wallet: Address, role_id: u32) {
        require_admin(e);
        if Role::from_id(role_id).is_none() {
            panic_with_error!(e, RulesError::InvalidRole);
        }
        if !burn(e, &wallet, role_id) {
            panic_with_error!(e, RulesError::CredentialNotFound);
        }
    }

    fn has_role(e: &Env, wallet: Address, role_id: u32) -> bool {
        has_credential(e, &wallet, role_id)
    }

}

fn setup(e: &Env, admin: &Address) {
    e.storage().instance().set(&DataKey::Admin, admin);
    e.storage().instance().set(&DataKey::Paused, &false);
    e.storage().instance().set(&DataKey::NextTokenId, &1u64);
    e.storage().instance().set(&DataKey::BaseUri, &String::from_str(e, ""));
    mint(e, admin, ROLE_ADMIN);
}

fn admin_address(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .unwrap_or_else(|| panic_with_error!(e, RulesError::NotInitialized))
}

fn require_admin(e: &Env) {
    admin_address(e).require_auth();
}

fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&DataKey::Paused, &paused);
    events::PauseChanged { paused }.publish(e);
}

fn move_admin(e: &Env, new_admin: Address) {
    let previous = admin_address(e);
    burn(e, &previous, ROLE_ADMIN);
    e.storage().instance().set(&DataKey::Admin, &new_admin);
    events::AdminTransferred { previous, admin: new_admin.clone() }.publish(e);
    if !has_credential(e, &new_admin, ROLE_ADMIN) {
        mint(e, &new_admin, ROLE_ADMIN);
    }
}

fn next_token_id(e: &Env) -> u64 {
    let id: u64 = e.storage().instance().get(&DataKey::NextTokenId).unwrap_or(1);
    e.storage().instance().set(&DataKey::NextTokenId, &(id + 1));
    id
}

fn roles_of(e: &Env, wallet: &Address) -> Map<u32, u64> {
    e.storage()
        .persistent()
        .get(&CredentialKey::Roles(wallet.clone()))
        .unwrap_or_else(|| Map::new(e))
}

fn has_credential(e: &Env, wallet: &Address, role_id: u32) -> bool {
    roles_of(e, wallet).contains_key(role_id)
}

fn mint(e: &Env, owner: &Address, role_id: u32) -> u64 {
    let token_id = next_token_id(e);
    e.storage().persistent().set(
        &CredentialKey::Token(token_id),
        &TokenData { role_id, owner: owner.clone() },
    );

    let mut roles = roles_of(e, owner);
    roles.set(role_id, token_id);
    e.storage().persistent().set(&CredentialKey::Roles(owner.clone()), &roles);

    events::CredentialMinted { role_id, owner: owner.clone(), token_id }.publish(e);
    token_id
}

/// Returns false when `owner` holds no `role_id` credential.
fn burn(e: &Env, owner: &Address, role_id: u32) -> bool {
    let mut roles = roles_of(e, owner);
    let Some(token_id) = roles.get(role_id) else {
        return false;
    };
    roles.remove(role_id);
    e.storage().persistent().set(&CredentialKey::Roles(owner.clone()), &roles);
    e.storage().persistent().remove(&CredentialKey::Token(token_id));

    events::CredentialRevoked { role_id, owner: owner.clone(), token_id }.publish(e);
    true
}

fn new_claim(e: &Env, recipient: Address, role_id: u32) -> BytesN<32> {
    let salt: u64 = e.prng().gen_range(1..=u64::MAX);

    let mut builder: Bytes = Bytes::new(e);
    builder.extend_from_array(&salt.to_be_bytes());
    builder.extend_from_array(&role_id.to_be_bytes());
    builder.append(&recipient.clone().to_xdr(e));
    let claim_hash: BytesN<32> = e.crypto().sha256(&builder).into();

    e.storage().persistent().set(
        &CredentialKey::Claim(claim_hash.clone()),
        &ClaimData { role_id, recipient: recipient.clone(), used: false },
    );
    log!(e, "claim issued", role_id);

    events::ClaimLinkGenerated { role_id, recipient, claim_hash: claim_hash.clone() }.publish(e);
    claim_hash
}
