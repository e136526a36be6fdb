#![no_std]

use soroban_sdk::{contract, contractmeta, Address, BytesN, Env, String};

contractmeta!(key = "Description", val = "PresenceTrack role credentials");

mod contract;

#[cfg(test)]
mod test;
mod errors;
mod events;

pub use contract::{ClaimData, TokenData};
pub use errors::RulesError;
pub use presence_common::{ROLE_ADMIN, ROLE_ASSOCIATE, ROLE_SUPERVISOR};

#[contract]
pub struct OwnerRules;

pub trait OwnerRulesContract {

    fn __constructor(e: &Env, admin: Address);

    /// Legacy initializer for deployments without a constructor.
    ///
    /// Panics with `AlreadyInitialized` once an admin is recorded, which is
    /// always the case for contracts deployed through the constructor.
    fn initialize(e: &Env, admin: Address);

    /// Returns the current admin, if any.
    fn admin(e: &Env) -> Option<Address>;

    /// Hands the admin role to `new_admin`.
    ///
    /// The previous admin's credential is burned and a fresh one is minted
    /// for `new_admin`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `new_admin` - Account receiving the admin credential.
    ///
    /// # Events
    ///
    /// * `CredentialRevoked` for the previous admin token.
    /// * `AdminTransferred` then `CredentialMinted` for the new one.
    fn transfer_admin(e: &Env, new_admin: Address);

    /// Suspends credential claims. Requires the admin.
    fn pause(e: &Env);

    /// Resumes credential claims. Requires the admin.
    fn unpause(e: &Env);

    fn is_paused(e: &Env) -> bool;

    fn set_base_uri(e: &Env, uri: String);

    /// Returns the metadata URI of `token_id`.
    ///
    /// # Notes
    ///
    /// If the token does not exist, this function is expected to panic.
    fn token_uri(e: &Env, token_id: u64) -> String;

    /// Records the events contract every client should talk to.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `contract_id` - Strkey of the events contract (56 characters).
    ///
    /// # Notes
    ///
    /// Only the shape of the id is checked, not that a contract is deployed
    /// under it.
    fn set_event_contract(e: &Env, contract_id: String);

    fn get_event_contract(e: &Env) -> Option<String>;

    /// Allows or disallows `contract` to recover the admin role.
    fn authorize_contract(e: &Env, contract: Address, status: bool);

    /// Moves the admin role to `new_admin` on behalf of a pre-authorized operator.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `new_admin` - Account receiving the admin credential.
    /// * `operator` - Account previously allowed through `authorize_contract`.
    fn recover_admin(e: &Env, new_admin: Address, operator: Address);

    /// Issues a one-time token granting the supervisor role to `recipient`.
    ///
    /// # Returns
    ///
    /// The token hash to hand to the recipient, usually as a claim link.
    fn generate_supervisor_claim_link(e: &Env, recipient: Address) -> BytesN<32>;

    /// Issues a one-time token granting the associate role to `recipient`.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `recipient` - The only wallet allowed to redeem the token.
    /// * `operator` - Issuer, must hold the admin or supervisor role.
    fn generate_associate_claim_link(e: &Env, recipient: Address, operator: Address) -> BytesN<32>;

    /// Redeems a claim token and mints the credential it grants.
    ///
    /// # Arguments
    ///
    /// * `e` - Access to the Soroban environment.
    /// * `token_hash` - Hash returned by one of the `generate_*` functions.
    /// * `wallet` - Redeeming wallet, must be the token recipient.
    ///
    /// # Returns
    ///
    /// The id of the minted credential.
    ///
    /// # Events
    ///
    /// * topics - `["credential_minted", role_id: u32, owner: Address]`
    /// * data - `[token_id: u64]`
    fn claim_nft(e: &Env, token_hash: BytesN<32>, wallet: Address) -> u64;

    /// Burns the `role_id` credential held by `wallet`. Requires the admin.
    fn revoke_credential(e: &Env, wallet: Address, role_id: u32);

    fn has_role(e: &Env, wallet: Address, role_id: u32) -> bool;
}
