extern crate std;

use soroban_sdk::{testutils::Address as _, Address, BytesN, Env, String};
use crate::{OwnerRules, OwnerRulesClient, RulesError, ROLE_ADMIN, ROLE_ASSOCIATE, ROLE_SUPERVISOR};

const EVENTS_ID: &str = "CCKLYKBIIMGQFUEXJMISGKDHIFXAP45LBRMZ6CGNLZMWFYPFZBD4N5C7";

fn create_client<'a>(e: &Env, admin: &Address) -> OwnerRulesClient<'a> {
    let address = e.register(OwnerRules, (admin,));
    OwnerRulesClient::new(e, &address)
}

fn setup<'a>() -> (Env, OwnerRulesClient<'a>, Address) {
    let e = Env::default();
    e.mock_all_auths();
    let admin = Address::generate(&e);
    let client = create_client(&e, &admin);
    (e, client, admin)
}

#[test]
fn test_constructor_mints_admin_credential() {
    let (e, client, admin) = setup();

    assert_eq!(client.admin(), Some(admin.clone()));
    assert!(client.has_role(&admin, &ROLE_ADMIN));
    assert!(!client.has_role(&admin, &ROLE_SUPERVISOR));
    assert!(!client.is_paused());
    assert_eq!(client.token_uri(&1), String::from_str(&e, ""));
}

#[test]
fn test_initialize_after_constructor_fails() {
    let (e, client, _admin) = setup();

    let err = client.try_initialize(&Address::generate(&e)).unwrap_err().unwrap();
    assert_eq!(err, RulesError::AlreadyInitialized.into());
}

#[test]
fn test_supervisor_claim_flow() {
    let (e, client, _admin) = setup();
    let supervisor = Address::generate(&e);

    let token = client.generate_supervisor_claim_link(&supervisor);
    let token_id = client.claim_nft(&token, &supervisor);

    assert_eq!(token_id, 2);
    assert!(client.has_role(&supervisor, &ROLE_SUPERVISOR));
    assert!(!client.has_role(&supervisor, &ROLE_ASSOCIATE));
}

#[test]
fn test_claim_token_is_single_use() {
    let (e, client, _admin) = setup();
    let supervisor = Address::generate(&e);

    let token = client.generate_supervisor_claim_link(&supervisor);
    client.claim_nft(&token, &supervisor);

    let err = client.try_claim_nft(&token, &supervisor).unwrap_err().unwrap();
    assert_eq!(err, RulesError::ClaimAlreadyUsed.into());
}

#[test]
fn test_claim_requires_matching_recipient() {
    let (e, client, _admin) = setup();
    let recipient = Address::generate(&e);
    let intruder = Address::generate(&e);

    let token = client.generate_supervisor_claim_link(&recipient);
    let err = client.try_claim_nft(&token, &intruder).unwrap_err().unwrap();
    assert_eq!(err, RulesError::RecipientMismatch.into());

    // the token stays redeemable by its recipient
    client.claim_nft(&token, &recipient);
    assert!(client.has_role(&recipient, &ROLE_SUPERVISOR));
}

#[test]
fn test_unknown_claim_token() {
    let (e, client, _admin) = setup();
    let wallet = Address::generate(&e);

    let bogus = BytesN::from_array(&e, &[7u8; 32]);
    let err = client.try_claim_nft(&bogus, &wallet).unwrap_err().unwrap();
    assert_eq!(err, RulesError::InvalidClaimToken.into());
}

#[test]
fn test_claim_rejected_when_role_already_held() {
    let (e, client, _admin) = setup();
    let wallet = Address::generate(&e);

    let first = client.generate_supervisor_claim_link(&wallet);
    let second = client.generate_supervisor_claim_link(&wallet);
    assert_ne!(first, second);

    client.claim_nft(&first, &wallet);
    let err = client.try_claim_nft(&second, &wallet).unwrap_err().unwrap();
    assert_eq!(err, RulesError::RoleAlreadyHeld.into());
}

#[test]
fn test_associate_link_requires_admin_or_supervisor() {
    let (e, client, admin) = setup();
    let supervisor = Address::generate(&e);
    let associate = Address::generate(&e);
    let stranger = Address::generate(&e);

    let err = client
        .try_generate_associate_claim_link(&associate, &stranger)
        .unwrap_err()
        .unwrap();
    assert_eq!(err, RulesError::Unauthorized.into());

    // admin may issue directly
    let by_admin = client.generate_associate_claim_link(&associate, &admin);

    let token = client.generate_supervisor_claim_link(&supervisor);
    client.claim_nft(&token, &supervisor);
    let other = Address::generate(&e);
    let by_supervisor = client.generate_associate_claim_link(&other, &supervisor);

    client.claim_nft(&by_admin, &associate);
    client.claim_nft(&by_supervisor, &other);
    assert!(client.has_role(&associate, &ROLE_ASSOCIATE));
    assert!(client.has_role(&other, &ROLE_ASSOCIATE));
}

#[test]
fn test_pause_blocks_claims() {
    let (e, client, _admin) = setup();
    let wallet = Address::generate(&e);
    let token = client.generate_supervisor_claim_link(&wallet);

    client.pause();
    assert!(client.is_paused());
    let err = client.try_claim_nft(&token, &wallet).unwrap_err().unwrap();
    assert_eq!(err, RulesError::Paused.into());

    client.unpause();
    client.claim_nft(&token, &wallet);
    assert!(client.has_role(&wallet, &ROLE_SUPERVISOR));
}

#[test]
fn test_revoke_credential() {
    let (e, client, _admin) = setup();
    let wallet = Address::generate(&e);
    let token = client.generate_supervisor_claim_link(&wallet);
    let token_id = client.claim_nft(&token, &wallet);

    client.revoke_credential(&wallet, &ROLE_SUPERVISOR);
    assert!(!client.has_role(&wallet, &ROLE_SUPERVISOR));

    let err = client.try_token_uri(&token_id).unwrap_err().unwrap();
    assert_eq!(err, RulesError::NonExistentToken.into());

    let err = client.try_revoke_credential(&wallet, &ROLE_SUPERVISOR).unwrap_err().unwrap();
    assert_eq!(err, RulesError::CredentialNotFound.into());

    let err = client.try_revoke_credential(&wallet, &9).unwrap_err().unwrap();
    assert_eq!(err, RulesError::InvalidRole.into());
}

#[test]
fn test_transfer_admin_moves_credential() {
    let (e, client, admin) = setup();
    let successor = Address::generate(&e);

    client.transfer_admin(&successor);

    assert_eq!(client.admin(), Some(successor.clone()));
    assert!(client.has_role(&successor, &ROLE_ADMIN));
    assert!(!client.has_role(&admin, &ROLE_ADMIN));
}

#[test]
fn test_recover_admin_requires_authorized_operator() {
    let (e, client, admin) = setup();
    let operator = Address::generate(&e);
    let rescuer = Address::generate(&e);

    let err = client.try_recover_admin(&rescuer, &operator).unwrap_err().unwrap();
    assert_eq!(err, RulesError::Unauthorized.into());

    client.authorize_contract(&operator, &true);
    client.recover_admin(&rescuer, &operator);
    assert_eq!(client.admin(), Some(rescuer.clone()));
    assert!(client.has_role(&rescuer, &ROLE_ADMIN));
    assert!(!client.has_role(&admin, &ROLE_ADMIN));
}

#[test]
fn test_event_contract_setting() {
    let (e, client, _admin) = setup();

    assert_eq!(client.get_event_contract(), None);

    let id = String::from_str(&e, EVENTS_ID);
    client.set_event_contract(&id);
    assert_eq!(client.get_event_contract(), Some(id));

    let short = String::from_str(&e, "CCKLYKBII");
    let err = client.try_set_event_contract(&short).unwrap_err().unwrap();
    assert_eq!(err, RulesError::InvalidContractId.into());

    let lower = String::from_str(&e, &EVENTS_ID.to_lowercase());
    let err = client.try_set_event_contract(&lower).unwrap_err().unwrap();
    assert_eq!(err, RulesError::InvalidContractId.into());
}

#[test]
fn test_admin_operations_require_auth() {
    let e = Env::default();
    let admin = Address::generate(&e);
    let client = create_client(&e, &admin);

    assert!(client.try_pause().is_err());
    assert!(client.try_generate_supervisor_claim_link(&Address::generate(&e)).is_err());
    assert!(!client.is_paused());
}

#[test]
fn test_base_uri() {
    let (e, client, _admin) = setup();
    let uri = String::from_str(&e, "https://presencetrack.example/credential/");
    client.set_base_uri(&uri);
    assert_eq!(client.token_uri(&1), uri);
}
