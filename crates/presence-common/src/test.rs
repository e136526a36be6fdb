extern crate std;

use crate::*;

fn input(now: u64) -> EligibilityInput {
    EligibilityInput {
        now,
        start_ts: 10_000,
        end_ts: 20_000,
        already_registered: false,
        has_required_role: true,
    }
}

#[test]
fn test_ended_wins_over_everything() {
    for (registered, role) in [(false, false), (false, true), (true, false), (true, true)] {
        let res = evaluate(&EligibilityInput {
            already_registered: registered,
            has_required_role: role,
            ..input(20_001)
        });
        assert_eq!(res, Eligibility::DeniedEnded);
    }
}

#[test]
fn test_already_registered_before_role_and_window() {
    for now in [0, 2_799, 10_000, 20_000] {
        let res = evaluate(&EligibilityInput {
            already_registered: true,
            has_required_role: false,
            ..input(now)
        });
        assert_eq!(res, Eligibility::DeniedAlreadyRegistered);
    }
}

#[test]
fn test_missing_role() {
    let res = evaluate(&EligibilityInput {
        has_required_role: false,
        ..input(15_000)
    });
    assert_eq!(res, Eligibility::DeniedMissingRole);
    // role is checked before the early window
    let res = evaluate(&EligibilityInput {
        has_required_role: false,
        ..input(0)
    });
    assert_eq!(res, Eligibility::DeniedMissingRole);
}

#[test]
fn test_early_window_boundary() {
    assert_eq!(pre_window_start(10_000, 20_000), 2_800);
    assert_eq!(evaluate(&input(2_799)), Eligibility::DeniedTooEarly);
    assert_eq!(evaluate(&input(2_800)), Eligibility::Allowed);
    assert_eq!(evaluate(&input(10_000)), Eligibility::Allowed);
    assert_eq!(evaluate(&input(20_000)), Eligibility::Allowed);
}

#[test]
fn test_start_inside_first_window_opens_at_zero() {
    assert_eq!(pre_window_start(7_200, 9_000), 0);
    assert_eq!(pre_window_start(100, 9_000), 0);
    assert_eq!(pre_window_start(7_201, 9_000), 1);
    // no end means no window to anchor to
    assert_eq!(pre_window_start(50_000, 0), 0);

    let res = evaluate(&EligibilityInput {
        start_ts: 7_200,
        end_ts: 9_000,
        ..input(0)
    });
    assert_eq!(res, Eligibility::Allowed);
}

#[test]
fn test_evaluate_is_deterministic() {
    let i = input(2_800);
    assert_eq!(evaluate(&i), evaluate(&i));
    let i = input(25_000);
    assert_eq!(evaluate(&i), evaluate(&i));
}

#[test]
fn test_status_at() {
    assert_eq!(EventStatus::at(9_999, 10_000, 20_000), EventStatus::Scheduled);
    assert_eq!(EventStatus::at(10_000, 10_000, 20_000), EventStatus::Active);
    assert_eq!(EventStatus::at(20_000, 10_000, 20_000), EventStatus::Active);
    assert_eq!(EventStatus::at(20_001, 10_000, 20_000), EventStatus::Ended);
}

#[test]
fn test_role_ids_round_trip() {
    for role in Role::ALL {
        assert_eq!(Role::from_id(role.id()), Some(role));
    }
    assert_eq!(Role::from_id(0), None);
    assert_eq!(Role::from_id(4), None);
    assert_eq!(Role::Supervisor.id(), ROLE_SUPERVISOR);
}

#[test]
fn test_contract_id_syntax() {
    let id = "CCKLYKBIIMGQFUEXJMISGKDHIFXAP45LBRMZ6CGNLZMWFYPFZBD4N5C7";
    assert!(is_valid_contract_id(id));
    assert!(is_valid_contract_id(&std::format!("  {id}\n")));
    assert!(!is_valid_contract_id(""));
    assert!(!is_valid_contract_id(&id[..55]));
    assert!(!is_valid_contract_id(&id.to_lowercase()));
    assert!(!is_valid_contract_id("CCKLYKBIIMGQFUEXJMISGKDHIFXAP45LBRMZ6CGNLZMWFYPFZBD4N5C-"));
    assert!(is_valid_contract_id("GCKLYKBIIMGQFUEXJMISGKDHIFXAP45LBRMZ6CGNLZMWFYPFZBD4N5C7"));
}

#[test]
fn test_claim_token_syntax() {
    assert!(is_valid_claim_token("00ff00ff00ff00ff"));
    assert!(is_valid_claim_token("ABCDEF0123456789abcdef"));
    assert!(!is_valid_claim_token("00ff00ff00ff00f"));
    assert!(!is_valid_claim_token("zzzzzzzzzzzzzzzz"));
}
