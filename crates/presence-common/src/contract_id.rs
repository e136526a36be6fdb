//! Syntactic checks for strkeys and claim tokens.
//!
//! These never prove that an id resolves to a deployed contract or a funded
//! account; a malformed id is rejected early, a well-formed but wrong one only
//! fails once the chain call fails.

/// Length of a Stellar strkey (`G...` accounts and `C...` contracts).
pub const CONTRACT_ID_LEN: usize = 56;

/// Minimum length of a claim token accepted from user input.
pub const MIN_CLAIM_TOKEN_LEN: usize = 16;

fn is_strkey_shaped(candidate: &str) -> bool {
    candidate.len() == CONTRACT_ID_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

/// Accepts 56 upper-case alphanumeric characters, ignoring surrounding whitespace.
///
/// Account (`G...`) and contract (`C...`) strkeys share this shape.
pub fn is_valid_contract_id(candidate: &str) -> bool {
    is_strkey_shaped(candidate.trim())
}

pub fn is_valid_claim_token(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    trimmed.len() >= MIN_CLAIM_TOKEN_LEN && trimmed.bytes().all(|b| b.is_ascii_hexdigit())
}
